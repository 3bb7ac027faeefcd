// model
/// Declare `Path` and `ModelKind` for a type, with its ancestors listed
/// nearest first: `model!(Dog => [Animal]);`. Each ancestor must itself be
/// declared; its own ancestors are reached through it.
#[macro_export]
macro_rules! model {
    ($ty:ident) => {
        $crate::model!($ty => []);
    };

    ($ty:ident => [$($ancestor:ty),* $(,)?]) => {
        impl $crate::__reexports::Path for $ty {
            const PATH: &'static str = concat!(module_path!(), "::", stringify!($ty));
        }

        impl $crate::__reexports::ModelKind for $ty {
            const MODEL: $crate::__reexports::ModelDescriptor = $crate::__reexports::ModelDescriptor {
                path: <$ty as $crate::__reexports::Path>::PATH,
                ancestors: &[$(&<$ancestor as $crate::__reexports::ModelKind>::MODEL),*],
            };
        }
    };
}

// err
/// Push a formatted message onto an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

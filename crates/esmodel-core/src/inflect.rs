//! English inflection used to derive default index names.
//!
//! Rules follow the conventional ActiveModel-style table: uncountables first,
//! then irregulars, then suffix rules from most to least specific. Only the
//! final `_`-separated word of a snake-cased name is inflected.

use convert_case::{Case, Casing};

/// Words that never take a plural form.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "jeans",
    "money",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
];

/// (singular suffix, plural suffix)
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("man", "men"),
    ("move", "moves"),
    ("person", "people"),
    ("sex", "sexes"),
    ("zombie", "zombies"),
];

/// Derive the default index name for an unqualified type name.
///
/// `TestBase` → `test_bases`, `Person` → `people`.
#[must_use]
pub fn default_index_name(type_name: &str) -> String {
    pluralize(&type_name.to_case(Case::Snake))
}

/// Pluralize the last word of a snake_case identifier.
#[must_use]
pub fn pluralize(snake: &str) -> String {
    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralize_word(last)),
        None => pluralize_word(snake),
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if word.ends_with(plural) {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix(singular) {
            return format!("{stem}{plural}");
        }
    }

    apply_suffix_rules(word)
}

#[allow(clippy::too_many_lines)]
fn apply_suffix_rules(word: &str) -> String {
    // quiz -> quizzes
    if let Some(stem) = word.strip_suffix("quiz") {
        return format!("{stem}quizzes");
    }

    // ox, mouse, louse: whole word only
    match word {
        "ox" | "oxen" => return "oxen".to_string(),
        "mouse" | "mice" => return "mice".to_string(),
        "louse" | "lice" => return "lice".to_string(),
        _ => {}
    }

    // matrix, vertex, index -> -ices
    for stem in ["matr", "vert", "ind"] {
        for tail in ["ix", "ex"] {
            if let Some(head) = word.strip_suffix(tail)
                && head.ends_with(stem)
            {
                return format!("{head}ices");
            }
        }
    }

    // box, church, class, dish -> -es
    if ["x", "ch", "ss", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }

    // category -> categories, soliloquy -> soliloquies; day -> days
    if let Some(head) = word.strip_suffix('y') {
        let consonant_before = head
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'));
        if consonant_before || head.ends_with("qu") {
            return format!("{head}ies");
        }
    }

    if word.ends_with("hive") {
        return format!("{word}s");
    }

    // wife -> wives, wolf -> wolves, half -> halves
    if let Some(head) = word.strip_suffix("fe")
        && head.chars().last().is_some_and(|c| c != 'f')
    {
        return format!("{head}ves");
    }
    if let Some(head) = word.strip_suffix('f')
        && head.ends_with(['l', 'r'])
    {
        return format!("{head}ves");
    }

    // analysis -> analyses
    if let Some(head) = word.strip_suffix("sis") {
        return format!("{head}ses");
    }

    // medium -> media; data stays data
    if let Some(head) = word.strip_suffix('a')
        && head.ends_with(['t', 'i'])
    {
        return word.to_string();
    }
    if let Some(head) = word.strip_suffix("um")
        && head.ends_with(['t', 'i'])
    {
        return format!("{head}a");
    }

    // buffalo, tomato -> -oes
    if word.ends_with("buffalo") || word.ends_with("tomato") {
        return format!("{word}es");
    }

    // bus, alias, status -> -es
    if word.ends_with("bus") || word.ends_with("alias") || word.ends_with("status") {
        return format!("{word}es");
    }

    // octopus -> octopi, virus -> viri
    for stem in ["octop", "vir"] {
        if let Some(head) = word.strip_suffix('i')
            && head.ends_with(stem)
        {
            return word.to_string();
        }
        if let Some(head) = word.strip_suffix("us")
            && head.ends_with(stem)
        {
            return format!("{head}i");
        }
    }

    // axis -> axes, testis -> testes, whole word only
    if matches!(word, "axis" | "testis") {
        return format!("{}es", &word[..word.len() - 2]);
    }

    if word.ends_with('s') {
        return word.to_string();
    }

    format!("{word}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn derives_snake_cased_plural_from_type_name() {
        assert_eq!(default_index_name("TestBase"), "test_bases");
        assert_eq!(default_index_name("Animal"), "animals");
        assert_eq!(default_index_name("Dog"), "dogs");
        assert_eq!(default_index_name("SalesPerson"), "sales_people");
        assert_eq!(default_index_name("BlogCategory"), "blog_categories");
    }

    #[test]
    fn regular_suffix_rules() {
        let cases = [
            ("cat", "cats"),
            ("box", "boxes"),
            ("church", "churches"),
            ("class", "classes"),
            ("dish", "dishes"),
            ("category", "categories"),
            ("day", "days"),
            ("soliloquy", "soliloquies"),
            ("wife", "wives"),
            ("wolf", "wolves"),
            ("roof", "roofs"),
            ("analysis", "analyses"),
            ("medium", "media"),
            ("data", "data"),
            ("tomato", "tomatoes"),
            ("bus", "buses"),
            ("status", "statuses"),
            ("alias", "aliases"),
            ("octopus", "octopi"),
            ("virus", "viri"),
            ("axis", "axes"),
            ("matrix", "matrices"),
            ("index", "indices"),
            ("vertex", "vertices"),
            ("quiz", "quizzes"),
            ("hive", "hives"),
            ("news", "news"),
        ];

        for (singular, plural) in cases {
            assert_eq!(pluralize(singular), plural, "pluralize({singular})");
        }
    }

    #[test]
    fn whole_word_rules_only_match_whole_words() {
        assert_eq!(pluralize("ox"), "oxen");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("mouse"), "mice");
        assert_eq!(pluralize("computer_mouse"), "computer_mice");
        assert_eq!(pluralize("axis"), "axes");
    }

    #[test]
    fn irregulars_and_uncountables() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("woman"), "women");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("people"), "people");
        assert_eq!(pluralize("sheep"), "sheep");
        assert_eq!(pluralize("tropical_fish"), "tropical_fish");
        assert_eq!(pluralize("goldfish"), "goldfishes");
    }

    #[test]
    fn only_last_word_is_inflected() {
        assert_eq!(pluralize("status_entry"), "status_entries");
        assert_eq!(pluralize("person_record"), "person_records");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(pluralize(""), "");
        assert_eq!(default_index_name(""), "");
    }

    proptest! {
        #[test]
        fn default_index_name_is_lowercase_and_keeps_first_char(name in "[A-Z][a-z]{1,10}") {
            let derived = default_index_name(&name);

            prop_assert!(!derived.is_empty());
            prop_assert!(derived.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
            prop_assert_eq!(derived.chars().next(), name.to_ascii_lowercase().chars().next());
        }

        #[test]
        fn compound_names_inflect_only_the_last_word(
            head in "[A-Z][a-z]{2,8}",
            tail in "[A-Z][a-z]{2,8}",
        ) {
            let derived = default_index_name(&format!("{head}{tail}"));
            let expected = format!(
                "{}_{}",
                head.to_ascii_lowercase(),
                pluralize(&tail.to_ascii_lowercase())
            );

            prop_assert_eq!(derived, expected);
        }
    }
}

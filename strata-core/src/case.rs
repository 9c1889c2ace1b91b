//! Naming-convention transforms shared by every generator.
//!
//! All transforms split the input into words first. A word boundary is any
//! non-alphanumeric character, a lowercase-to-uppercase transition
//! (`userName`), or the last capital of an uppercase run followed by a
//! lowercase letter (`HTTPServer` -> `HTTP`, `Server`). Every transform is
//! total and idempotent.

/// Split a string into words using the boundary rules above.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercase the first character, keep the rest as written.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn join_lower(s: &str, separator: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    join_lower(s, "_")
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

/// Convert a string to CONSTANT_CASE (e.g., "helloWorld" -> "HELLO_WORLD")
pub fn to_constant_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a string to Title Case (e.g., "hello_world" -> "Hello World")
pub fn to_title_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a string to Sentence case (e.g., "hello_world" -> "Hello world")
pub fn to_sentence_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { capitalize(w) } else { w.to_lowercase() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a string to dot.case (e.g., "HelloWorld" -> "hello.world")
pub fn to_dot_case(s: &str) -> String {
    join_lower(s, ".")
}

/// Convert a string to path/case (e.g., "HelloWorld" -> "hello/world")
pub fn to_path_case(s: &str) -> String {
    join_lower(s, "/")
}

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("datum", "data"),
    ("criterion", "criteria"),
    ("sheep", "sheep"),
    ("fish", "fish"),
    ("deer", "deer"),
    ("series", "series"),
    ("species", "species"),
];

/// Heuristic English pluralizer.
///
/// Irregular nouns are looked up first (keeping the case of the first
/// letter), then suffix rules apply in order: consonant + `y` -> `ies`,
/// `s`/`x`/`z`/`ch`/`sh` -> `+es`, `f` -> `ves`, `fe` -> `ves`, otherwise
/// `+s`.
///
/// Pluralizing a word that is already plural is not detected, so
/// `pluralize("children")` yields `"childrens"`.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(single, _)| *single == lower) {
        let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
        return if starts_upper {
            capitalize(plural)
        } else {
            (*plural).to_string()
        };
    }

    let stem = |n: usize| &word[..word.len() - n];

    if lower.ends_with('y') {
        let before = lower.chars().rev().nth(1);
        if before.is_some_and(|c| c.is_alphabetic() && !"aeiou".contains(c)) {
            return format!("{}ies", stem(1));
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{}es", word);
    }
    if lower.ends_with('f') {
        return format!("{}ves", stem(1));
    }
    if lower.ends_with("fe") {
        return format!("{}ves", stem(2));
    }
    format!("{}s", word)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "hello",
        "hello_world",
        "HelloWorld",
        "helloWorld",
        "hello-world",
        "Hello World",
        "HTTPServer",
        "user_profile_v2",
        "a_b",
        "ABc",
        "  spaced   out  ",
        "CONSTANT_VALUE",
        "dot.separated.words",
        "path/like/value",
        "mixed-Case_input here",
    ];

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("helloWorld"), vec!["hello", "World"]);
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(split_words("user_profile"), vec!["user", "profile"]);
        assert_eq!(split_words("  a--b  "), vec!["a", "b"]);
        assert!(split_words("").is_empty());
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("user profile"), "UserProfile");
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("userProfile"), "UserProfile");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("get_user_id"), "getUserId");
        assert_eq!(to_camel_case("HTTPServer"), "httpServer");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("User Profile"), "user_profile");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_other_cases() {
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
        assert_eq!(to_constant_case("helloWorld"), "HELLO_WORLD");
        assert_eq!(to_title_case("hello_world"), "Hello World");
        assert_eq!(to_sentence_case("hello_world"), "Hello world");
        assert_eq!(to_dot_case("HelloWorld"), "hello.world");
        assert_eq!(to_path_case("HelloWorld"), "hello/world");
    }

    #[test]
    fn test_transforms_are_idempotent() {
        let transforms: &[(&str, fn(&str) -> String)] = &[
            ("pascal", to_pascal_case),
            ("camel", to_camel_case),
            ("snake", to_snake_case),
            ("kebab", to_kebab_case),
            ("constant", to_constant_case),
            ("title", to_title_case),
            ("sentence", to_sentence_case),
            ("dot", to_dot_case),
            ("path", to_path_case),
        ];

        for (name, transform) in transforms {
            for sample in SAMPLES {
                let once = transform(sample);
                assert_eq!(transform(&once), once, "{} is not idempotent for {:?}", name, sample);
            }
        }
    }

    #[test]
    fn test_pluralize_table() {
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("knife"), "knives");
        assert_eq!(pluralize("cat"), "cats");
    }

    #[test]
    fn test_pluralize_rules() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("quiz"), "quizes");
        assert_eq!(pluralize("leaf"), "leaves");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("order"), "orders");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_pluralize_already_plural_is_not_detected() {
        assert_eq!(pluralize("children"), "childrens");
    }
}

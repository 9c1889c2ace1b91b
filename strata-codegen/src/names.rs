//! Naming conventions for generated Dart code.

use strata_core::{
    pluralize, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    to_title_case,
};

/// Dart keywords that cannot be used as plain identifiers.
pub const DART_RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "base", "break", "case", "catch", "class",
    "const", "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum",
    "export", "extends", "extension", "external", "factory", "false", "final", "finally", "for",
    "Function", "get", "hide", "if", "implements", "import", "in", "interface", "is", "late",
    "library", "mixin", "new", "null", "of", "on", "operator", "part", "required", "rethrow",
    "return", "sealed", "set", "show", "static", "super", "switch", "sync", "this", "throw",
    "true", "try", "type", "typedef", "var", "void", "when", "while", "with", "yield",
];

pub fn is_reserved(name: &str) -> bool {
    DART_RESERVED_WORDS.contains(&name)
}

/// Append `_` to reserved words so they can be used as variable names.
pub fn safe_identifier(name: &str) -> String {
    if is_reserved(name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// camelCase field or variable name, escaped when reserved.
pub fn field_name(name: &str) -> String {
    safe_identifier(&to_camel_case(name))
}

/// Every naming variant a generator needs for one user-supplied name.
///
/// ```
/// use strata_codegen::Names;
///
/// let names = Names::new("user_profile");
/// assert_eq!(names.pascal, "UserProfile");
/// assert_eq!(names.plural_camel, "userProfiles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    pub raw: String,
    pub snake: String,
    pub pascal: String,
    pub camel: String,
    pub kebab: String,
    pub title: String,
    pub plural_camel: String,
    pub plural_pascal: String,
}

impl Names {
    pub fn new(raw: &str) -> Self {
        let plural = plural_form(raw);
        Self {
            raw: raw.to_string(),
            snake: to_snake_case(raw),
            pascal: to_pascal_case(raw),
            camel: to_camel_case(raw),
            kebab: to_kebab_case(raw),
            title: to_title_case(raw),
            plural_camel: to_camel_case(&plural),
            plural_pascal: to_pascal_case(&plural),
        }
    }

    /// camelCase name usable as a Dart variable.
    pub fn var(&self) -> String {
        safe_identifier(&self.camel)
    }

    /// Plural camelCase name usable as a Dart variable.
    pub fn plural_var(&self) -> String {
        safe_identifier(&self.plural_camel)
    }
}

/// Pluralize only the last word (`order_item` -> `order_items`).
fn plural_form(raw: &str) -> String {
    let mut words: Vec<String> = split_words(raw)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect();
    if let Some(last) = words.last_mut() {
        *last = pluralize(last);
    }
    words.join("_")
}

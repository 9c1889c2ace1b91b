//! Entity field lists (`--fields "name:String,price:double"`).

use std::fmt;

use crate::names::field_name;

/// One entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// camelCase Dart identifier
    pub name: String,
    /// Dart type as written, e.g. `String`, `double?`, `List<String>`
    pub ty: String,
    /// Key used in JSON maps
    pub json_key: String,
}

impl Field {
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: field_name(name),
            ty: ty.trim().to_string(),
            json_key: name.trim().to_string(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.ty.ends_with('?')
    }

    /// The type without a trailing `?`.
    pub fn base_type(&self) -> &str {
        self.ty.trim_end_matches('?')
    }

    /// Type used for optional `copyWith` parameters.
    pub fn optional_type(&self) -> String {
        if self.is_nullable() {
            self.ty.clone()
        } else {
            format!("{}?", self.ty)
        }
    }

    /// Expression reading this field from `json`.
    pub fn from_json_expr(&self) -> String {
        let value = format!("json['{}']", self.json_key);
        match (self.base_type(), self.is_nullable()) {
            ("double", false) => format!("({} as num).toDouble()", value),
            ("double", true) => format!("({} as num?)?.toDouble()", value),
            ("DateTime", false) => format!("DateTime.parse({} as String)", value),
            ("DateTime", true) => format!(
                "{value} == null ? null : DateTime.parse({value} as String)",
                value = value
            ),
            _ => format!("{} as {}", value, self.ty),
        }
    }

    /// Expression writing this field into a JSON map.
    pub fn to_json_expr(&self) -> String {
        match (self.base_type(), self.is_nullable()) {
            ("DateTime", false) => format!("{}.toIso8601String()", self.name),
            ("DateTime", true) => format!("{}?.toIso8601String()", self.name),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ty)
    }
}

/// Fields used when none are given: `id: String`, `name: String`.
pub fn default_fields() -> Vec<Field> {
    vec![Field::new("id", "String"), Field::new("name", "String")]
}

/// Parse `name:Type,other:Type`. An `id: String` field is always first.
///
/// Generic types may contain commas (`Map<String, int>`), so a comma only
/// separates fields outside angle brackets.
pub fn parse_fields(spec: &str) -> Result<Vec<Field>, String> {
    let mut fields = Vec::new();

    for entry in split_top_level(spec) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, ty) = entry
            .split_once(':')
            .ok_or_else(|| format!("field '{}' must be written as name:Type", entry))?;
        let (name, ty) = (name.trim(), ty.trim());
        if name.is_empty() || ty.is_empty() {
            return Err(format!("field '{}' must be written as name:Type", entry));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!("field name '{}' is not a valid identifier", name));
        }

        let field = Field::new(name, ty);
        if !field.name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(format!("field name '{}' must start with a letter", name));
        }
        if fields.iter().any(|f: &Field| f.name == field.name) {
            return Err(format!("field '{}' is listed twice", name));
        }
        fields.push(field);
    }

    if fields.is_empty() {
        return Ok(default_fields());
    }
    if !fields.iter().any(|f| f.name == "id") {
        fields.insert(0, Field::new("id", "String"));
    }
    Ok(fields)
}

fn split_top_level(spec: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in spec.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&spec[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&spec[start..]);
    parts
}

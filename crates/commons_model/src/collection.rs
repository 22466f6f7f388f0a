//! Collection naming conventions.
//!
//! Every record type maps to a storage collection whose name is the
//! lowercased, pluralized type name. The mapping is a pure function of
//! the type name, so distinctly named types always land in distinct
//! collections.

/// Derives the storage collection name for a record type name.
///
/// # Example
///
/// ```
/// use commons_model::collection_name;
///
/// assert_eq!(collection_name("User"), "users");
/// assert_eq!(collection_name("Profile"), "profiles");
/// ```
#[must_use]
pub fn collection_name(type_name: &str) -> String {
    pluralize(&type_name.to_lowercase())
}

/// Pluralizes a lowercase English noun.
///
/// Covers the rules the model names need: sibilant endings take "es",
/// consonant + "y" becomes "ies", everything else appends "s".
#[must_use]
pub fn pluralize(noun: &str) -> String {
    if noun.is_empty() {
        return String::new();
    }

    if noun.ends_with('s')
        || noun.ends_with('x')
        || noun.ends_with('z')
        || noun.ends_with("ch")
        || noun.ends_with("sh")
    {
        return format!("{noun}es");
    }

    if let Some(stem) = noun.strip_suffix('y') {
        let preceded_by_consonant = stem
            .chars()
            .next_back()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if preceded_by_consonant {
            return format!("{stem}ies");
        }
    }

    format!("{noun}s")
}

//! Column resolution strategies.
//!
//! Maps a scanned token name to a dataset column. Strategies run in
//! strict priority order; within a strategy the first matching column in
//! declared dataset order wins. Two columns that collide under fuzzy
//! folding therefore resolve deterministically to the earlier one, never
//! to a merged value.

use super::normalize::fold_name;

/// One dataset column prepared for matching: the underscore-normalized
/// name plus the row's formatted value.
#[derive(Debug, Clone)]
pub struct ColumnEntry {
    /// The column name as declared in the dataset
    pub name: String,

    /// The declared name with spaces replaced by underscores
    pub merge_name: String,

    /// Folded form of the merge name, precomputed for fuzzy matching
    pub folded: String,

    /// The row's formatted value for this column
    pub value: String,
}

impl ColumnEntry {
    /// Prepare a column for matching.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let merge_name = name.replace(' ', "_");
        let folded = fold_name(&merge_name);
        Self {
            name,
            merge_name,
            folded,
            value: value.into(),
        }
    }
}

/// Resolve a token name against ordered column entries.
///
/// 1. exact, case-sensitive, against the underscore-normalized name;
/// 2. case-insensitive against the same, compared under both the
///    lowercase and uppercase canonical forms (uppercase folding is
///    what lets `STRASSE` meet a `Straße` column);
/// 3. fuzzy: folded-name equality.
///
/// Returns `None` when no strategy matches; the caller leaves the
/// token's original text in place.
pub fn resolve<'a>(token: &str, entries: &'a [ColumnEntry]) -> Option<&'a ColumnEntry> {
    if let Some(entry) = entries.iter().find(|e| e.merge_name == token) {
        return Some(entry);
    }

    let lowered = token.to_lowercase();
    let uppered = token.to_uppercase();
    if let Some(entry) = entries.iter().find(|e| {
        e.merge_name.to_lowercase() == lowered || e.merge_name.to_uppercase() == uppered
    }) {
        return Some(entry);
    }

    let folded = fold_name(token);
    entries.iter().find(|e| e.folded == folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<ColumnEntry> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| ColumnEntry::new(*n, format!("v{i}")))
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let cols = entries(&["First Name"]);
        let hit = resolve("First_Name", &cols).unwrap();
        assert_eq!(hit.name, "First Name");
        assert_eq!(hit.value, "v0");
    }

    #[test]
    fn test_case_insensitive_match() {
        let cols = entries(&["First Name"]);
        assert!(resolve("first_name", &cols).is_some());
        assert!(resolve("FIRST_NAME", &cols).is_some());
    }

    #[test]
    fn test_case_insensitive_uppercase_folding() {
        // ß uppercases to SS, so only the uppercase canonical form
        // brings these together.
        let cols = entries(&["Straße"]);
        assert!(resolve("STRASSE", &cols).is_some());
        assert!(resolve("Straße", &cols).is_some());
    }

    #[test]
    fn test_fuzzy_match() {
        let cols = entries(&["FIRSTNAME"]);
        assert!(resolve("First_Name", &cols).is_some());

        let cols = entries(&["first name"]);
        assert!(resolve("First_Name", &cols).is_some());
    }

    #[test]
    fn test_unresolved() {
        let cols = entries(&["First Name"]);
        assert!(resolve("Surname", &cols).is_none());
    }

    #[test]
    fn test_exact_beats_fuzzy() {
        // "first_name" matches the second column exactly, even though the
        // first column fuzzy-collides with it.
        let cols = entries(&["First Name", "first name"]);
        let hit = resolve("first_name", &cols).unwrap();
        assert_eq!(hit.value, "v1");
    }

    #[test]
    fn test_fuzzy_collision_takes_first_declared() {
        let cols = entries(&["FIRSTNAME", "First_Name"]);
        let hit = resolve("firstname ", &cols);
        // Token with trailing space folds equal to both; declared order wins.
        assert_eq!(hit.unwrap().value, "v0");
    }
}

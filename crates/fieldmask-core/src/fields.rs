use std::collections::BTreeSet;

/// Field names that are always masked, whatever the caller passes in
pub const BASELINE_FIELDS: &[&str] = &["userName", "userEmail"];

/// Set of object keys whose values get obscured
///
/// Always a superset of [`BASELINE_FIELDS`]: callers can add names but never
/// remove the baseline ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    names: BTreeSet<String>,
}

impl FieldSet {
    /// Build a set from caller-supplied names merged with the baseline
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = BASELINE_FIELDS
            .iter()
            .map(|name| name.to_string())
            .chain(extra.into_iter().map(Into::into))
            .collect();

        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_baseline() {
        let fields = FieldSet::default();

        assert_eq!(fields.len(), 2);
        assert!(fields.contains("userName"));
        assert!(fields.contains("userEmail"));
    }

    #[test]
    fn test_extra_fields_are_merged() {
        let fields = FieldSet::new(["email", "phone"]);

        assert_eq!(fields.len(), 4);
        assert!(fields.contains("email"));
        assert!(fields.contains("phone"));
        assert!(fields.contains("userName"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let fields = FieldSet::new(vec!["userName".to_string(), "email".into(), "email".into()]);

        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_match_is_exact() {
        let fields = FieldSet::default();

        assert!(!fields.contains("username"));
        assert!(!fields.contains("userNameX"));
        assert!(!fields.contains(""));
    }

    #[test]
    fn test_iter_is_sorted() {
        let fields: FieldSet = ["zeta", "alpha"].into_iter().collect();
        let names: Vec<&str> = fields.iter().collect();

        assert_eq!(names, vec!["alpha", "userEmail", "userName", "zeta"]);
    }
}

use std::path::Path;

use anyhow::Result;

use super::load_config;

pub fn handle(fields: Vec<String>, config_path: Option<&Path>) -> Result<()> {
    for name in listing(fields, config_path)? {
        println!("{}", name);
    }
    Ok(())
}

/// Effective field names, sorted
fn listing(fields: Vec<String>, config_path: Option<&Path>) -> Result<Vec<String>> {
    let config = load_config(config_path)?;
    Ok(config.field_set(fields).iter().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_merges_config_and_cli_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fieldmask.toml");
        std::fs::write(&path, "[fields]\nextra = [\"ssn\", \"email\"]\n").unwrap();

        let names = listing(vec!["apiKey".to_string(), "email".to_string()], Some(&path)).unwrap();

        assert_eq!(names, vec!["apiKey", "email", "ssn", "userEmail", "userName"]);
    }

    #[test]
    fn test_listing_with_empty_config_is_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fieldmask.toml");
        std::fs::write(&path, "").unwrap();

        let names = listing(Vec::new(), Some(&path)).unwrap();

        assert_eq!(names, vec!["userEmail", "userName"]);
    }

    #[test]
    fn test_listing_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(listing(Vec::new(), Some(&dir.path().join("missing.toml"))).is_err());
    }
}

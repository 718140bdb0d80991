//! Project alias resolution.
//!
//! Aliases are local shorthand names mapped to project names in the config
//! file. On the command line an alias is written with an `@` prefix, e.g.
//! `-p @web` for the project "Website redesign".

use std::collections::HashMap;

/// Alias-to-project-name mapping loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Builds a table from config entries. Keys may carry a leading `@`,
    /// which is stripped.
    pub fn new(entries: HashMap<String, String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(alias, project)| (alias.trim_start_matches('@').to_string(), project))
            .collect();
        Self { entries }
    }

    /// Expands an `@alias` argument to its project name.
    ///
    /// Input without an `@` prefix passes through untouched. An `@`-prefixed
    /// name with no mapping resolves to the name itself, so `@Foo` can also
    /// reference a project literally.
    pub fn resolve<'a>(&'a self, input: &'a str) -> &'a str {
        let Some(name) = input.strip_prefix('@') else {
            return input;
        };
        self.entries.get(name).map_or(name, String::as_str)
    }

    /// Reverse lookup: the alias mapped to `project_name`, if any.
    pub fn alias_for(&self, project_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, project)| project.as_str() == project_name)
            .map(|(alias, _)| alias.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AliasTable {
        AliasTable::new(HashMap::from([
            ("web".to_string(), "Website redesign".to_string()),
            ("@ops".to_string(), "Operations".to_string()),
        ]))
    }

    #[test]
    fn resolve_expands_known_alias() {
        assert_eq!(table().resolve("@web"), "Website redesign");
    }

    #[test]
    fn resolve_strips_at_prefix_from_config_keys() {
        assert_eq!(table().resolve("@ops"), "Operations");
    }

    #[test]
    fn resolve_passes_through_plain_names() {
        assert_eq!(table().resolve("Website redesign"), "Website redesign");
    }

    #[test]
    fn resolve_unknown_alias_falls_back_to_literal_name() {
        assert_eq!(table().resolve("@Internal"), "Internal");
    }

    #[test]
    fn alias_for_finds_reverse_mapping() {
        let table = table();
        assert_eq!(table.alias_for("Website redesign"), Some("web"));
        assert_eq!(table.alias_for("Unknown"), None);
    }

    #[test]
    fn empty_table_is_empty() {
        assert!(AliasTable::default().is_empty());
        assert!(!table().is_empty());
    }
}

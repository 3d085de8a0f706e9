//! Alias resolution for players who raid under several character names.

use std::collections::HashMap;

use crate::error::AppError;

/// Maps every configured alternate name to its group's canonical name.
///
/// Each group is an ordered list of equivalent names and its first entry is
/// the canonical one. Groups must be disjoint and non-empty; both conditions
/// are checked on construction.
///
/// # Examples
/// ```
/// use raid_attendance::attendance::AliasResolver;
///
/// let resolver = AliasResolver::new(vec![
///     vec!["Ginshi".to_string(), "Jinshi".to_string()],
/// ])
/// .unwrap();
///
/// assert_eq!(resolver.resolve("Jinshi"), "Ginshi");
/// assert_eq!(resolver.resolve("Ginshi"), "Ginshi");
/// assert_eq!(resolver.resolve("Shaní"), "Shaní");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    groups: Vec<Vec<String>>,
    // name -> index of the group it belongs to
    lookup: HashMap<String, usize>,
}

impl AliasResolver {
    /// Builds a resolver, rejecting empty groups and names that appear in more
    /// than one group with `AppError::Config`.
    pub fn new(groups: Vec<Vec<String>>) -> Result<Self, AppError> {
        let mut lookup: HashMap<String, usize> = HashMap::new();

        for (index, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(AppError::config_error(format!(
                    "Alias group #{index} is empty"
                )));
            }

            for name in group {
                match lookup.get(name) {
                    Some(&existing) if existing != index => {
                        return Err(AppError::config_error(format!(
                            "Alias '{name}' appears in groups '{}' and '{}'",
                            groups[existing][0], group[0]
                        )));
                    }
                    // Repeats inside one group are harmless
                    Some(_) => {}
                    None => {
                        lookup.insert(name.clone(), index);
                    }
                }
            }
        }

        Ok(AliasResolver { groups, lookup })
    }

    /// Returns the canonical name for `name`, or `name` itself when it is not
    /// part of any group.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        match self.lookup.get(name) {
            Some(&index) => &self.groups[index][0],
            None => name,
        }
    }

    /// Canonical names in configuration order.
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group[0].as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

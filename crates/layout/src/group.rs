//! Grouping of record properties into named report sections.

use serde_json::Value;
use varaq_types::{GroupingRule, Record};

/// A named section of `(key, value)` pairs produced by grouping rules.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyGroup {
    pub name: Option<String>,
    pub entries: Vec<(String, Value)>,
}

/// Partitions `properties` by the given rules, in rule order.
///
/// Within a group, entries keep the record's own property order, not the
/// rule's field order. A key listed by several rules is duplicated into
/// each matching group; no dedup is performed. Keys no rule covers are
/// dropped from the output, unless `catch_all` names a trailing group
/// that collects them.
pub fn group_properties(
    properties: &Record,
    rules: &[GroupingRule],
    catch_all: Option<&str>,
) -> Vec<PropertyGroup> {
    let mut groups: Vec<PropertyGroup> = rules
        .iter()
        .map(|rule| PropertyGroup {
            name: rule.group_name.clone(),
            entries: properties
                .iter()
                .filter(|(key, _)| rule.fields.iter().any(|f| f == *key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        })
        .collect();

    if let Some(name) = catch_all {
        let leftovers: Vec<(String, Value)> = properties
            .iter()
            .filter(|(key, _)| !rules.iter().any(|r| r.fields.iter().any(|f| f == *key)))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !leftovers.is_empty() {
            groups.push(PropertyGroup {
                name: Some(name.to_string()),
                entries: leftovers,
            });
        }
    }

    groups
}

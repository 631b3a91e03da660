use serde::Deserialize;

/// A flat record: field name mapped to a scalar or opaque value.
///
/// Iteration order follows the payload's own property order, which the
/// grouping and field-derivation steps rely on.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A named partition of property keys used to cluster key/value pairs in
/// report layout. A `None` name renders the group without a heading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingRule {
    pub group_name: Option<String>,
    pub fields: Vec<String>,
}

//! Path documents: an ordered route through catalog resources.

use jiff::Timestamp;
use learnhub_store::Document;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Domain;

pub(crate) const DOMAIN: Domain = Domain {
    name: "path",
    allowed_sort_fields: &["name", "description"],
    default_sort_field: "name",
};

/// A learning path in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Path {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resources making up the path, in order.
    #[serde(default)]
    pub resources: Vec<Uuid>,
    /// Creation timestamp.
    pub created_at: Timestamp,
}

impl Path {
    /// Creates a path with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: None,
            resources: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the ordered resource list.
    pub fn with_resources<I>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = Uuid>,
    {
        self.resources = resources.into_iter().collect();
        self
    }
}

impl Document for Path {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn sort_key(&self, field: &str) -> String {
        super::sort_key(&self.name, self.description.as_deref(), field)
    }
}

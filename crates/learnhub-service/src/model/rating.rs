//! Rating documents: a scored assessment of catalog content.

use jiff::Timestamp;
use learnhub_store::Document;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Domain;

pub(crate) const DOMAIN: Domain = Domain {
    name: "rating",
    allowed_sort_fields: &["name", "description"],
    default_sort_field: "name",
};

/// A rating in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Rating {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Score on a 1-5 scale.
    pub value: i32,
    /// Creation timestamp.
    pub created_at: Timestamp,
}

impl Rating {
    /// Creates a rating with a fresh identifier.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: None,
            value,
            created_at: Timestamp::now(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Document for Rating {
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

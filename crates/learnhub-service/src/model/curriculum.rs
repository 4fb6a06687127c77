//! Curriculum documents: a named program of study.

use jiff::Timestamp;
use learnhub_store::Document;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Domain;

pub(crate) const DOMAIN: Domain = Domain {
    name: "curriculum",
    allowed_sort_fields: &["name", "description"],
    default_sort_field: "name",
};

/// A curriculum in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Curriculum {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: Timestamp,
}

impl Curriculum {
    /// Creates a curriculum with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: None,
            created_at: Timestamp::now(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Document for Curriculum {
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

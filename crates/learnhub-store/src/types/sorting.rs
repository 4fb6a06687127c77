//! Sorting options for document queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Sort order direction.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (A-Z, oldest first, smallest first).
    #[default]
    Asc,
    /// Descending order (Z-A, newest first, largest first).
    Desc,
}

impl SortOrder {
    /// Parses the client-facing `order` parameter.
    ///
    /// Only the exact strings `asc` and `desc` are accepted; matching is
    /// case-sensitive.
    pub fn from_param(value: &str) -> Result<Self, ValidationError> {
        value.parse().map_err(|_| ValidationError::InvalidSortOrder)
    }

    /// Returns whether the order is ascending.
    #[inline]
    pub fn is_asc(&self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Returns whether the order is descending.
    #[inline]
    pub fn is_desc(&self) -> bool {
        matches!(self, Self::Desc)
    }
}

/// A validated sort specification: an allow-listed field and a direction.
///
/// Constructed only through [`SortSpec::new`], which enforces membership
/// in the caller-supplied allow-list, so a `SortSpec` in hand is always
/// safe to interpolate into a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    field: String,
    order: SortOrder,
}

impl SortSpec {
    /// Validates `field` against the allow-list and builds the spec.
    pub fn new(
        field: impl Into<String>,
        order: SortOrder,
        allowed_fields: &[&str],
    ) -> Result<Self, ValidationError> {
        let field = field.into();
        if !allowed_fields.contains(&field.as_str()) {
            return Err(ValidationError::sort_field_not_allowed(allowed_fields));
        }

        Ok(Self { field, order })
    }

    /// The field documents are ordered by.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The requested direction.
    #[inline]
    pub fn order(&self) -> SortOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_accepts_only_exact_lowercase() {
        assert_eq!(SortOrder::from_param("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::from_param("desc").unwrap(), SortOrder::Desc);

        for invalid in ["ASC", "Desc", "upward", "ascending", ""] {
            assert_eq!(
                SortOrder::from_param(invalid),
                Err(ValidationError::InvalidSortOrder),
                "{invalid:?} should be rejected"
            );
        }
    }

    #[test]
    fn order_defaults_to_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn spec_rejects_fields_outside_the_allow_list() {
        let err = SortSpec::new("not_a_real_field", SortOrder::Asc, &["name", "description"])
            .unwrap_err();
        assert_eq!(err.to_string(), "sort_by must be one of [name, description]");
    }

    #[test]
    fn spec_accepts_allow_listed_fields() {
        let spec = SortSpec::new("description", SortOrder::Desc, &["name", "description"])
            .expect("field is allow-listed");
        assert_eq!(spec.field(), "description");
        assert!(spec.order().is_desc());
    }
}

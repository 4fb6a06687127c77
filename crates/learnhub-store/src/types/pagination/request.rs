//! Raw page parameters and their validated form.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Cursor;
use crate::error::ValidationError;
use crate::types::sorting::{SortOrder, SortSpec};

/// Page size applied when the client does not send `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 100;

/// Raw, untyped page parameters as they arrive from a client.
///
/// Everything is optional and everything is a string; nothing here has
/// been checked. Feed it to [`PageRequest::from_params`] before use.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PageParams {
    /// Optional substring filter on the name field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Opaque cursor from the previous page, absent on the first request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<String>,
    /// Requested page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction, `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl PageParams {
    /// Creates empty parameters: first page, all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name filter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the resume cursor.
    pub fn with_after_id(mut self, after_id: impl Into<String>) -> Self {
        self.after_id = Some(after_id.into());
        self
    }

    /// Sets the page size.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    /// Sets the sort field.
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Sets the sort direction.
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }
}

/// A validated page request.
///
/// Construction is the validation: a `PageRequest` in hand means the
/// limit is within bounds, the sort field is allow-listed, the order is
/// well-formed, and any cursor decoded cleanly. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    name_filter: Option<String>,
    after: Option<Cursor>,
    limit: i64,
    sort: SortSpec,
}

impl PageRequest {
    /// Validates raw parameters against a domain's sort-field allow-list.
    ///
    /// Rules are checked in order and the first failure wins: limit,
    /// sort field, sort order, cursor. All failures are client-input
    /// errors. Pure; performs no I/O.
    pub fn from_params(
        params: PageParams,
        allowed_sort_fields: &[&str],
        default_sort_field: &str,
    ) -> Result<Self, ValidationError> {
        let limit = match params.limit {
            None => DEFAULT_LIMIT,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::LimitNotInteger)?,
        };
        if limit < 1 {
            return Err(ValidationError::LimitTooSmall);
        }
        if limit > MAX_LIMIT {
            return Err(ValidationError::LimitTooLarge);
        }

        let field = params.sort_by.as_deref().unwrap_or(default_sort_field);
        let order = match params.order.as_deref() {
            None => SortOrder::default(),
            Some(raw) => SortOrder::from_param(raw)?,
        };
        let sort = SortSpec::new(field, order, allowed_sort_fields)?;

        let after = params
            .after_id
            .as_deref()
            .map(|raw| Cursor::decode(raw).ok_or(ValidationError::MalformedCursor))
            .transpose()?;

        Ok(Self {
            name_filter: params.name,
            after,
            limit,
            sort,
        })
    }

    /// The optional case-insensitive substring filter on the name field.
    #[inline]
    pub fn name_filter(&self) -> Option<&str> {
        self.name_filter.as_deref()
    }

    /// The resume point decoded from `after_id`, if any.
    #[inline]
    pub fn after(&self) -> Option<&Cursor> {
        self.after.as_ref()
    }

    /// The validated page size, within `[1, 100]`.
    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// The validated sort specification.
    #[inline]
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Returns the limit plus one, the number of rows to actually fetch.
    ///
    /// Getting `limit + 1` rows back proves more pages exist without a
    /// separate count query; the extra row is dropped before returning.
    #[inline]
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    const ALLOWED: &[&str] = &["name", "description"];

    fn validate(params: PageParams) -> Result<PageRequest, ValidationError> {
        PageRequest::from_params(params, ALLOWED, "name")
    }

    #[test]
    fn defaults_apply_when_everything_is_absent() {
        let request = validate(PageParams::new()).expect("empty params are valid");

        assert_eq!(request.limit(), 10);
        assert_eq!(request.fetch_limit(), 11);
        assert_eq!(request.sort().field(), "name");
        assert!(request.sort().order().is_asc());
        assert!(request.name_filter().is_none());
        assert!(request.after().is_none());
    }

    #[test]
    fn limit_bounds_are_enforced() {
        let err = validate(PageParams::new().with_limit(0)).unwrap_err();
        assert_eq!(err.to_string(), "limit must be >= 1");

        let err = validate(PageParams::new().with_limit(101)).unwrap_err();
        assert_eq!(err.to_string(), "limit must be <= 100");

        let request = validate(PageParams::new().with_limit(100)).expect("100 is in bounds");
        assert_eq!(request.limit(), 100);
    }

    #[test]
    fn limit_must_parse_as_an_integer() {
        let params = PageParams {
            limit: Some("ten".into()),
            ..PageParams::new()
        };
        assert_eq!(validate(params).unwrap_err(), ValidationError::LimitNotInteger);
    }

    #[test]
    fn sort_field_outside_allow_list_is_rejected() {
        let err = validate(PageParams::new().with_sort_by("not_a_real_field")).unwrap_err();
        assert_eq!(err.to_string(), "sort_by must be one of [name, description]");
    }

    #[test]
    fn order_is_case_sensitive() {
        for invalid in ["ASC", "DESC", "upward"] {
            let err = validate(PageParams::new().with_order(invalid)).unwrap_err();
            assert_eq!(err, ValidationError::InvalidSortOrder);
        }

        let request = validate(PageParams::new().with_order("desc")).expect("desc is valid");
        assert!(request.sort().order().is_desc());
    }

    #[test]
    fn malformed_cursor_is_a_client_error() {
        let err = validate(PageParams::new().with_after_id("not-a-valid-id")).unwrap_err();
        assert_eq!(err, ValidationError::MalformedCursor);
    }

    #[test]
    fn well_formed_cursor_is_decoded() {
        let id = Uuid::new_v4();
        let cursor = Cursor::new("beta", id);

        let request = validate(PageParams::new().with_after_id(cursor.encode()))
            .expect("encoded cursor is valid");
        assert_eq!(request.after(), Some(&cursor));
    }

    #[test]
    fn first_failure_wins() {
        // Both the limit and the order are invalid; the limit is checked first.
        let params = PageParams::new().with_limit(0).with_order("upward");
        assert_eq!(validate(params).unwrap_err(), ValidationError::LimitTooSmall);
    }

    #[test]
    fn domain_default_sort_field_is_honored() {
        let request = PageRequest::from_params(PageParams::new(), &["title", "name"], "title")
            .expect("default field is allow-listed");
        assert_eq!(request.sort().field(), "title");
    }
}

//! Opaque resume tokens for infinite-scroll queries.

use base64::prelude::*;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cursor representing a position in a scrolled result set.
///
/// The cursor carries the last seen document's sort-field value and its
/// identifier. The identifier serves as the tiebreaker for documents
/// with identical sort values, and carrying the sort value itself means
/// resuming never has to look the document up again: a document deleted
/// mid-scroll still yields a usable resume point.
///
/// Clients must treat the encoded form as opaque; its layout may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(into = "String", try_from = "String")]
pub struct Cursor {
    /// Sort-field value of the last seen document.
    pub sort_value: String,
    /// Identifier of the last seen document (tiebreaker).
    pub id: Uuid,
}

impl Cursor {
    /// Creates a new cursor from a sort-field value and an identifier.
    pub fn new(sort_value: impl Into<String>, id: Uuid) -> Self {
        Self {
            sort_value: sort_value.into(),
            id,
        }
    }

    /// Encodes the cursor as a URL-safe base64 string.
    pub fn encode(&self) -> String {
        let data = format!("{}|{}", self.sort_value, self.id);
        BASE64_URL_SAFE_NO_PAD.encode(data.as_bytes())
    }

    /// Decodes a cursor from a URL-safe base64 string.
    ///
    /// Returns `None` if the string is invalid or malformed.
    pub fn decode(encoded: &str) -> Option<Self> {
        let bytes = BASE64_URL_SAFE_NO_PAD.decode(encoded).ok()?;
        let data = String::from_utf8(bytes).ok()?;
        // Split from the right: the identifier never contains '|', the
        // sort value might.
        let (sort_value, id_str) = data.rsplit_once('|')?;

        let id = id_str.parse().ok()?;

        Some(Self::new(sort_value, id))
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.encode()
    }
}

impl TryFrom<String> for Cursor {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cursor::decode(&value).ok_or("invalid cursor format")
    }
}

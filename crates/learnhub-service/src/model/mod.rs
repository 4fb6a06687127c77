//! Domain document models.
//!
//! All five catalog domains share the same read surface: a unique
//! identifier, a name the substring filter targets, an optional
//! description, and whatever fields the domain adds on top. Each model
//! carries a [`Domain`] descriptor naming it and listing its sortable
//! fields; the engine itself hard-codes none of this.

pub(crate) mod curriculum;
pub(crate) mod path;
pub(crate) mod rating;
pub(crate) mod resource;
pub(crate) mod review;

use learnhub_store::ScrollOptions;

pub use curriculum::Curriculum;
pub use path::Path;
pub use rating::Rating;
pub use resource::Resource;
pub use review::Review;

/// Static description of one catalog domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    /// Domain name, used in logs and error messages.
    pub name: &'static str,
    /// Fields clients may sort by.
    pub allowed_sort_fields: &'static [&'static str],
    /// Sort field applied when the client does not send one.
    pub default_sort_field: &'static str,
}

impl Domain {
    pub(crate) fn scroll_options(&self) -> ScrollOptions<'static> {
        ScrollOptions {
            allowed_sort_fields: self.allowed_sort_fields,
            default_sort_field: self.default_sort_field,
        }
    }
}

/// Sort-key projection shared by every catalog model: `name` plus an
/// optional `description`. Unknown fields fall back to the name, but the
/// allow-list upstream means they are never requested.
pub(crate) fn sort_key(name: &str, description: Option<&str>, field: &str) -> String {
    match field {
        "description" => description.unwrap_or_default().to_owned(),
        _ => name.to_owned(),
    }
}

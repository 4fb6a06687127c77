//! The authorization seam in front of every read.
//!
//! Authentication and token parsing happen upstream; by the time a
//! service is called the caller has a [`Principal`]. What happens with
//! it is pluggable: services take any [`Authorize`] implementation and
//! consult it before touching the collection. The default policy,
//! [`AllowAll`], admits every authenticated principal, which is the
//! current production behavior; stricter role checks slot in without
//! touching the query path.

use serde::{Deserialize, Serialize};

/// The authenticated caller of a service operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable user identifier from the upstream token.
    pub user_id: String,
    /// Roles granted to the user.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Principal {
    /// Creates a principal with no roles.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            roles: Vec::new(),
        }
    }

    /// Replaces the principal's roles.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Returns whether the principal carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// The operation being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Listing or fetching documents.
    Read,
}

/// An authorization policy consulted before query execution.
pub trait Authorize: Send + Sync {
    /// Returns whether `principal` may perform `operation`.
    fn authorize(&self, principal: &Principal, operation: Operation) -> bool;
}

/// Policy admitting every authenticated principal.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl Authorize for AllowAll {
    fn authorize(&self, _principal: &Principal, _operation: Operation) -> bool {
        true
    }
}

impl<F> Authorize for F
where
    F: Fn(&Principal, Operation) -> bool + Send + Sync,
{
    fn authorize(&self, principal: &Principal, operation: Operation) -> bool {
        self(principal, operation)
    }
}

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for domain service operations.
///
/// Use this target for logging list/get calls, their outcomes, and
/// authorization denials.
pub const TRACING_TARGET: &str = "learnhub_service::catalog";

mod auth;
mod error;
pub mod model;
mod service;

pub use auth::{AllowAll, Authorize, Operation, Principal};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use model::{Curriculum, Domain, Path, Rating, Resource, Review};
pub use service::DocumentService;

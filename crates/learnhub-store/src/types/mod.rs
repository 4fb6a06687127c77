//! Value types shared by the query engine.

pub mod pagination;
pub mod sorting;

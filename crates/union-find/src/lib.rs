//! Disjoint sets over a growing universe of hashable elements.
//!
//! Classes are merged by rank. Lookups walk the parent chain without path
//! compression, so ranks always describe the real tree heights.

mod config;
mod error;
mod union_find;

pub use crate::config::Config;
pub use crate::error::{Argument, UnionFindError};
pub use crate::union_find::UnionFind;

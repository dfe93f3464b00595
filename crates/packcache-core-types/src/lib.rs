//! Core types shared across PackCache facilities
//!
//! This crate provides foundational types used by the cache, the
//! persistence layer, and the logging facility:
//!
//! - **Identifiers**: TitleKey, VariantId
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{TitleKey, VariantId};

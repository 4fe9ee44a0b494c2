//! Content records for the folio engine
//!
//! This crate provides the static content the presentation renders: the
//! technology stack (categorized and partitioned onto the three orbit
//! rings), project records, and experience entries. Content is loaded once
//! from a RON catalog and never mutated afterwards.
//!
//! - [`StackItem`] / [`StackNode`] - Source records and their ring-mapped form
//! - [`Category`] / [`Level`] - Classification of stack entries
//! - [`StackRegistry`] - Slotmap-backed node storage with per-ring key lists
//! - [`Catalog`] - The full content catalog (stack, projects, experience)
//! - [`CatalogError`] - Load/validation failures

mod catalog;
mod registry;
mod stack;

pub use catalog::{Catalog, CatalogError, Experience, Project};
pub use registry::{NodeKey, StackRegistry};
pub use stack::{map_stack, resolve_category, slugify, Category, Level, StackItem, StackNode};

// Re-export the ring id so consumers don't need folio_orbit for content-only use
pub use folio_orbit::RingId;

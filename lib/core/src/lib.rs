//! # restosim Core
//!
//! Core data model for the restosim similarity engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`Item`] - A catalog entry (restaurant) with categorical and numeric attributes
//! - [`Categories`] - Raw category label plus its parsed tag set
//! - [`EmbeddingVector`] - Review embedding attached to an item
//! - [`ItemCatalog`] - Read interface to the item store
//! - [`InMemoryCatalog`] - Immutable snapshot loadable from JSON
//!
//! ## Example
//!
//! ```rust
//! use restosim_core::{EmbeddingVector, InMemoryCatalog, Item, ItemCatalog};
//!
//! let items = vec![
//!     Item::new("r1", "Trattoria", "Italian, Pizza").with_price(2).with_rating(4.0),
//!     Item::new("r2", "Sushi Bar", "Sushi").with_price(3).with_rating(4.5),
//! ];
//! let embeddings = vec![
//!     EmbeddingVector::new("r1", vec![0.1, 0.9]),
//!     EmbeddingVector::new("r2", vec![0.8, 0.2]),
//! ];
//! let catalog = InMemoryCatalog::new(items, embeddings).unwrap();
//!
//! assert_eq!(catalog.all_other_items("r1").len(), 1);
//! ```

pub mod catalog;
pub mod distance;
pub mod error;
pub mod item;
pub mod vector;

pub use catalog::{CatalogSnapshot, InMemoryCatalog, ItemCatalog};
pub use error::{Error, Result};
pub use item::{Categories, Item, LOWEST_PRICE_LEVEL};
pub use vector::{EmbeddingVector, Vector};

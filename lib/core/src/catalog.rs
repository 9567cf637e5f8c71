//! Read-only item catalog
//!
//! The engine never talks to a database directly: everything it reads goes
//! through [`ItemCatalog`]. [`InMemoryCatalog`] is an immutable snapshot of
//! items and review embeddings, typically loaded once from a JSON file.

use crate::item::LOWEST_PRICE_LEVEL;
use crate::{EmbeddingVector, Error, Item, Result};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Read interface to the item store
pub trait ItemCatalog {
    /// Look up an item by id
    fn get_item(&self, id: &str) -> Option<&Item>;

    /// Look up the review embedding of an item, if it has one
    fn get_embedding(&self, id: &str) -> Option<&EmbeddingVector>;

    /// Every item except `exclude_id`, in catalog order
    fn all_other_items(&self, exclude_id: &str) -> Vec<&Item>;

    /// Uniform random draw without replacement of up to `n` items that have
    /// both numeric attributes and an embedding
    fn sample_items(&self, n: usize, rng: &mut StdRng) -> Vec<&Item>;

    /// Number of items
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like [`get_item`](Self::get_item) but fails with `ItemNotFound`
    fn require_item(&self, id: &str) -> Result<&Item> {
        self.get_item(id)
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    /// Whether `item` can take part in a benchmark
    fn is_eligible(&self, item: &Item) -> bool {
        item.has_attributes() && self.get_embedding(&item.id).is_some()
    }
}

/// Serialized form of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub items: Vec<Item>,
    #[serde(default)]
    pub embeddings: Vec<EmbeddingVector>,
}

/// Immutable in-memory catalog
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
    embeddings: HashMap<String, EmbeddingVector>,
    vector_dim: Option<usize>,
}

impl InMemoryCatalog {
    /// Build a catalog, checking that item ids are unique, that every
    /// embedding belongs to a known item and that all embeddings share one
    /// dimension.
    pub fn new(items: Vec<Item>, embeddings: Vec<EmbeddingVector>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(Error::DuplicateItem(item.id.clone()));
            }
        }

        let mut vector_dim = None;
        let mut by_id = HashMap::with_capacity(embeddings.len());
        for embedding in embeddings {
            if !index.contains_key(&embedding.id) {
                return Err(Error::ItemNotFound(embedding.id));
            }
            let dim = embedding.dim();
            match vector_dim {
                None => vector_dim = Some(dim),
                Some(expected) if expected != dim => {
                    return Err(Error::InvalidDimension { expected, actual: dim });
                }
                Some(_) => {}
            }
            if by_id.contains_key(&embedding.id) {
                return Err(Error::DuplicateItem(embedding.id));
            }
            by_id.insert(embedding.id.clone(), embedding);
        }

        Ok(Self {
            items,
            index,
            embeddings: by_id,
            vector_dim,
        })
    }

    /// Build a catalog from its serialized form.
    ///
    /// Records without a price level are placed in the lowest tier.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self> {
        let mut defaulted = 0usize;
        let items = snapshot
            .items
            .into_iter()
            .map(|mut item| {
                if item.price_level.is_none() {
                    item.price_level = Some(LOWEST_PRICE_LEVEL);
                    defaulted += 1;
                }
                item
            })
            .collect();
        if defaulted > 0 {
            debug!("{} items without a price level defaulted to {}", defaulted, LOWEST_PRICE_LEVEL);
        }
        Self::new(items, snapshot.embeddings)
    }

    /// Load a JSON snapshot from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let snapshot: CatalogSnapshot = serde_json::from_reader(reader)?;
        let catalog = Self::from_snapshot(snapshot)?;
        info!(
            "Loaded catalog from {:?}: {} items, {} embeddings",
            path,
            catalog.len(),
            catalog.embedding_count()
        );
        Ok(catalog)
    }

    /// Items in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn embedding_count(&self) -> usize {
        self.embeddings.len()
    }

    /// Shared embedding dimension, `None` when no embeddings are present
    pub fn vector_dim(&self) -> Option<usize> {
        self.vector_dim
    }

    /// Items eligible for benchmarking, in catalog order
    pub fn eligible_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.is_eligible(item))
            .collect()
    }
}

impl ItemCatalog for InMemoryCatalog {
    fn get_item(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    fn get_embedding(&self, id: &str) -> Option<&EmbeddingVector> {
        self.embeddings.get(id)
    }

    fn all_other_items(&self, exclude_id: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.id != exclude_id)
            .collect()
    }

    fn sample_items(&self, n: usize, rng: &mut StdRng) -> Vec<&Item> {
        let eligible = self.eligible_items();
        let amount = n.min(eligible.len());
        rand::seq::index::sample(rng, eligible.len(), amount)
            .into_iter()
            .map(|i| eligible[i])
            .collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

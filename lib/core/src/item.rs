use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Price tier assigned to records that arrive without one
pub const LOWEST_PRICE_LEVEL: u8 = 1;

/// Category label of an item together with its parsed tag set
///
/// The raw label (`"Italian, Pizza"`) is kept verbatim because the feature
/// scorer compares labels, while the evaluation metrics work on tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Categories {
    label: String,
    tags: BTreeSet<String>,
}

impl Categories {
    /// Parse a comma-delimited label. Tags are trimmed and empty tags dropped.
    pub fn parse(label: impl Into<String>) -> Self {
        let label = label.into();
        let tags = label
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        Self { label, tags }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Number of tags shared with `other`
    pub fn overlap(&self, other: &Categories) -> usize {
        self.tags.intersection(&other.tags).count()
    }

    /// Byte-for-byte equality of the raw labels
    #[inline]
    pub fn same_label(&self, other: &Categories) -> bool {
        self.label == other.label
    }
}

impl From<String> for Categories {
    fn from(label: String) -> Self {
        Categories::parse(label)
    }
}

impl From<&str> for Categories {
    fn from(label: &str) -> Self {
        Categories::parse(label)
    }
}

impl From<Categories> for String {
    fn from(categories: Categories) -> Self {
        categories.label
    }
}

/// A catalog entry (a restaurant)
///
/// Price level and rating are optional so that incomplete records can be
/// represented; scoring them fails with [`Error::MissingAttribute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub categories: Categories,
    /// Price tier, 1 (cheapest) to 4
    #[serde(default)]
    pub price_level: Option<u8>,
    /// Average star rating, 0 to 5
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, categories: impl Into<Categories>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            categories: categories.into(),
            price_level: None,
            avg_rating: None,
            review_count: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_price(mut self, price_level: u8) -> Self {
        self.price_level = Some(price_level);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_rating(mut self, avg_rating: f64) -> Self {
        self.avg_rating = Some(avg_rating);
        self
    }

    #[must_use]
    pub fn with_location(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.city = city.into();
        self.state = state.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    /// Price level, or `MissingAttribute` if absent
    pub fn price(&self) -> Result<u8> {
        self.price_level.ok_or_else(|| Error::missing_price(&self.id))
    }

    /// Average rating, or `MissingAttribute` if absent
    pub fn rating(&self) -> Result<f64> {
        self.avg_rating.ok_or_else(|| Error::missing_rating(&self.id))
    }

    /// True when both numeric attributes are populated
    #[inline]
    pub fn has_attributes(&self) -> bool {
        self.price_level.is_some() && self.avg_rating.is_some()
    }
}

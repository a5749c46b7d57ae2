//! Products in the catalog.
//!
//! # Store
//! [`Product`] implements the [`StoreItem`](product_store::StoreItem) trait,
//! allowing it to be held by a [`StoreActor`](product_store::StoreActor).
//! A product never changes once created: the store only appends or replaces.
use serde::{Deserialize, Deserializer, Serialize};

use std::fmt::Display;

use super::ImageSource;
use product_store::StoreItem;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "deserialize_price")]
    price: f64,
    pub description: String,
    pub image: ImageSource,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, derived by the caller
    /// * `name` - Product name
    /// * `category` - Free-form category label
    /// * `price` - Price in major units; negative values are clamped to zero
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price: clamp_price(price),
            description: String::new(),
            image: ImageSource::default(),
        }
    }

    /// Major currency units (reais), never negative.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<ImageSource>) -> Self {
        self.image = image.into();
        self
    }
}

impl StoreItem for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// A product as submitted by a user, before it has an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: ImageSource,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: clamp_price(self.price),
            description: self.description,
            image: self.image,
        }
    }
}

fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_price)
}

fn clamp_price(price: f64) -> f64 {
    if price.is_nan() || price < 0.0 {
        0.0
    } else {
        price
    }
}

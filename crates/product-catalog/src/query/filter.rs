//! The Filter/Sort Engine.
//!
//! [`derive`] turns the full product sequence plus the user's criteria into the
//! sequence the list shows. It is a pure function: same input, same output, and
//! applying it to its own output changes nothing.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collate::compare_names;
use super::currency::PriceInput;
use crate::error::CatalogError;
use crate::model::Product;

/// Display order of the derived sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep store order.
    #[default]
    None,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    /// Token used by the sort selector ("" for no sorting).
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    /// Label shown next to the token in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Ordenar por...",
            SortKey::NameAsc => "Nome (A-Z)",
            SortKey::NameDesc => "Nome (Z-A)",
            SortKey::PriceAsc => "Preço (Menor → Maior)",
            SortKey::PriceDesc => "Preço (Maior → Menor)",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::NameAsc => compare_names(&a.name, &b.name),
            SortKey::NameDesc => compare_names(&b.name, &a.name),
            SortKey::PriceAsc => a.price().total_cmp(&b.price()),
            SortKey::PriceDesc => b.price().total_cmp(&a.price()),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the product name. Empty matches everything.
    pub name_query: String,
    /// Inclusive lower bound on price, in major units.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on price, in major units.
    pub max_price: Option<f64>,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Builds criteria from raw text fields. Price fields are read with
    /// [`PriceInput::classify`]; empty text and text with no digits both set no bound.
    pub fn from_inputs(search: &str, min_price: &str, max_price: &str, sort: SortKey) -> Self {
        Self {
            name_query: search.to_string(),
            min_price: PriceInput::classify(min_price).amount(),
            max_price: PriceInput::classify(max_price).amount(),
            sort,
        }
    }

    /// True when [`derive`] returns its input unchanged.
    pub fn is_identity(&self) -> bool {
        self.name_query.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.sort == SortKey::None
    }

    fn matches(&self, product: &Product, folded_query: &str) -> bool {
        if !folded_query.is_empty() && !product.name.to_lowercase().contains(folded_query) {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price() < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price() > max {
                return false;
            }
        }
        true
    }
}

/// Filters by name, then minimum price, then maximum price, then sorts.
///
/// The sort is stable, so products that compare equal keep their store order.
pub fn derive(all: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let folded_query = criteria.name_query.to_lowercase();
    let mut derived: Vec<Product> = all
        .iter()
        .filter(|product| criteria.matches(product, &folded_query))
        .cloned()
        .collect();

    if criteria.sort != SortKey::None {
        derived.sort_by(|a, b| criteria.sort.compare(a, b));
    }
    derived
}

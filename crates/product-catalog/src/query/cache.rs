//! Memoization of the last derivation.
//!
//! Keyed by the store revision the products came from plus the criteria, so a
//! re-render with nothing changed skips the filter and sort. Observable results are
//! identical to calling [`derive`] every time.

use super::filter::{derive, FilterCriteria};
use crate::model::Product;

#[derive(Debug, Default)]
pub struct DerivedCache {
    key: Option<(u64, FilterCriteria)>,
    result: Vec<Product>,
    misses: u64,
}

impl DerivedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the derived sequence for `products` at `revision`, recomputing only
    /// when the revision or the criteria differ from the previous call.
    pub fn get_or_derive(
        &mut self,
        revision: u64,
        products: &[Product],
        criteria: &FilterCriteria,
    ) -> &[Product] {
        let fresh = matches!(&self.key, Some((r, c)) if *r == revision && c == criteria);
        if !fresh {
            self.result = derive(products, criteria);
            self.key = Some((revision, criteria.clone()));
            self.misses += 1;
        }
        &self.result
    }

    /// Number of times the derivation actually ran.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::seed_products;
    use crate::query::SortKey;

    #[test]
    fn test_recomputes_only_on_change() {
        let products = seed_products();
        let mut cache = DerivedCache::new();
        let by_price = FilterCriteria {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };

        let first = cache.get_or_derive(1, &products, &by_price).to_vec();
        let second = cache.get_or_derive(1, &products, &by_price).to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);

        cache.get_or_derive(2, &products, &by_price);
        assert_eq!(cache.misses(), 2);

        let by_name = FilterCriteria {
            sort: SortKey::NameAsc,
            ..Default::default()
        };
        cache.get_or_derive(2, &products, &by_name);
        assert_eq!(cache.misses(), 3);

        cache.invalidate();
        cache.get_or_derive(2, &products, &by_name);
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn test_cached_result_matches_derive() {
        let products = seed_products();
        let criteria = FilterCriteria::from_inputs("e", "R$ 2.000,00", "", SortKey::NameDesc);
        let mut cache = DerivedCache::new();
        assert_eq!(
            cache.get_or_derive(7, &products, &criteria),
            derive(&products, &criteria).as_slice()
        );
    }
}

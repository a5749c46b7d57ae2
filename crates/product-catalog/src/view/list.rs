//! The product list: filter inputs, sort selector, and page navigation over the
//! store's products.

use std::num::NonZeroUsize;

use crate::model::Product;
use crate::query::{
    paginate, reformat_currency_input, total_pages, DerivedCache, FilterCriteria, SortKey,
};

/// Message shown when the current page has no products.
pub const EMPTY_MESSAGE: &str = "Nenhum produto encontrado.";

/// What the list shows right now.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRender {
    pub items: Vec<Product>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Navigation is only shown when there is more than one page.
    pub show_pagination: bool,
    pub has_prev: bool,
    pub has_next: bool,
}

impl ListRender {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Some(EMPTY_MESSAGE)` when there is nothing to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }

    /// Page indicator, e.g. "Página 1 de 2".
    pub fn page_label(&self) -> String {
        format!("Página {} de {}", self.current_page, self.total_pages)
    }
}

/// List state.
///
/// The page goes back to 1 whenever the products or any criterion change, so the
/// user never lands on a page that no longer exists.
#[derive(Debug)]
pub struct ProductList {
    page_size: NonZeroUsize,
    current_page: usize,
    search: String,
    min_price: String,
    max_price: String,
    sort: SortKey,
    products: Vec<Product>,
    revision: u64,
    cache: DerivedCache,
}

impl ProductList {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
            search: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            sort: SortKey::None,
            products: Vec::new(),
            revision: 0,
            cache: DerivedCache::new(),
        }
    }

    /// Takes a fresh copy of the store's products.
    pub fn sync(&mut self, products: Vec<Product>, revision: u64) {
        self.products = products;
        self.revision = revision;
        self.cache.invalidate();
        self.current_page = 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn set_search(&mut self, text: &str) {
        if self.search != text {
            self.search = text.to_string();
            self.current_page = 1;
        }
    }

    /// Stores the typed text reformatted as currency.
    pub fn set_min_price(&mut self, raw: &str) {
        let formatted = reformat_currency_input(raw);
        if self.min_price != formatted {
            self.min_price = formatted;
            self.current_page = 1;
        }
    }

    /// Stores the typed text reformatted as currency.
    pub fn set_max_price(&mut self, raw: &str) {
        let formatted = reformat_currency_input(raw);
        if self.max_price != formatted {
            self.max_price = formatted;
            self.current_page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.sort != sort {
            self.sort = sort;
            self.current_page = 1;
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn min_price(&self) -> &str {
        &self.min_price
    }

    pub fn max_price(&self) -> &str {
        &self.max_price
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_inputs(&self.search, &self.min_price, &self.max_price, self.sort)
    }

    /// The filtered and sorted products, across all pages.
    pub fn derived(&mut self) -> &[Product] {
        let criteria = self.criteria();
        self.cache
            .get_or_derive(self.revision, &self.products, &criteria)
    }

    pub fn total_pages(&mut self) -> usize {
        let page_size = self.page_size;
        total_pages(self.derived().len(), page_size)
    }

    /// Moves forward one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one page. Returns false on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn render(&mut self) -> ListRender {
        let page_size = self.page_size;
        let current_page = self.current_page;
        let page = paginate(self.derived(), page_size, current_page);
        ListRender {
            items: page.items,
            current_page,
            total_pages: page.total_pages,
            show_pagination: page.total_pages > 1,
            has_prev: current_page > 1,
            has_next: current_page < page.total_pages,
        }
    }
}

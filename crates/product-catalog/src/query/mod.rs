//! Derivations over the product sequence: filtering, sorting, pagination, and the
//! currency text they read bounds from.

pub mod cache;
pub mod collate;
pub mod currency;
pub mod filter;
pub mod paginate;

pub use cache::DerivedCache;
pub use currency::{
    format_currency, format_price, minor_units, parse_currency, reformat_currency_input,
    to_minor_units, PriceInput,
};
pub use filter::{derive, FilterCriteria, SortKey};
pub use paginate::{paginate, total_pages, Page};

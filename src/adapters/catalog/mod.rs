//! Catalog Adapters - static assessment configuration.

mod static_catalog;

pub use static_catalog::{StaticIndustryCatalog, FALLBACK_INDUSTRY, GENERIC_FAMILY};

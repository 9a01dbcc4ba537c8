//! Sample catalogs and sessions.

use paneshop_core::ShoppingSession;
use paneshop_types::{BuiltinCatalog, Catalog, CatalogSource, Orientation, ProductEntry, ProductId};
use std::sync::Arc;

pub const WHOLE_MILK: ProductId = ProductId::new(1);
pub const LACTAID: ProductId = ProductId::new(2);
pub const FAIRLIFE: ProductId = ProductId::new(3);

/// The shipped three-item milk catalog
pub fn milk_catalog() -> Arc<Catalog> {
    Arc::new(BuiltinCatalog.load())
}

/// Two products with identical text fields
pub fn duplicate_catalog() -> Arc<Catalog> {
    let entry = ProductEntry::new("Whole Milk", "$5", "This milk is decent.");
    Arc::new(Catalog::from_entries([entry.clone(), entry]))
}

/// A catalog longer than a small terminal can show at once
pub fn long_catalog(len: u32) -> Arc<Catalog> {
    Arc::new(Catalog::from_entries((1..=len).map(|i| {
        ProductEntry::new(
            format!("Product {:02}", i),
            format!("${}", i),
            format!("Description for product {}.", i),
        )
    })))
}

pub fn milk_session(orientation: Orientation) -> ShoppingSession {
    ShoppingSession::new(milk_catalog(), orientation)
}

use serde::Serialize;
use std::fmt;

use paneshop_types::{Catalog, ProductId};

#[derive(Debug, Serialize)]
pub struct CatalogViewModel {
    pub products: Vec<CatalogEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntryViewModel {
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

impl CatalogViewModel {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let products = catalog
            .iter()
            .map(|product| CatalogEntryViewModel {
                id: product.id,
                name: product.name.clone(),
                price: product.price.clone(),
            })
            .collect();
        Self { products }
    }
}

impl fmt::Display for CatalogViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.products.is_empty() {
            return writeln!(f, "The catalog is empty.");
        }

        writeln!(f, "{:<4} {:<24} PRICE", "ID", "NAME")?;
        writeln!(f, "{}", "-".repeat(40))?;

        for product in &self.products {
            writeln!(f, "{:<4} {:<24} {}", product.id, product.name, product.price)?;
        }
        Ok(())
    }
}

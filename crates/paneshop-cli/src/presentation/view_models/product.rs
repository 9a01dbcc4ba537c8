use serde::Serialize;
use std::fmt;

use paneshop_types::{Product, ProductId};

/// Detail pane content for the `show` command
#[derive(Debug, Serialize)]
pub struct ProductViewModel {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl From<&Product> for ProductViewModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            description: product.description.clone(),
        }
    }
}

impl fmt::Display for ProductViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "{}", self.description)
    }
}

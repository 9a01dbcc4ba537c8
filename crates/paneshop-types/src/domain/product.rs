use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable product identifier assigned by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// Product text fields before the catalog assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    /// Display-formatted price, e.g. `$5.50`. Never parsed.
    pub price: String,
    pub description: String,
}

impl ProductEntry {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// Immutable catalog product.
///
/// Identity is the `id`: two products with identical text are still
/// different products. Compare with [`Product::same_as`] when asking
/// "is this the selected item".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl Product {
    pub fn from_entry(id: ProductId, entry: ProductEntry) -> Self {
        Self {
            id,
            name: entry.name,
            price: entry.price,
            description: entry.description,
        }
    }

    pub fn same_as(&self, other: &Product) -> bool {
        self.id == other.id
    }

    /// Price with the label shown in detail views
    pub fn price_label(&self) -> String {
        format!("Price: {}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_prefixes_display_price() {
        let product = Product::from_entry(
            ProductId::new(2),
            ProductEntry::new("Fat Free Lactaid", "$5.50", "This milk is the best."),
        );
        assert_eq!(product.price_label(), "Price: $5.50");
    }

    #[test]
    fn test_same_as_compares_ids_not_text() {
        let entry = ProductEntry::new("Whole Milk", "$5", "This milk is decent.");
        let a = Product::from_entry(ProductId::new(1), entry.clone());
        let b = Product::from_entry(ProductId::new(4), entry);

        assert!(a.same_as(&a.clone()));
        assert!(!a.same_as(&b), "identical text must not make products the same");
    }

    #[test]
    fn test_product_id_parses_trimmed_numbers() {
        assert_eq!(" 3 ".parse::<ProductId>().unwrap(), ProductId::new(3));
        assert!("milk".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_product_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}

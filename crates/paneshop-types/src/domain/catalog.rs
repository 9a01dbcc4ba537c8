use super::product::{Product, ProductEntry, ProductId};
use crate::error::{Error, Result};

/// Ordered, read-only product list fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, assigning ids 1..=n in the given order
    pub fn from_entries(entries: impl IntoIterator<Item = ProductEntry>) -> Self {
        let products = entries
            .into_iter()
            .zip(1u32..)
            .map(|(entry, id)| Product::from_entry(ProductId::new(id), entry))
            .collect();
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: ProductId) -> Result<&Product> {
        self.get(id).ok_or(Error::UnknownProduct(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Supplies the catalog for a session.
///
/// A real deployment would back this with a repository or service; the
/// browser only needs an ordered list once at startup.
pub trait CatalogSource {
    fn load(&self) -> Catalog;
}

/// The fixed milk catalog shipped with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Catalog {
        Catalog::from_entries([
            ProductEntry::new("Whole Milk", "$5", "This milk is decent."),
            ProductEntry::new("Fat Free Lactaid", "$5.50", "This milk is the best."),
            ProductEntry::new("Fat Free Fairlife", "$6", "This milk is pretty good."),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order_and_ids() {
        let catalog = BuiltinCatalog.load();
        let names: Vec<(u32, &str)> = catalog
            .iter()
            .map(|p| (p.id.get(), p.name.as_str()))
            .collect();

        assert_eq!(
            names,
            vec![
                (1, "Whole Milk"),
                (2, "Fat Free Lactaid"),
                (3, "Fat Free Fairlife"),
            ]
        );
    }

    #[test]
    fn test_get_by_id() {
        let catalog = BuiltinCatalog.load();

        let lactaid = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(lactaid.price, "$5.50");
        assert_eq!(lactaid.description, "This milk is the best.");

        assert!(catalog.get(ProductId::new(99)).is_none());
        assert_eq!(
            catalog.require(ProductId::new(99)),
            Err(Error::UnknownProduct(ProductId::new(99)))
        );
        assert!(!catalog.contains(ProductId::new(0)));
    }

    #[test]
    fn test_duplicate_entries_get_distinct_ids() {
        let entry = ProductEntry::new("Whole Milk", "$5", "This milk is decent.");
        let catalog = Catalog::from_entries([entry.clone(), entry]);

        assert_eq!(catalog.len(), 2);
        let ids: Vec<ProductId> = catalog.iter().map(|p| p.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_entries(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}

use crate::models::Product;

/// Fixed product catalog, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog shipped with the service.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Sample Product A", 12.99, 10),
            Product::new(2, "Sample Product B", 23.50, 5),
        ])
    }

    /// All products in declaration order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

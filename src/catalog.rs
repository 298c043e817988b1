//! Products offered on the storefront.

use crate::cart_actor::CartError;
use crate::model::{Product, ProductId};
use std::collections::HashSet;

/// An ordered, validated list of products with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product and rejecting duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CartError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.clone()) {
                return Err(CartError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The three coconut-water products sold on the storefront.
    pub fn storefront() -> Self {
        Self {
            products: vec![
                Product {
                    id: ProductId::from("bottle-200ml"),
                    name: "Tender Coconut Water".into(),
                    subtitle: "Ready to Drink".into(),
                    price: 40,
                    volume: "200ml".into(),
                    image: "images/bottle-200ml.png".into(),
                    description: "Pure tender coconut water in a convenient 200ml bottle, \
                        perfect for on-the-go hydration".into(),
                    rating: Some(4.9),
                    badge: Some("Bestseller".into()),
                },
                Product {
                    id: ProductId::from("monthly-pack-10"),
                    name: "Instant Coconut Water".into(),
                    subtitle: "Monthly Pack".into(),
                    price: 299,
                    volume: "10 Sachets".into(),
                    image: "images/monthly-pack-10.png".into(),
                    description: "Box of 10 sachets - just add water for instant tender \
                        coconut water anytime, anywhere".into(),
                    rating: Some(5.0),
                    badge: Some("Best Value".into()),
                },
                Product {
                    id: ProductId::from("sachet-pack-12"),
                    name: "Instant Coconut Water".into(),
                    subtitle: "Pack of 12 Sachets".into(),
                    price: 349,
                    volume: "12 Sachets".into(),
                    image: "images/sachet-pack-12.png".into(),
                    description: "Premium instant coconut water sachets in a resealable pouch - \
                        100% natural, no preservatives".into(),
                    rating: Some(4.8),
                    badge: Some("Premium".into()),
                },
            ],
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::storefront()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_catalog_is_valid() {
        let catalog = Catalog::storefront();
        let rebuilt = Catalog::from_products(catalog.products().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 3);
        assert_eq!(rebuilt.get(&"monthly-pack-10".into()).unwrap().price, 299);
    }

    #[test]
    fn test_default_is_storefront() {
        let catalog = Catalog::default();
        assert_eq!(catalog, Catalog::storefront());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let bottle = Catalog::storefront().products()[0].clone();
        let err = Catalog::from_products(vec![bottle.clone(), bottle]).unwrap_err();
        assert_eq!(err, CartError::DuplicateProduct("bottle-200ml".into()));
    }
}

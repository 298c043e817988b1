use serde::{Deserialize, Serialize};

use crate::cart_actor::CartError;
use std::fmt::Display;

/// Type-safe identifier for Products. Doubles as the cart's line key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchasable product as the catalog presents it.
///
/// # Cart Ledger
/// The ledger never creates or mutates products. It reads a snapshot of the
/// fields below at the moment of [`CartLedger::add_item`](crate::cart_actor::CartLedger::add_item)
/// and copies them into a [`LineItem`](crate::model::LineItem).
///
/// Display-only fields (`description`, `rating`, `badge`) are carried for the
/// catalog page and ignored by the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub subtitle: String,
    /// Unit price in whole rupees.
    pub price: u64,
    pub volume: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub badge: Option<String>,
}

impl Product {
    /// Creates a validated Product.
    ///
    /// # Arguments
    /// * `id` - Catalog-unique identifier, must not be empty
    /// * `name` - Display name
    /// * `subtitle` - Short variant label (e.g. "Ready to Drink")
    /// * `price` - Unit price in whole rupees, must be positive
    /// * `volume` - Size label (e.g. "200ml")
    /// * `image` - Image reference
    ///
    /// # Errors
    /// [`CartError::EmptyProductId`] or [`CartError::InvalidPrice`].
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        subtitle: impl Into<String>,
        price: u64,
        volume: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self, CartError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            subtitle: subtitle.into(),
            price,
            volume: volume.into(),
            image: image.into(),
            description: String::new(),
            rating: None,
            badge: None,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Checks the invariants `new` enforces. Deserialized products bypass
    /// `new`, so the catalog runs this on every entry it loads.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CartError::EmptyProductId);
        }
        if self.price == 0 {
            return Err(CartError::InvalidPrice {
                id: self.id.to_string(),
                price: self.price,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottle(id: &str, price: u64) -> Result<Product, CartError> {
        Product::new(id, "Tender Coconut Water", "Ready to Drink", price, "200ml", "bottle.png")
    }

    #[test]
    fn test_new_rejects_empty_id() {
        assert_eq!(bottle("  ", 40).unwrap_err(), CartError::EmptyProductId);
    }

    #[test]
    fn test_new_rejects_zero_price() {
        let result = bottle("bottle-200ml", 0);
        assert!(matches!(result, Err(CartError::InvalidPrice { price: 0, .. })));
    }

    #[test]
    fn test_builder_fields_are_display_only() {
        let product = bottle("bottle-200ml", 40)
            .unwrap()
            .with_description("Pure tender coconut water")
            .with_badge("Bestseller")
            .with_rating(4.9);
        assert_eq!(product.description, "Pure tender coconut water");
        assert_eq!(product.badge.as_deref(), Some("Bestseller"));
        assert_eq!(product.rating, Some(4.9));
        assert_eq!(product.id.to_string(), "bottle-200ml");
    }
}

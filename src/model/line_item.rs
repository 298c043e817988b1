use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

/// One distinct product's entry in the cart.
///
/// Every field except `quantity` is a snapshot of the [`Product`] taken on the
/// first add. A later catalog price change does not touch existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub subtitle: String,
    pub price: u64,
    pub volume: String,
    pub image: String,
    /// Always >= 1 while the line is in a ledger.
    pub quantity: u32,
}

impl LineItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            subtitle: product.subtitle.clone(),
            price: product.price,
            volume: product.volume.clone(),
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_ignores_later_price_change() {
        let mut product = Product::new(
            "monthly-pack-10",
            "Instant Coconut Water",
            "Monthly Pack",
            299,
            "10 Sachets",
            "pack.png",
        )
        .unwrap();
        let line = LineItem::from_product(&product, 2);
        product.price = 999;

        assert_eq!(line.price, 299);
        assert_eq!(line.line_total(), 598);
    }

    #[test]
    fn test_line_total_saturates() {
        let product = Product::new("pricey", "Pricey", "", u64::MAX / 2, "", "").unwrap();
        let line = LineItem::from_product(&product, 3);
        assert_eq!(line.line_total(), u64::MAX);
    }
}

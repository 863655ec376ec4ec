use chrono::NaiveDateTime;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{CartLine, CartProduct, Order, OrderStatus};

pub const ORDER_PREFIX: &str = "AKKSS";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub amount: u64,
    pub items: u32,
    pub trees: u64,
    pub co2: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line_id: u32,
}

impl Cart {
    pub fn new(lines: Vec<CartLine>) -> Self {
        let next_line_id = lines.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Self {
            lines,
            next_line_id,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units, merging into an existing line for the same
    /// product. The resulting quantity never exceeds stock. Returns the
    /// quantity now in the cart for that product.
    pub fn add(&mut self, product: CartProduct, quantity: u32) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = (line.quantity + quantity).min(line.product.stock_quantity);
            return line.quantity;
        }
        let quantity = quantity.min(product.stock_quantity);
        if quantity == 0 {
            return 0;
        }
        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.push(CartLine {
            id,
            product,
            quantity,
        });
        quantity
    }

    /// Sets a line's quantity. Zero or below removes the line; values above
    /// stock are capped.
    pub fn update_quantity(&mut self, line_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(line_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) {
            let capped = quantity.min(i64::from(line.product.stock_quantity));
            line.quantity = capped as u32;
        }
    }

    pub fn remove(&mut self, line_id: u32) {
        self.lines.retain(|l| l.id != line_id);
    }

    /// Removes what `placed` ordered. Lines added or topped up since the
    /// snapshot was taken keep the difference.
    pub fn settle(&mut self, placed: &Cart) {
        for ordered in &placed.lines {
            if let Some(line) = self.lines.iter_mut().find(|l| l.id == ordered.id) {
                line.quantity = line.quantity.saturating_sub(ordered.quantity);
            }
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    pub fn totals(&self) -> CartTotals {
        self.lines.iter().fold(CartTotals::default(), |acc, line| {
            let qty = u64::from(line.quantity);
            CartTotals {
                amount: acc.amount + line.total(),
                items: acc.items + line.quantity,
                trees: acc.trees + u64::from(line.product.trees_planted) * qty,
                co2: acc.co2 + line.product.co2_saved * qty as f64,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Review,
}

impl CheckoutStep {
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Review => 2,
        }
    }
}

/// `AKKSS` + date + six random alphanumerics, e.g. `AKKSS20241215ABC123`.
pub fn order_number<R: Rng + ?Sized>(at: NaiveDateTime, rng: &mut R) -> String {
    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("{}{}{}", ORDER_PREFIX, at.format("%Y%m%d"), suffix)
}

/// Builds a pending order from the cart contents. The cart is not modified.
pub fn build_order<R: Rng + ?Sized>(
    id: u32,
    cart: &Cart,
    customer_name: String,
    at: NaiveDateTime,
    rng: &mut R,
) -> Order {
    Order {
        id,
        order_number: order_number(at, rng),
        customer_name,
        total_amount: cart.totals().amount,
        status: OrderStatus::Pending,
        created_at: at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(id: u32, price: u64, stock: u32) -> CartProduct {
        CartProduct {
            id,
            name: format!("Laptop {id}"),
            price,
            stock_quantity: stock,
            trees_planted: 1,
            co2_saved: 0.3,
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::default();
        cart.add(product(1, 157617, 15), 1);
        cart.add(product(2, 107817, 8), 2);
        cart
    }

    #[test]
    fn test_totals() {
        let totals = cart().totals();
        assert_eq!(totals.amount, 157617 + 2 * 107817);
        assert_eq!(totals.items, 3);
        assert_eq!(totals.trees, 3);
        assert!((totals.co2 - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_add_merges_and_caps() {
        let mut cart = cart();
        assert_eq!(cart.add(product(2, 107817, 8), 10), 8);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.add(product(3, 50, 0), 1), 0);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_settle_keeps_later_additions() {
        let placed = cart();
        let mut live = placed.clone();
        let topped_up = live.lines()[0].id;
        live.update_quantity(topped_up, 3);
        live.add(product(9, 64999, 4), 1);

        live.settle(&placed);

        let left: Vec<(u32, u32)> = live
            .lines()
            .iter()
            .map(|l| (l.product.id, l.quantity))
            .collect();
        assert_eq!(left, vec![(1, 2), (9, 1)]);

        let mut same = placed.clone();
        same.settle(&placed);
        assert!(same.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = cart();
        let first = cart.lines()[0].id;
        cart.update_quantity(first, 99);
        assert_eq!(cart.lines()[0].quantity, 15);
        cart.update_quantity(first, 0);
        assert_eq!(cart.lines().len(), 1);
        let second = cart.lines()[0].id;
        cart.update_quantity(second, -1);
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn test_line_ids_stay_unique_after_removal() {
        let mut cart = cart();
        let removed = cart.lines()[1].id;
        cart.remove(removed);
        cart.add(product(9, 10, 3), 1);
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_order_number_format() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let number = order_number(at, &mut rand::thread_rng());
        assert!(number.starts_with("AKKSS20241215"));
        assert_eq!(number.len(), "AKKSS20241215".len() + 6);
        assert!(number[13..].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let order = build_order(7, &cart(), "Priya Sharma".into(), at, &mut rand::thread_rng());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, 157617 + 2 * 107817);
    }
}

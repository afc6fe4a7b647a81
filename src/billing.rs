//! Bill computation for a placed order.
//!
//! The total is always derived from the order's items at the time the bill is rendered; it is
//! never stored.

use crate::clients::OrderClient;
use crate::model::{MenuItem, Order, OrderId};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Sum of the prices of all items on the order. Repeated items are counted each time they
/// appear; an order without items totals zero.
pub fn compute_total(order: &Order) -> Decimal {
    order.items.iter().map(|item| item.price).sum()
}

/// An order together with its total.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub order: Order,
    pub total: Decimal,
}

/// One row of a bill: a menu item, how many times it was ordered, and the combined price.
#[derive(Debug, Clone, PartialEq)]
pub struct BillLine<'a> {
    pub item: &'a MenuItem,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl Bill {
    pub fn new(order: Order) -> Self {
        let total = compute_total(&order);
        Self { order, total }
    }

    /// Groups identical items into lines, in the order each item first appears.
    pub fn lines(&self) -> Vec<BillLine<'_>> {
        let mut lines: Vec<BillLine<'_>> = Vec::new();
        for item in &self.order.items {
            match lines.iter_mut().find(|line| line.item == item) {
                Some(line) => {
                    line.quantity += 1;
                    line.subtotal += item.price;
                }
                None => lines.push(BillLine {
                    item,
                    quantity: 1,
                    subtotal: item.price,
                }),
            }
        }
        lines
    }
}

/// Fetches an order and computes its bill.
///
/// # Errors
/// - `NotFound` when no order has this ID
#[instrument(skip(orders))]
pub async fn render_bill(orders: &OrderClient, id: OrderId) -> Result<Bill, OrderError> {
    let order = orders
        .get_order(id)
        .await?
        .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
    let bill = Bill::new(order);
    debug!(total = %bill.total, "Bill computed");
    Ok(bill)
}

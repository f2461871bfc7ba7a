use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Lifecycle state of an order.
///
/// This core only ever creates orders, so only the initial state exists
/// here; further transitions belong to the workflow layer outside this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Composed and stored, awaiting downstream processing.
    Pending,
}

/// A single line item on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u32,
    pub quantity: u32,
    pub price: f64,
    /// `quantity × price`, computed at composition time.
    pub subtotal: f64,
}

/// A composed order.
///
/// Plain record with no hidden state; the persistence collaborator stores
/// and returns it as-is. The order exclusively owns its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the order store; 0 until then.
    pub id: u64,
    pub customer_id: u32,
    /// Sum of item subtotals, before discount.
    pub total: f64,
    /// 10% of `total` when `total` exceeds the discount threshold, else 0.
    pub discount: f64,
    /// `total - discount`.
    pub final_total: f64,
    pub status: OrderStatus,
    /// Set once, at composition time.
    pub created_at: SystemTime,
    pub items: Vec<OrderItem>,
}

/// Payload for composing a new order.
///
/// Field validation (positive quantities and prices, non-empty item list)
/// is the request layer's job; this core assumes its inputs are in range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: u32,
    pub items: Vec<OrderItemCreate>,
}

/// One requested line item inside an [`OrderCreate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub product_id: u32,
    pub quantity: u32,
    pub price: f64,
}

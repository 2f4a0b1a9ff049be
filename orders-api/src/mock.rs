//! Deterministic order listings for demos and tests.
//!
//! Numbering follows the demo catalogue: the unfiltered listing counts up
//! from order 1000 and cycles through every status, while a status listing
//! draws from a separate block per status starting at order 2000.

use crate::endpoints::orders::{Order, OrderFilter, OrderStatus, OrdersPage};
use chrono::{Duration, Utc};
use uuid::Uuid;

pub const PAGE_SIZE: u32 = 10;

/// Index of the last page a mock listing produces
pub const LAST_PAGE: u32 = 4;

pub fn orders_page(page: u32, filter: OrderFilter) -> OrdersPage {
    let orders = match filter {
        OrderFilter::All => (0..PAGE_SIZE)
            .map(|i| mixed_order(page * PAGE_SIZE + i))
            .collect(),
        OrderFilter::Status(status) => {
            let base = page * 1000 + status.index() as u32 * 100;
            (0..PAGE_SIZE)
                .map(|i| status_order(base + i, page * PAGE_SIZE + i, status))
                .collect()
        }
        OrderFilter::NoOrders => Vec::new(),
    };

    OrdersPage {
        orders,
        page,
        has_more: filter != OrderFilter::NoOrders && page < LAST_PAGE,
    }
}

fn mixed_order(index: u32) -> Order {
    let status = OrderStatus::ALL[index as usize % OrderStatus::ALL.len()];
    let number = 1000 + index;
    Order {
        id: Uuid::new_v4(),
        title: format!("Order #{number}"),
        subtitle: "Customer order details".to_string(),
        timestamp: Utc::now() - Duration::hours(i64::from(index)),
        status,
        order_number: format!("ORD-{number:06}"),
        amount: mock_amount(index),
    }
}

fn status_order(order_index: u32, age_hours: u32, status: OrderStatus) -> Order {
    let number = 2000 + order_index;
    Order {
        id: Uuid::new_v4(),
        title: format!("Order #{number}"),
        subtitle: format!("{} order details", status.display_name()),
        timestamp: Utc::now() - Duration::hours(i64::from(age_hours)),
        status,
        order_number: format!("ORD-{number:06}"),
        amount: mock_amount(order_index),
    }
}

// Spread over 99.00..9999.00
fn mock_amount(index: u32) -> f64 {
    99.0 + ((u64::from(index) * 7919) % 990_000) as f64 / 100.0
}

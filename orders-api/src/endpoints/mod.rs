pub mod orders;

pub use orders::{Order, OrderFilter, OrderStatus, OrdersPage};

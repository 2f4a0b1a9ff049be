use crate::endpoints::orders::{ListOrders, OrderFilter};

#[derive(Default)]
pub struct OrderRepository {
    filter: OrderFilter,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: OrderFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn list(&self) -> ListOrders {
        ListOrders::new(self.filter)
    }
}

use futures::future::{self, BoxFuture, FutureExt};
use orders_api::endpoints::{OrderFilter, OrdersPage};
use orders_api::{mock, Client, OrdersApiError, Request};
use std::time::Duration;

/// Where pages of orders come from
///
/// Implementations classify their own failures; the list state only ever
/// sees the resulting `ErrorKind`.
pub trait OrderSource: Send + Sync + 'static {
    fn fetch_page(
        &self,
        page: u32,
        filter: OrderFilter,
    ) -> BoxFuture<'static, Result<OrdersPage, OrdersApiError>>;
}

impl OrderSource for Client {
    fn fetch_page(
        &self,
        page: u32,
        filter: OrderFilter,
    ) -> BoxFuture<'static, Result<OrdersPage, OrdersApiError>> {
        if filter == OrderFilter::NoOrders {
            return future::ready(Ok(OrdersPage::empty(page))).boxed();
        }

        let client = self.clone();
        async move {
            let req = Request::orders().with_filter(filter).list().page(page);
            client.send(req).await
        }
        .boxed()
    }
}

/// In-process source serving the deterministic mock catalogue
#[derive(Debug, Clone, Copy)]
pub struct MockSource {
    latency: Duration,
}

impl MockSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// No artificial delay (for tests)
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl OrderSource for MockSource {
    fn fetch_page(
        &self,
        page: u32,
        filter: OrderFilter,
    ) -> BoxFuture<'static, Result<OrdersPage, OrdersApiError>> {
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            Ok(mock::orders_page(page, filter))
        }
        .boxed()
    }
}

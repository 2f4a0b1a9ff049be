use crate::events::{FetchRequest, ListIntent, RequestContext, Simulation};
use crate::source::OrderSource;
use crate::state::{ErrorInfo, ListData};
use orders_api::endpoints::OrdersPage;
use orders_api::{ErrorKind, OrdersApiError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Upper bound on a single source call
    pub request_timeout: Duration,
    /// Delay before a simulated response is delivered
    pub simulated_latency: Duration,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            simulated_latency: Duration::from_millis(1500),
        }
    }
}

/// Performs fetches and reports them back to the session as intents
pub struct DataLoader<S> {
    pub source: Arc<S>,
    pub intent_tx: mpsc::UnboundedSender<ListIntent>,
    pub options: LoaderOptions,
}

impl<S> Clone for DataLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            intent_tx: self.intent_tx.clone(),
            options: self.options,
        }
    }
}

impl<S: OrderSource> DataLoader<S> {
    pub fn new(
        source: Arc<S>,
        intent_tx: mpsc::UnboundedSender<ListIntent>,
        options: LoaderOptions,
    ) -> Self {
        Self {
            source,
            intent_tx,
            options,
        }
    }

    /// Fetch one page and send the outcome back as a `DataResponse`
    pub async fn load_page(&self, request: FetchRequest) {
        let FetchRequest {
            context,
            simulation,
            previous,
        } = request;

        tracing::info!(
            "Loading {} page {} (request {}, {:?}, simulation={:?})",
            context.filter,
            context.page,
            context.id,
            context.purpose,
            simulation
        );

        let result = match simulation {
            Simulation::Off => self.fetch(context).await,
            Simulation::Error => {
                tokio::time::sleep(self.options.simulated_latency).await;
                Err(OrdersApiError::Simulated(ErrorKind::NetworkConnection))
            }
            Simulation::Empty => {
                tokio::time::sleep(self.options.simulated_latency).await;
                Ok(OrdersPage::empty(context.page))
            }
        };

        let result = match result {
            Ok(page) => {
                tracing::info!(
                    "Loaded {} orders for request {} (has_more={})",
                    page.orders.len(),
                    context.id,
                    page.has_more
                );
                Ok(ListData::from(page))
            }
            Err(e) => {
                tracing::error!("Failed to load page for request {}: {}", context.id, e);
                Err(ErrorInfo::from(&e))
            }
        };

        let _ = self.intent_tx.send(ListIntent::DataResponse {
            context,
            result,
            previous,
        });
    }

    async fn fetch(&self, context: RequestContext) -> Result<OrdersPage, OrdersApiError> {
        let call = self.source.fetch_page(context.page, context.filter);
        match tokio::time::timeout(self.options.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(OrdersApiError::Timeout),
        }
    }
}

pub mod endpoints;
mod error;
mod macros;
pub mod mock;
pub mod repositories;

pub use crate::error::{ErrorKind, OrdersApiError};
use repositories::*;
use std::sync::Arc;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Cheap to clone; clones share one connection pool
#[derive(Clone)]
pub struct Client {
    inner: Arc<ApiClient>,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(ApiClient::new(base_url.trim_end_matches('/'))),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, OrdersApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

pub struct Request;

impl Request {
    pub fn orders() -> OrderRepository {
        OrderRepository::new()
    }
}

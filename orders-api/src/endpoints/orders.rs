use crate::macros::setter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;
use tower_api_client::{Request, RequestData};
use uuid::Uuid;

// Common

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Completed,
    ];

    /// Position in [`OrderStatus::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

/// Which orders a list request asks for
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderFilter {
    #[default]
    All,
    Status(OrderStatus),
    /// Always yields an empty list
    NoOrders,
}

impl OrderFilter {
    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            Self::Status(status) => Some(*status),
            Self::All | Self::NoOrders => None,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::All => "All Orders".to_string(),
            Self::Status(status) => status.display_name().to_string(),
            Self::NoOrders => "No Orders".to_string(),
        }
    }
}

impl Display for OrderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl From<OrderStatus> for OrderFilter {
    fn from(status: OrderStatus) -> Self {
        OrderFilter::Status(status)
    }
}

impl FromStr for OrderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(OrderFilter::All),
            "none" | "no-orders" => Ok(OrderFilter::NoOrders),
            other => other.parse().map(OrderFilter::Status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub timestamp: DateTime<Utc>,
    pub status: OrderStatus,
    pub order_number: String,
    pub amount: f64,
}

// Requests

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOrders {
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<OrderStatus>,
}

impl ListOrders {
    // `NoOrders` has no server-side representation; callers short-circuit it.
    pub fn new(filter: OrderFilter) -> Self {
        Self {
            page: 0,
            status: filter.status(),
        }
    }

    setter!(page: u32);
}

impl Request for ListOrders {
    type Data = Self;
    type Response = OrdersPage;

    fn endpoint(&self) -> Cow<'_, str> {
        "/orders".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(self)
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub page: u32,
    pub has_more: bool,
}

impl OrdersPage {
    pub fn empty(page: u32) -> Self {
        Self {
            orders: Vec::new(),
            page,
            has_more: false,
        }
    }
}

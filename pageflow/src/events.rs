use crate::state::{ErrorInfo, ListData, LoadingKind};
use orders_api::endpoints::{Order, OrderFilter};

/// Intents accepted by the list reducer (user actions and fetch results)
#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    // Loading
    OnAppear,
    PullToRefresh,
    LoadMore,
    Retry,

    // Fetch result, tagged with the request it answers
    DataResponse {
        context: RequestContext,
        result: Result<ListData<Order>, ErrorInfo>,
        previous: Option<ListData<Order>>,
    },

    // Filtering
    ToggleFilterDropdown,
    SelectFilter(OrderFilter),

    // Simulation toggles
    ToggleErrorSimulation,
    ToggleEmptySimulation,

    // Refresh banner
    DismissRefreshError,
}

/// Identifies one outbound fetch. Responses are applied only while their
/// context is still the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestContext {
    pub id: u64,
    pub page: u32,
    pub filter: OrderFilter,
    pub purpose: LoadingKind,
}

impl RequestContext {
    pub fn is_load_more(&self) -> bool {
        self.purpose == LoadingKind::LoadMore
    }
}

/// How the data loader should answer a fetch instead of asking the source
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Simulation {
    #[default]
    Off,
    Error,
    Empty,
}

/// A fetch the reducer wants performed
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub context: RequestContext,
    pub simulation: Simulation,
    /// Data on screen when a refresh started, echoed back with the response
    pub previous: Option<ListData<Order>>,
}

/// Side effect produced by a reducer step
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    /// Feed another intent straight back into the reducer
    Send(ListIntent),
}

mod page;
pub mod reducer;

pub use orders_api::ErrorKind;
pub use page::{ErrorInfo, FailureKind, ListData, LoadMoreState, LoadingKind, PageState};

use crate::events::{FetchRequest, RequestContext, Simulation};
use orders_api::endpoints::{Order, OrderFilter};

/// Complete state of one order list session
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ListState {
    pub page_state: PageState<Order>,

    // Simulation (mutually exclusive)
    pub simulate_error: bool,
    pub simulate_empty: bool,

    /// Banner error left behind by a refresh that failed over existing data
    pub refresh_error: Option<ErrorInfo>,
    /// Data that was on screen when that refresh failed
    pub stale_data: Option<ListData<Order>>,

    // Filtering
    pub selected_filter: OrderFilter,
    pub show_filter_dropdown: bool,
    pub is_changing_filter: bool,

    pub show_loading_overlay: bool,

    /// Fetch whose response will be accepted, if any
    pub active_request: Option<RequestContext>,
    next_request_id: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of the loaded list, empty in any other state
    pub fn items(&self) -> &[Order] {
        match &self.page_state {
            PageState::Loaded(data, _) => &data.items,
            PageState::Idle | PageState::Loading(_) | PageState::Failed(..) => &[],
        }
    }

    /// Items a presenter should list: loaded items, or the stale items kept
    /// under a refresh banner
    pub fn visible_items(&self) -> &[Order] {
        match (&self.page_state, &self.stale_data) {
            (PageState::Loaded(data, _), _) => &data.items,
            (PageState::Failed(FailureKind::Refresh, _), Some(stale)) => &stale.items,
            _ => &[],
        }
    }

    pub fn show_empty_view(&self) -> bool {
        matches!(&self.page_state, PageState::Loaded(data, _) if data.is_empty())
    }

    pub fn show_initial_loading(&self) -> bool {
        matches!(self.page_state, PageState::Loading(LoadingKind::Initial))
    }

    pub fn show_initial_error(&self) -> bool {
        matches!(self.page_state, PageState::Failed(FailureKind::Initial, _))
    }

    /// Refresh failed but there is stale data to show under the error
    pub fn show_refresh_banner(&self) -> bool {
        self.refresh_error.is_some() && self.stale_data.is_some()
    }

    pub fn simulation(&self) -> Simulation {
        if self.simulate_error {
            Simulation::Error
        } else if self.simulate_empty {
            Simulation::Empty
        } else {
            Simulation::Off
        }
    }

    /// Tag a new fetch and make it the only one whose response is accepted
    pub(crate) fn issue_fetch(
        &mut self,
        purpose: LoadingKind,
        page: u32,
        previous: Option<ListData<Order>>,
    ) -> FetchRequest {
        self.next_request_id += 1;
        let context = RequestContext {
            id: self.next_request_id,
            page,
            filter: self.selected_filter,
            purpose,
        };
        self.active_request = Some(context);

        // Empty responses only make sense for a first page
        let simulation = match (self.simulation(), purpose) {
            (Simulation::Empty, LoadingKind::LoadMore) => Simulation::Off,
            (simulation, _) => simulation,
        };

        FetchRequest {
            context,
            simulation,
            previous,
        }
    }
}

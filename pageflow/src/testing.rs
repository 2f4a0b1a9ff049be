use crate::events::{FetchRequest, ListIntent, Simulation};
use crate::list_core::{EffectHandler, ListCore};
use crate::state::{ErrorInfo, ListData, ListState, PageState};
use orders_api::endpoints::{Order, OrdersPage};
use orders_api::{mock, ErrorKind, OrdersApiError};

/// Effect handler for tests (no tasks, no data source)
///
/// Records every fetch so a test can decide when and how it completes.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub requests: Vec<FetchRequest>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EffectHandler for RecordingHandler {
    fn fetch(&mut self, request: FetchRequest) {
        self.requests.push(request);
    }
}

/// Synchronous list session for tests
pub struct TestList {
    core: ListCore<RecordingHandler>,
}

impl TestList {
    pub fn new() -> Self {
        Self {
            core: ListCore::new(RecordingHandler::new()),
        }
    }

    /// Dispatch a single intent
    pub fn send(&mut self, intent: ListIntent) {
        self.core.dispatch(intent);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &ListState {
        self.core.state()
    }

    pub fn page_state(&self) -> &PageState<Order> {
        &self.core.state().page_state
    }

    pub fn items(&self) -> &[Order] {
        self.core.state().items()
    }

    /// Every fetch issued so far, oldest first
    pub fn fetches(&self) -> &[FetchRequest] {
        &self.core.handler().requests
    }

    pub fn last_fetch(&self) -> FetchRequest {
        self.fetches()
            .last()
            .cloned()
            .expect("no fetch has been issued")
    }

    /// Complete `request` with an explicit source result
    pub fn respond(&mut self, request: &FetchRequest, result: Result<OrdersPage, OrdersApiError>) {
        let result = result
            .map(ListData::from)
            .map_err(|e| ErrorInfo::from(&e));
        self.send(ListIntent::DataResponse {
            context: request.context,
            result,
            previous: request.previous.clone(),
        });
    }

    /// Complete `request` the way the data loader would, from the mock catalogue
    pub fn complete(&mut self, request: &FetchRequest) {
        let context = request.context;
        let result = match request.simulation {
            Simulation::Off => Ok(mock::orders_page(context.page, context.filter)),
            Simulation::Empty => Ok(OrdersPage::empty(context.page)),
            Simulation::Error => Err(OrdersApiError::Simulated(ErrorKind::NetworkConnection)),
        };
        self.respond(request, result);
    }

    /// Complete the most recent fetch from the mock catalogue
    pub fn complete_last(&mut self) {
        let request = self.last_fetch();
        self.complete(&request);
    }

    /// Fail the most recent fetch with `kind`
    pub fn fail_last(&mut self, kind: ErrorKind) {
        let request = self.last_fetch();
        self.respond(&request, Err(OrdersApiError::Simulated(kind)));
    }

    /// Assert the list is loaded with `count` items
    pub fn assert_loaded(&self, count: usize) {
        match self.page_state() {
            PageState::Loaded(data, _) => assert_eq!(
                data.items.len(),
                count,
                "Expected {} loaded items, found {}",
                count,
                data.items.len()
            ),
            other => panic!("Expected a loaded list, state is {:?}", other),
        }
    }
}

impl Default for TestList {
    fn default() -> Self {
        Self::new()
    }
}

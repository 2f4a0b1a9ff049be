use orders_api::endpoints::{OrderFilter, OrderStatus, OrdersPage};
use orders_api::{ErrorKind, OrdersApiError};
use pageflow::background::data_loader::LoaderOptions;
use pageflow::events::ListIntent;
use pageflow::session::ListSession;
use pageflow::source::{MockSource, OrderSource};
use pageflow::state::{FailureKind, ListState, LoadMoreState, LoadingKind, PageState};
use pageflow::testing::TestList;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// List that has completed Scenario A: first page of 10, more available
fn loaded_list() -> TestList {
    let mut list = TestList::new();
    list.send(ListIntent::OnAppear);
    list.complete_last();
    list
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_a_first_page_loads() {
    let mut list = TestList::new();
    list.send(ListIntent::OnAppear);
    assert_eq!(list.page_state(), &PageState::Loading(LoadingKind::Initial));
    assert_eq!(list.last_fetch().context.page, 0);

    list.complete_last();

    list.assert_loaded(10);
    assert!(matches!(
        list.page_state(),
        PageState::Loaded(data, LoadMoreState::Idle) if data.has_more && data.current_page == 0
    ));
}

#[test]
fn scenario_b_load_more_failure_keeps_items() {
    let mut list = loaded_list();
    let before = list.items().to_vec();

    list.send(ListIntent::LoadMore);
    list.fail_last(ErrorKind::NetworkConnection);

    list.assert_loaded(10);
    assert_eq!(list.items(), before.as_slice());
    match list.page_state() {
        PageState::Loaded(_, LoadMoreState::Failed(error)) => {
            assert_eq!(error.kind(), ErrorKind::NetworkConnection)
        }
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn scenario_c_refresh_failure_shows_banner_over_prior_items() {
    let mut list = loaded_list();
    let before = list.items().to_vec();

    list.send(ListIntent::PullToRefresh);
    assert_eq!(list.page_state(), &PageState::Loading(LoadingKind::Refresh));
    list.fail_last(ErrorKind::NetworkConnection);

    assert!(matches!(
        list.page_state(),
        PageState::Failed(FailureKind::Refresh, _)
    ));
    let state = list.state();
    assert_eq!(state.refresh_error.as_ref(), state.page_state.error_info());
    assert!(state.show_refresh_banner());
    assert_eq!(state.visible_items(), before.as_slice());
}

#[test]
fn scenario_d_empty_simulation_loads_empty_list() {
    let mut list = TestList::new();
    list.send(ListIntent::ToggleEmptySimulation);
    list.send(ListIntent::OnAppear);
    list.complete_last();

    list.assert_loaded(0);
    assert!(matches!(
        list.page_state(),
        PageState::Loaded(_, LoadMoreState::NoMore)
    ));
    assert!(list.state().show_empty_view());
}

#[test]
fn scenario_e_filter_change_restarts_and_drops_late_response() {
    let mut list = TestList::new();
    list.send(ListIntent::OnAppear);
    let stale = list.last_fetch();

    let shipped = OrderFilter::Status(OrderStatus::Shipped);
    list.send(ListIntent::SelectFilter(shipped));

    // Idle was passed through on the way to the new initial load
    assert_eq!(list.page_state(), &PageState::Loading(LoadingKind::Initial));
    assert_eq!(list.fetches().len(), 2);
    let current = list.last_fetch();
    assert_eq!(current.context.filter, shipped);

    list.complete(&stale);
    assert_eq!(list.page_state(), &PageState::Loading(LoadingKind::Initial));

    list.complete(&current);
    list.assert_loaded(10);
    assert!(list
        .items()
        .iter()
        .all(|order| order.status == OrderStatus::Shipped));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn items_only_grow_during_load_more() {
    let mut list = loaded_list();
    let steps: [Option<ErrorKind>; 6] = [
        None,
        Some(ErrorKind::Timeout),
        Some(ErrorKind::Server),
        None,
        None,
        Some(ErrorKind::NetworkConnection),
    ];

    for outcome in steps {
        let before = list.items().to_vec();
        list.send(ListIntent::LoadMore);
        match outcome {
            None => list.complete_last(),
            Some(kind) => list.fail_last(kind),
        }
        assert!(list.items().len() >= before.len());
        assert_eq!(&list.items()[..before.len()], before.as_slice());
    }
    // Three successful pages after the first
    list.assert_loaded(40);
}

#[test]
fn retry_outside_failure_is_noop() {
    let mut list = TestList::new();
    list.send(ListIntent::Retry);
    assert_eq!(list.page_state(), &PageState::Idle);
    assert!(list.fetches().is_empty());

    let mut list = loaded_list();
    let before = list.state().clone();
    list.send(ListIntent::Retry);
    assert_eq!(list.state(), &before);
    assert_eq!(list.fetches().len(), 1);
}

#[test]
fn retry_after_initial_failure_loads_again() {
    let mut list = TestList::new();
    list.send(ListIntent::OnAppear);
    list.fail_last(ErrorKind::Timeout);
    assert!(list.state().show_initial_error());

    list.send(ListIntent::Retry);
    assert_eq!(list.page_state(), &PageState::Loading(LoadingKind::Initial));
    assert_eq!(list.fetches().len(), 2);

    list.complete_last();
    list.assert_loaded(10);
}

#[test]
fn duplicate_load_more_issues_one_fetch() {
    let mut list = loaded_list();
    list.send(ListIntent::LoadMore);
    list.send(ListIntent::LoadMore);
    list.send(ListIntent::LoadMore);
    assert_eq!(list.fetches().len(), 2);
}

#[test]
fn filter_change_discards_data_from_any_state() {
    let pending = OrderFilter::Status(OrderStatus::Pending);

    let mut idle = TestList::new();
    idle.send(ListIntent::SelectFilter(pending));
    assert_eq!(idle.last_fetch().context.filter, pending);

    let mut loaded = loaded_list();
    loaded.send(ListIntent::SelectFilter(pending));
    assert!(loaded.items().is_empty());
    assert_eq!(loaded.page_state(), &PageState::Loading(LoadingKind::Initial));

    let mut failed = loaded_list();
    failed.send(ListIntent::PullToRefresh);
    failed.fail_last(ErrorKind::Server);
    failed.send(ListIntent::SelectFilter(pending));
    assert!(failed.state().stale_data.is_none());
    assert!(failed.state().refresh_error.is_none());
    assert_eq!(failed.page_state(), &PageState::Loading(LoadingKind::Initial));
}

#[test]
fn error_simulation_fails_every_request() {
    let mut list = loaded_list();
    list.send(ListIntent::ToggleErrorSimulation);

    list.send(ListIntent::LoadMore);
    list.complete_last();
    assert!(matches!(
        list.page_state(),
        PageState::Loaded(_, LoadMoreState::Failed(_))
    ));

    list.send(ListIntent::PullToRefresh);
    list.complete_last();
    assert!(matches!(
        list.page_state(),
        PageState::Failed(FailureKind::Refresh, _)
    ));

    list.send(ListIntent::ToggleErrorSimulation);
    list.send(ListIntent::PullToRefresh);
    list.complete_last();
    list.assert_loaded(10);
    assert!(list.state().refresh_error.is_none());
}

#[test]
fn server_errors_keep_their_status_code() {
    let mut list = TestList::new();
    list.send(ListIntent::OnAppear);
    let request = list.last_fetch();
    list.respond(
        &request,
        Err(OrdersApiError::Status {
            status: 500,
            detail: "boom".to_string(),
        }),
    );

    let error = list.page_state().error_info().unwrap();
    assert_eq!(error.kind(), ErrorKind::Server);
    assert_eq!(error.code(), Some(500));
}

#[test]
fn load_more_ignores_page_index_claimed_by_server() {
    let mut list = TestList::new();
    list.send(ListIntent::OnAppear);
    let request = list.last_fetch();
    list.respond(
        &request,
        Ok(OrdersPage {
            orders: Vec::new(),
            page: u32::MAX,
            has_more: true,
        }),
    );

    list.send(ListIntent::LoadMore);
    assert_eq!(list.fetches().len(), 2);
    assert_eq!(list.last_fetch().context.page, 1);
}

#[test]
fn no_orders_filter_shows_empty_view() {
    let mut list = TestList::new();
    list.send(ListIntent::SelectFilter(OrderFilter::NoOrders));
    list.complete_last();
    assert!(list.state().show_empty_view());
    list.send(ListIntent::LoadMore);
    assert_eq!(list.fetches().len(), 1);
}

// ============================================================================
// Running sessions
// ============================================================================

fn options() -> LoaderOptions {
    LoaderOptions {
        request_timeout: Duration::from_millis(200),
        simulated_latency: Duration::ZERO,
    }
}

async fn wait_for(
    rx: &mut watch::Receiver<ListState>,
    predicate: impl FnMut(&ListState) -> bool,
) -> ListState {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(predicate))
        .await
        .expect("timed out waiting for state")
        .expect("session ended")
        .clone()
}

fn is_loaded(state: &ListState) -> bool {
    matches!(state.page_state, PageState::Loaded(..))
}

#[tokio::test]
async fn session_loads_first_page() {
    let session = ListSession::spawn(Arc::new(MockSource::instant()), options());
    let mut rx = session.subscribe();

    session.dispatch(ListIntent::OnAppear);
    let state = wait_for(&mut rx, is_loaded).await;

    assert_eq!(state.items().len(), 10);
    assert!(!state.show_loading_overlay);
    session.shutdown().await;
}

#[tokio::test]
async fn session_applies_queued_load_more_once() {
    let session = ListSession::spawn(Arc::new(MockSource::instant()), options());
    let mut rx = session.subscribe();

    session.dispatch(ListIntent::OnAppear);
    wait_for(&mut rx, is_loaded).await;

    session.dispatch(ListIntent::LoadMore);
    session.dispatch(ListIntent::LoadMore);
    session.dispatch(ListIntent::LoadMore);
    let state = wait_for(&mut rx, |s| {
        matches!(s.page_state, PageState::Loaded(_, LoadMoreState::Idle)) && s.items().len() > 10
    })
    .await;
    assert_eq!(state.items().len(), 20);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(session.state().items().len(), 20);
    session.shutdown().await;
}

#[tokio::test]
async fn session_filter_change_wins_over_slow_request() {
    let source = MockSource::new(Duration::from_millis(100));
    let session = ListSession::spawn(Arc::new(source), options());
    let mut rx = session.subscribe();

    session.dispatch(ListIntent::OnAppear);
    let delivered = OrderFilter::Status(OrderStatus::Delivered);
    session.dispatch(ListIntent::SelectFilter(delivered));

    let state = wait_for(&mut rx, is_loaded).await;
    assert_eq!(state.selected_filter, delivered);
    assert!(state
        .items()
        .iter()
        .all(|order| order.status == OrderStatus::Delivered));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(session
        .state()
        .items()
        .iter()
        .all(|order| order.status == OrderStatus::Delivered));
    session.shutdown().await;
}

#[tokio::test]
async fn session_error_simulation_then_retry() {
    let session = ListSession::spawn(Arc::new(MockSource::instant()), options());
    let mut rx = session.subscribe();

    session.dispatch(ListIntent::ToggleErrorSimulation);
    session.dispatch(ListIntent::OnAppear);
    let state = wait_for(&mut rx, |s| s.show_initial_error()).await;
    assert_eq!(
        state.page_state.error_info().map(|e| e.kind()),
        Some(ErrorKind::NetworkConnection)
    );

    session.dispatch(ListIntent::ToggleErrorSimulation);
    session.dispatch(ListIntent::Retry);
    let state = wait_for(&mut rx, is_loaded).await;
    assert_eq!(state.items().len(), 10);
    session.shutdown().await;
}

/// A source that never answers
struct SilentSource;

impl OrderSource for SilentSource {
    fn fetch_page(
        &self,
        _page: u32,
        _filter: OrderFilter,
    ) -> futures::future::BoxFuture<'static, Result<OrdersPage, OrdersApiError>> {
        Box::pin(futures::future::pending())
    }
}

#[tokio::test]
async fn session_times_out_slow_source() {
    let session = ListSession::spawn(Arc::new(SilentSource), options());
    let mut rx = session.subscribe();

    session.dispatch(ListIntent::OnAppear);
    let state = wait_for(&mut rx, |s| s.show_initial_error()).await;
    assert_eq!(
        state.page_state.error_info().map(|e| e.kind()),
        Some(ErrorKind::Timeout)
    );
    session.shutdown().await;
}

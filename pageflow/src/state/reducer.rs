use super::{
    ErrorInfo, FailureKind, ListData, ListState, LoadMoreState, LoadingKind, PageState,
};
use crate::events::{Effect, ListIntent, RequestContext};
use orders_api::endpoints::Order;

/// Pure state transition function for list intents
///
/// Mutates `state` and describes, but never performs, the follow-up effect.
pub fn reduce(state: &mut ListState, intent: ListIntent) -> Effect {
    match intent {
        ListIntent::OnAppear => {
            if !matches!(state.page_state, PageState::Idle) {
                tracing::debug!("Ignoring appear: list is {}", state.page_state.name());
                return Effect::None;
            }
            state.page_state = PageState::Loading(LoadingKind::Initial);
            state.show_loading_overlay = true;
            Effect::Fetch(state.issue_fetch(LoadingKind::Initial, 0, None))
        }

        ListIntent::PullToRefresh => {
            if state.page_state.is_loading() {
                tracing::debug!("Ignoring refresh: a request is already in flight");
                return Effect::None;
            }
            state.show_loading_overlay = true;
            state.refresh_error = None;

            // Data on screen survives a failed refresh, whether it came from
            // the loaded list or from an earlier banner
            let previous = match &state.page_state {
                PageState::Loaded(data, _) => Some(data.clone()),
                PageState::Idle | PageState::Loading(_) | PageState::Failed(..) => {
                    state.stale_data.clone()
                }
            };
            state.stale_data = None;

            let kind = if previous.is_some() || matches!(state.page_state, PageState::Failed(..)) {
                LoadingKind::Refresh
            } else {
                LoadingKind::Initial
            };
            state.page_state = PageState::Loading(kind);
            Effect::Fetch(state.issue_fetch(kind, 0, previous))
        }

        ListIntent::LoadMore => {
            let PageState::Loaded(data, load_more) = &mut state.page_state else {
                tracing::debug!("Ignoring load more: list is {}", state.page_state.name());
                return Effect::None;
            };
            let idle = matches!(load_more, LoadMoreState::Idle | LoadMoreState::Failed(_));
            if !data.has_more || !idle {
                tracing::debug!("Ignoring load more: nothing to fetch or already loading");
                return Effect::None;
            }
            let Some(next_page) = data.current_page.checked_add(1) else {
                tracing::warn!("Page cursor exhausted at page {}", data.current_page);
                data.has_more = false;
                *load_more = LoadMoreState::NoMore;
                return Effect::None;
            };
            *load_more = LoadMoreState::Loading;
            state.show_loading_overlay = true;
            Effect::Fetch(state.issue_fetch(LoadingKind::LoadMore, next_page, None))
        }

        ListIntent::DataResponse {
            context,
            result,
            previous,
        } => {
            if state.active_request != Some(context) {
                tracing::debug!(
                    "Discarding stale response {} for {} page {}",
                    context.id,
                    context.filter,
                    context.page
                );
                return Effect::None;
            }
            state.active_request = None;
            state.show_loading_overlay = false;
            state.is_changing_filter = false;

            match result {
                Ok(page) => apply_page(state, context, page),
                Err(error) => apply_failure(state, context, error, previous),
            }
            Effect::None
        }

        ListIntent::Retry => match state.page_state {
            PageState::Failed(FailureKind::Initial | FailureKind::Refresh, _) => {
                tracing::info!("Retrying {} after failure", state.selected_filter);
                state.page_state = PageState::Idle;
                state.refresh_error = None;
                state.stale_data = None;
                state.show_loading_overlay = true;
                Effect::Send(ListIntent::OnAppear)
            }
            _ => {
                tracing::debug!("Ignoring retry: list is {}", state.page_state.name());
                Effect::None
            }
        },

        ListIntent::ToggleFilterDropdown => {
            state.show_filter_dropdown = !state.show_filter_dropdown;
            Effect::None
        }

        ListIntent::SelectFilter(filter) => {
            tracing::info!("Switching filter {} -> {}", state.selected_filter, filter);
            state.selected_filter = filter;
            state.show_filter_dropdown = false;
            state.is_changing_filter = true;
            state.show_loading_overlay = true;

            // Whatever is in flight belongs to the old filter
            state.active_request = None;
            state.page_state = PageState::Idle;
            state.refresh_error = None;
            state.stale_data = None;
            Effect::Send(ListIntent::OnAppear)
        }

        ListIntent::ToggleErrorSimulation => {
            state.simulate_error = !state.simulate_error;
            if state.simulate_error {
                state.simulate_empty = false;
            }
            Effect::None
        }

        ListIntent::ToggleEmptySimulation => {
            state.simulate_empty = !state.simulate_empty;
            if state.simulate_empty {
                state.simulate_error = false;
            }
            Effect::None
        }

        ListIntent::DismissRefreshError => {
            state.refresh_error = None;
            Effect::None
        }
    }
}

fn apply_page(state: &mut ListState, context: RequestContext, mut page: ListData<Order>) {
    // The cursor tracks the page that was requested, whatever the body claims
    page.current_page = context.page;

    if context.is_load_more() {
        match &mut state.page_state {
            PageState::Loaded(data, load_more) => {
                data.items.extend(page.items);
                data.current_page = page.current_page;
                data.has_more = page.has_more;
                *load_more = LoadMoreState::after_page(data.has_more);
                tracing::info!(
                    "Appended page {} ({} orders total)",
                    data.current_page,
                    data.items.len()
                );
            }
            other => {
                tracing::warn!("Dropping load-more page: list is {}", other.name());
            }
        }
        return;
    }

    tracing::info!(
        "Loaded {} orders for {} (has_more={})",
        page.items.len(),
        context.filter,
        page.has_more
    );
    state.refresh_error = None;
    state.stale_data = None;
    let load_more = LoadMoreState::after_page(page.has_more);
    state.page_state = PageState::Loaded(page, load_more);
}

fn apply_failure(
    state: &mut ListState,
    context: RequestContext,
    error: ErrorInfo,
    previous: Option<ListData<Order>>,
) {
    tracing::warn!(
        "Request {} for {} page {} failed: {}",
        context.id,
        context.filter,
        context.page,
        error.message()
    );

    if context.is_load_more() {
        match &mut state.page_state {
            PageState::Loaded(_, load_more) => *load_more = LoadMoreState::Failed(error),
            other => {
                tracing::warn!("Dropping load-more failure: list is {}", other.name());
            }
        }
        return;
    }

    match previous {
        Some(previous) if state.page_state.is_refreshing() => {
            state.page_state = PageState::Failed(FailureKind::Refresh, error.clone());
            state.refresh_error = Some(error);
            state.stale_data = Some(previous);
        }
        // Nothing was ever shown, so there is nothing to keep
        _ => state.page_state = PageState::Failed(FailureKind::Initial, error),
    }
}

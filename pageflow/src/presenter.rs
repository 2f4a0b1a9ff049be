use crate::state::{FailureKind, ListState, LoadMoreState, LoadingKind, PageState};
use itertools::Itertools;
use orders_api::endpoints::Order;
use std::io::Write;

/// Renders list state; notified after every change
pub trait Presenter {
    fn render(&mut self, state: &ListState);
}

/// Writes a one-line summary of each state to a writer
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render(&mut self, state: &ListState) {
        let _ = writeln!(self.out, "{}", summarize(state));
    }
}

/// One-line description of what a screen would show for `state`
pub fn summarize(state: &ListState) -> String {
    let mut line = format!("[{}] ", state.selected_filter);

    if state.show_initial_loading() {
        line.push_str("loading");
    } else {
        summarize_page(state, &mut line);
    }

    if state.show_filter_dropdown {
        line.push_str(" | choosing filter");
    }
    if state.simulate_error {
        line.push_str(" | simulating errors");
    } else if state.simulate_empty {
        line.push_str(" | simulating empty");
    }
    line
}

fn summarize_page(state: &ListState, line: &mut String) {
    match &state.page_state {
        PageState::Idle => line.push_str("idle"),
        PageState::Loading(LoadingKind::Refresh) => line.push_str("refreshing"),
        PageState::Loading(_) => line.push_str("loading more"),
        PageState::Loaded(data, _) if data.is_empty() => line.push_str("no orders"),
        PageState::Loaded(data, load_more) => {
            line.push_str(&format!(
                "{} orders through page {} ({}) | {}",
                data.len(),
                u64::from(data.current_page) + 1,
                describe_load_more(load_more),
                status_counts(&data.items)
            ));
        }
        PageState::Failed(FailureKind::Refresh, error) if state.stale_data.is_some() => {
            line.push_str(&format!(
                "showing {} stale orders",
                state.visible_items().len()
            ));
            if state.refresh_error.is_some() {
                line.push_str(&format!(" | refresh failed: {}", error.message()));
            }
        }
        PageState::Failed(_, error) => {
            line.push_str(&format!("error: {} (retry available)", error.message()));
        }
    }
}

fn describe_load_more(load_more: &LoadMoreState) -> String {
    match load_more {
        LoadMoreState::Idle => "more available".to_string(),
        LoadMoreState::Loading => "loading more".to_string(),
        LoadMoreState::NoMore => "end of list".to_string(),
        LoadMoreState::Failed(error) => format!("load more failed: {}", error.message()),
    }
}

fn status_counts(orders: &[Order]) -> String {
    orders
        .iter()
        .counts_by(|order| order.status)
        .into_iter()
        .sorted_by_key(|(status, _)| status.index())
        .map(|(status, count)| format!("{} {}", status, count))
        .join(", ")
}

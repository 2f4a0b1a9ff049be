use crate::events::{Effect, FetchRequest, ListIntent};
use crate::state::{reducer, ListState};

/// Trait for performing fetch effects (production = background tasks, test = recorder)
///
/// This trait abstracts the side effects of the reducer, allowing tests
/// to inject a handler that doesn't spawn tasks or touch a data source.
pub trait EffectHandler {
    /// Start a fetch. Its result must come back as a `ListIntent::DataResponse`.
    fn fetch(&mut self, request: FetchRequest);
}

/// Single-writer owner of a list session's state
///
/// Generic over H (handler) for zero-cost abstraction. The handler type
/// determines how fetches are performed.
pub struct ListCore<H: EffectHandler> {
    state: ListState,
    handler: H,
}

impl<H: EffectHandler> ListCore<H> {
    pub fn new(handler: H) -> Self {
        Self {
            state: ListState::new(),
            handler,
        }
    }

    /// Apply an intent and run the effects it produces
    ///
    /// `Effect::Send` intents are reduced immediately, before this returns,
    /// so a caller never observes the intermediate state they pass through.
    pub fn dispatch(&mut self, intent: ListIntent) {
        let mut next = Some(intent);
        while let Some(intent) = next.take() {
            match reducer::reduce(&mut self.state, intent) {
                Effect::None => {}
                Effect::Send(intent) => next = Some(intent),
                Effect::Fetch(request) => self.handler.fetch(request),
            }
        }
    }

    /// Get read-only access to the current state (for rendering or assertions)
    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

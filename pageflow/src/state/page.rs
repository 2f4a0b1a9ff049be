use orders_api::endpoints::{Order, OrdersPage};
use orders_api::{ErrorKind, OrdersApiError};

/// One contiguous run of fetched items plus the pagination cursor
#[derive(Debug, Clone, PartialEq)]
pub struct ListData<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub has_more: bool,
}

impl<T> ListData<T> {
    pub fn new(items: Vec<T>, current_page: u32, has_more: bool) -> Self {
        Self {
            items,
            current_page,
            has_more,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, false)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl From<OrdersPage> for ListData<Order> {
    fn from(page: OrdersPage) -> Self {
        Self::new(page.orders, page.page, page.has_more)
    }
}

/// Error payload carried by failed states. Built once, at failure time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    kind: ErrorKind,
    message: String,
    code: Option<u16>,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
            code: None,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<u16> {
        self.code
    }
}

impl From<&OrdersApiError> for ErrorInfo {
    fn from(err: &OrdersApiError) -> Self {
        let info = match err {
            OrdersApiError::Simulated(kind) => ErrorInfo::new(*kind),
            other => ErrorInfo::with_message(other.kind(), other.to_string()),
        };
        match err.code() {
            Some(code) => info.with_code(code),
            None => info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingKind {
    Initial,
    Refresh,
    LoadMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Initial,
    Refresh,
    LoadMore,
}

/// Sub-state of the trailing "load more" affordance of a loaded list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMoreState {
    Idle,
    Loading,
    NoMore,
    Failed(ErrorInfo),
}

impl LoadMoreState {
    /// State to settle into after a page arrives
    pub fn after_page(has_more: bool) -> Self {
        if has_more {
            LoadMoreState::Idle
        } else {
            LoadMoreState::NoMore
        }
    }
}

/// Every state a paginated list can be in
#[derive(Default, Debug, Clone, PartialEq)]
pub enum PageState<T> {
    #[default]
    Idle,
    Loading(LoadingKind),
    Loaded(ListData<T>, LoadMoreState),
    Failed(FailureKind, ErrorInfo),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        match self {
            PageState::Loading(_) => true,
            PageState::Loaded(_, LoadMoreState::Loading) => true,
            PageState::Loaded(..) | PageState::Idle | PageState::Failed(..) => false,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self, PageState::Loading(LoadingKind::Refresh))
    }

    pub fn is_loading_more(&self) -> bool {
        matches!(
            self,
            PageState::Loading(LoadingKind::LoadMore) | PageState::Loaded(_, LoadMoreState::Loading)
        )
    }

    /// Idle and failed load-more states can both be resumed
    pub fn can_load_more(&self) -> bool {
        match self {
            PageState::Loaded(_, load_more) => match load_more {
                LoadMoreState::Idle | LoadMoreState::Failed(_) => true,
                LoadMoreState::Loading | LoadMoreState::NoMore => false,
            },
            PageState::Idle | PageState::Loading(_) | PageState::Failed(..) => false,
        }
    }

    pub fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            PageState::Failed(_, error) => Some(error),
            PageState::Loaded(_, LoadMoreState::Failed(error)) => Some(error),
            PageState::Loaded(..) | PageState::Idle | PageState::Loading(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_info().map(ErrorInfo::message)
    }

    pub fn data(&self) -> Option<&ListData<T>> {
        match self {
            PageState::Loaded(data, _) => Some(data),
            PageState::Idle | PageState::Loading(_) | PageState::Failed(..) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageState::Idle => "idle",
            PageState::Loading(_) => "loading",
            PageState::Loaded(..) => "loaded",
            PageState::Failed(..) => "failed",
        }
    }
}

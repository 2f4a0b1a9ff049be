use crate::background::data_loader::DataLoader;
use crate::background::{BackgroundTaskManager, LIST_FETCH_TASK};
use crate::events::FetchRequest;
use crate::list_core::EffectHandler;
use crate::source::OrderSource;

/// Production effect handler: every fetch runs as a background task
///
/// All fetches share one task slot, so starting a new one aborts the
/// previous. The reducer still checks request contexts, since an aborted
/// task may already have queued its response.
pub struct TaskEffectHandler<S> {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader<S>,
}

impl<S: OrderSource> TaskEffectHandler<S> {
    pub fn new(data_loader: DataLoader<S>) -> Self {
        Self {
            task_manager: BackgroundTaskManager::new(),
            data_loader,
        }
    }
}

impl<S: OrderSource> EffectHandler for TaskEffectHandler<S> {
    fn fetch(&mut self, request: FetchRequest) {
        tracing::debug!(
            "Spawning fetch for request {} (page {})",
            request.context.id,
            request.context.page
        );

        let data_loader = self.data_loader.clone();
        let future = async move {
            data_loader.load_page(request).await;
        };

        self.task_manager.spawn_load_task(LIST_FETCH_TASK, future);
    }
}

use crate::background::data_loader::{DataLoader, LoaderOptions};
use crate::commands::executor::TaskEffectHandler;
use crate::events::ListIntent;
use crate::list_core::{EffectHandler, ListCore};
use crate::source::OrderSource;
use crate::state::ListState;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

/// Runs one list session as a task that owns its state
///
/// Intents from the presenter and from finished fetches share one queue and
/// are reduced strictly in arrival order.
pub struct ListSession;

impl ListSession {
    pub fn spawn<S: OrderSource>(source: Arc<S>, options: LoaderOptions) -> SessionHandle {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ListState::new());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let data_loader = DataLoader::new(source, intent_tx.clone(), options);
        let core = ListCore::new(TaskEffectHandler::new(data_loader));
        let task = tokio::spawn(run(core, intent_rx, state_tx, shutdown_rx));

        SessionHandle {
            intent_tx,
            state_rx,
            shutdown_tx: Some(shutdown_tx),
            task,
        }
    }
}

async fn run<H: EffectHandler>(
    mut core: ListCore<H>,
    mut intent_rx: mpsc::UnboundedReceiver<ListIntent>,
    state_tx: watch::Sender<ListState>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    tracing::info!("List session started");
    loop {
        tokio::select! {
            _ = &mut shutdown_rx => break,
            intent = intent_rx.recv() => {
                let Some(intent) = intent else { break };
                core.dispatch(intent);
                let next = core.state();
                state_tx.send_if_modified(|current| {
                    if *current == *next {
                        false
                    } else {
                        *current = next.clone();
                        true
                    }
                });
            }
        }
    }
    tracing::info!("List session ended");
}

/// Presenter-side handle to a running session
pub struct SessionHandle {
    intent_tx: mpsc::UnboundedSender<ListIntent>,
    state_rx: watch::Receiver<ListState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Queue an intent. Returns false once the session has ended.
    pub fn dispatch(&self, intent: ListIntent) -> bool {
        self.intent_tx.send(intent).is_ok()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state_rx.clone()
    }

    /// Snapshot of the latest published state
    pub fn state(&self) -> ListState {
        self.state_rx.borrow().clone()
    }

    /// Stop the session and wait for it; in-flight fetches are aborted
    pub async fn shutdown(mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            tracing::warn!("List session task failed: {}", e);
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

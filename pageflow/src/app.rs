use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::handlers::{self, ConsoleCommand};
use crate::events::ListIntent;
use crate::logging::init_logging;
use crate::presenter::{ConsolePresenter, Presenter};
use crate::session::{ListSession, SessionHandle};
use crate::settings::{Settings, SourceKind};
use crate::source::MockSource;
use orders_api::Client;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_path = init_logging(&self.settings)?;
        tracing::info!("pageflow starting (log file {})", log_path.display());

        let options = self.settings.loader_options();
        let session = match self.settings.source {
            SourceKind::Mock => {
                tracing::info!("Using mock order source");
                ListSession::spawn(Arc::new(MockSource::new(self.settings.mock_latency())), options)
            }
            SourceKind::Http => {
                tracing::info!("Using order service at {}", self.settings.api_base_url);
                let client = Client::new(&self.settings.api_base_url);
                ListSession::spawn(Arc::new(client), options)
            }
        };

        self.run_console(session).await
    }

    async fn run_console(&self, session: SessionHandle) -> Result<()> {
        let mut presenter = ConsolePresenter::stdout();
        let mut state_rx = session.subscribe();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{}", handlers::HELP);
        presenter.render(&state_rx.borrow_and_update());
        session.dispatch(ListIntent::OnAppear);

        tracing::info!("Entering console loop");
        loop {
            tokio::select! {
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        tracing::warn!("List session closed");
                        break;
                    }
                    presenter.render(&state_rx.borrow_and_update());
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match handlers::parse_command(&line) {
                        Some(ConsoleCommand::Intent(intent)) => {
                            tracing::info!("Dispatching intent: {:?}", intent);
                            session.dispatch(intent);
                        }
                        Some(ConsoleCommand::Help) => println!("{}", handlers::HELP),
                        Some(ConsoleCommand::Quit) => {
                            tracing::info!("Quit requested, exiting console loop");
                            break;
                        }
                        None => {
                            if !line.trim().is_empty() {
                                println!("unknown command: {}", line.trim());
                            }
                        }
                    }
                }
            }
        }

        tracing::info!("Shutting down list session");
        session.shutdown().await;
        Ok(())
    }
}

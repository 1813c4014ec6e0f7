//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, polling, state management, and rendering.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::HttpDataClientBuilder;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::polling::{PollEvent, PollingController};
use crate::state::{Action, Store};
use crate::ui::Ui;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// View parameters.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Fetches and caches rankings.
    controller: PollingController,
    /// Timer ticks and fetch completions.
    poll_rx: mpsc::UnboundedReceiver<PollEvent>,
    /// Renderer.
    ui: Ui,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Fail on bad bindings or a bad backend URL before touching the terminal
        let event_handler = EventHandler::new(&config.keybindings)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("maxline/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let client = HttpDataClientBuilder::new()
            .config(config.api.clone())
            .client(http)
            .build()?;
        info!(base_url = %config.api.base_url, "Using ranking backend");
        let (controller, poll_rx) = PollingController::new(
            Arc::new(client),
            Duration::from_secs(config.ui.refresh_interval_secs),
        );

        let mut store = Store::new(&config.dashboard);
        store.app.exchange = config.api.exchange.clone();
        store.app.quote = config.api.quote.clone();

        let ui = Ui::new(&config.ui, &config.theme, &config.keybindings);

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            store,
            event_handler,
            controller,
            poll_rx,
            ui,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        let query = self.store.app.query();
        info!(market = %query.market, timeframe = %query.timeframe, "Starting dashboard");
        self.controller.start(query);

        // Main event loop
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                self.ui.render(frame, &self.store, self.controller.cache());
            })?;

            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                // Handle timer ticks and fetch completions
                Some(event) = self.poll_rx.recv() => {
                    self.controller.handle(event);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        self.controller.shutdown();
        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        if let Action::Refresh { force } = action {
            self.controller.refresh_now(force);
            return;
        }

        if self.store.reduce(action) {
            self.controller.start(self.store.app.query());
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.controller.shutdown();

        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

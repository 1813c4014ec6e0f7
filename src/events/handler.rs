//! Event handler for processing input events.

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;

use super::{InputEvent, Key, KeyBinding};
use crate::config::KeyBindings;
use crate::error::{Error, Result};
use crate::state::{Action, Market, Store};

/// Parsed key bindings.
#[derive(Debug, Clone)]
struct Bindings {
    quit: KeyBinding,
    help: KeyBinding,
    refresh: KeyBinding,
    spot: KeyBinding,
    swap: KeyBinding,
    next_timeframe: KeyBinding,
    prev_timeframe: KeyBinding,
}

impl TryFrom<&KeyBindings> for Bindings {
    type Error = Error;

    fn try_from(config: &KeyBindings) -> Result<Self> {
        Ok(Self {
            quit: config.quit.parse()?,
            help: config.help.parse()?,
            refresh: config.refresh.parse()?,
            spot: config.spot.parse()?,
            swap: config.swap.parse()?,
            next_timeframe: config.next_timeframe.parse()?,
            prev_timeframe: config.prev_timeframe.parse()?,
        })
    }
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Copy, Default)]
struct StoreSnapshot {
    show_help: bool,
}

/// Reads terminal events and maps them to actions.
pub struct EventHandler {
    /// Async terminal event stream, opened on first read.
    events: Option<EventStream>,
    /// Key bindings.
    keybindings: Bindings,
    /// State needed for context-aware handling.
    store_snapshot: StoreSnapshot,
}

impl EventHandler {
    /// Create a new event handler. Fails on an unparseable binding.
    pub fn new(keybindings: &KeyBindings) -> Result<Self> {
        Ok(Self {
            events: None,
            keybindings: Bindings::try_from(keybindings)?,
            store_snapshot: StoreSnapshot::default(),
        })
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = StoreSnapshot {
            show_help: store.app.show_help,
        };
    }

    /// Wait for the next terminal event and map it to an action.
    ///
    /// `Ok(None)` means the event was ignored.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        let event = self
            .events
            .get_or_insert_with(EventStream::new)
            .next()
            .await;
        match event {
            Some(Ok(event)) => Ok(self.map_event(event)),
            Some(Err(e)) => Err(e.into()),
            None => Err(Error::application("terminal event stream closed")),
        }
    }

    fn map_event(&self, event: CrosstermEvent) -> Option<Action> {
        match event {
            CrosstermEvent::Key(key) => self.handle_key(key),
            CrosstermEvent::Resize(..) => Some(Action::Resized),
            _ => None,
        }
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = InputEvent::from(key);
        let bindings = &self.keybindings;

        if input.modifiers.ctrl && input.key == Key::Char('c') {
            return Some(Action::Quit);
        }

        if self.store_snapshot.show_help {
            // Any of these close the overlay; everything else is swallowed
            return (input.matches(&bindings.help)
                || input.key == Key::Escape
                || input.matches(&bindings.quit))
            .then_some(Action::ToggleHelp);
        }

        if input.matches(&bindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&bindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&bindings.refresh) {
            return Some(Action::Refresh { force: true });
        }

        // Query parameters
        if input.matches(&bindings.spot) {
            return Some(Action::SetMarket(Market::Spot));
        }
        if input.matches(&bindings.swap) {
            return Some(Action::SetMarket(Market::Swap));
        }
        if input.matches(&bindings.next_timeframe) {
            return Some(Action::NextTimeframe);
        }
        if input.matches(&bindings.prev_timeframe) {
            return Some(Action::PrevTimeframe);
        }

        match input.plain_char()? {
            // Candle limit
            '+' | '=' => Some(Action::AdjustCandleLimit(1)),
            '-' | '_' => Some(Action::AdjustCandleLimit(-1)),
            // Top-N
            ']' => Some(Action::AdjustTopN(1)),
            '[' => Some(Action::AdjustTopN(-1)),
            _ => None,
        }
    }
}

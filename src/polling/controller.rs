//! Polling controller - subscription lifecycle and result application.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::{PollEvent, SubscriptionHandle, SubscriptionState};
use crate::api::DataClient;
use crate::error::Result;
use crate::state::{Market, MarketCache, MarketFeed, Query, QueryResult};

/// The live subscription.
struct Subscription {
    generation: u64,
    query: Query,
    /// `None` when periodic refresh is disabled.
    timer: Option<JoinHandle<()>>,
    in_flight: usize,
    /// Sequence number of the next fetch.
    next_seq: u64,
    /// Sequence number of the newest applied success.
    applied_success_seq: Option<u64>,
    /// Outcome of the last applied result.
    last_outcome: SubscriptionState,
}

impl Subscription {
    fn handle(&self) -> SubscriptionHandle {
        SubscriptionHandle {
            generation: self.generation,
        }
    }
}

/// Fetches, caches and refreshes rankings per market.
pub struct PollingController {
    /// Transport.
    client: Arc<dyn DataClient>,
    /// Refresh period. Zero disables the timer.
    interval: Duration,
    /// One feed per market.
    cache: MarketCache,
    /// Last issued subscription generation.
    generation: u64,
    /// Live subscription, if any.
    active: Option<Subscription>,
    /// State of the most recent subscription.
    state: SubscriptionState,
    /// Sender cloned into timer and fetch tasks.
    event_tx: mpsc::UnboundedSender<PollEvent>,
}

impl PollingController {
    /// Create a controller. The receiver must be drained by the event loop
    /// and every event passed to [`handle`](Self::handle).
    pub fn new(
        client: Arc<dyn DataClient>,
        interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<PollEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let controller = Self {
            client,
            interval,
            cache: MarketCache::new(),
            generation: 0,
            active: None,
            state: SubscriptionState::Idle,
            event_tx,
        };
        (controller, event_rx)
    }

    /// Start polling `query`: an immediate forced fetch, then one refresh per
    /// interval. Any previous subscription is stopped first.
    pub fn start(&mut self, query: Query) -> SubscriptionHandle {
        if let Some(handle) = self.active_handle() {
            self.stop(handle);
        }

        self.generation += 1;
        let generation = self.generation;
        let timer = (!self.interval.is_zero()).then(|| self.spawn_timer(generation));

        info!(
            generation,
            market = %query.market,
            timeframe = %query.timeframe,
            limit = query.candle_limit,
            top = query.top_n,
            "polling started"
        );

        self.active = Some(Subscription {
            generation,
            query,
            timer,
            in_flight: 0,
            next_seq: 0,
            applied_success_seq: None,
            last_outcome: SubscriptionState::Idle,
        });
        self.state = SubscriptionState::Idle;
        self.issue_fetch(true);

        SubscriptionHandle { generation }
    }

    /// Stop a subscription. Its timer is cancelled and results still in
    /// flight will be discarded. Returns `false` if `handle` is not live.
    pub fn stop(&mut self, handle: SubscriptionHandle) -> bool {
        let Some(subscription) = self
            .active
            .take_if(|s| s.generation == handle.generation)
        else {
            return false;
        };

        if let Some(timer) = &subscription.timer {
            timer.abort();
        }
        if subscription.in_flight > 0 {
            self.cache.set_loading(subscription.query.market, false);
        }
        // Invalidate the token so nothing issued so far can match again.
        self.generation += 1;
        self.state = SubscriptionState::Stopped;

        info!(
            generation = handle.generation(),
            abandoned = subscription.in_flight,
            "polling stopped"
        );
        true
    }

    /// Fetch the live query now without touching the timer schedule.
    /// Returns `false` when nothing is being polled.
    pub fn refresh_now(&mut self, force: bool) -> bool {
        if self.active.is_none() {
            debug!("refresh requested with no active subscription");
            return false;
        }
        info!(force, "manual refresh");
        self.issue_fetch(force)
    }

    /// Apply an event from a timer or fetch task.
    pub fn handle(&mut self, event: PollEvent) {
        let generation = event.generation();
        if !self.is_live(generation) {
            match &event {
                PollEvent::Tick { .. } => {
                    debug!(generation, "dropping tick from stale subscription")
                }
                PollEvent::Completed { query, .. } => debug!(
                    generation,
                    market = %query.market,
                    "discarding result from stale subscription"
                ),
            }
            return;
        }

        match event {
            PollEvent::Tick { .. } => {
                debug!(generation, "refresh tick");
                self.issue_fetch(false);
            }
            PollEvent::Completed { seq, outcome, .. } => self.complete(seq, outcome),
        }
    }

    /// Observable state for `market`.
    pub fn feed(&self, market: Market) -> &MarketFeed {
        self.cache.get(market)
    }

    /// All cached feeds.
    pub fn cache(&self) -> &MarketCache {
        &self.cache
    }

    /// Query of the live subscription.
    pub fn active_query(&self) -> Option<&Query> {
        self.active.as_ref().map(|s| &s.query)
    }

    /// Handle of the live subscription.
    pub fn active_handle(&self) -> Option<SubscriptionHandle> {
        self.active.as_ref().map(Subscription::handle)
    }

    /// Lifecycle state of the most recent subscription.
    pub fn subscription_state(&self) -> SubscriptionState {
        self.state
    }

    /// Stop whatever is live. Called on teardown.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.active_handle() {
            self.stop(handle);
        }
    }

    fn is_live(&self, generation: u64) -> bool {
        self.active
            .as_ref()
            .is_some_and(|s| s.generation == generation)
    }

    fn issue_fetch(&mut self, force: bool) -> bool {
        let Some(subscription) = self.active.as_mut() else {
            return false;
        };

        let seq = subscription.next_seq;
        subscription.next_seq += 1;
        subscription.in_flight += 1;
        self.cache.set_loading(subscription.query.market, true);
        self.state = SubscriptionState::Fetching;

        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        let generation = subscription.generation;
        let query = subscription.query.clone();

        tokio::spawn(async move {
            let outcome = client.fetch(&query, force).await;
            // The receiver is gone only after teardown.
            let _ = event_tx.send(PollEvent::Completed {
                generation,
                seq,
                query,
                outcome,
            });
        });
        true
    }

    /// Apply a result of the live subscription.
    fn complete(&mut self, seq: u64, outcome: Result<QueryResult>) {
        let Some(subscription) = self.active.as_mut() else {
            return;
        };
        let generation = subscription.generation;

        let market = subscription.query.market;
        subscription.in_flight = subscription.in_flight.saturating_sub(1);
        let still_fetching = subscription.in_flight > 0;
        if !still_fetching {
            self.cache.set_loading(market, false);
        }

        // Never overwrite a newer success with anything older. An older
        // success still replaces a newer failure.
        if subscription
            .applied_success_seq
            .is_some_and(|applied| seq < applied)
        {
            debug!(generation, seq, "discarding result older than applied data");
        } else {
            subscription.last_outcome = match outcome {
                Ok(result) => {
                    info!(
                        %market,
                        items = result.items.len(),
                        source = %result.source,
                        "rankings updated"
                    );
                    subscription.applied_success_seq = Some(seq);
                    self.cache.apply_success(market, result);
                    SubscriptionState::Applied
                }
                Err(e) => {
                    if e.is_recoverable() {
                        warn!(%market, error = %e, "fetch failed");
                    } else {
                        error!(%market, error = %e, "fetch failed");
                    }
                    self.cache.apply_failure(market, e.to_string());
                    SubscriptionState::Failed
                }
            };
        }

        self.state = if still_fetching {
            SubscriptionState::Fetching
        } else {
            subscription.last_outcome
        };
    }

    fn spawn_timer(&self, generation: u64) -> JoinHandle<()> {
        let event_tx = self.event_tx.clone();
        let period = self.interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if event_tx.send(PollEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        })
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

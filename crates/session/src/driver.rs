//! Session Driver - the single task that runs a session
//!
//! Owns the session, the phase timers and the action channel. Everything
//! happens on one cooperative loop:
//!
//! ```text
//!   player actions ──┐
//!   countdown (1 s) ─┼──► select! ──► Session ──► sync timers ──► publish view
//!   leader poller ───┘        ▲
//!                             └── feed.snapshot() (owned copy per event)
//! ```
//!
//! Timers are armed on phase entry and dropped on phase exit, so a timer
//! from a finished phase can never tick into the next one.

use foresight_clock::{PhaseTimer, tick_armed};
use foresight_core::{InstrumentKey, Phase, PlayerAction, SessionView};
use foresight_ports::MarketFeed;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

use crate::error::{SessionError, SessionResult};
use crate::machine::Session;

/// Capacity of the player action channel
const ACTION_CHANNEL_CAPACITY: usize = 32;

/// Client side of a running session
#[derive(Clone)]
pub struct SessionHandle {
    actions: mpsc::Sender<PlayerAction>,
    view: watch::Receiver<SessionView>,
}

impl SessionHandle {
    /// Queue a player action
    pub async fn send(&self, action: PlayerAction) -> SessionResult<()> {
        self.actions
            .send(action)
            .await
            .map_err(|_| SessionError::DriverStopped)
    }

    pub async fn confirm_prediction(&self) -> SessionResult<()> {
        self.send(PlayerAction::ConfirmPrediction).await
    }

    pub async fn select_instrument(&self, key: impl Into<InstrumentKey>) -> SessionResult<()> {
        self.send(PlayerAction::SelectInstrument(key.into())).await
    }

    pub async fn focus(&self, key: impl Into<InstrumentKey>) -> SessionResult<()> {
        self.send(PlayerAction::Focus(key.into())).await
    }

    pub async fn restart(&self) -> SessionResult<()> {
        self.send(PlayerAction::Restart).await
    }

    /// Latest published view
    pub fn view(&self) -> SessionView {
        self.view.borrow().clone()
    }

    /// Receiver notified on every view change
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view.clone()
    }
}

/// Runs one session against a market feed
pub struct SessionDriver<F: MarketFeed + ?Sized> {
    session: Session,
    feed: Arc<F>,
    actions: mpsc::Receiver<PlayerAction>,
    view_tx: watch::Sender<SessionView>,
    countdown: Option<PhaseTimer>,
    poller: Option<PhaseTimer>,
}

impl<F: MarketFeed + ?Sized> SessionDriver<F> {
    /// Create a driver and the handle used to talk to it
    pub fn new(session: Session, feed: Arc<F>) -> (Self, SessionHandle) {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let (view_tx, view_rx) = watch::channel(session.view());

        let driver = Self {
            session,
            feed,
            actions: action_rx,
            view_tx,
            countdown: None,
            poller: None,
        };
        let handle = SessionHandle {
            actions: action_tx,
            view: view_rx,
        };
        (driver, handle)
    }

    /// Run until every [`SessionHandle`] is dropped
    pub async fn run(mut self) {
        log::info!("Session driver started");

        let snapshot = self.feed.snapshot().await;
        self.session.reset_focus(&snapshot);
        self.sync_timers();
        self.publish();

        loop {
            tokio::select! {
                biased;

                action = self.actions.recv() => {
                    let Some(action) = action else { break };
                    self.handle_action(action).await;
                }
                cycle = tick_armed(&mut self.countdown) => {
                    let snapshot = self.feed.snapshot().await;
                    self.session.tick(cycle, &snapshot);
                }
                cycle = tick_armed(&mut self.poller) => {
                    let snapshot = self.feed.snapshot().await;
                    self.session.sample_leader(cycle, &snapshot);
                }
            }

            self.sync_timers();
            self.publish();
        }

        self.countdown = None;
        self.poller = None;
        log::info!("Session driver stopped");
    }

    async fn handle_action(&mut self, action: PlayerAction) {
        log::debug!("[DRIVER] Action {:?} during {}", action, self.session.phase());

        let snapshot = self.feed.snapshot().await;
        if let Err(e) = self.session.apply(action, &snapshot) {
            log::warn!("[DRIVER] {}", e);
        }
    }

    /// Arm the timers the current phase owns, drop the others
    fn sync_timers(&mut self) {
        let phase = self.session.phase();
        let cycle = self.session.cycle();

        if phase.is_timed() {
            if self.countdown.as_ref().map(PhaseTimer::cycle) != Some(cycle) {
                log::debug!("[DRIVER] Countdown armed for cycle {}", cycle);
                self.countdown = Some(PhaseTimer::countdown(cycle));
            }
        } else if self.countdown.take().is_some() {
            log::debug!("[DRIVER] Countdown disarmed");
        }

        if phase == Phase::Evaluating {
            if self.poller.as_ref().map(PhaseTimer::cycle) != Some(cycle) {
                log::debug!("[DRIVER] Leader poller armed for cycle {}", cycle);
                self.poller = Some(PhaseTimer::poller(
                    self.session.config().leader_poll_interval(),
                    cycle,
                ));
            }
        } else if self.poller.take().is_some() {
            log::debug!("[DRIVER] Leader poller disarmed");
        }
    }

    fn publish(&self) {
        let view = self.session.view();
        self.view_tx.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use foresight_core::InstrumentState;
    use foresight_feed::ScriptedFeed;
    use rust_decimal_macros::dec;

    fn driver() -> (SessionDriver<ScriptedFeed>, SessionHandle) {
        let feed = Arc::new(ScriptedFeed::new(vec![
            InstrumentState::new("A", "Alpha", dec!(100)),
            InstrumentState::new("B", "Beta", dec!(50)),
        ]));
        SessionDriver::new(Session::new(SessionConfig::default()), feed)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_follow_phase() {
        let (mut driver, _handle) = driver();
        driver.sync_timers();
        assert!(driver.countdown.is_none());
        assert!(driver.poller.is_none());

        driver.session.confirm_prediction().unwrap();
        driver.sync_timers();
        let thinking_cycle = driver.session.cycle();
        assert_eq!(
            driver.countdown.as_ref().map(PhaseTimer::cycle),
            Some(thinking_cycle)
        );
        assert!(driver.poller.is_none());

        let snapshot = driver.feed.snapshot().await;
        driver
            .session
            .select_instrument("A".into(), &snapshot)
            .unwrap();
        driver.sync_timers();
        let eval_cycle = driver.session.cycle();
        assert_ne!(eval_cycle, thinking_cycle);
        assert_eq!(
            driver.countdown.as_ref().map(PhaseTimer::cycle),
            Some(eval_cycle)
        );
        assert_eq!(
            driver.poller.as_ref().map(PhaseTimer::cycle),
            Some(eval_cycle)
        );

        driver.session.restart(&snapshot);
        driver.sync_timers();
        assert!(driver.countdown.is_none());
        assert!(driver.poller.is_none());
    }

    #[tokio::test]
    async fn test_handle_fails_after_driver_dropped() {
        let (driver, handle) = driver();
        drop(driver);
        assert_eq!(
            handle.confirm_prediction().await,
            Err(SessionError::DriverStopped)
        );
    }

    #[tokio::test]
    async fn test_initial_view() {
        let (_driver, handle) = driver();
        let view = handle.view();
        assert_eq!(view.phase, Phase::Analysis);
        assert_eq!(view.cycle, 0);
    }
}

//! Bootstrap - wires a feed and a session driver into a running game
//!
//! Handles the startup order:
//! - Validating configuration
//! - Starting the market feed (so the first snapshot is live)
//! - Spawning the session driver task

use foresight_core::SessionView;
use foresight_feed::SimulatedFeed;
use foresight_ports::{FeedError, MarketFeed};
use foresight_session::{Session, SessionDriver, SessionHandle};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::{ConfigError, GameConfig};

/// Startup failures
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Feed failed to start: {0}")]
    Feed(#[from] FeedError),
}

/// Game setup, consumed by [`GameBootstrap::launch`]
pub struct GameBootstrap {
    config: GameConfig,
}

impl GameBootstrap {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a simulated feed built from the config and run a session on it
    pub async fn launch(self) -> Result<GameHandle, BootstrapError> {
        self.config.validate()?;
        let feed = SimulatedFeed::new(self.config.feed.clone())?;
        self.launch_with_feed(Arc::new(feed)).await
    }

    /// Run a session on an externally supplied feed
    pub async fn launch_with_feed(
        self,
        feed: Arc<dyn MarketFeed>,
    ) -> Result<GameHandle, BootstrapError> {
        self.config
            .session
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        feed.start().await?;

        let session =
            Session::with_engine(self.config.session.clone(), self.config.scoring.engine());
        let (driver, handle) = SessionDriver::new(session, feed.clone());
        let task = tokio::spawn(driver.run());

        log::info!(
            "Game started: thinking {}s, evaluation {}s, leader poll {}ms, {} scoring",
            self.config.session.thinking_secs,
            self.config.session.evaluation_secs,
            self.config.session.leader_poll_ms,
            self.config.scoring.engine().rule_name()
        );

        Ok(GameHandle { handle, feed, task })
    }
}

impl Default for GameBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

/// A running game
pub struct GameHandle {
    handle: SessionHandle,
    feed: Arc<dyn MarketFeed>,
    task: JoinHandle<()>,
}

impl GameHandle {
    /// Handle for sending player actions
    pub fn session(&self) -> &SessionHandle {
        &self.handle
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.handle.subscribe()
    }

    pub fn view(&self) -> SessionView {
        self.handle.view()
    }

    pub fn feed(&self) -> &Arc<dyn MarketFeed> {
        &self.feed
    }

    /// Stop the driver and the feed
    ///
    /// Cloned [`SessionHandle`]s become inert: their sends fail with
    /// `DriverStopped`.
    pub async fn shutdown(self) {
        self.task.abort();
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                log::error!("Session driver failed: {}", e);
            }
        }
        self.feed.stop().await;
        log::info!("Game stopped");
    }
}

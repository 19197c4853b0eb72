//! Session state machine
//!
//! Synchronous and single-owner: every mutation goes through one of the
//! methods below, each of which receives the feed snapshot it should act
//! on. Timer ticks carry the cycle they were armed for; a tick from an
//! earlier cycle is ignored.

use foresight_clock::Countdown;
use foresight_core::{
    BaselineSnapshot, FeedSnapshot, InstrumentKey, Phase, PlayerAction, ScoreRecord, SessionView,
};
use foresight_scoring::{BaselineSlot, ScoringEngine, select_leader};
use log::{debug, info};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// A phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    /// Cycle of the newly entered phase
    pub cycle: u64,
}

/// Authoritative state of one game session
pub struct Session {
    config: SessionConfig,
    phase: Phase,
    countdown: Countdown,
    selection: Option<InstrumentKey>,
    focus: Option<InstrumentKey>,
    leader: Option<InstrumentKey>,
    baseline: BaselineSlot,
    scores: Vec<ScoreRecord>,
    /// Bumped on every phase entry
    cycle: u64,
    engine: ScoringEngine,
}

impl Session {
    /// Create a session scored by percentage change
    pub fn new(config: SessionConfig) -> Self {
        Self::with_engine(config, ScoringEngine::default())
    }

    /// Create a session with a custom scoring engine
    pub fn with_engine(config: SessionConfig, engine: ScoringEngine) -> Self {
        Self {
            config,
            phase: Phase::Analysis,
            countdown: Countdown::default(),
            selection: None,
            focus: None,
            leader: None,
            baseline: BaselineSlot::new(),
            scores: Vec::new(),
            cycle: 0,
            engine,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining seconds of the active timed phase
    pub fn countdown(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn selection(&self) -> Option<&InstrumentKey> {
        self.selection.as_ref()
    }

    pub fn focus(&self) -> Option<&InstrumentKey> {
        self.focus.as_ref()
    }

    pub fn leader(&self) -> Option<&InstrumentKey> {
        self.leader.as_ref()
    }

    /// Baseline held for the running evaluation
    pub fn baseline(&self) -> Option<&BaselineSnapshot> {
        self.baseline.get()
    }

    pub fn scores(&self) -> &[ScoreRecord] {
        &self.scores
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Presentation projection
    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            countdown: self.countdown.remaining(),
            selection: self.selection.clone(),
            focus: self.focus.clone(),
            leader: self.leader.clone(),
            scores: self.scores.clone(),
            cycle: self.cycle,
        }
    }

    /// Dispatch a player action
    pub fn apply(
        &mut self,
        action: PlayerAction,
        snapshot: &FeedSnapshot,
    ) -> SessionResult<Option<Transition>> {
        match action {
            PlayerAction::ConfirmPrediction => self.confirm_prediction().map(Some),
            PlayerAction::SelectInstrument(key) => self.select_instrument(key, snapshot).map(Some),
            PlayerAction::Focus(key) => self.set_focus(key, snapshot).map(|_| None),
            PlayerAction::Restart => Ok(Some(self.restart(snapshot))),
        }
    }

    /// analysis → thinking
    pub fn confirm_prediction(&mut self) -> SessionResult<Transition> {
        if self.phase != Phase::Analysis {
            return Err(self.rejected(&PlayerAction::ConfirmPrediction));
        }

        self.selection = None;
        self.baseline.clear();
        self.countdown.reset(self.config.thinking_secs);
        Ok(self.enter(Phase::Thinking))
    }

    /// Commit to `key` while thinking; goes straight to evaluating with
    /// the baseline frozen from `snapshot`
    pub fn select_instrument(
        &mut self,
        key: InstrumentKey,
        snapshot: &FeedSnapshot,
    ) -> SessionResult<Transition> {
        if self.phase != Phase::Thinking {
            return Err(self.rejected(&PlayerAction::SelectInstrument(key)));
        }
        if !snapshot.contains(&key) {
            return Err(SessionError::UnknownInstrument(key));
        }

        info!("[SESSION] Player selected {}", key);
        self.focus = Some(key.clone());
        self.selection = Some(key);
        Ok(self.begin_evaluation(snapshot))
    }

    /// Highlight an instrument; accepted in every phase
    pub fn set_focus(&mut self, key: InstrumentKey, snapshot: &FeedSnapshot) -> SessionResult<()> {
        if !snapshot.contains(&key) {
            return Err(SessionError::UnknownInstrument(key));
        }
        self.focus = Some(key);
        Ok(())
    }

    /// Focus the first listed instrument (or nothing for an empty feed)
    pub fn reset_focus(&mut self, snapshot: &FeedSnapshot) {
        self.focus = snapshot.first_key().cloned();
    }

    /// Any phase → analysis, dropping everything from the current cycle
    pub fn restart(&mut self, snapshot: &FeedSnapshot) -> Transition {
        self.selection = None;
        self.baseline.clear();
        self.scores.clear();
        self.leader = None;
        self.countdown.clear();
        self.reset_focus(snapshot);
        self.enter(Phase::Analysis)
    }

    /// One elapsed second of the countdown armed for `cycle`
    ///
    /// Returns the transition fired by this tick, if any.
    pub fn tick(&mut self, cycle: u64, snapshot: &FeedSnapshot) -> Option<Transition> {
        if cycle != self.cycle {
            debug!("[SESSION] Ignoring stale tick (cycle {} != {})", cycle, self.cycle);
            return None;
        }
        if !self.phase.is_timed() {
            return None;
        }

        if !self.countdown.tick() {
            return None;
        }

        match self.phase {
            Phase::Thinking => Some(self.expire_thinking(snapshot)),
            Phase::Evaluating => Some(self.expire_evaluation(snapshot)),
            Phase::Analysis | Phase::Result => None,
        }
    }

    /// Live leader sample for `cycle`; only honoured while evaluating
    pub fn sample_leader(&mut self, cycle: u64, snapshot: &FeedSnapshot) -> Option<&InstrumentKey> {
        if cycle != self.cycle || self.phase != Phase::Evaluating {
            return None;
        }

        let best = select_leader(snapshot)?;
        if self.leader.as_ref() != Some(&best.key) {
            debug!(
                "[SESSION] Leader now {} (risk efficiency {})",
                best.key, best.metrics.risk_efficiency
            );
        }
        self.leader = Some(best.key.clone());
        self.focus = Some(best.key.clone());
        self.leader.as_ref()
    }

    fn expire_thinking(&mut self, snapshot: &FeedSnapshot) -> Transition {
        if self.selection.is_none() {
            info!("[SESSION] Selection window closed without a pick");
            return self.enter(Phase::Analysis);
        }
        self.begin_evaluation(snapshot)
    }

    fn begin_evaluation(&mut self, snapshot: &FeedSnapshot) -> Transition {
        self.baseline.capture(snapshot);
        self.countdown.reset(self.config.evaluation_secs);
        self.enter(Phase::Evaluating)
    }

    fn expire_evaluation(&mut self, snapshot: &FeedSnapshot) -> Transition {
        let baseline = self.baseline.take();
        self.scores = self.engine.score(baseline.as_ref(), snapshot);
        self.leader = None;

        if let Some(selection) = &self.selection {
            match self.scores.iter().find(|s| &s.key == selection) {
                Some(record) => info!(
                    "[SESSION] {} finished #{} of {} ({}%)",
                    selection,
                    record.rank,
                    self.scores.len(),
                    record.change_pct
                ),
                None => info!("[SESSION] {} was not ranked", selection),
            }
        }

        self.enter(Phase::Result)
    }

    fn enter(&mut self, to: Phase) -> Transition {
        let from = self.phase;
        self.phase = to;
        self.cycle += 1;
        info!("[SESSION] {} -> {} (cycle {})", from, to, self.cycle);
        Transition {
            from,
            to,
            cycle: self.cycle,
        }
    }

    fn rejected(&self, action: &PlayerAction) -> SessionError {
        SessionError::ActionRejected {
            action: action.name(),
            phase: self.phase,
        }
    }
}

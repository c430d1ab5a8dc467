//! Layout engine: the context object shared by arrangement and interaction.
//!
//! The engine owns the token set, configuration, random source, viewport,
//! drag state and the derived screen transforms. All operations run
//! synchronously on the caller's event loop. Arrangement triggers that arrive
//! while a drag is active are deferred until the last drag ends, so a full
//! pass never overwrites a record that a pointer currently owns.

use crate::arrangement::{layout_initial, layout_with_selection, ArrangementReport};
use crate::config::LayoutConfig;
use crate::interaction::{
    reproject_all, DragController, DragState, DragUpdate, PointerEvent, ResizeDebounce,
};
use crate::types::*;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use web_time::{Duration, Instant};

/// Result of an arrangement trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrangeOutcome {
    /// The pass ran immediately
    Applied(ArrangementReport),
    /// A drag is active; the pass will run when it ends
    Deferred,
}

/// Arrangement trigger waiting for the active drags to finish.
#[derive(Debug, Clone)]
enum PendingArrangement {
    Rebuild(Vec<(Category, Vec<String>)>),
    Arrange(Option<Selection>),
}

/// Engine responsible for laying out and dragging tokens.
pub struct LayoutEngine {
    config: LayoutConfig,
    tokens: TokenSet,
    rng: StdRng,
    viewport: Viewport,
    drags: DragController,
    transforms: HashMap<TokenId, ScreenTransform>,
    pending: Option<PendingArrangement>,
    resize: ResizeDebounce,
    last_report: Option<ArrangementReport>,
}

impl LayoutEngine {
    /// Creates an engine seeded from the operating system's entropy source.
    pub fn new(config: LayoutConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_os_rng())
    }

    /// Creates an engine with a fixed seed, for reproducible layouts.
    pub fn with_seed(config: LayoutConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: LayoutConfig, viewport: Viewport, rng: StdRng) -> Self {
        let resize = ResizeDebounce::new(config.resize_debounce());
        Self {
            config,
            tokens: TokenSet::new(),
            rng,
            viewport,
            drags: DragController::new(),
            transforms: HashMap::new(),
            pending: None,
            resize,
            last_report: None,
        }
    }

    /// Replaces the token set and scatters it.
    ///
    /// # Arguments
    ///
    /// * `words` - Words per category; entries are trimmed and blank ones skipped
    pub fn rebuild<I, W, S>(&mut self, words: I) -> ArrangeOutcome
    where
        I: IntoIterator<Item = (Category, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<(Category, Vec<String>)> = words
            .into_iter()
            .map(|(c, list)| (c, list.into_iter().map(|w| w.as_ref().to_string()).collect()))
            .collect();

        if self.drags.is_dragging() {
            debug!("Rebuild deferred until the active drag ends");
            self.pending = Some(PendingArrangement::Rebuild(words));
            return ArrangeOutcome::Deferred;
        }
        ArrangeOutcome::Applied(self.apply_rebuild(words))
    }

    /// Rearranges all tokens around a selection, or scatters them when it is `None`.
    pub fn arrange(&mut self, selection: Option<Selection>) -> ArrangeOutcome {
        if self.drags.is_dragging() {
            debug!("Arrangement deferred until the active drag ends");
            self.pending = Some(PendingArrangement::Arrange(selection));
            return ArrangeOutcome::Deferred;
        }
        ArrangeOutcome::Applied(self.apply_arrange(selection.as_ref()))
    }

    fn apply_rebuild(&mut self, words: Vec<(Category, Vec<String>)>) -> ArrangementReport {
        self.tokens = TokenSet::from_words(words);
        let report = layout_initial(&mut self.tokens, &self.config, &mut self.rng);
        self.finish_pass(report)
    }

    fn apply_arrange(&mut self, selection: Option<&Selection>) -> ArrangementReport {
        let report =
            layout_with_selection(&mut self.tokens, selection, &self.config, &mut self.rng);
        self.finish_pass(report)
    }

    fn finish_pass(&mut self, report: ArrangementReport) -> ArrangementReport {
        self.reproject();
        self.last_report = Some(report.clone());
        report
    }

    /// Feeds one pointer event to the drag state machine.
    ///
    /// # Returns
    ///
    /// `true` if the event started, moved or ended a drag.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let update = self
            .drags
            .handle(event, &mut self.tokens, &self.config, self.viewport);
        match update {
            DragUpdate::Ignored => false,
            DragUpdate::Started { token, transform } | DragUpdate::Moved { token, transform } => {
                self.transforms.insert(token, transform);
                true
            }
            DragUpdate::Ended { token } => {
                debug!("Drag of {token} ended");
                if !self.drags.is_dragging() {
                    self.run_pending();
                }
                true
            }
        }
    }

    fn run_pending(&mut self) {
        match self.pending.take() {
            Some(PendingArrangement::Rebuild(words)) => {
                self.apply_rebuild(words);
            }
            Some(PendingArrangement::Arrange(selection)) => {
                self.apply_arrange(selection.as_ref());
            }
            None => {}
        }
    }

    /// Records a viewport resize.
    ///
    /// Drags use the new size right away; the re-projection of every
    /// transform waits for the debounce quiet period (see [`Self::poll_resize`]).
    pub fn resize(&mut self, viewport: Viewport, now: Instant) {
        self.viewport = viewport;
        self.resize.note(viewport, now);
    }

    /// Re-projects all transforms if a resize burst has settled.
    ///
    /// # Returns
    ///
    /// `true` if transforms were recomputed.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        match self.resize.poll(now) {
            Some(viewport) => {
                self.viewport = viewport;
                self.reproject();
                true
            }
            None => false,
        }
    }

    /// Applies a viewport size immediately, without the debounce.
    ///
    /// Used for the first measurement of a surface, when there is no earlier
    /// projection worth keeping.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reproject();
    }

    /// Drag state of one token.
    pub fn drag_state(&self, token: TokenId) -> DragState {
        self.drags.state_of(token)
    }

    /// Whether a resize is waiting for its quiet period.
    pub fn has_pending_resize(&self) -> bool {
        self.resize.is_pending()
    }

    /// Time left before a pending resize is applied.
    pub fn resize_remaining(&self, now: Instant) -> Option<Duration> {
        self.resize.remaining(now)
    }

    /// Recomputes every transform from the stored percent positions.
    pub fn reproject(&mut self) {
        self.transforms = reproject_all(&self.tokens, &self.config, self.viewport)
            .into_iter()
            .collect();
    }

    /// Current token set.
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Looks up a token.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// Last projected transform of a token.
    pub fn transform(&self, id: TokenId) -> Option<ScreenTransform> {
        self.transforms.get(&id).copied()
    }

    /// Viewport used for drags and projections.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Whether any token is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.drags.is_dragging()
    }

    /// Whether an arrangement is waiting for a drag to end.
    pub fn has_pending_arrangement(&self) -> bool {
        self.pending.is_some()
    }

    /// Report of the most recent arrangement pass.
    pub fn last_report(&self) -> Option<&ArrangementReport> {
        self.last_report.as_ref()
    }
}

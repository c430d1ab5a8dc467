//! Pointer dragging and resize handling.
//!
//! A token is either idle or dragged by exactly one pointer. While dragged,
//! its stored percent position follows the pointer through the same
//! percent ↔ pixel relation used for rendering; the rotation captured at
//! pointer-down is kept for the whole drag. Percent positions are the
//! durable state, pixel transforms are always re-derived from them.

use crate::config::LayoutConfig;
use crate::placement::{from_viewport_point, project, to_viewport_anchor};
use crate::types::*;
use log::trace;
use web_time::{Duration, Instant};

/// Identifier of a pointer (mouse, pen or touch contact).
pub type PointerId = u64;

/// Platform-agnostic pointer input. Coordinates are pixels from the
/// viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on a token
    Down {
        /// Pointer that was pressed
        pointer: PointerId,
        /// Token under the pointer
        token: TokenId,
        /// Horizontal pointer position
        x: f32,
        /// Vertical pointer position
        y: f32,
    },
    /// Pointer moved
    Move {
        /// Pointer that moved
        pointer: PointerId,
        /// Horizontal pointer position
        x: f32,
        /// Vertical pointer position
        y: f32,
    },
    /// Pointer released
    Up {
        /// Pointer that was released
        pointer: PointerId,
    },
    /// Platform cancelled the pointer (capture lost, touch interrupted)
    Cancel {
        /// Pointer that was cancelled
        pointer: PointerId,
    },
}

/// An active drag of one token by one pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Token being dragged
    pub token: TokenId,
    /// Pointer holding the capture
    pub pointer: PointerId,
    /// Pointer minus token anchor at pointer-down, in pixels
    pub offset_x: f32,
    /// Pointer minus token anchor at pointer-down, in pixels
    pub offset_y: f32,
    /// Rotation held for the whole drag
    pub rotation_degrees: f32,
}

/// Drag state of a single token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// Not being dragged
    Idle,
    /// Being dragged by the session's pointer
    Dragging(DragSession),
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// The event did not concern any drag
    Ignored,
    /// A drag started; the transform re-applies the stored position
    Started {
        /// Token now being dragged
        token: TokenId,
        /// Projection of the token's stored position
        transform: ScreenTransform,
    },
    /// The dragged token moved
    Moved {
        /// Token that moved
        token: TokenId,
        /// Projection of the newly written position
        transform: ScreenTransform,
    },
    /// A drag ended (released or cancelled)
    Ended {
        /// Token that is idle again
        token: TokenId,
    },
}

/// Starts dragging a token.
///
/// The stored record is the source of truth: it is sanitized, written back
/// and re-projected so the visible state matches it exactly. The returned
/// session remembers the pixel offset between the pointer and the token's
/// anchor so the token does not jump under the pointer.
///
/// # Arguments
///
/// * `config` - Layout configuration (for scale)
/// * `token` - Token being grabbed
/// * `pointer` - Pointer holding the capture
/// * `pointer_x`, `pointer_y` - Pointer position from the viewport's top-left corner
/// * `viewport` - Current viewport size
pub fn begin_drag(
    config: &LayoutConfig,
    token: &mut Token,
    pointer: PointerId,
    pointer_x: f32,
    pointer_y: f32,
    viewport: Viewport,
) -> (DragSession, ScreenTransform) {
    token.position = token.position.sanitized();
    let record = token.position;
    let transform = project(config, &record, viewport);

    let (anchor_x, anchor_y) = to_viewport_anchor(
        record.left_percent,
        record.top_percent,
        viewport.width,
        viewport.height,
    );
    let session = DragSession {
        token: token.id,
        pointer,
        offset_x: pointer_x - anchor_x,
        offset_y: pointer_y - anchor_y,
        rotation_degrees: record.rotation_degrees,
    };
    (session, transform)
}

/// Moves the dragged token to follow the pointer.
///
/// Writes the clamped percent position with the rotation captured at
/// pointer-down and returns the fresh projection.
pub fn update_drag(
    config: &LayoutConfig,
    session: &DragSession,
    token: &mut Token,
    pointer_x: f32,
    pointer_y: f32,
    viewport: Viewport,
) -> ScreenTransform {
    let (left, top) = from_viewport_point(
        pointer_x - session.offset_x,
        pointer_y - session.offset_y,
        viewport.width,
        viewport.height,
    );
    token.position = PositionRecord::new(left, top, session.rotation_degrees);
    trace!("Dragged \"{}\" to ({left:.2}, {top:.2})", token.text);
    project(config, &token.position, viewport)
}

/// Releases the pointer capture. The stored position is left untouched.
pub fn end_drag(session: DragSession) -> TokenId {
    session.token
}

/// Per-pointer drag state machine over a token set.
///
/// Each pointer drags at most one token and each token is dragged by at
/// most one pointer.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    sessions: Vec<DragSession>,
}

impl DragController {
    /// Creates a controller with no active drags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any drag is in progress.
    pub fn is_dragging(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Drag state of a token.
    pub fn state_of(&self, token: TokenId) -> DragState {
        self.sessions
            .iter()
            .find(|s| s.token == token)
            .map_or(DragState::Idle, |s| DragState::Dragging(*s))
    }

    /// Applies one pointer event.
    ///
    /// # Returns
    ///
    /// What changed; `DragUpdate::Ignored` for presses on unknown or
    /// already-dragged tokens, a second press of a captured pointer, and
    /// moves or releases of pointers without a session.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        tokens: &mut TokenSet,
        config: &LayoutConfig,
        viewport: Viewport,
    ) -> DragUpdate {
        match event {
            PointerEvent::Down {
                pointer,
                token,
                x,
                y,
            } => {
                if self.sessions.iter().any(|s| s.pointer == pointer || s.token == token) {
                    return DragUpdate::Ignored;
                }
                let Some(target) = tokens.get_mut(token) else {
                    return DragUpdate::Ignored;
                };
                let (session, transform) = begin_drag(config, target, pointer, x, y, viewport);
                self.sessions.push(session);
                DragUpdate::Started { token, transform }
            }
            PointerEvent::Move { pointer, x, y } => {
                let Some(session) = self.sessions.iter().find(|s| s.pointer == pointer) else {
                    return DragUpdate::Ignored;
                };
                let Some(target) = tokens.get_mut(session.token) else {
                    return DragUpdate::Ignored;
                };
                let transform = update_drag(config, session, target, x, y, viewport);
                DragUpdate::Moved {
                    token: session.token,
                    transform,
                }
            }
            PointerEvent::Up { pointer } | PointerEvent::Cancel { pointer } => {
                match self.sessions.iter().position(|s| s.pointer == pointer) {
                    Some(index) => DragUpdate::Ended {
                        token: end_drag(self.sessions.remove(index)),
                    },
                    None => DragUpdate::Ignored,
                }
            }
        }
    }
}

/// Collapses bursts of resize notifications into one re-projection.
#[derive(Debug, Clone)]
pub struct ResizeDebounce {
    quiet: Duration,
    pending: Option<(Viewport, Instant)>,
}

impl ResizeDebounce {
    /// Creates a debounce with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a resize; restarts the quiet period.
    pub fn note(&mut self, viewport: Viewport, now: Instant) {
        self.pending = Some((viewport, now));
    }

    /// Whether a resize is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending resize fires, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, at)| self.quiet.saturating_sub(now.saturating_duration_since(at)))
    }

    /// Returns the latest viewport once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
        match self.pending {
            Some((viewport, at)) if now.saturating_duration_since(at) >= self.quiet => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }
}

/// Re-derives every token's transform from its stored percent position.
pub fn reproject_all(
    tokens: &TokenSet,
    config: &LayoutConfig,
    viewport: Viewport,
) -> Vec<(TokenId, ScreenTransform)> {
    tokens
        .iter()
        .map(|t| (t.id, project(config, &t.position, viewport)))
        .collect()
}

//! Drag gesture state machine for player tokens.
//!
//! `DragTracker` follows one pointer from pointer-down on a token to
//! pointer-up. On pointer-down it snapshots the container size and computes the
//! token's [`DragBounds`]; every move yields a clamped pixel translation for
//! live feedback; release settles the final position in percent so the host
//! can persist it. The host owns the DOM and the network, the tracker owns the
//! arithmetic.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::{DRAG_SLOP_PX, TOKEN_HALF_PX};
use crate::geometry::{DragBounds, Percent, Point, Size, drag_bounds, settle};

/// Identifier of the token being dragged (the player row id).
pub type TokenId = i64;

/// Active gesture, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No pointer is down on a token.
    #[default]
    Idle,
    /// A token is following the pointer.
    Dragging {
        /// Token under the pointer at pointer-down.
        id: TokenId,
        /// Client-space pointer position at pointer-down.
        origin: Point,
        /// Stored position of the token when the gesture began.
        start: Percent,
        /// Container size measured at pointer-down.
        container: Size,
        /// Movement limits derived from `container` and `start`.
        bounds: DragBounds,
        /// Latest clamped translation from `start`, in pixels.
        offset: Point,
    },
}

/// Result of feeding a pointer event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Nothing for the host to do.
    None,
    /// Live translation of the dragged token relative to its stored position.
    Moved { id: TokenId, offset: Point },
    /// The token was released somewhere new; persist `position`.
    Dropped { id: TokenId, position: Percent },
    /// The gesture ended without a meaningful move (click or cancel).
    Released { id: TokenId },
}

/// Tracks a single token drag.
#[derive(Debug, Clone)]
pub struct DragTracker {
    state: DragState,
    token_half: f64,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(TOKEN_HALF_PX)
    }
}

impl DragTracker {
    /// Create a tracker for tokens with the given half-size in pixels.
    #[must_use]
    pub fn new(token_half: f64) -> Self {
        Self { state: DragState::Idle, token_half }
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Token currently being dragged, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<TokenId> {
        match self.state {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    /// Start dragging `id` from its stored position `start`.
    ///
    /// A pointer-down while another drag is active replaces that drag.
    pub fn begin(&mut self, id: TokenId, pointer: Point, start: Percent, container: Size) -> DragBounds {
        let bounds = drag_bounds(container, start, self.token_half);
        self.state = DragState::Dragging { id, origin: pointer, start, container, bounds, offset: Point::default() };
        bounds
    }

    /// Follow the pointer. Returns the clamped translation for rendering.
    pub fn update(&mut self, pointer: Point) -> DragEvent {
        let DragState::Dragging { id, origin, bounds, offset, .. } = &mut self.state else {
            return DragEvent::None;
        };
        *offset = bounds.clamp_delta(pointer.delta_from(*origin));
        DragEvent::Moved { id: *id, offset: *offset }
    }

    /// Release the pointer and settle the token.
    pub fn finish(&mut self, pointer: Point) -> DragEvent {
        let DragState::Dragging { id, origin, start, container, .. } = std::mem::take(&mut self.state) else {
            return DragEvent::None;
        };
        let delta = pointer.delta_from(origin);
        if delta.length() < DRAG_SLOP_PX {
            return DragEvent::Released { id };
        }
        DragEvent::Dropped { id, position: settle(container, start, delta, self.token_half) }
    }

    /// Abandon the gesture without persisting anything.
    pub fn cancel(&mut self) -> DragEvent {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, .. } => DragEvent::Released { id },
            DragState::Idle => DragEvent::None,
        }
    }
}

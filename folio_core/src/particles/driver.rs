//! Frame-synchronized driver loop with owned cancellation.
//!
//! The host owns the repaint signal and the event sources. A mounted
//! [`AnimationLoop`] asks the host for one frame at a time and re-requests
//! only while its cancellation token is live, so tearing it down stops the
//! loop after at most the frame already in flight.
//!
//! Every listener is attached together with the loop's token. Cancelling the
//! token, whether through [`AnimationLoop::teardown`], a clone of the token,
//! or dropping the loop, retires all of its listeners on the host side.

use std::time::Instant;

pub use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::engine::ParticleEngine;
use super::render::Surface;

/// Host event sources an engine may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Resize,
    PointerMove,
    TouchMove,
}

/// Handle returned by [`Host::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Scheduling and event primitives supplied by the embedding environment.
pub trait Host {
    /// Registers a listener that stays live until it is detached or `owner`
    /// is cancelled, whichever comes first.
    fn attach(&mut self, kind: ListenerKind, owner: CancellationToken) -> ListenerId;

    fn detach(&mut self, id: ListenerId);

    /// Asks for exactly one more frame callback at the next repaint.
    fn request_frame(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Work ran and the next frame was requested.
    Continued,
    /// Work ran but no surface was available to draw on.
    Skipped,
    /// The loop was torn down; nothing ran and nothing was rescheduled.
    Stopped,
}

/// A mounted engine: its listeners, its frame requests and its teardown.
#[derive(Debug)]
pub struct AnimationLoop {
    engine: ParticleEngine,
    token: CancellationToken,
    listeners: Vec<(ListenerKind, ListenerId)>,
}

impl AnimationLoop {
    /// Attaches the listeners the engine's configuration needs and requests
    /// the first frame.
    pub fn mount<H: Host + ?Sized>(engine: ParticleEngine, host: &mut H) -> Self {
        let token = CancellationToken::new();
        let listeners = engine
            .config()
            .listeners()
            .into_iter()
            .map(|kind| (kind, host.attach(kind, token.clone())))
            .collect::<Vec<_>>();
        host.request_frame();
        debug!(
            variant = engine.config().variant.name(),
            listeners = listeners.len(),
            "animation loop mounted"
        );

        Self {
            engine,
            token,
            listeners,
        }
    }

    pub fn engine(&self) -> &ParticleEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ParticleEngine {
        &mut self.engine
    }

    /// Token shared with anything that must observe teardown. Cancelling it
    /// retires this loop's listeners on the host.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// True while the loop holds a live listener of `kind`.
    pub fn listens_to(&self, kind: ListenerKind) -> bool {
        self.is_running() && self.listeners.iter().any(|(k, _)| *k == kind)
    }

    /// Frame callback for hosts that draw synchronously: update, render,
    /// connection pass, reschedule.
    pub fn on_frame<H, S>(
        &mut self,
        host: &mut H,
        now: Instant,
        surface: Option<&mut S>,
    ) -> FrameOutcome
    where
        H: Host + ?Sized,
        S: Surface + ?Sized,
    {
        if self.token.is_cancelled() {
            return FrameOutcome::Stopped;
        }
        let drew = self.engine.frame(now, surface);
        self.reschedule(host, drew)
    }

    /// Frame callback for retained-mode hosts that render in a later view
    /// pass: update and reschedule only.
    pub fn advance<H: Host + ?Sized>(&mut self, host: &mut H, now: Instant) -> FrameOutcome {
        if self.token.is_cancelled() {
            return FrameOutcome::Stopped;
        }
        self.engine.step(now);
        self.reschedule(host, true)
    }

    fn reschedule<H: Host + ?Sized>(&mut self, host: &mut H, drew: bool) -> FrameOutcome {
        // Teardown may have happened while the frame ran.
        if self.token.is_cancelled() {
            return FrameOutcome::Stopped;
        }
        host.request_frame();
        if drew {
            FrameOutcome::Continued
        } else {
            FrameOutcome::Skipped
        }
    }

    /// Stops rescheduling and detaches every listener. Safe to call twice.
    pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.token.cancel();
        if self.listeners.is_empty() {
            return;
        }
        for (_, id) in self.listeners.drain(..) {
            host.detach(id);
        }
        debug!(
            variant = self.engine.config().variant.name(),
            frames = self.engine.frames(),
            "animation loop torn down"
        );
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        // Also retires any listeners teardown did not detach.
        self.token.cancel();
    }
}

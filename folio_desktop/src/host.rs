//! The window-side [`Host`]: which listeners are attached and whether a frame
//! is pending. The application turns this state into iced subscriptions.

use std::collections::HashMap;

use folio_core::particles::{CancellationToken, Host, ListenerId, ListenerKind};

#[derive(Debug, Default)]
pub struct FrameHost {
    next_id: u64,
    listeners: HashMap<ListenerId, (ListenerKind, CancellationToken)>,
    frame_requested: bool,
}

impl FrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one live loop holds a listener of `kind`.
    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.listeners
            .values()
            .any(|(k, owner)| *k == kind && !owner.is_cancelled())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .values()
            .filter(|(_, owner)| !owner.is_cancelled())
            .count()
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Consumes the pending request before loops run; each live loop asks
    /// again for the next frame. Listeners of cancelled loops are dropped.
    pub fn begin_frame(&mut self) -> bool {
        self.listeners.retain(|_, (_, owner)| !owner.is_cancelled());
        std::mem::take(&mut self.frame_requested)
    }
}

impl Host for FrameHost {
    fn attach(&mut self, kind: ListenerKind, owner: CancellationToken) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id, (kind, owner));
        id
    }

    fn detach(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }
}

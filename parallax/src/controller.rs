//! Parallax controller: pointer/resize notifications in, at most one set of
//! styling writes per frame out.

use crate::host::{FrameId, HostEvent, Observer, ParallaxHost};
use crate::offsets::ParallaxOffsets;

const OBSERVERS: [Observer; 2] = [Observer::PointerMove, Observer::Resize];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reduced motion: the centered values were written once, nothing follows.
    Static,
    /// Observers registered, updates coalesced per frame.
    Tracking,
    /// Torn down; every event is ignored.
    Detached,
}

pub struct ParallaxController<H: ParallaxHost> {
    host: H,
    phase: Phase,
    last_pointer: (f64, f64),
    pending_frame: Option<FrameId>,
    applied: Option<ParallaxOffsets>,
    recomputations: u64,
}

impl<H: ParallaxHost> ParallaxController<H> {
    /// Write the centered values and, unless reduced motion is preferred,
    /// start observing the pointer and viewport.
    pub fn activate(host: H) -> Self {
        let viewport = host.viewport();
        let mut controller = Self {
            host,
            phase: Phase::Tracking,
            last_pointer: viewport.center(),
            pending_frame: None,
            applied: None,
            recomputations: 0,
        };

        let (x, y) = controller.last_pointer;
        controller.apply(x, y);

        if controller.host.prefers_reduced_motion() {
            tracing::debug!("reduced motion preferred; parallax stays centered");
            controller.phase = Phase::Static;
            return controller;
        }

        for observer in OBSERVERS {
            controller.host.observe(observer);
        }
        controller
    }

    pub fn handle(&mut self, event: HostEvent) {
        if self.phase != Phase::Tracking {
            return;
        }
        match event {
            HostEvent::PointerMove { x, y } => {
                self.last_pointer = (x, y);
                self.schedule();
            }
            HostEvent::Resize => self.schedule(),
            HostEvent::Frame(frame) => self.on_frame(frame),
        }
    }

    /// Remove observers and cancel the pending frame. Safe to call twice.
    pub fn deactivate(&mut self) {
        if self.phase == Phase::Detached {
            return;
        }
        if let Some(frame) = self.pending_frame.take() {
            self.host.cancel_frame(frame);
        }
        if self.phase == Phase::Tracking {
            for observer in OBSERVERS {
                self.host.unobserve(observer);
            }
        }
        self.phase = Phase::Detached;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Values most recently written to the host
    pub fn offsets(&self) -> Option<ParallaxOffsets> {
        self.applied
    }

    /// How many times values were computed and written, activation included
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn schedule(&mut self) {
        if self.pending_frame.is_none() {
            self.pending_frame = Some(self.host.request_frame());
        }
    }

    fn on_frame(&mut self, frame: FrameId) {
        if self.pending_frame != Some(frame) {
            return;
        }
        self.pending_frame = None;
        let (x, y) = self.last_pointer;
        self.apply(x, y);
    }

    fn apply(&mut self, x: f64, y: f64) {
        let offsets = ParallaxOffsets::compute(x, y, self.host.viewport());
        for (name, value) in offsets.style_vars() {
            self.host.set_style_var(name, &value);
        }
        self.applied = Some(offsets);
        self.recomputations += 1;
    }
}

impl<H: ParallaxHost> Drop for ParallaxController<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

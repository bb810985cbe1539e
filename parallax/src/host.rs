//! The seam between the controller and whatever hosts it (a browser
//! binding, a terminal UI, a test double).

use crate::offsets::Viewport;

/// Notifications the controller can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observer {
    PointerMove,
    Resize,
}

/// Handle for one scheduled display-refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Events the host forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerMove { x: f64, y: f64 },
    Resize,
    /// A frame requested through [`ParallaxHost::request_frame`] is running.
    Frame(FrameId),
}

pub trait ParallaxHost {
    fn viewport(&self) -> Viewport;

    /// Whether the user asked for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Start delivering `observer` notifications.
    fn observe(&mut self, observer: Observer);

    /// Stop delivering `observer` notifications.
    fn unobserve(&mut self, observer: Observer);

    /// Schedule one callback before the next display refresh.
    fn request_frame(&mut self) -> FrameId;

    fn cancel_frame(&mut self, frame: FrameId);

    fn set_style_var(&mut self, name: &str, value: &str);
}

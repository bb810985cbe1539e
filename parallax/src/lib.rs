//! Pointer parallax for the folio portfolio.
//!
//! The controller maps the pointer position inside the viewport to four
//! styling variables (`--mx`, `--my`, `--dx`, `--dy`). The host forwards
//! pointer, resize and frame events; however many arrive between refreshes,
//! at most one recomputation runs per frame and it always uses the latest
//! pointer position.

pub mod controller;
pub mod host;
pub mod offsets;

pub use controller::{ParallaxController, Phase};
pub use host::{FrameId, HostEvent, Observer, ParallaxHost};
pub use offsets::{PARALLAX_MAGNITUDE, ParallaxOffsets, Viewport};

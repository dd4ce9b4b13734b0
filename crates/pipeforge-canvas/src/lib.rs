//! Pipeforge Canvas
//!
//! Geometry for the graph view. The canvas owns no graph state; it lays out
//! node boxes and edge lines from the shell's pipeline and keeps the only
//! piece of state that is legitimately its own: the transient viewport
//! (pan + zoom), which the shell resets on domain switch.

mod scene;
mod viewport;

pub use scene::{EdgeLine, NodeBox, Scene, NODE_HEIGHT, NODE_WIDTH};
pub use viewport::{ViewPoint, Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

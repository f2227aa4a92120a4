//! Interactive docking drag-and-drop engine
//!
//! This crate resolves where a dragged panel, pane content or floating
//! window would land over a host dock layout: it places directional drop
//! indicators, hit-tests them in a fixed priority order on every pointer
//! move, previews the prospective layout, and commits the chosen change
//! exactly once on release. The host supplies the layout tree, the drag
//! source capabilities and a preview surface; no rendering toolkit is
//! assumed.

pub mod geometry;
pub mod indicator;
pub mod outline;
pub mod session;
pub mod settings;
pub mod source;
pub mod tree;

// Re-export commonly used types
pub use geometry::{Polygon, Rect, Region};
pub use indicator::{DiamondZone, EdgeZone, IndicatorOverlay, ZoneHit};
pub use outline::{DropTarget, OutlinePreview, PreviewShape, PreviewSurface};
pub use session::{DragError, DragFeedback, DragSession, DragState, Modifiers};
pub use settings::DockSettings;
pub use source::{CommitError, DragSource};
pub use tree::{DockStyle, DockTree, FloatWindowId, PaneId, ProbeError};

//! Interface to the host's dock layout tree
//!
//! The engine never owns the layout model. It reads bounds and validity
//! through [`DockTree`] continuously while a drag is in flight, and mutates
//! the tree exactly once, at commit time, through the drag source and the
//! z-order hook below.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Region};
use crate::outline::DropTarget;
use crate::source::DragSource;

/// The side or position a dragged content attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockStyle {
    Left,
    Right,
    Top,
    Bottom,
    /// Dock into the document area (or a pane) as a tab
    Fill,
}

/// Axis a dock style splits along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl DockStyle {
    /// All styles in probe-priority order
    pub const ALL: [DockStyle; 5] = [
        DockStyle::Left,
        DockStyle::Right,
        DockStyle::Top,
        DockStyle::Bottom,
        DockStyle::Fill,
    ];

    /// The axis a split along this style divides
    pub fn axis(&self) -> Option<Axis> {
        match self {
            DockStyle::Left | DockStyle::Right => Some(Axis::Horizontal),
            DockStyle::Top | DockStyle::Bottom => Some(Axis::Vertical),
            DockStyle::Fill => None,
        }
    }

    /// Whether this style targets one of the four outer edges
    pub fn is_edge(&self) -> bool {
        !matches!(self, DockStyle::Fill)
    }
}

/// Identifier of a pane (tab group) inside the layout tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaneId(pub u32);

/// Identifier of a floating top-level window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatWindowId(pub u32);

/// A candidate query failed while probing
///
/// Contained to "no match" for that candidate; the remaining probes still
/// run and teardown is unaffected.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("drop probe failed for pane {pane:?}: {reason}")]
    Pane { pane: PaneId, reason: String },

    #[error("drop probe failed for float window {window:?}: {reason}")]
    FloatWindow {
        window: FloatWindowId,
        reason: String,
    },
}

/// Read access to the host layout plus the commit-time mutation hooks
pub trait DockTree {
    /// The whole outer layout area
    fn dock_area(&self) -> Rect;

    /// The inner document region
    fn document_area(&self) -> Rect;

    /// Whether the outer panel for an edge style is currently shown
    fn panel_visible(&self, style: DockStyle) -> bool;

    /// Configured thickness of the outer panel for an edge style
    fn panel_thickness(&self, style: DockStyle) -> f32;

    /// Topmost pane under the given screen point, if any
    fn pane_at(&self, point: Vec2) -> Option<PaneId>;

    /// Topmost floating window under the given screen point, if any
    fn float_window_at(&self, point: Vec2) -> Option<FloatWindowId>;

    /// Content rectangle of a pane; `None` when the pane no longer exists
    fn pane_rect(&self, pane: PaneId) -> Option<Rect>;

    /// Outline of one tab of a pane, in screen space
    fn tab_outline(&self, pane: PaneId, tab_index: usize) -> Option<Region>;

    /// Whether end users may nest contents into existing panes
    fn nested_docking_enabled(&self) -> bool;

    /// The pane's own drop test, e.g. tab-strip insertion points
    fn pane_test_drop(
        &self,
        pane: PaneId,
        source: &dyn DragSource,
        point: Vec2,
    ) -> Result<Option<DropTarget>, ProbeError>;

    /// A floating window's own drop test
    fn float_test_drop(
        &self,
        window: FloatWindowId,
        source: &dyn DragSource,
        point: Vec2,
    ) -> Result<Option<DropTarget>, ProbeError>;

    /// Raise the dock window for `style` before a panel dock lands there
    fn update_panel_z_order(&mut self, style: DockStyle, full_edge: bool);

    /// Bracket a commit so the host can suspend relayout
    fn begin_layout_update(&mut self) {}
    fn end_layout_update(&mut self) {}
}

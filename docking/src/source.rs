//! Capability interface for the content being dragged

use glam::Vec2;

use crate::geometry::Rect;
use crate::tree::{DockStyle, PaneId};

/// A commit mutation against the layout tree failed
///
/// Surfaced from `DragSession::end_drag` after teardown has already run, so
/// no overlay or preview state leaks alongside the error.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    #[error("failed to float content: {0}")]
    Float(String),

    #[error("failed to dock content to pane: {0}")]
    DockToPane(String),

    #[error("failed to dock content to panel: {0}")]
    DockToPanel(String),
}

/// The content being relocated by a drag
///
/// Supplied by the host; reports which targets are structurally valid for
/// this content and carries the commit operations. Exactly one commit
/// method is invoked per successful drag.
pub trait DragSource {
    /// Whether docking with the given style is structurally valid
    fn is_style_valid(&self, style: DockStyle) -> bool;

    /// Whether the content may become a floating window
    fn can_float(&self) -> bool;

    /// Whether the content may nest into the given pane
    fn can_dock_into(&self, pane: PaneId) -> bool;

    /// Called once when the drag starts; returns the initial floating
    /// preview rectangle
    fn begin_drag(&mut self, start: Vec2) -> Rect;

    /// Commit: float the content at the given bounds
    fn float_at(&mut self, bounds: Rect) -> Result<(), CommitError>;

    /// Commit: dock into a pane; `tab_index` of `None` appends without a
    /// specific tab position
    fn dock_to_pane(
        &mut self,
        pane: PaneId,
        style: DockStyle,
        tab_index: Option<usize>,
    ) -> Result<(), CommitError>;

    /// Commit: dock to an outer panel edge or the document area
    fn dock_to_panel(&mut self, style: DockStyle, full_edge: bool) -> Result<(), CommitError>;

    /// Whether the content is a tabbed document that should be activated
    /// after a successful commit
    fn is_tabbed_document(&self) -> bool {
        false
    }

    /// Bring the content to front after commit
    fn activate(&mut self) {}
}

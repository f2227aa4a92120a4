//! Preview of the layout that would result from dropping here
//!
//! The preview owns no rendering: hosts implement [`PreviewSurface`] and
//! draw the rectangle or region however their toolkit likes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{Rect, Region};
use crate::tree::{DockStyle, DockTree, PaneId};

/// A fully resolved drop destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DropTarget {
    /// Float as an independent window at the given bounds
    Float(Rect),
    /// Nest into an existing pane
    Pane {
        pane: PaneId,
        style: DockStyle,
        /// `Some` targets one specific tab slot, `None` the pane itself
        tab_index: Option<usize>,
    },
    /// Dock to an outer panel edge or the document area
    Panel { style: DockStyle, full_edge: bool },
}

/// Geometry handed to the preview surface
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewShape {
    Rect(Rect),
    Region(Region),
}

/// Minimal rendering seam for the outline preview
pub trait PreviewSurface {
    fn show(&mut self, shape: &PreviewShape);
    fn hide(&mut self);
}

/// Tracks the single current target and mirrors it onto the surface
///
/// Shows at most one target at any instant; when the target becomes
/// unavailable the surface is hidden.
pub struct OutlinePreview<S: PreviewSurface> {
    surface: S,
    target: Option<DropTarget>,
}

impl<S: PreviewSurface> OutlinePreview<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            target: None,
        }
    }

    /// The most recently shown target, if any
    pub fn target(&self) -> Option<DropTarget> {
        self.target
    }

    /// Resolve the target's geometry and show it
    ///
    /// Re-showing an unchanged target is a no-op. Returns whether the
    /// preview is visible afterwards; a target whose geometry can no
    /// longer be computed (e.g. the pane disappeared) hides the preview.
    pub fn show_target(&mut self, tree: &dyn DockTree, target: DropTarget) -> bool {
        if self.target == Some(target) {
            return true;
        }

        match compute_shape(tree, &target) {
            Some(shape) => {
                debug!(target = ?target, "outline target changed");
                self.surface.show(&shape);
                self.target = Some(target);
                true
            }
            None => {
                self.clear();
                false
            }
        }
    }

    /// Hide the preview and forget the current target
    pub fn clear(&mut self) {
        if self.target.take().is_some() {
            debug!("outline cleared");
        }
        self.surface.hide();
    }
}

/// Geometry for a resolved target
fn compute_shape(tree: &dyn DockTree, target: &DropTarget) -> Option<PreviewShape> {
    match *target {
        DropTarget::Float(rect) => Some(PreviewShape::Rect(rect)),

        DropTarget::Panel { style, full_edge } => {
            let area = if full_edge {
                tree.dock_area()
            } else {
                tree.document_area()
            };
            let thickness = tree.panel_thickness(style);
            let rect = match style {
                DockStyle::Left => area.left_strip(thickness),
                DockStyle::Right => area.right_strip(thickness),
                DockStyle::Top => area.top_strip(thickness),
                DockStyle::Bottom => area.bottom_strip(thickness),
                DockStyle::Fill => tree.document_area(),
            };
            Some(PreviewShape::Rect(rect))
        }

        DropTarget::Pane {
            pane,
            style,
            tab_index,
        } => {
            let rect = tree.pane_rect(pane)?;
            match style {
                DockStyle::Left => Some(PreviewShape::Rect(rect.left_half())),
                DockStyle::Right => Some(PreviewShape::Rect(rect.right_half())),
                DockStyle::Top => Some(PreviewShape::Rect(rect.top_half())),
                DockStyle::Bottom => Some(PreviewShape::Rect(rect.bottom_half())),
                DockStyle::Fill => match tab_index {
                    None => Some(PreviewShape::Rect(rect)),
                    Some(index) => tree.tab_outline(pane, index).map(PreviewShape::Region),
                },
            }
        }
    }
}

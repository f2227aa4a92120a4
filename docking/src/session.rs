//! Drag session orchestration
//!
//! One session lives on the host window and runs the begin/move/end state
//! machine: it owns the indicator overlay and the outline preview, resolves
//! the drop target on every pointer move, and issues exactly one commit
//! mutation when the drag ends.

use glam::Vec2;
use tracing::{debug, info, warn};

use crate::geometry::Rect;
use crate::indicator::{IndicatorOverlay, ZoneHit};
use crate::outline::{DropTarget, OutlinePreview, PreviewSurface};
use crate::settings::DockSettings;
use crate::source::{CommitError, DragSource};
use crate::tree::{DockStyle, DockTree};

/// Observable session state
///
/// Commit and abort are transitions inside `end_drag`; by the time it
/// returns the session is back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Modifier-key state sampled by the host on each pointer move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Target the entire outer panel instead of the document area only
    pub full_edge: bool,
    /// Skip edge probing and resolve the pane under the cursor directly
    pub precise: bool,
}

/// What the host cursor should communicate for the current move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragFeedback {
    /// No move processed yet
    None,
    /// Nothing under the cursor accepts the drop
    Invalid,
    /// Release would float the content
    Float,
    /// Release would nest into a pane
    DockPane,
    /// Release would dock to an outer panel
    DockPanel,
}

/// Starting a drag failed; the session stays idle
#[derive(Debug, thiserror::Error)]
pub enum DragError {
    #[error("drag source accepts no dock target, not even floating")]
    InvalidSource,

    #[error("a drag is already in progress")]
    AlreadyDragging,
}

/// The drag-and-drop state machine for one host window
///
/// Created on demand by the host; the overlay is built at `begin_drag` and
/// torn down on every exit path of `end_drag`.
pub struct DragSession<S: PreviewSurface> {
    state: DragState,
    settings: DockSettings,
    source: Option<Box<dyn DragSource>>,
    overlay: Option<IndicatorOverlay>,
    preview: OutlinePreview<S>,
    start: Vec2,
    float_bounds: Rect,
    resolved: Option<DropTarget>,
    feedback: DragFeedback,
}

impl<S: PreviewSurface> DragSession<S> {
    pub fn new(surface: S, settings: DockSettings) -> Self {
        Self {
            state: DragState::Idle,
            settings,
            source: None,
            overlay: None,
            preview: OutlinePreview::new(surface),
            start: Vec2::ZERO,
            float_bounds: Rect::ZERO,
            resolved: None,
            feedback: DragFeedback::None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// The target the last move resolved, if any
    pub fn resolved_target(&self) -> Option<DropTarget> {
        self.resolved
    }

    pub fn feedback(&self) -> DragFeedback {
        self.feedback
    }

    /// The live indicator overlay, present only while dragging
    pub fn overlay(&self) -> Option<&IndicatorOverlay> {
        self.overlay.as_ref()
    }

    /// Start a drag for the given source
    ///
    /// Rejects sources with no valid target at all, including floating; in
    /// that case no overlay is created and the session stays idle.
    pub fn begin_drag(
        &mut self,
        tree: &dyn DockTree,
        mut source: Box<dyn DragSource>,
        start: Vec2,
    ) -> Result<(), DragError> {
        if self.state != DragState::Idle {
            return Err(DragError::AlreadyDragging);
        }

        let any_valid = source.can_float()
            || DockStyle::ALL
                .iter()
                .any(|style| source.is_style_valid(*style));
        if !any_valid {
            debug!("rejecting drag: source accepts no target");
            return Err(DragError::InvalidSource);
        }

        let mut overlay = IndicatorOverlay::new(self.settings.clone());
        overlay.refresh(tree, source.as_ref());
        self.float_bounds = source.begin_drag(start);

        self.overlay = Some(overlay);
        self.source = Some(source);
        self.start = start;
        self.resolved = None;
        self.feedback = DragFeedback::None;
        self.state = DragState::Dragging;
        info!(start = ?start, "drag session started");
        Ok(())
    }

    /// Resolve the drop target for the current cursor position
    ///
    /// Probe order is fixed: edge indicators, pane diamond, the pane's own
    /// drop test, a float window's drop test, then the floating fallback.
    /// The first acceptance wins. A probe that fails internally counts as
    /// a miss for that candidate only.
    pub fn on_move(&mut self, tree: &dyn DockTree, cursor: Vec2, modifiers: Modifiers) {
        if self.state != DragState::Dragging {
            return;
        }
        let (Some(overlay), Some(source)) = (self.overlay.as_mut(), self.source.as_deref())
        else {
            return;
        };

        overlay.set_full_edge(modifiers.full_edge);
        let pane = tree.pane_at(cursor);
        overlay.set_pane(pane);
        overlay.refresh(tree, source);

        let mut target = None;

        if modifiers.precise {
            // Direct nested docking: only the pane under the cursor is
            // consulted
            if let Some(pane) = pane {
                target = match tree.pane_test_drop(pane, source, cursor) {
                    Ok(result) => result,
                    Err(error) => {
                        warn!(error = %error, "pane drop probe failed");
                        None
                    }
                };
            }
        } else {
            target = overlay.test_drop(cursor).map(|hit| match hit {
                ZoneHit::Panel { style } => DropTarget::Panel {
                    style,
                    full_edge: modifiers.full_edge,
                },
                ZoneHit::Pane { pane, style } => DropTarget::Pane {
                    pane,
                    style,
                    tab_index: None,
                },
            });

            if target.is_none() {
                if let Some(pane) = pane {
                    target = match tree.pane_test_drop(pane, source, cursor) {
                        Ok(result) => result,
                        Err(error) => {
                            warn!(error = %error, "pane drop probe failed");
                            None
                        }
                    };
                }
            }

            if target.is_none() {
                if let Some(window) = tree.float_window_at(cursor) {
                    target = match tree.float_test_drop(window, source, cursor) {
                        Ok(result) => result,
                        Err(error) => {
                            warn!(error = %error, "float window drop probe failed");
                            None
                        }
                    };
                }
            }
        }

        // Nothing accepted the drop: track the floating preview if the
        // source may float at all
        if target.is_none() && source.can_float() {
            target = Some(DropTarget::Float(self.float_bounds.offset(cursor - self.start)));
        }

        match target {
            Some(target) if self.preview.show_target(tree, target) => {
                self.resolved = Some(target);
                self.feedback = match target {
                    DropTarget::Float(_) => DragFeedback::Float,
                    DropTarget::Pane { .. } => DragFeedback::DockPane,
                    DropTarget::Panel { .. } => DragFeedback::DockPanel,
                };
            }
            _ => {
                self.preview.clear();
                self.resolved = None;
                self.feedback = DragFeedback::Invalid;
            }
        }
    }

    /// End the drag, committing the resolved target unless aborted
    ///
    /// Teardown runs first and unconditionally: overlay and preview are
    /// gone and the session is idle on every exit path, including commit
    /// failure. At most one commit mutation is issued; panel docks are
    /// preceded by a z-order update.
    pub fn end_drag(&mut self, tree: &mut dyn DockTree, abort: bool) -> Result<(), CommitError> {
        if self.state != DragState::Dragging {
            return Ok(());
        }

        self.overlay = None;
        self.preview.clear();
        self.state = DragState::Idle;
        self.feedback = DragFeedback::None;
        let source = self.source.take();
        let resolved = self.resolved.take();

        let Some(mut source) = source else {
            return Ok(());
        };
        if abort {
            info!("drag session aborted");
            return Ok(());
        }
        let Some(target) = resolved else {
            debug!("drag released with no resolved target");
            return Ok(());
        };

        info!(target = ?target, "committing drag");
        tree.begin_layout_update();
        let result = match target {
            DropTarget::Float(bounds) => source.float_at(bounds),
            DropTarget::Pane {
                pane,
                style,
                tab_index,
            } => source.dock_to_pane(pane, style, tab_index),
            DropTarget::Panel { style, full_edge } => {
                tree.update_panel_z_order(style, full_edge);
                source.dock_to_panel(style, full_edge)
            }
        };
        tree.end_layout_update();

        if result.is_ok() && source.is_tabbed_document() {
            source.activate();
        }
        result
    }
}

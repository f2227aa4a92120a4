//! Rectangular drop indicator anchored to an outer edge

use glam::Vec2;

use crate::geometry::Rect;
use crate::tree::DockStyle;

/// A directional probe bound to a screen rectangle
///
/// One exists per dock style; hidden zones never accept a probe.
#[derive(Debug, Clone)]
pub struct EdgeZone {
    style: DockStyle,
    bounds: Rect,
    visible: bool,
    active: bool,
}

impl EdgeZone {
    pub fn new(style: DockStyle) -> Self {
        Self {
            style,
            bounds: Rect::ZERO,
            visible: false,
            active: false,
        }
    }

    pub fn style(&self) -> DockStyle {
        self.style
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the cursor currently rests on this indicator, for glyph
    /// highlighting
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn show_at(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.active = false;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active && self.visible;
    }

    /// `Some(style)` iff the zone is visible and contains the point
    pub fn hit_test(&self, point: Vec2) -> Option<DockStyle> {
        if self.visible && self.bounds.contains(point) {
            Some(self.style)
        } else {
            None
        }
    }
}

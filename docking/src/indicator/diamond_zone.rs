//! Five-way drop indicator overlaid on a candidate pane

use glam::Vec2;
use once_cell::sync::Lazy;

use crate::geometry::{Polygon, Rect};
use crate::tree::DockStyle;

// Grid lines of the glyph in unit space: the cross arms span the middle
// third, the arm tips taper to the middle sixth.
const A: f32 = 1.0 / 3.0;
const B: f32 = 2.0 / 3.0;
const C: f32 = 5.0 / 12.0;
const D: f32 = 7.0 / 12.0;

/// The five glyph sub-regions in unit space, probed in this order
///
/// Four tapered arms plus a beveled center; the gaps between the arms
/// belong to no style, matching the transparent corners of the glyph.
static SUB_REGIONS: Lazy<[(DockStyle, Polygon); 5]> = Lazy::new(|| {
    [
        (
            DockStyle::Top,
            Polygon::new(vec![
                Vec2::new(A, A),
                Vec2::new(C, 0.0),
                Vec2::new(D, 0.0),
                Vec2::new(B, A),
            ]),
        ),
        (
            DockStyle::Left,
            Polygon::new(vec![
                Vec2::new(A, A),
                Vec2::new(A, B),
                Vec2::new(0.0, D),
                Vec2::new(0.0, C),
            ]),
        ),
        (
            DockStyle::Fill,
            Polygon::new(vec![
                Vec2::new(A, C),
                Vec2::new(C, A),
                Vec2::new(D, A),
                Vec2::new(B, C),
                Vec2::new(B, D),
                Vec2::new(D, B),
                Vec2::new(C, B),
                Vec2::new(A, D),
            ]),
        ),
        (
            DockStyle::Right,
            Polygon::new(vec![
                Vec2::new(B, A),
                Vec2::new(1.0, C),
                Vec2::new(1.0, D),
                Vec2::new(B, B),
            ]),
        ),
        (
            DockStyle::Bottom,
            Polygon::new(vec![
                Vec2::new(A, B),
                Vec2::new(B, B),
                Vec2::new(D, 1.0),
                Vec2::new(C, 1.0),
            ]),
        ),
    ]
});

/// The five-way hit probe centered on a candidate pane
///
/// Membership is tested against the glyph's irregular sub-regions, not a
/// quadrant split of the bounding box, so the boundaries between adjacent
/// styles follow the drawn shape.
#[derive(Debug, Clone)]
pub struct DiamondZone {
    bounds: Rect,
    visible: bool,
    active: Option<DockStyle>,
}

impl Default for DiamondZone {
    fn default() -> Self {
        Self::new()
    }
}

impl DiamondZone {
    pub fn new() -> Self {
        Self {
            bounds: Rect::ZERO,
            visible: false,
            active: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sub-region the cursor currently rests on, for glyph highlighting
    pub fn active(&self) -> Option<DockStyle> {
        self.active
    }

    pub fn show_at(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.active = None;
    }

    pub(crate) fn set_active(&mut self, style: Option<DockStyle>) {
        self.active = if self.visible { style } else { None };
    }

    /// Map the point into glyph space and test the five sub-regions
    pub fn hit_test(&self, point: Vec2) -> Option<DockStyle> {
        if !self.visible || !self.bounds.contains(point) {
            return None;
        }
        let local = (point - self.bounds.min) / self.bounds.size;
        SUB_REGIONS
            .iter()
            .find(|(_, polygon)| polygon.contains(local))
            .map(|(style, _)| *style)
    }
}

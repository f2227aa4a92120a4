//! Rectangle, region and polygon primitives for dock hit testing
//!
//! All geometry is in screen coordinates with y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// The empty rectangle at the origin
    pub const ZERO: Rect = Rect {
        min: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Create a rectangle from position and size components
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Create a rectangle spanning two corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            min,
            size: max - min,
        }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// A rectangle is empty when either dimension is not positive
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment test: the right and bottom edges are excluded
    pub fn contains(&self, point: Vec2) -> bool {
        !self.is_empty()
            && point.x >= self.min.x
            && point.y >= self.min.y
            && point.x < self.min.x + self.size.x
            && point.y < self.min.y + self.size.y
    }

    /// Smallest rectangle covering both operands; empty operands are ignored
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::from_min_max(self.min.min(other.min), self.max().max(other.max()))
    }

    /// Translate by the given delta
    pub fn offset(&self, delta: Vec2) -> Rect {
        Rect {
            min: self.min + delta,
            size: self.size,
        }
    }

    /// Strip of the given width along the left edge
    pub fn left_strip(&self, width: f32) -> Rect {
        Rect::from_min_size(self.min, Vec2::new(width, self.size.y))
    }

    /// Strip of the given width along the right edge
    pub fn right_strip(&self, width: f32) -> Rect {
        Rect::new(self.max().x - width, self.min.y, width, self.size.y)
    }

    /// Strip of the given height along the top edge
    pub fn top_strip(&self, height: f32) -> Rect {
        Rect::from_min_size(self.min, Vec2::new(self.size.x, height))
    }

    /// Strip of the given height along the bottom edge
    pub fn bottom_strip(&self, height: f32) -> Rect {
        Rect::new(self.min.x, self.max().y - height, self.size.x, height)
    }

    /// Left half after a vertical bisection
    pub fn left_half(&self) -> Rect {
        Rect::from_min_size(self.min, Vec2::new(self.size.x * 0.5, self.size.y))
    }

    /// Right half after a vertical bisection
    pub fn right_half(&self) -> Rect {
        Rect::new(
            self.min.x + self.size.x * 0.5,
            self.min.y,
            self.size.x * 0.5,
            self.size.y,
        )
    }

    /// Top half after a horizontal bisection
    pub fn top_half(&self) -> Rect {
        Rect::from_min_size(self.min, Vec2::new(self.size.x, self.size.y * 0.5))
    }

    /// Bottom half after a horizontal bisection
    pub fn bottom_half(&self) -> Rect {
        Rect::new(
            self.min.x,
            self.min.y + self.size.y * 0.5,
            self.size.x,
            self.size.y * 0.5,
        )
    }
}

/// A union of rectangles
///
/// Used where a plain rectangle is not enough, e.g. a tab outline made of
/// the tab cap plus the pane content area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.union_rect(rect);
        region
    }

    /// Add a rectangle to the union; empty rectangles are ignored
    pub fn union_rect(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }

    /// Bounding rectangle of the union
    pub fn bounds(&self) -> Rect {
        self.rects
            .iter()
            .fold(Rect::ZERO, |acc, rect| acc.union(rect))
    }

    pub fn translate(&self, delta: Vec2) -> Region {
        Region {
            rects: self.rects.iter().map(|rect| rect.offset(delta)).collect(),
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

/// A simple polygon with even-odd point membership
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list
    pub fn new(vertices: Vec<Vec2>) -> Self {
        debug_assert!(vertices.len() >= 3, "a polygon needs at least 3 vertices");
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Even-odd ray-cast membership test
    pub fn contains(&self, point: Vec2) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

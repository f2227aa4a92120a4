//! Drop indicators shown while a drag is in flight
//!
//! The overlay owns five edge indicators plus the five-way pane indicator,
//! keeps their placement and visibility in sync with the reference area and
//! the candidate pane, and answers the fixed-priority drop probe.

mod diamond_zone;
mod edge_zone;

pub use diamond_zone::DiamondZone;
pub use edge_zone::EdgeZone;

use glam::Vec2;
use tracing::debug;

use crate::geometry::{Rect, Region};
use crate::settings::DockSettings;
use crate::source::DragSource;
use crate::tree::{DockStyle, DockTree, PaneId};

/// Which indicator accepted the probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneHit {
    /// An edge or fill indicator: dock to the outer panel
    Panel { style: DockStyle },
    /// The pane indicator: nest into the candidate pane
    Pane { pane: PaneId, style: DockStyle },
}

/// Transient overlay of drop indicators, alive for one drag session
pub struct IndicatorOverlay {
    /// Edge indicators in probe-priority order: Left, Right, Top, Bottom, Fill
    zones: [EdgeZone; 5],
    diamond: DiamondZone,
    pane: Option<PaneId>,
    full_edge: bool,
    settings: DockSettings,
    dirty: bool,
}

impl IndicatorOverlay {
    pub fn new(settings: DockSettings) -> Self {
        Self {
            zones: [
                EdgeZone::new(DockStyle::Left),
                EdgeZone::new(DockStyle::Right),
                EdgeZone::new(DockStyle::Top),
                EdgeZone::new(DockStyle::Bottom),
                EdgeZone::new(DockStyle::Fill),
            ],
            diamond: DiamondZone::new(),
            pane: None,
            full_edge: false,
            settings,
            dirty: true,
        }
    }

    /// Toggle between the whole outer layout and the inner document area
    /// as the reference area for edge indicators
    pub fn set_full_edge(&mut self, full_edge: bool) {
        if self.full_edge != full_edge {
            self.full_edge = full_edge;
            self.dirty = true;
        }
    }

    pub fn full_edge(&self) -> bool {
        self.full_edge
    }

    /// Update the candidate pane the diamond indicator attaches to
    pub fn set_pane(&mut self, pane: Option<PaneId>) {
        if self.pane != pane {
            self.pane = pane;
            self.dirty = true;
        }
    }

    pub fn pane(&self) -> Option<PaneId> {
        self.pane
    }

    pub fn edge_zones(&self) -> &[EdgeZone; 5] {
        &self.zones
    }

    pub fn diamond(&self) -> &DiamondZone {
        &self.diamond
    }

    /// Recompute placement and visibility after a candidate-pane or
    /// full-edge change; cheap no-op otherwise
    pub fn refresh(&mut self, tree: &dyn DockTree, source: &dyn DragSource) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        let area = if self.full_edge {
            tree.dock_area()
        } else {
            tree.document_area()
        };
        let margin = self.settings.indicator_margin;
        let glyph = Vec2::splat(self.settings.zone_size);

        for zone in &mut self.zones {
            let style = zone.style();
            // An edge indicator is pointless when the target panel is
            // already on screen
            let visible =
                source.is_style_valid(style) && (!style.is_edge() || !tree.panel_visible(style));
            if !visible {
                zone.hide();
                continue;
            }
            let min = match style {
                DockStyle::Left => Vec2::new(area.min.x + margin, area.center().y - glyph.y * 0.5),
                DockStyle::Right => Vec2::new(
                    area.max().x - margin - glyph.x,
                    area.center().y - glyph.y * 0.5,
                ),
                DockStyle::Top => Vec2::new(area.center().x - glyph.x * 0.5, area.min.y + margin),
                DockStyle::Bottom => Vec2::new(
                    area.center().x - glyph.x * 0.5,
                    area.max().y - margin - glyph.y,
                ),
                // The fill indicator always sits over the document area,
                // regardless of the full-edge flag
                DockStyle::Fill => tree.document_area().center() - glyph * 0.5,
            };
            zone.show_at(Rect::from_min_size(min, glyph));
        }

        let diamond_bounds = self.pane.and_then(|pane| {
            if !tree.nested_docking_enabled() || !source.can_dock_into(pane) {
                return None;
            }
            let rect = tree.pane_rect(pane)?;
            let size = Vec2::splat(self.settings.diamond_size);
            Some(Rect::from_min_size(rect.center() - size * 0.5, size))
        });
        match diamond_bounds {
            Some(bounds) => self.diamond.show_at(bounds),
            None => self.diamond.hide(),
        }
    }

    /// Probe all indicators in fixed priority order
    ///
    /// Edge indicators go first (Left, Right, Top, Bottom, Fill), then the
    /// pane diamond; the first acceptance wins. Glyph highlight state is
    /// updated as a side effect.
    pub fn test_drop(&mut self, point: Vec2) -> Option<ZoneHit> {
        let mut hit = None;

        for zone in &mut self.zones {
            let accepted = hit.is_none() && zone.hit_test(point).is_some();
            zone.set_active(accepted);
            if accepted {
                hit = Some(ZoneHit::Panel {
                    style: zone.style(),
                });
            }
        }

        let diamond_style = if hit.is_none() {
            self.diamond.hit_test(point)
        } else {
            None
        };
        self.diamond.set_active(diamond_style);
        if let (Some(style), Some(pane)) = (diamond_style, self.pane) {
            hit = Some(ZoneHit::Pane { pane, style });
        }

        if let Some(hit) = hit {
            debug!(hit = ?hit, "indicator accepted drop probe");
        }
        hit
    }

    /// Union of all visible indicator bounds, for the host's overlay shape
    pub fn region(&self) -> Region {
        let mut region = Region::new();
        for zone in &self.zones {
            if zone.is_visible() {
                region.union_rect(zone.bounds());
            }
        }
        if self.diamond.is_visible() {
            region.union_rect(self.diamond.bounds());
        }
        region
    }
}

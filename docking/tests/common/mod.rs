//! In-memory layout tree, drag source and preview surface doubles shared
//! by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use docking::{
    CommitError, DockSettings, DockStyle, DockTree, DragSession, DragSource, DropTarget,
    FloatWindowId, PaneId, PreviewShape, PreviewSurface, ProbeError, Rect, Region,
};

/// One recorded mutation against the tree or the source
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BeginLayoutUpdate,
    EndLayoutUpdate,
    UpdateZOrder { style: DockStyle, full_edge: bool },
    FloatAt(Rect),
    DockToPane {
        pane: PaneId,
        style: DockStyle,
        tab_index: Option<usize>,
    },
    DockToPanel { style: DockStyle, full_edge: bool },
    Activate,
}

pub type SharedLog = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> SharedLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Commit events only, ignoring layout bracketing and z-order
pub fn commit_events(log: &SharedLog) -> Vec<Event> {
    log.borrow()
        .iter()
        .filter(|event| {
            matches!(
                event,
                Event::FloatAt(_) | Event::DockToPane { .. } | Event::DockToPanel { .. }
            )
        })
        .cloned()
        .collect()
}

/// What a pane's own drop test should answer
#[derive(Debug, Clone)]
pub enum PaneProbe {
    Miss,
    Fail,
    Target(DropTarget),
}

pub struct TestPane {
    pub id: PaneId,
    pub rect: Rect,
    pub probe: PaneProbe,
}

pub struct TestFloatWindow {
    pub id: FloatWindowId,
    pub rect: Rect,
    pub probe: PaneProbe,
}

/// Scriptable layout tree: a dock area, a document area, panes and float
/// windows with configurable internal drop tests
pub struct TestTree {
    pub dock_area: Rect,
    pub document_area: Rect,
    pub visible_panels: Vec<DockStyle>,
    pub panel_thickness: f32,
    pub panes: Vec<TestPane>,
    pub floats: Vec<TestFloatWindow>,
    pub tab_outlines: Vec<(PaneId, usize, Region)>,
    pub nested: bool,
    pub log: SharedLog,
}

impl TestTree {
    pub fn new(log: SharedLog) -> Self {
        Self {
            dock_area: Rect::new(0.0, 0.0, 1000.0, 800.0),
            document_area: Rect::new(200.0, 100.0, 600.0, 600.0),
            visible_panels: Vec::new(),
            panel_thickness: 150.0,
            panes: Vec::new(),
            floats: Vec::new(),
            tab_outlines: Vec::new(),
            nested: true,
            log,
        }
    }

    pub fn with_pane(mut self, id: PaneId, rect: Rect, probe: PaneProbe) -> Self {
        self.panes.push(TestPane { id, rect, probe });
        self
    }

    pub fn with_float_window(mut self, id: FloatWindowId, rect: Rect, probe: PaneProbe) -> Self {
        self.floats.push(TestFloatWindow { id, rect, probe });
        self
    }
}

fn answer(probe: &PaneProbe, error: ProbeError) -> Result<Option<DropTarget>, ProbeError> {
    match probe {
        PaneProbe::Miss => Ok(None),
        PaneProbe::Fail => Err(error),
        PaneProbe::Target(target) => Ok(Some(*target)),
    }
}

impl DockTree for TestTree {
    fn dock_area(&self) -> Rect {
        self.dock_area
    }

    fn document_area(&self) -> Rect {
        self.document_area
    }

    fn panel_visible(&self, style: DockStyle) -> bool {
        self.visible_panels.contains(&style)
    }

    fn panel_thickness(&self, _style: DockStyle) -> f32 {
        self.panel_thickness
    }

    fn pane_at(&self, point: Vec2) -> Option<PaneId> {
        self.panes
            .iter()
            .find(|pane| pane.rect.contains(point))
            .map(|pane| pane.id)
    }

    fn float_window_at(&self, point: Vec2) -> Option<FloatWindowId> {
        self.floats
            .iter()
            .find(|window| window.rect.contains(point))
            .map(|window| window.id)
    }

    fn pane_rect(&self, pane: PaneId) -> Option<Rect> {
        self.panes
            .iter()
            .find(|candidate| candidate.id == pane)
            .map(|candidate| candidate.rect)
    }

    fn tab_outline(&self, pane: PaneId, tab_index: usize) -> Option<Region> {
        self.tab_outlines
            .iter()
            .find(|(id, index, _)| *id == pane && *index == tab_index)
            .map(|(_, _, region)| region.clone())
    }

    fn nested_docking_enabled(&self) -> bool {
        self.nested
    }

    fn pane_test_drop(
        &self,
        pane: PaneId,
        _source: &dyn DragSource,
        _point: Vec2,
    ) -> Result<Option<DropTarget>, ProbeError> {
        let candidate = self
            .panes
            .iter()
            .find(|candidate| candidate.id == pane)
            .ok_or(ProbeError::Pane {
                pane,
                reason: "unknown pane".to_string(),
            })?;
        answer(
            &candidate.probe,
            ProbeError::Pane {
                pane,
                reason: "custom hit test panicked".to_string(),
            },
        )
    }

    fn float_test_drop(
        &self,
        window: FloatWindowId,
        _source: &dyn DragSource,
        _point: Vec2,
    ) -> Result<Option<DropTarget>, ProbeError> {
        let candidate = self
            .floats
            .iter()
            .find(|candidate| candidate.id == window)
            .ok_or(ProbeError::FloatWindow {
                window,
                reason: "unknown float window".to_string(),
            })?;
        answer(
            &candidate.probe,
            ProbeError::FloatWindow {
                window,
                reason: "custom hit test panicked".to_string(),
            },
        )
    }

    fn update_panel_z_order(&mut self, style: DockStyle, full_edge: bool) {
        self.log
            .borrow_mut()
            .push(Event::UpdateZOrder { style, full_edge });
    }

    fn begin_layout_update(&mut self) {
        self.log.borrow_mut().push(Event::BeginLayoutUpdate);
    }

    fn end_layout_update(&mut self) {
        self.log.borrow_mut().push(Event::EndLayoutUpdate);
    }
}

/// Scriptable drag source recording its commit calls
pub struct TestSource {
    pub valid: Vec<DockStyle>,
    pub floatable: bool,
    pub nestable: bool,
    pub float_bounds: Rect,
    pub tabbed: bool,
    pub fail_commit: bool,
    pub log: SharedLog,
}

impl TestSource {
    pub fn new(valid: &[DockStyle], floatable: bool, log: SharedLog) -> Self {
        Self {
            valid: valid.to_vec(),
            floatable,
            nestable: true,
            float_bounds: Rect::new(500.0, 400.0, 300.0, 200.0),
            tabbed: false,
            fail_commit: false,
            log,
        }
    }

    pub fn all_targets(log: SharedLog) -> Self {
        Self::new(&DockStyle::ALL, true, log)
    }
}

impl DragSource for TestSource {
    fn is_style_valid(&self, style: DockStyle) -> bool {
        self.valid.contains(&style)
    }

    fn can_float(&self) -> bool {
        self.floatable
    }

    fn can_dock_into(&self, _pane: PaneId) -> bool {
        self.nestable
    }

    fn begin_drag(&mut self, _start: Vec2) -> Rect {
        self.float_bounds
    }

    fn float_at(&mut self, bounds: Rect) -> Result<(), CommitError> {
        self.log.borrow_mut().push(Event::FloatAt(bounds));
        if self.fail_commit {
            return Err(CommitError::Float("host rejected the float".to_string()));
        }
        Ok(())
    }

    fn dock_to_pane(
        &mut self,
        pane: PaneId,
        style: DockStyle,
        tab_index: Option<usize>,
    ) -> Result<(), CommitError> {
        self.log.borrow_mut().push(Event::DockToPane {
            pane,
            style,
            tab_index,
        });
        if self.fail_commit {
            return Err(CommitError::DockToPane("host rejected the dock".to_string()));
        }
        Ok(())
    }

    fn dock_to_panel(&mut self, style: DockStyle, full_edge: bool) -> Result<(), CommitError> {
        self.log
            .borrow_mut()
            .push(Event::DockToPanel { style, full_edge });
        if self.fail_commit {
            return Err(CommitError::DockToPanel(
                "host rejected the dock".to_string(),
            ));
        }
        Ok(())
    }

    fn is_tabbed_document(&self) -> bool {
        self.tabbed
    }

    fn activate(&mut self) {
        self.log.borrow_mut().push(Event::Activate);
    }
}

/// Preview surface double recording every show/hide call
#[derive(Clone, Default)]
pub struct TestSurface {
    pub current: Rc<RefCell<Option<PreviewShape>>>,
    pub history: Rc<RefCell<Vec<Option<PreviewShape>>>>,
}

impl TestSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&self) -> Option<PreviewShape> {
        self.current.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.current.borrow().is_some()
    }
}

impl PreviewSurface for TestSurface {
    fn show(&mut self, shape: &PreviewShape) {
        *self.current.borrow_mut() = Some(shape.clone());
        self.history.borrow_mut().push(Some(shape.clone()));
    }

    fn hide(&mut self) {
        *self.current.borrow_mut() = None;
        self.history.borrow_mut().push(None);
    }
}

/// A session wired to a fresh surface double
pub fn new_session() -> (DragSession<TestSurface>, TestSurface) {
    let surface = TestSurface::new();
    let session = DragSession::new(surface.clone(), DockSettings::default());
    (session, surface)
}

/// Install the env-filtered test subscriber; safe to call repeatedly
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

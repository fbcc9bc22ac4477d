//! Click handling for the two star views.
//!
//! A click is one self-contained transaction: the session goes in, the
//! updated session and a list of render commands come out. The display
//! surface owns the only mutable binding and applies the commands.

use foundation::math::{Pixel, Vec2, Vec3, cartesian_to_spherical};
use tracing::debug;

use crate::config::StarfieldConfig;
use crate::point::PointIndex;
use crate::projection::ScreenProjector;
use crate::selection::Highlight;
use crate::session::Session;
use crate::snap::{NearestHit, SnapTolerance, nearest_by_pixel, nearest_on_screen};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ViewTag {
    /// Equirectangular texture image; coordinates are texel units.
    View2D,
    /// Perspective point cloud; coordinates are screen units.
    View3D,
}

/// A click delivered by the display surface.
#[derive(Clone, Copy)]
pub enum ClickEvent<'a> {
    View2D {
        at: Vec2,
    },
    View3D {
        at: Vec2,
        projector: &'a dyn ScreenProjector,
    },
}

impl<'a> ClickEvent<'a> {
    pub fn view_2d(x: f64, y: f64) -> Self {
        ClickEvent::View2D { at: Vec2::new(x, y) }
    }

    pub fn view_3d(x: f64, y: f64, projector: &'a dyn ScreenProjector) -> Self {
        ClickEvent::View3D {
            at: Vec2::new(x, y),
            projector,
        }
    }

    pub fn view(&self) -> ViewTag {
        match self {
            ClickEvent::View2D { .. } => ViewTag::View2D,
            ClickEvent::View3D { .. } => ViewTag::View3D,
        }
    }

    pub fn at(&self) -> Vec2 {
        match self {
            ClickEvent::View2D { at } | ClickEvent::View3D { at, .. } => *at,
        }
    }
}

/// Side effects for the display surface, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Mark one star in both views.
    Highlight(Highlight),
    /// Remove any highlight markers.
    ClearHighlight,
    /// Redraw the 3D scatter from scratch.
    RedrawScatter { positions: Vec<Vec3> },
    /// One texture texel changed value.
    UpdateTexel { pixel: Pixel, value: f32 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Outcome {
    /// An existing star was within tolerance and is now selected.
    Matched(NearestHit),
    /// No star was close enough, so one was created.
    Inserted(PointIndex),
    /// No star was close enough and nothing was created.
    Missed,
    /// The click was outside the view or not a usable coordinate.
    Ignored,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Matched(_) => "matched",
            Outcome::Inserted(_) => "inserted",
            Outcome::Missed => "missed",
            Outcome::Ignored => "ignored",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub view: ViewTag,
    pub outcome: Outcome,
    pub commands: Vec<RenderCommand>,
}

impl ClickOutcome {
    fn quiet(view: ViewTag, outcome: Outcome) -> Self {
        Self {
            view,
            outcome,
            commands: Vec::new(),
        }
    }
}

/// Routes clicks to the matching distance space and applies the snap policy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InteractionController {
    tolerance: SnapTolerance,
    allow_insert_from_view3d: bool,
}

impl InteractionController {
    pub fn new(tolerance: SnapTolerance, allow_insert_from_view3d: bool) -> Self {
        Self {
            tolerance,
            allow_insert_from_view3d,
        }
    }

    pub fn from_config(config: &StarfieldConfig) -> Self {
        Self::new(
            SnapTolerance::new(config.snap_tolerance),
            config.allow_insert_from_view3d,
        )
    }

    pub fn tolerance(&self) -> SnapTolerance {
        self.tolerance
    }

    pub fn handle_click(
        &self,
        mut session: Session,
        event: &ClickEvent<'_>,
    ) -> (Session, ClickOutcome) {
        let result = match *event {
            ClickEvent::View2D { at } => self.click_2d(&mut session, at),
            ClickEvent::View3D { at, projector } => self.click_3d(&mut session, at, projector),
        };
        debug!(
            view = ?event.view(),
            outcome = result.outcome.label(),
            x = event.at().x,
            y = event.at().y,
            points = session.store().len(),
            "click handled"
        );
        (session, result)
    }

    fn click_2d(&self, session: &mut Session, at: Vec2) -> ClickOutcome {
        let Some(pixel) = session.grid().pixel_at(at) else {
            return ClickOutcome::quiet(ViewTag::View2D, Outcome::Ignored);
        };

        let hit = nearest_by_pixel(session.store().all(), pixel);
        if let Some(result) = self.try_select(session, ViewTag::View2D, hit) {
            return result;
        }

        self.insert(session, ViewTag::View2D, pixel)
    }

    fn click_3d(
        &self,
        session: &mut Session,
        at: Vec2,
        projector: &dyn ScreenProjector,
    ) -> ClickOutcome {
        if !projector.viewport().contains(at) {
            return ClickOutcome::quiet(ViewTag::View3D, Outcome::Ignored);
        }

        let hit = nearest_on_screen(session.store().all(), at, projector);
        if let Some(result) = self.try_select(session, ViewTag::View3D, hit) {
            return result;
        }

        if !self.allow_insert_from_view3d {
            return ClickOutcome::quiet(ViewTag::View3D, Outcome::Missed);
        }

        let Some(pixel) = surface_pixel_under(session, at, projector) else {
            return ClickOutcome::quiet(ViewTag::View3D, Outcome::Missed);
        };
        self.insert(session, ViewTag::View3D, pixel)
    }

    fn try_select(
        &self,
        session: &mut Session,
        view: ViewTag,
        hit: Option<NearestHit>,
    ) -> Option<ClickOutcome> {
        let hit = hit.filter(|h| self.tolerance.accepts(h))?;
        session.selection_mut().select(hit.index);
        let highlight = session.highlight()?;
        Some(ClickOutcome {
            view,
            outcome: Outcome::Matched(hit),
            commands: vec![RenderCommand::Highlight(highlight)],
        })
    }

    fn insert(&self, session: &mut Session, view: ViewTag, pixel: Pixel) -> ClickOutcome {
        let index = session.insert_at_pixel(pixel);
        let mut commands = Vec::with_capacity(3);
        if session.selection_mut().clear() {
            commands.push(RenderCommand::ClearHighlight);
        }
        commands.push(RenderCommand::RedrawScatter {
            positions: session.store().positions(),
        });
        if let Some(value) = session.texture().get(pixel) {
            commands.push(RenderCommand::UpdateTexel { pixel, value });
        }
        ClickOutcome {
            view,
            outcome: Outcome::Inserted(index),
            commands,
        }
    }
}

/// Texel whose direction lies under a 3D-view click, via the base sphere.
fn surface_pixel_under(
    session: &Session,
    at: Vec2,
    projector: &dyn ScreenProjector,
) -> Option<Pixel> {
    let ray = projector.unproject(at)?;
    let hit = ray.hit_origin_sphere(session.base_radius())?;
    let (_, direction) = cartesian_to_spherical(hit)?;
    Some(session.grid().to_pixel(direction))
}

#[cfg(test)]
mod tests {
    use super::{ClickEvent, InteractionController, Outcome, RenderCommand, ViewTag};
    use crate::config::StarfieldConfig;
    use crate::point::PointIndex;
    use crate::projection::{ScreenProjector, Viewport};
    use crate::session::Session;
    use crate::snap::SnapTolerance;
    use foundation::math::{Pixel, Ray, Vec2, Vec3};

    /// Orthographic camera on the +X axis looking at the origin:
    /// world Y maps to screen x, world Z to screen -y.
    struct SideView {
        scale: f64,
    }

    impl ScreenProjector for SideView {
        fn viewport(&self) -> Viewport {
            Viewport::new(400.0, 400.0)
        }

        fn project(&self, world: Vec3) -> Option<Vec2> {
            (world.x > 0.0).then(|| {
                Vec2::new(200.0 + world.y * self.scale, 200.0 - world.z * self.scale)
            })
        }

        fn unproject(&self, screen: Vec2) -> Option<Ray> {
            let y = (screen.x - 200.0) / self.scale;
            let z = (200.0 - screen.y) / self.scale;
            Some(Ray::new(Vec3::new(100.0, y, z), Vec3::new(-1.0, 0.0, 0.0)))
        }
    }

    fn empty_session() -> Session {
        let cfg = StarfieldConfig {
            initial_stars: 0,
            seed: Some(5),
            ..StarfieldConfig::default()
        };
        Session::new(&cfg).expect("session")
    }

    #[test]
    fn out_of_bounds_2d_click_is_ignored() {
        let controller = InteractionController::new(SnapTolerance::default(), false);
        let (session, result) =
            controller.handle_click(empty_session(), &ClickEvent::view_2d(600.0, 3.0));
        assert_eq!(result.outcome, Outcome::Ignored);
        assert!(result.commands.is_empty());
        assert!(session.store().is_empty());

        let (session, result) =
            controller.handle_click(session, &ClickEvent::view_2d(f64::NAN, 3.0));
        assert_eq!(result.outcome, Outcome::Ignored);
        assert!(session.store().is_empty());
    }

    #[test]
    fn miss_then_match_in_2d() {
        let controller = InteractionController::new(SnapTolerance::default(), false);
        let (session, first) =
            controller.handle_click(empty_session(), &ClickEvent::view_2d(40.2, 60.7));
        assert_eq!(first.view, ViewTag::View2D);
        assert_eq!(first.outcome, Outcome::Inserted(PointIndex(0)));
        assert!(matches!(
            first.commands[0],
            RenderCommand::RedrawScatter { ref positions } if positions.len() == 1
        ));

        let (session, second) = controller.handle_click(session, &ClickEvent::view_2d(44.0, 62.0));
        let Outcome::Matched(hit) = second.outcome else {
            panic!("expected match, got {:?}", second.outcome);
        };
        assert_eq!(hit.index, PointIndex(0));
        assert_eq!(hit.distance_sq, 16.0 + 4.0);
        assert_eq!(session.selection().current(), Some(PointIndex(0)));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn insertion_clears_previous_highlight() {
        let controller = InteractionController::new(SnapTolerance::default(), false);
        let (session, _) =
            controller.handle_click(empty_session(), &ClickEvent::view_2d(10.0, 10.0));
        let (session, _) = controller.handle_click(session, &ClickEvent::view_2d(11.0, 10.0));
        assert!(!session.selection().is_empty());

        let (session, result) =
            controller.handle_click(session, &ClickEvent::view_2d(300.0, 300.0));
        assert_eq!(result.outcome, Outcome::Inserted(PointIndex(1)));
        assert_eq!(result.commands[0], RenderCommand::ClearHighlight);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn matches_in_screen_space_for_3d_clicks() {
        let controller = InteractionController::new(SnapTolerance::default(), false);
        let (session, _) =
            controller.handle_click(empty_session(), &ClickEvent::view_2d(0.0, 255.0));
        let star = session.store().all()[0];
        let camera = SideView { scale: 10.0 };
        let screen = camera.project(star.position()).expect("visible");

        let (session, result) = controller.handle_click(
            session,
            &ClickEvent::view_3d(screen.x + 3.0, screen.y - 2.0, &camera),
        );
        let Outcome::Matched(hit) = result.outcome else {
            panic!("expected match, got {:?}", result.outcome);
        };
        assert_eq!(hit.index, PointIndex(0));
        let RenderCommand::Highlight(h) = result.commands[0] else {
            panic!("expected highlight");
        };
        assert_eq!(h.position, star.position());
        assert_eq!(h.pixel, star.pixel());
        assert_eq!(session.selection().current(), Some(PointIndex(0)));
    }

    #[test]
    fn unmatched_3d_click_is_a_no_op_by_default() {
        let controller = InteractionController::new(SnapTolerance::default(), false);
        let camera = SideView { scale: 10.0 };
        let (session, result) =
            controller.handle_click(empty_session(), &ClickEvent::view_3d(200.0, 200.0, &camera));
        assert_eq!(result.outcome, Outcome::Missed);
        assert!(result.commands.is_empty());
        assert!(session.store().is_empty());

        let (_, result) =
            controller.handle_click(session, &ClickEvent::view_3d(-5.0, 200.0, &camera));
        assert_eq!(result.outcome, Outcome::Ignored);
    }

    #[test]
    fn unmatched_3d_click_inserts_when_enabled() {
        let controller = InteractionController::new(SnapTolerance::default(), true);
        let camera = SideView { scale: 10.0 };
        let (session, result) =
            controller.handle_click(empty_session(), &ClickEvent::view_3d(200.0, 200.0, &camera));
        assert_eq!(result.outcome, Outcome::Inserted(PointIndex(0)));

        // Straight down the +X axis: equator, azimuth 0.
        let star = session.store().all()[0];
        assert_eq!(star.pixel(), Pixel::new(0, 255));
        assert_eq!(session.grid().to_pixel(star.direction()), star.pixel());

        // Far outside the sphere silhouette.
        let (session, result) =
            controller.handle_click(session, &ClickEvent::view_3d(395.0, 5.0, &camera));
        assert_eq!(result.outcome, Outcome::Missed);
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn zero_tolerance_only_matches_exact_pixels() {
        let controller = InteractionController::new(SnapTolerance::new(0.0), false);
        let (session, _) = controller.handle_click(empty_session(), &ClickEvent::view_2d(5.0, 5.0));
        let (session, exact) = controller.handle_click(session, &ClickEvent::view_2d(5.5, 5.9));
        assert!(matches!(exact.outcome, Outcome::Matched(_)));
        let (session, near) = controller.handle_click(session, &ClickEvent::view_2d(6.0, 5.0));
        assert_eq!(near.outcome, Outcome::Inserted(PointIndex(1)));
        assert_eq!(session.store().len(), 2);
    }
}

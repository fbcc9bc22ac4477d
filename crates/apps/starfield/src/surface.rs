//! Headless display surface.
//!
//! Mirrors what an interactive viewer would draw (scatter, highlight markers,
//! texel updates) and keeps a transaction log, without opening a window.

use foundation::math::Vec3;
use runtime::{EventBus, Metrics};
use scene::{
    ClickOutcome, Highlight, InteractionController, Outcome, RenderCommand, ScreenProjector,
    Session, ViewTag,
};
use tracing::debug;

use crate::script::ClickSpec;

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    scatter: Vec<Vec3>,
    highlight: Option<Highlight>,
    texel_updates: u64,
    bus: EventBus,
    metrics: Metrics,
}

impl HeadlessSurface {
    /// Starts from the session's initial stars.
    pub fn new(session: &Session) -> Self {
        let mut surface = Self {
            scatter: session.store().positions(),
            ..Self::default()
        };
        surface
            .metrics
            .set_gauge("points", session.store().len() as i64);
        surface
    }

    pub fn scatter(&self) -> &[Vec3] {
        &self.scatter
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    pub fn texel_updates(&self) -> u64 {
        self.texel_updates
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn apply(&mut self, result: &ClickOutcome, points: usize) {
        let view = match result.view {
            ViewTag::View2D => "clicks.view2d",
            ViewTag::View3D => "clicks.view3d",
        };
        self.metrics.inc_counter(view, 1);
        self.metrics
            .inc_counter(format!("outcome.{}", result.outcome.label()), 1);
        self.metrics.set_gauge("points", points as i64);

        let message = match result.outcome {
            Outcome::Matched(hit) => format!(
                "{:?} index {} d2={}",
                result.view, hit.index.0, hit.distance_sq
            ),
            Outcome::Inserted(index) => format!("{:?} index {}", result.view, index.0),
            Outcome::Missed | Outcome::Ignored => format!("{:?}", result.view),
        };
        let sequence = self.bus.emit(result.outcome.label(), message);

        for command in &result.commands {
            match command {
                RenderCommand::Highlight(h) => self.highlight = Some(*h),
                RenderCommand::ClearHighlight => self.highlight = None,
                RenderCommand::RedrawScatter { positions } => self.scatter.clone_from(positions),
                RenderCommand::UpdateTexel { .. } => self.texel_updates += 1,
            }
        }
        debug!(sequence, commands = result.commands.len(), "surface updated");
    }
}

/// Feeds scripted clicks through the controller, one transaction at a time.
pub fn run_clicks(
    mut session: Session,
    controller: &InteractionController,
    projector: &dyn ScreenProjector,
    clicks: &[ClickSpec],
    surface: &mut HeadlessSurface,
) -> Session {
    for click in clicks {
        let event = click.to_event(projector);
        let (next, result) = controller.handle_click(session, &event);
        session = next;
        surface.apply(&result, session.store().len());
    }
    session
}

//! The run loop: setup once, then step and redraw until the app says stop.

use crate::config::SessionConfig;
use crate::error::Result;
use crate::logging;
use crate::scene::Scene;
use crate::terminal::{Backend, CrosstermBackend};

/// Whether the run loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redraw and call `step` again.
    Continue,
    /// End the loop.
    Stop,
}

impl From<bool> for Flow {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Self::Continue
        } else {
            Self::Stop
        }
    }
}

/// A program driven by [`run`].
pub trait App {
    /// Called once before the first frame.
    fn setup(&mut self, scene: &mut Scene, backend: &mut dyn Backend) -> Result<()> {
        let _ = (scene, backend);
        Ok(())
    }

    /// Called before every frame after the first.
    fn step(&mut self, scene: &mut Scene, backend: &mut dyn Backend) -> Result<Flow>;
}

/// Drive `app` against an already open backend.
///
/// Calls `setup`, draws one frame, then alternates `step` and redraw until
/// `step` returns [`Flow::Stop`]. Returns the number of frames drawn.
pub fn run_with<A: App + ?Sized>(
    app: &mut A,
    scene: &mut Scene,
    backend: &mut dyn Backend,
) -> Result<u64> {
    app.setup(scene, &mut *backend)?;
    scene.redraw(&mut *backend)?;
    let mut frames = 1;

    while app.step(scene, &mut *backend)? == Flow::Continue {
        scene.redraw(&mut *backend)?;
        frames += 1;
    }
    tracing::info!(frames, "run loop finished");
    Ok(frames)
}

/// Open a terminal session, drive `app` in it, and restore the terminal.
///
/// Installs the file logger first when `config.log` is set.
pub fn run<A: App + ?Sized>(app: &mut A, scene: &mut Scene, config: SessionConfig) -> Result<u64> {
    if let Some(log) = &config.log {
        logging::init(log)?;
    }
    let mut backend = CrosstermBackend::open(config)?;
    let result = run_with(app, scene, &mut backend);
    let closed = backend.close();
    let frames = result?;
    closed?;
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Point, PointHandle};
    use crate::terminal::HeadlessBackend;

    struct Counter {
        steps: u32,
        limit: u32,
        marker: Option<PointHandle>,
    }

    impl App for Counter {
        fn setup(&mut self, scene: &mut Scene, _backend: &mut dyn Backend) -> Result<()> {
            self.marker = Some(scene.spawn(Point::new('0', 0, 0, 0))?);
            Ok(())
        }

        fn step(&mut self, scene: &mut Scene, _backend: &mut dyn Backend) -> Result<Flow> {
            self.steps += 1;
            if let Some(mut marker) = self.marker.take() {
                marker.remove(scene.points_mut())?;
            }
            let digit = char::from_digit(self.steps, 10).unwrap_or('+');
            self.marker = Some(scene.spawn(Point::new(digit, 0, 0, 0))?);
            Ok(Flow::from(self.steps < self.limit))
        }
    }

    #[test]
    fn setup_then_steps_until_stop() {
        let mut app = Counter { steps: 0, limit: 3, marker: None };
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(2, 1);

        let frames = run_with(&mut app, &mut scene, &mut backend).unwrap();

        // first frame plus one per continuing step
        assert_eq!(frames, 3);
        assert_eq!(app.steps, 3);
        assert_eq!(backend.flushes(), 3);
        assert_eq!(backend.row(0), "2 ");
    }

    #[test]
    fn step_error_propagates() {
        struct Failing;
        impl App for Failing {
            fn step(&mut self, _scene: &mut Scene, backend: &mut dyn Backend) -> Result<Flow> {
                backend.read_key()?;
                Ok(Flow::Continue)
            }
        }

        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(2, 1);
        let err = run_with(&mut Failing, &mut scene, &mut backend).unwrap_err();
        assert!(matches!(err, crate::Error::InputClosed));
        assert_eq!(backend.flushes(), 1);
    }

    #[test]
    fn flow_from_bool() {
        assert_eq!(Flow::from(true), Flow::Continue);
        assert_eq!(Flow::from(false), Flow::Stop);
    }
}

//! Moving the hardware cursor around the screen with the arrow keys.

use crate::error::Result;
use crate::input::{Key, KeyCode};
use crate::scene::Scene;
use crate::terminal::Backend;

/// When [`capture_cursor`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// After the first key that is not an arrow.
    OneKey,
    /// When this key is pressed; other non-arrow keys are ignored.
    Until(KeyCode),
}

/// Where the cursor ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCapture {
    /// Final column.
    pub x: u16,
    /// Final row.
    pub y: u16,
    /// The key that ended a [`CaptureMode::OneKey`] capture. Always `None`
    /// for [`CaptureMode::Until`].
    pub key: Option<Key>,
}

/// Let the user move the cursor from `start` with the arrow keys.
///
/// The position stays on screen however often an edge is pushed, and is
/// clamped again when the screen shrinks mid-capture. The scene is redrawn
/// before every key read. The cursor is hidden again when the capture ends.
pub fn capture_cursor<B: Backend + ?Sized>(
    scene: &Scene,
    backend: &mut B,
    start: (u16, u16),
    mode: CaptureMode,
) -> Result<CursorCapture> {
    let result = track(scene, backend, start, mode);
    backend.set_cursor(None);
    result
}

fn track<B: Backend + ?Sized>(
    scene: &Scene,
    backend: &mut B,
    start: (u16, u16),
    mode: CaptureMode,
) -> Result<CursorCapture> {
    let (mut x, mut y) = start;
    loop {
        (x, y) = clamp(backend, x, y);
        backend.set_cursor(Some((x, y)));
        scene.redraw(backend)?;

        let key = backend.read_key()?;
        // the key read may have carried a resize
        (x, y) = clamp(backend, x, y);
        match key.code {
            KeyCode::Left => x = x.saturating_sub(1),
            KeyCode::Right => x = x.saturating_add(1),
            KeyCode::Up => y = y.saturating_sub(1),
            KeyCode::Down => y = y.saturating_add(1),
            _ => match mode {
                CaptureMode::OneKey => return Ok(CursorCapture { x, y, key: Some(key) }),
                CaptureMode::Until(stop) if key.code == stop => {
                    return Ok(CursorCapture { x, y, key: None });
                }
                CaptureMode::Until(_) => {}
            },
        }
    }
}

/// Pull `(x, y)` onto the current screen.
fn clamp<B: Backend + ?Sized>(backend: &B, x: u16, y: u16) -> (u16, u16) {
    let (cols, rows) = backend.size();
    (x.min(cols.saturating_sub(1)), y.min(rows.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::terminal::HeadlessBackend;
    use crate::Error;

    #[test]
    fn one_key_returns_position_and_key() {
        let scene = Scene::new();
        let mut backend =
            HeadlessBackend::new(10, 5).with_keys([KeyCode::Right, KeyCode::Down, KeyCode::Char('x')]);

        let capture = capture_cursor(&scene, &mut backend, (2, 2), CaptureMode::OneKey).unwrap();
        assert_eq!((capture.x, capture.y), (3, 3));
        assert_eq!(capture.key, Some(Key::char('x')));
        assert_eq!(backend.cursor(), Some((3, 3)));
    }

    #[test]
    fn one_key_clamps_at_every_edge() {
        let scene = Scene::new();
        let mut keys = vec![KeyCode::Left; 20];
        keys.extend([KeyCode::Up; 20]);
        keys.push(KeyCode::Enter);
        let mut backend = HeadlessBackend::new(4, 3).with_keys(keys);
        let capture = capture_cursor(&scene, &mut backend, (1, 1), CaptureMode::OneKey).unwrap();
        assert_eq!((capture.x, capture.y), (0, 0));

        let mut keys = vec![KeyCode::Right; 20];
        keys.extend([KeyCode::Down; 20]);
        keys.push(KeyCode::Enter);
        backend.push_keys(keys);
        let capture = capture_cursor(&scene, &mut backend, (1, 1), CaptureMode::OneKey).unwrap();
        assert_eq!((capture.x, capture.y), (3, 2));
    }

    #[test]
    fn start_outside_screen_is_clamped() {
        let scene = Scene::new();
        let mut backend = HeadlessBackend::new(4, 3).with_keys([KeyCode::Tab]);
        let capture = capture_cursor(&scene, &mut backend, (50, 50), CaptureMode::OneKey).unwrap();
        assert_eq!((capture.x, capture.y), (3, 2));
    }

    #[test]
    fn until_skips_other_keys_and_drops_terminator() {
        let scene = Scene::new();
        let mut backend = HeadlessBackend::new(10, 5).with_keys([
            KeyCode::Char('a'),
            KeyCode::Right,
            KeyCode::Tab,
            KeyCode::Right,
            KeyCode::Enter,
        ]);

        let capture =
            capture_cursor(&scene, &mut backend, (0, 0), CaptureMode::Until(KeyCode::Enter)).unwrap();
        assert_eq!(capture, CursorCapture { x: 2, y: 0, key: None });
        assert_eq!(backend.flushes(), 5);
    }

    #[test]
    fn cursor_hidden_when_capture_ends() {
        let scene = Scene::new();
        let mut backend = HeadlessBackend::new(4, 3).with_keys([KeyCode::Right, KeyCode::Enter]);
        let capture = capture_cursor(&scene, &mut backend, (0, 0), CaptureMode::OneKey).unwrap();
        assert_eq!((capture.x, capture.y), (1, 0));
        assert_eq!(backend.cursor(), None);

        let mut backend = HeadlessBackend::new(4, 3).with_keys([KeyCode::Right]);
        assert!(capture_cursor(&scene, &mut backend, (0, 0), CaptureMode::OneKey).is_err());
        assert_eq!(backend.cursor(), None);
    }

    /// Headless screen that shrinks once a given number of keys were read.
    struct Shrinking {
        inner: HeadlessBackend,
        keys_before_shrink: usize,
        size: (u16, u16),
    }

    impl Backend for Shrinking {
        fn size(&self) -> (u16, u16) {
            self.inner.size()
        }

        fn clear(&mut self) {
            self.inner.clear();
        }

        fn draw(&mut self, x: u16, y: u16, cell: crate::buffer::Cell) -> Result<()> {
            self.inner.draw(x, y, cell)
        }

        fn set_cursor(&mut self, position: Option<(u16, u16)>) {
            self.inner.set_cursor(position);
        }

        fn flush(&mut self) -> Result<()> {
            self.inner.flush()
        }

        fn read_key(&mut self) -> Result<Key> {
            let key = self.inner.read_key()?;
            self.keys_before_shrink = self.keys_before_shrink.saturating_sub(1);
            if self.keys_before_shrink == 0 {
                self.inner.resize(self.size.0, self.size.1);
            }
            Ok(key)
        }
    }

    #[test]
    fn bounds_follow_a_resize_mid_capture() {
        let scene = Scene::new();
        let inner = HeadlessBackend::new(10, 5).with_keys([
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Down,
            KeyCode::Char('q'),
        ]);
        let mut backend = Shrinking {
            inner,
            keys_before_shrink: 2,
            size: (4, 2),
        };

        let capture = capture_cursor(&scene, &mut backend, (5, 3), CaptureMode::OneKey).unwrap();
        assert_eq!((capture.x, capture.y), (3, 1));
        assert_eq!(capture.key, Some(Key::char('q')));
    }

    #[test]
    fn redraws_the_scene_under_the_cursor() {
        let mut scene = Scene::new();
        let _p = scene.spawn(Point::new('@', 1, 0, 0)).unwrap();
        let mut backend = HeadlessBackend::new(3, 1);

        let err = capture_cursor(&scene, &mut backend, (0, 0), CaptureMode::OneKey).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
        assert_eq!(backend.row(0), " @ ");
    }
}

use winit::event::{MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::OrbitController;

/// Bridges winit pointer/wheel events to the orbit controller.
///
/// Keeps the last cursor position so a button press can start the drag at
/// the right spot, and reports consumed events back to the caller so wheel
/// input never falls through to anything else.
#[derive(Debug, Default)]
pub struct PointerInput {
    cursor: Option<(f32, f32)>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one window event. Returns true if the event drove the camera.
    pub fn process_event(&mut self, event: &WindowEvent, orbit: &mut OrbitController) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32, orbit)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.on_left_button(state.is_pressed(), orbit),
            WindowEvent::MouseWheel { delta, .. } => {
                orbit.apply_zoom(wheel_sign(delta));
                true
            }
            _ => false,
        }
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32, orbit: &mut OrbitController) -> bool {
        self.cursor = Some((x, y));
        orbit.update_drag(x, y);
        orbit.is_dragging()
    }

    fn on_left_button(&mut self, pressed: bool, orbit: &mut OrbitController) -> bool {
        if pressed {
            let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
            orbit.begin_drag(x, y);
        } else {
            orbit.end_drag();
        }
        true
    }
}

/// Reduce a wheel delta to the -1/0/+1 step the controller expects.
/// winit's line delta is positive scrolling away from the user, the inverse
/// of the original host's convention, so the sign is flipped: wheel toward
/// the user zooms out.
pub fn wheel_sign(delta: &MouseScrollDelta) -> f32 {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    };
    if y == 0.0 {
        0.0
    } else {
        -y.signum()
    }
}

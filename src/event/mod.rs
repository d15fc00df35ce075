//! Contains information that is relevant to events coming from the system, e.g. keyboard input,
//! and turns those events into edits of the [SceneState].
//!
//! [SceneState]: ../struct.SceneState.html

use crate::{
    math::Vector2,
    projection::ProjectionMode,
    scene_state::{Command, Response, SceneState, TransformMode},
    SceneError,
};
use std::collections::HashSet;

pub use winit::{dpi::PhysicalPosition, event::*};

/// Scroll wheels that report pixels report this many per line.
const PIXELS_PER_LINE: f32 = 120.0;

/// The command bound to the given key, if any.
pub fn key_binding(key: VirtualKeyCode) -> Option<Command> {
    use VirtualKeyCode::*;

    let command = match key {
        Escape => Command::Exit,
        Z => Command::PreviousModel,
        X => Command::NextModel,
        O => Command::SetProjection(ProjectionMode::Orthogonal),
        P => Command::SetProjection(ProjectionMode::Perspective),
        T => Command::SetTransformMode(TransformMode::GeoTranslation),
        S => Command::SetTransformMode(TransformMode::GeoScaling),
        R => Command::SetTransformMode(TransformMode::GeoRotation),
        E => Command::SetTransformMode(TransformMode::ViewEye),
        C => Command::SetTransformMode(TransformMode::ViewCenter),
        U => Command::SetTransformMode(TransformMode::ViewUp),
        K => Command::SetTransformMode(TransformMode::LightEdit),
        J => Command::SetTransformMode(TransformMode::ShininessEdit),
        L => Command::CycleLight,
        G => Command::ToggleMagFilter,
        B => Command::ToggleMinFilter,
        W => Command::ToggleWireframe,
        Left => Command::PreviousEyeOffset,
        Right => Command::NextEyeOffset,
        I => Command::PrintInfo,
        _ => return None,
    };
    Some(command)
}

/// The state of the keyboard. This can be used to check which keys are pressed during the current frame.
#[derive(Debug, Default)]
pub struct KeyboardState {
    pressed: HashSet<VirtualKeyCode>,
}

impl KeyboardState {
    /// Check if the given key is pressed.
    pub fn is_pressed(&self, key: VirtualKeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// The state of the mouse.
#[derive(Debug, Default)]
pub struct MouseState {
    /// The last known cursor position, in window pixels. `None` until the first cursor event
    /// arrives.
    pub position: Option<(f32, f32)>,
    pub left_pressed: bool,
}

/// Input state that persists between window events.
#[derive(Debug, Default)]
pub struct EventState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl EventState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a window event into the scene.
    ///
    /// Edits that would make the view or projection degenerate are dropped. The scene keeps its
    /// previous state and logs a warning.
    pub fn update(&mut self, event: &WindowEvent, scene: &mut SceneState) -> Response {
        match event {
            WindowEvent::CloseRequested => return Response::Exit,
            WindowEvent::Focused(false) => self.focus_lost(),
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => return self.key_pressed(*key, scene),
                ElementState::Released => self.key_released(*key),
            },
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y): (f32, f32) = (*position).into();
                ignore_rejected(self.cursor_moved((x, y), scene));
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*button, *state),
            WindowEvent::MouseWheel { delta, .. } => {
                let y_offset = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
                };
                ignore_rejected(self.scrolled(y_offset, scene));
            }
            WindowEvent::Resized(size) => {
                ignore_rejected(self.resized(size.width, size.height, scene));
            }
            _ => {}
        }
        Response::Continue
    }

    /// Run the command bound to `key`. Held keys repeat on most platforms, only the first press
    /// triggers the command.
    pub fn key_pressed(&mut self, key: VirtualKeyCode, scene: &mut SceneState) -> Response {
        if !self.keyboard.pressed.insert(key) {
            return Response::Continue;
        }
        match key_binding(key) {
            Some(command) => scene.apply(command).unwrap_or(Response::Continue),
            None => Response::Continue,
        }
    }

    pub fn key_released(&mut self, key: VirtualKeyCode) {
        self.keyboard.pressed.remove(&key);
    }

    /// Forget held keys and buttons. Their release events go to whatever window has focus.
    pub fn focus_lost(&mut self) {
        self.keyboard.pressed.clear();
        self.mouse.left_pressed = false;
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if let MouseButton::Left = button {
            self.mouse.left_pressed = state == ElementState::Pressed;
        }
    }

    /// Track the cursor, and drag the current transform target while the left button is held.
    ///
    /// The first cursor event only records the position.
    pub fn cursor_moved(
        &mut self,
        position: (f32, f32),
        scene: &mut SceneState,
    ) -> Result<(), SceneError> {
        let previous = self.mouse.position.replace(position);
        match previous {
            Some((x, y)) if self.mouse.left_pressed => {
                scene.drag(Vector2::new(position.0 - x, position.1 - y))
            }
            _ => Ok(()),
        }
    }

    pub fn scrolled(&mut self, y_offset: f32, scene: &mut SceneState) -> Result<(), SceneError> {
        scene.scroll(y_offset)
    }

    pub fn resized(
        &mut self,
        width: u32,
        height: u32,
        scene: &mut SceneState,
    ) -> Result<(), SceneError> {
        scene.resize(width, height)
    }
}

fn ignore_rejected(result: Result<(), SceneError>) {
    if let Err(e) = result {
        log::trace!("Input rejected: {}", e);
    }
}

//! winit window-event adapter (feature `viewer`).
//!
//! Translates raw [`WindowEvent`]s into [`RigInputEvent`]s with the default
//! identifiers, and accumulates this frame's cursor motion so the adapter
//! can double as the controller's [`InputSource`].

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::event::{RigInputEvent, ROTATE_BUTTON_ID, SCROLL_AXIS_ID};
use super::source::InputSource;

/// Tracks cursor motion and maps window events onto rig input.
///
/// Call [`handle_window_event`](Self::handle_window_event) for every event,
/// feed any returned [`RigInputEvent`] to the controller, and call
/// [`end_frame`](Self::end_frame) after the per-step update so pointer
/// deltas do not bleed across frames.
pub struct WindowInput {
    last_cursor_pos: Option<Vec2>,
    frame_delta: Vec2,
}

impl Default for WindowInput {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowInput {
    /// Create an adapter with no cursor history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor_pos: None,
            frame_delta: Vec2::ZERO,
        }
    }

    /// Translate a window event. Cursor motion is absorbed into the frame
    /// delta and returns nothing; scroll and right-button events come back
    /// as rig input for the controller.
    pub fn handle_window_event(
        &mut self,
        event: &WindowEvent,
    ) -> Option<RigInputEvent<'static>> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                if let Some(last) = self.last_cursor_pos {
                    self.frame_delta += pos - last;
                }
                self.last_cursor_pos = Some(pos);
                None
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state,
                ..
            } => Some(RigInputEvent::Button {
                id: ROTATE_BUTTON_ID,
                pressed: *state == ElementState::Pressed,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let value = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(RigInputEvent::Axis {
                    id: SCROLL_AXIS_ID,
                    value,
                })
            }
            _ => None,
        }
    }

    /// Clear the accumulated pointer delta; call once per frame, after the
    /// controller update has consumed it.
    pub fn end_frame(&mut self) {
        self.frame_delta = Vec2::ZERO;
    }
}

impl InputSource for WindowInput {
    fn pointer_delta(&self) -> Vec2 {
        self.frame_delta
    }
}

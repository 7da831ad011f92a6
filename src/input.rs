//! Pointer and keyboard state tracked from window events.
//!
//! The app consumes this instead of raw winit events: continuous state
//! (cursor position, drag) plus per-frame edges (key just pressed, scroll).

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input state for one window.
#[derive(Debug, Default)]
pub struct Input {
    cursor_position: Option<Vec2>,
    cursor_ndc: Option<Vec2>,
    dragging: bool,
    drag_delta: Vec2,
    scroll_delta: f32,
    space_pressed: bool,
    window_size: (u32, u32),
}

impl Input {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_size: (width, height),
            ..Default::default()
        }
    }

    /// Cursor position in physical pixels, if the cursor is over the window.
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor_position
    }

    /// Cursor position in normalized device coordinates: both axes in
    /// [-1, 1], Y up (inverted from pixel space).
    pub fn cursor_ndc(&self) -> Option<Vec2> {
        self.cursor_ndc
    }

    /// Whether a left-button orbit drag is in progress.
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Accumulated drag movement in pixels since the last frame.
    pub fn drag_delta(&self) -> Vec2 {
        self.drag_delta
    }

    /// Scroll wheel movement since the last frame.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Whether Space went down this frame (pause toggle).
    pub fn pause_toggled(&self) -> bool {
        self.space_pressed
    }

    /// Clear per-frame deltas. Call once per rendered frame.
    pub fn begin_frame(&mut self) {
        self.drag_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
        self.space_pressed = false;
    }

    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Feed one window event. Events consumed by the UI layer should not
    /// reach this.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
                self.cursor_ndc = None;
                self.dragging = false;
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    self.dragging = *state == ElementState::Pressed;
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => *y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Space)
                    && event.state == ElementState::Pressed
                    && !event.repeat
                {
                    self.space_pressed = true;
                }
            }
            _ => {}
        }
    }

    /// Feed an event the UI layer consumed.
    ///
    /// Pointer presses and moves belong to the UI then, but a left-button
    /// release must still end any drag in progress: a drag begun over the
    /// scene can finish with the cursor over the control panel.
    pub fn handle_consumed_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseInput {
            state: ElementState::Released,
            button: MouseButton::Left,
            ..
        } = event
        {
            self.end_drag();
        }
    }

    fn end_drag(&mut self) {
        self.dragging = false;
    }

    fn cursor_moved(&mut self, pos: Vec2) {
        if self.dragging {
            if let Some(last) = self.cursor_position {
                self.drag_delta += pos - last;
            }
        }
        self.cursor_position = Some(pos);

        let (w, h) = self.window_size;
        if w > 0 && h > 0 {
            self.cursor_ndc = Some(Vec2::new(
                (pos.x / w as f32) * 2.0 - 1.0,
                1.0 - (pos.y / h as f32) * 2.0, // Y flipped
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(input: &mut Input, x: f32, y: f32) {
        input.cursor_moved(Vec2::new(x, y));
    }

    #[test]
    fn test_cursor_ndc_center_and_corners() {
        let mut input = Input::new(800, 600);

        moved(&mut input, 400.0, 300.0);
        let ndc = input.cursor_ndc().unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);

        moved(&mut input, 0.0, 0.0);
        let ndc = input.cursor_ndc().unwrap();
        assert!((ndc.x + 1.0).abs() < 1e-5);
        assert!((ndc.y - 1.0).abs() < 1e-5); // top of window is +1 in NDC

        moved(&mut input, 800.0, 600.0);
        let ndc = input.cursor_ndc().unwrap();
        assert!((ndc.x - 1.0).abs() < 1e-5);
        assert!((ndc.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_begin_frame_clears_deltas() {
        let mut input = Input::new(800, 600);
        input.scroll_delta = 2.0;
        input.drag_delta = Vec2::splat(5.0);
        input.space_pressed = true;

        input.begin_frame();

        assert_eq!(input.scroll_delta(), 0.0);
        assert_eq!(input.drag_delta(), Vec2::ZERO);
        assert!(!input.pause_toggled());
    }

    #[test]
    fn test_drag_accumulates_only_while_pressed() {
        let mut input = Input::new(800, 600);
        moved(&mut input, 100.0, 100.0);
        moved(&mut input, 110.0, 100.0);
        assert_eq!(input.drag_delta(), Vec2::ZERO);

        input.dragging = true;
        moved(&mut input, 120.0, 105.0);
        assert_eq!(input.drag_delta(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_release_over_ui_still_ends_drag() {
        let mut input = Input::new(800, 600);
        moved(&mut input, 100.0, 100.0);
        input.dragging = true;
        moved(&mut input, 120.0, 110.0);
        assert_eq!(input.drag_delta(), Vec2::new(20.0, 10.0));

        // The button went up over the control panel, so the release was
        // consumed by the UI layer instead of reaching handle_event.
        input.end_drag();
        assert!(!input.dragging());

        // Later cursor movement must not rotate the camera.
        input.begin_frame();
        moved(&mut input, 300.0, 300.0);
        assert_eq!(input.drag_delta(), Vec2::ZERO);
    }
}

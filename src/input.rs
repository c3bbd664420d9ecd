// Mouse hit-testing against shapes and textures

use crate::draw::TextureSize;
use crate::geometry::{Circle, Rect, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Side,
    Extra,
    Forward,
    Back,
}

impl MouseButton {
    pub const ALL: [MouseButton; 7] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Side,
        MouseButton::Extra,
        MouseButton::Forward,
        MouseButton::Back,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Mouse state as reported by the windowing backend for the current frame.
pub trait MouseInput {
    fn mouse_position(&self) -> Vector2;

    /// held down this frame
    fn is_button_down(&self, button: MouseButton) -> bool;

    /// went down this frame
    fn is_button_pressed(&self, button: MouseButton) -> bool;
}

/// Mouse state captured once per frame.
///
/// Backends fill one of these from their event loop; it is also what tests
/// drive the hit-testing helpers with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseSnapshot {
    pub position: Vector2,
    down: [bool; 7],
    pressed: [bool; 7],
}

impl MouseSnapshot {
    pub fn at(position: Vector2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_down(mut self, button: MouseButton) -> Self {
        self.down[button.index()] = true;
        self
    }

    /// a press also counts as the button being held
    pub fn with_pressed(mut self, button: MouseButton) -> Self {
        self.pressed[button.index()] = true;
        self.down[button.index()] = true;
        self
    }

    /// carry held buttons into the next frame; presses only last one frame
    pub fn next_frame(&self, position: Vector2) -> Self {
        Self {
            position,
            down: self.down,
            pressed: [false; 7],
        }
    }

    pub fn release(mut self, button: MouseButton) -> Self {
        self.down[button.index()] = false;
        self.pressed[button.index()] = false;
        self
    }
}

impl MouseInput for MouseSnapshot {
    fn mouse_position(&self) -> Vector2 {
        self.position
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.down[button.index()]
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed[button.index()]
    }
}

pub fn is_mouse_over_rect<M: MouseInput + ?Sized>(mouse: &M, rect: Rect) -> bool {
    rect.contains(mouse.mouse_position())
}

pub fn is_mouse_over_circle<M: MouseInput + ?Sized>(mouse: &M, circle: Circle) -> bool {
    circle.contains(mouse.mouse_position())
}

/// the texture is treated as a rectangle of its pixel size drawn at `pos`
pub fn is_mouse_over_texture<M, T>(mouse: &M, texture: &T, pos: Vector2) -> bool
where
    M: MouseInput + ?Sized,
    T: TextureSize + ?Sized,
{
    let rect = Rect::new(pos.x, pos.y, texture.width() as f32, texture.height() as f32);
    is_mouse_over_rect(mouse, rect)
}

pub fn rect_click<M: MouseInput + ?Sized>(mouse: &M, rect: Rect, button: MouseButton) -> bool {
    is_mouse_over_rect(mouse, rect) && mouse.is_button_down(button)
}

pub fn rect_clicked<M: MouseInput + ?Sized>(mouse: &M, rect: Rect, button: MouseButton) -> bool {
    is_mouse_over_rect(mouse, rect) && mouse.is_button_pressed(button)
}

pub fn texture_click<M, T>(mouse: &M, texture: &T, pos: Vector2, button: MouseButton) -> bool
where
    M: MouseInput + ?Sized,
    T: TextureSize + ?Sized,
{
    is_mouse_over_texture(mouse, texture, pos) && mouse.is_button_down(button)
}

pub fn texture_clicked<M, T>(mouse: &M, texture: &T, pos: Vector2, button: MouseButton) -> bool
where
    M: MouseInput + ?Sized,
    T: TextureSize + ?Sized,
{
    is_mouse_over_texture(mouse, texture, pos) && mouse.is_button_pressed(button)
}

// Plain 2D geometry: points, rectangles, circles and the collision checks
// the hit-testing helpers are built on.

use std::ops::{Add, Div, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, other: Vector2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Right and bottom edges are exclusive.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub position: Vector2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(position: Vector2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Points exactly on the edge count as inside.
    pub fn contains(&self, point: Vector2) -> bool {
        point.distance_squared(self.position) <= self.radius * self.radius
    }
}

/// top-left corner that puts a box of `size` centred on `point`
pub fn center_rect_to_point(point: Vector2, size: Vector2) -> Vector2 {
    point - size / 2.0
}

pub fn create_rectangle(position: Vector2, size: Vector2) -> Rect {
    Rect::new(position.x, position.y, size.x, size.y)
}

pub fn check_collision_point_rect(point: Vector2, rect: Rect) -> bool {
    rect.contains(point)
}

pub fn check_collision_point_circle(point: Vector2, circle: Circle) -> bool {
    circle.contains(point)
}

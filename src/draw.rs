// Drawing wrappers and text/texture centering over a pluggable backend.

use crate::color::Color;
use crate::geometry::{Circle, Vector2};

pub trait TextureSize {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Text measurement provided by whatever font system the backend uses.
pub trait FontMetrics {
    fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> Vector2;
}

/// A font bundled with the size and spacing it is drawn at.
#[derive(Debug, Clone)]
pub struct FontData<F> {
    pub font: F,
    pub font_size: f32,
    pub spacing: f32,
}

impl<F> FontData<F> {
    pub fn new(font: F, font_size: f32) -> Self {
        Self {
            font,
            font_size,
            spacing: 0.0,
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<F: FontMetrics> FontData<F> {
    pub fn measure(&self, text: &str) -> Vector2 {
        self.font.measure_text(text, self.font_size, self.spacing)
    }

    pub fn center_text_to_point(&self, point: Vector2, text: &str) -> Vector2 {
        center_text_to_point(point, &self.font, self.font_size, text, self.spacing)
    }
}

pub fn center_text_to_point<F: FontMetrics + ?Sized>(
    point: Vector2,
    font: &F,
    font_size: f32,
    text: &str,
    spacing: f32,
) -> Vector2 {
    point - font.measure_text(text, font_size, spacing) / 2.0
}

/// Halving uses integer division on the pixel size, so odd dimensions
/// round the offset down.
pub fn center_texture_to_point<T: TextureSize + ?Sized>(point: Vector2, texture: &T) -> Vector2 {
    Vector2::new(
        point.x - (texture.width() / 2) as f32,
        point.y - (texture.height() / 2) as f32,
    )
}

/// The primitive draw calls of the rendering backend.
pub trait Canvas {
    type Font;

    fn draw_circle(&mut self, center: Vector2, radius: f32, color: Color);

    fn draw_text(
        &mut self,
        font: &Self::Font,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        color: Color,
    );
}

/// Anything that knows how to draw itself centred on its own anchor.
pub trait CenteredObject<C: Canvas + ?Sized> {
    fn draw(&self, canvas: &mut C);
}

pub fn draw_centered_object<C, O>(canvas: &mut C, obj: &O)
where
    C: Canvas + ?Sized,
    O: CenteredObject<C> + ?Sized,
{
    obj.draw(canvas);
}

pub fn draw_circle<C: Canvas + ?Sized>(canvas: &mut C, circle: Circle, color: Color) {
    canvas.draw_circle(circle.position, circle.radius, color);
}

pub fn draw_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    font_data: &FontData<C::Font>,
    text: &str,
    position: Vector2,
    color: Color,
) {
    canvas.draw_text(
        &font_data.font,
        text,
        position,
        font_data.font_size,
        font_data.spacing,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // every glyph is `font_size / 2` wide plus spacing between glyphs
    #[derive(Debug, Clone)]
    struct FixedFont;

    impl FontMetrics for FixedFont {
        fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> Vector2 {
            let n = text.chars().count() as f32;
            let gaps = (n - 1.0).max(0.0);
            Vector2::new(n * font_size / 2.0 + gaps * spacing, font_size)
        }
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Circle(Vector2, f32, Color),
        Text(String, Vector2, f32, f32, Color),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        type Font = FixedFont;

        fn draw_circle(&mut self, center: Vector2, radius: f32, color: Color) {
            self.calls.push(Call::Circle(center, radius, color));
        }

        fn draw_text(
            &mut self,
            _font: &FixedFont,
            text: &str,
            position: Vector2,
            font_size: f32,
            spacing: f32,
            color: Color,
        ) {
            self.calls
                .push(Call::Text(text.to_string(), position, font_size, spacing, color));
        }
    }

    struct Label {
        anchor: Vector2,
        font: FontData<FixedFont>,
        text: String,
    }

    impl CenteredObject<Recorder> for Label {
        fn draw(&self, canvas: &mut Recorder) {
            let pos = self.font.center_text_to_point(self.anchor, &self.text);
            draw_text(canvas, &self.font, &self.text, pos, Color::WHITE);
        }
    }

    struct Tile(u32, u32);

    impl TextureSize for Tile {
        fn width(&self) -> u32 {
            self.0
        }

        fn height(&self) -> u32 {
            self.1
        }
    }

    #[test]
    fn test_center_text_to_point() {
        let pos = center_text_to_point(Vector2::new(100.0, 100.0), &FixedFont, 20.0, "abcd", 0.0);
        // 4 glyphs * 10 wide, 20 tall
        assert_eq!(pos, Vector2::new(80.0, 90.0));

        let font = FontData::new(FixedFont, 20.0).with_spacing(2.0);
        assert_eq!(font.measure("abcd"), Vector2::new(46.0, 20.0));
        assert_eq!(
            font.center_text_to_point(Vector2::new(100.0, 100.0), "abcd"),
            Vector2::new(77.0, 90.0)
        );
    }

    #[test]
    fn test_center_texture_uses_integer_halving() {
        let pos = center_texture_to_point(Vector2::new(50.0, 50.0), &Tile(33, 10));
        assert_eq!(pos, Vector2::new(34.0, 45.0));
    }

    #[test]
    fn test_draw_wrappers_forward_to_canvas() {
        let mut canvas = Recorder::default();
        let font = FontData::new(FixedFont, 16.0).with_spacing(1.0);

        draw_circle(&mut canvas, Circle::new(Vector2::new(5.0, 6.0), 3.0), Color::RED);
        draw_text(&mut canvas, &font, "hi", Vector2::new(1.0, 2.0), Color::BLUE);

        assert_eq!(
            canvas.calls,
            vec![
                Call::Circle(Vector2::new(5.0, 6.0), 3.0, Color::RED),
                Call::Text("hi".to_string(), Vector2::new(1.0, 2.0), 16.0, 1.0, Color::BLUE),
            ]
        );
    }

    #[test]
    fn test_draw_centered_object() {
        let mut canvas = Recorder::default();
        let label = Label {
            anchor: Vector2::new(50.0, 50.0),
            font: FontData::new(FixedFont, 10.0),
            text: "ab".to_string(),
        };

        draw_centered_object(&mut canvas, &label);

        assert_eq!(
            canvas.calls,
            vec![Call::Text(
                "ab".to_string(),
                Vector2::new(45.0, 45.0),
                10.0,
                0.0,
                Color::WHITE
            )]
        );
    }
}

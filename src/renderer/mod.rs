//! Draw contract between the simulation and whatever puts pixels on screen
//!
//! The simulation hands out one `Sprite` per life form per frame. A backend
//! keeps a cached circle image per sprite id and only re-rasterises the
//! layers flagged as stale.

use serde::Serialize;

use crate::Vector2;
use crate::sim::Color;

/// Everything a backend needs to draw one life form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub id: u32,
    pub position: Vector2,
    pub radius: f64,
    pub fill: Color,
    pub edge: Color,
    /// Fill color or radius changed since the last frame
    pub redraw_fill: bool,
    /// Edge color or radius changed since the last frame
    pub redraw_edge: bool,
}

impl Sprite {
    /// Top-left corner of the sprite's bounding square
    pub fn origin(&self) -> Vector2 {
        self.position - Vector2::splat(self.radius)
    }

    /// Side of the square image holding the circle
    pub fn image_size(&self) -> u32 {
        (2.0 * self.radius + 1.0) as u32
    }
}

pub trait Renderer {
    fn draw(&mut self, sprite: &Sprite);
}

/// Headless backend that only counts work
#[derive(Debug, Clone, Default)]
pub struct RedrawCounter {
    /// Sprites submitted
    pub sprites: usize,
    /// Sprites with at least one stale layer
    pub redraws: usize,
    /// Circle images re-rasterised (fill and edge count separately)
    pub layers: usize,
}

impl Renderer for RedrawCounter {
    fn draw(&mut self, sprite: &Sprite) {
        self.sprites += 1;
        if sprite.redraw_fill || sprite.redraw_edge {
            self.redraws += 1;
        }
        self.layers += usize::from(sprite.redraw_fill) + usize::from(sprite.redraw_edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(redraw_fill: bool, redraw_edge: bool) -> Sprite {
        Sprite {
            id: 1,
            position: Vector2::new(100.0, 50.0),
            radius: 25.0,
            fill: Color::WHITE,
            edge: Color::WHITE,
            redraw_fill,
            redraw_edge,
        }
    }

    #[test]
    fn test_sprite_image_geometry() {
        let s = sprite(false, false);
        assert_eq!(s.origin(), Vector2::new(75.0, 25.0));
        assert_eq!(s.image_size(), 51);
    }

    #[test]
    fn test_redraw_counter() {
        let mut counter = RedrawCounter::default();
        counter.draw(&sprite(true, true));
        counter.draw(&sprite(false, true));
        counter.draw(&sprite(false, false));
        assert_eq!(counter.sprites, 3);
        assert_eq!(counter.redraws, 2);
        assert_eq!(counter.layers, 3);
    }
}

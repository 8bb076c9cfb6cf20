use image::{Rgb, RgbImage, imageops};

use crate::core::data::colour::Colour;
use crate::presenters::raster::font::{GLYPH_SIZE, glyph, is_lit};

fn rgb(colour: Colour) -> Rgb<u8> {
    Rgb(colour.to_array())
}

/// Axis-aligned pixel rectangle; `x`/`y` is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[must_use]
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

/// Drawing surface; every primitive clips silently at the image border.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, rgb(background)),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width() as i64);
        let y1 = rect.bottom().min(self.height() as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, rgb(colour));
            }
        }
    }

    /// Copies `image` with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, image: &RgbImage, x: i64, y: i64) {
        imageops::overlay(&mut self.image, image, x, y);
    }

    /// Outline drawn just outside `rect`, `thickness` pixels wide.
    pub fn frame_rect(&mut self, rect: Rect, thickness: i64, colour: Colour) {
        let t = thickness.max(1);
        let outer_width = rect.width + 2 * t;

        self.fill_rect(Rect { x: rect.x - t, y: rect.y - t, width: outer_width, height: t }, colour);
        self.fill_rect(Rect { x: rect.x - t, y: rect.bottom(), width: outer_width, height: t }, colour);
        self.fill_rect(Rect { x: rect.x - t, y: rect.y, width: t, height: rect.height }, colour);
        self.fill_rect(Rect { x: rect.right(), y: rect.y, width: t, height: rect.height }, colour);
    }

    /// Width in pixels of `text` rendered at `scale`.
    #[must_use]
    pub fn text_width(text: &str, scale: i64) -> i64 {
        text.chars().count() as i64 * GLYPH_SIZE as i64 * scale
    }

    #[must_use]
    pub fn text_height(scale: i64) -> i64 {
        GLYPH_SIZE as i64 * scale
    }

    /// Left-to-right text with its top-left corner at `(x, y)`.
    pub fn draw_text(&mut self, text: &str, x: i64, y: i64, scale: i64, colour: Colour) {
        let cell = GLYPH_SIZE as i64 * scale;

        for (index, ch) in text.chars().enumerate() {
            let bitmap = glyph(ch);
            let origin_x = x + index as i64 * cell;

            for row in 0..GLYPH_SIZE {
                for column in 0..GLYPH_SIZE {
                    if is_lit(bitmap, column, row) {
                        let block = Rect {
                            x: origin_x + column as i64 * scale,
                            y: y + row as i64 * scale,
                            width: scale,
                            height: scale,
                        };
                        self.fill_rect(block, colour);
                    }
                }
            }
        }
    }

    /// Text rotated a quarter turn anticlockwise, reading bottom to top.
    /// `(x, y)` is the bottom-left corner of the rotated run.
    pub fn draw_text_vertical(&mut self, text: &str, x: i64, y: i64, scale: i64, colour: Colour) {
        let cell = GLYPH_SIZE as i64 * scale;

        for (index, ch) in text.chars().enumerate() {
            let bitmap = glyph(ch);
            let origin_y = y - index as i64 * cell;

            for row in 0..GLYPH_SIZE {
                for column in 0..GLYPH_SIZE {
                    if is_lit(bitmap, column, row) {
                        let block = Rect {
                            x: x + row as i64 * scale,
                            y: origin_y - (column as i64 + 1) * scale,
                            width: scale,
                            height: scale,
                        };
                        self.fill_rect(block, colour);
                    }
                }
            }
        }
    }

    /// Bounding box of every pixel that differs from `background`.
    #[must_use]
    pub fn content_bounds(&self, background: Colour) -> Option<Rect> {
        let background = rgb(background);
        let mut bounds: Option<(u32, u32, u32, u32)> = None;

        for (x, y, pixel) in self.image.enumerate_pixels() {
            if *pixel == background {
                continue;
            }

            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }

        bounds.map(|(x0, y0, x1, y1)| Rect {
            x: x0 as i64,
            y: y0 as i64,
            width: (x1 - x0 + 1) as i64,
            height: (y1 - y0 + 1) as i64,
        })
    }

    /// Crops to the drawn content plus `padding` pixels, never past the border.
    #[must_use]
    pub fn into_cropped(self, background: Colour, padding: i64) -> RgbImage {
        let Some(bounds) = self.content_bounds(background) else {
            return self.image;
        };

        let x0 = (bounds.x - padding).max(0);
        let y0 = (bounds.y - padding).max(0);
        let x1 = (bounds.right() + padding).min(self.width() as i64);
        let y1 = (bounds.bottom() + padding).min(self.height() as i64);

        imageops::crop_imm(&self.image, x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32)
            .to_image()
    }
}

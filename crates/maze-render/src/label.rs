use std::fmt;

use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};

use crate::output::RenderError;

/// DejaVu Sans Mono, see `builtin_font.LICENSE`.
const BUILTIN_FONT: &[u8] = include_bytes!("builtin_font.ttf");

/// Pixel rectangle `[x0, x1) x [y0, y1)` that text is clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Clip {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 as i32 && x < self.x1 as i32 && y >= self.y0 as i32 && y < self.y1 as i32
    }
}

/// Draws short text labels into an RGBA image using a TrueType font.
#[derive(Clone)]
pub struct Labeler {
    font: Font<'static>,
}

impl fmt::Debug for Labeler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Labeler").finish_non_exhaustive()
    }
}

impl Labeler {
    /// A labeler using the bundled monospace font.
    pub fn builtin() -> Result<Self, RenderError> {
        let font = Font::try_from_bytes(BUILTIN_FONT).ok_or(RenderError::InvalidFont)?;
        Ok(Self { font })
    }

    /// A labeler from raw TrueType font data.
    pub fn from_font_data(data: Vec<u8>) -> Result<Self, RenderError> {
        let font = Font::try_from_vec(data).ok_or(RenderError::InvalidFont)?;
        Ok(Self { font })
    }

    /// Draw `text` with its baseline starting at (`x`, `y`), `size` pixels
    /// high, alpha-blending `fg` over what is already in `img`. Ink outside
    /// `clip` is dropped.
    pub fn draw(
        &self,
        img: &mut RgbaImage,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        fg: [u8; 4],
        clip: Clip,
    ) {
        let scale = Scale::uniform(size);
        for glyph in self.font.layout(text, scale, point(x, y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if !clip.contains(px, py) {
                    return;
                }
                let pixel = img.get_pixel_mut(px as u32, py as u32);
                let bg = pixel.0;
                *pixel = Rgba([
                    blend(bg[0], fg[0], v),
                    blend(bg[1], fg[1], v),
                    blend(bg[2], fg[2], v),
                    blend(bg[3], fg[3], v),
                ]);
            });
        }
    }
}

/// Simple alpha-blend of two u8 color channels.
fn blend(bg: u8, fg: u8, alpha: f32) -> u8 {
    ((1.0 - alpha) * bg as f32 + alpha * fg as f32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn ink(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p.0 != WHITE).count()
    }

    #[test]
    fn builtin_font_parses() {
        assert!(Labeler::builtin().is_ok());
    }

    #[test]
    fn garbage_font_is_rejected() {
        assert!(matches!(
            Labeler::from_font_data(vec![0, 1, 2, 3]),
            Err(RenderError::InvalidFont)
        ));
    }

    #[test]
    fn text_leaves_ink_inside_clip_only() {
        let l = Labeler::builtin().unwrap();
        let mut img = RgbaImage::from_pixel(60, 60, Rgba(WHITE));
        let clip = Clip {
            x0: 0,
            y0: 0,
            x1: 30,
            y1: 60,
        };
        l.draw(&mut img, "[12 34]", (6.0, 40.0), 13.0, BLACK, clip);
        assert!(ink(&img) > 0);
        for y in 0..60 {
            for x in 30..60 {
                assert_eq!(img.get_pixel(x, y).0, WHITE);
            }
        }
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(10, 200, 0.0), 10);
        assert_eq!(blend(10, 200, 1.0), 200);
    }
}

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use egui::{Color32, Pos2};

use crate::canvas::{CanvasBuffer, CanvasError};

/// Conventional locations for a sans-serif TrueType face. Checked in order;
/// the first readable, parseable file wins.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Holds the font used by the text tool. Prefers a system font; if none is
/// usable, falls back to one of the faces egui embeds (degraded rendering,
/// never an error surfaced to the user).
pub struct FontStore {
    font: Option<FontArc>,
}

impl Default for FontStore {
    fn default() -> Self {
        Self::load()
    }
}

impl FontStore {
    pub fn load() -> Self {
        for path in SYSTEM_FONT_PATHS {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            match FontArc::try_from_vec(bytes) {
                Ok(font) => {
                    log::debug!("text tool using system font {path}");
                    return Self { font: Some(font) };
                }
                Err(err) => {
                    log::warn!("unparseable font {path}: {err}");
                }
            }
        }
        Self {
            font: embedded_fallback(),
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Rasterize `text` into the canvas with its top-left corner at `pos`,
    /// walking the caret with per-glyph kerning and advance and blending each
    /// glyph's coverage into the buffer.
    pub fn draw_text(
        &self,
        canvas: &mut CanvasBuffer,
        pos: Pos2,
        text: &str,
        size: f32,
        color: Color32,
    ) -> Result<(), CanvasError> {
        let Some(font) = &self.font else {
            return Err(CanvasError::Font("no usable font available".into()));
        };
        let scale = PxScale::from(size.max(1.0));
        let scaled = font.as_scaled(scale);
        // `pos` is the top-left of the text box, so the baseline sits one
        // ascent below it.
        let baseline = pos.y + scaled.ascent();

        let mut caret = pos.x;
        let mut prev: Option<ab_glyph::GlyphId> = None;
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            let gid = font.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, gid);
            }
            let glyph = gid.with_scale_and_position(scale, ab_glyph::point(caret, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|x, y, coverage| {
                    canvas.blend_pixel(
                        bounds.min.x.floor() as i64 + x as i64,
                        bounds.min.y.floor() as i64 + y as i64,
                        color,
                        coverage,
                    );
                });
            }
            caret += scaled.h_advance(gid);
            prev = Some(gid);
        }
        Ok(())
    }
}

/// Pull one of the faces egui ships with `default_fonts`. Prefer the
/// proportional default, otherwise take any embedded face.
fn embedded_fallback() -> Option<FontArc> {
    let defs = egui::FontDefinitions::default();
    let data = defs
        .font_data
        .get("Ubuntu-Light")
        .or_else(|| defs.font_data.values().next())?;
    match FontArc::try_from_vec(data.font.to_vec()) {
        Ok(font) => {
            log::debug!("text tool using an egui-embedded font");
            Some(font)
        }
        Err(err) => {
            log::error!("embedded fallback font failed to parse: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_some_font_always_loads() {
        // Either a system face or the egui-embedded fallback must be there.
        let store = FontStore::load();
        assert!(store.has_font());
    }

    #[test]
    fn test_text_marks_pixels_below_anchor() {
        let store = FontStore::load();
        let mut canvas = CanvasBuffer::new(200, 100, Color32::WHITE);
        store
            .draw_text(&mut canvas, Pos2::new(10.0, 10.0), "X", 40.0, Color32::BLACK)
            .unwrap();

        let mut darkened = 0;
        for y in 0..100 {
            for x in 0..200 {
                if canvas.pixel(x, y) != Some(Color32::WHITE) {
                    darkened += 1;
                    // Everything must land inside the glyph box below/right
                    // of the anchor.
                    assert!(x >= 5 && x <= 60, "x={x}");
                    assert!(y >= 10 && y <= 60, "y={y}");
                }
            }
        }
        assert!(darkened > 20, "glyph left only {darkened} pixels");
    }
}

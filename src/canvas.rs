use std::path::{Path, PathBuf};

use egui::{Color32, ColorImage, Pos2};
use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Default canvas size used when no persisted dimensions exist.
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Dimension cap for the resize dialog, keeps the buffer allocation sane.
pub const MAX_DIMENSION: u32 = 4096;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("font error: {0}")]
    Font(String),
}

/// The shadow raster buffer: an owned RGBA pixel grid kept in lockstep with
/// the on-screen canvas. Every drawing operation mutates this buffer, and the
/// displayed texture is re-uploaded from it, so the two can never diverge.
pub struct CanvasBuffer {
    image: RgbaImage,
    background: Color32,
    dirty: bool,
}

impl CanvasBuffer {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        let width = width.clamp(1, MAX_DIMENSION);
        let height = height.clamp(1, MAX_DIMENSION);
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(background)),
            background,
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Fill the whole buffer with `color` and make it the new background.
    /// This is a full overwrite: prior strokes are gone.
    pub fn fill(&mut self, color: Color32) {
        self.background = color;
        let px = to_rgba(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
        self.dirty = true;
    }

    /// Reset to a blank white canvas at the current dimensions.
    pub fn clear(&mut self) {
        self.fill(Color32::WHITE);
    }

    /// Replace the buffer with a fresh white one of the given size,
    /// discarding all content.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height, Color32::WHITE);
    }

    /// Draw one stroke segment between two consecutive pointer positions,
    /// stamping a filled disc of diameter `width` along the segment so the
    /// line gets round caps. No smoothing or interpolation beyond that.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32) {
        let radius = (width.max(1) as f32) / 2.0;
        let delta = to - from;
        let length = delta.length();
        // One stamp per pixel of travel keeps the segment gap-free.
        let steps = length.ceil() as u32;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let p = from + delta * t;
            self.stamp_disc(p.x, p.y, radius, color);
        }
        self.dirty = true;
    }

    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Color32) {
        let px = to_rgba(color);
        let r2 = radius * radius;
        let min_x = (cx - radius).floor() as i64;
        let max_x = (cx + radius).ceil() as i64;
        let min_y = (cy - radius).floor() as i64;
        let max_y = (cy + radius).ceil() as i64;
        for y in min_y..=max_y {
            if y < 0 || y >= self.image.height() as i64 {
                continue;
            }
            for x in min_x..=max_x {
                if x < 0 || x >= self.image.width() as i64 {
                    continue;
                }
                // Test against the pixel center.
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.image.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    /// Blend `color` into the pixel at (x, y) with the given coverage in
    /// 0..=1. Out-of-bounds writes are dropped. Used by glyph rasterization.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let blend = |src: u8, dst: u8| -> u8 {
            (src as f32 * coverage + dst as f32 * (1.0 - coverage)).round() as u8
        };
        *dst = Rgba([
            blend(color.r(), dst.0[0]),
            blend(color.g(), dst.0[1]),
            blend(color.b(), dst.0[2]),
            255,
        ]);
        self.dirty = true;
    }

    /// Read back a single pixel, used by the right-click pipette.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color32> {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return None;
        }
        let p = self.image.get_pixel(x as u32, y as u32);
        Some(Color32::from_rgb(p.0[0], p.0[1], p.0[2]))
    }

    /// Convert the buffer into an egui image for texture upload. The buffer
    /// is fully opaque, so unmultiplied RGBA is exact.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.image.width() as usize, self.image.height() as usize],
            self.image.as_raw(),
        )
    }

    /// True once since the last call if the buffer changed and the displayed
    /// texture needs a re-upload.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Write the buffer to `path` in the format implied by the extension.
    /// A path without an extension gets `.png` appended. Returns the path
    /// actually written.
    pub fn save(&self, path: &Path) -> Result<PathBuf, CanvasError> {
        let path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension("png")
        };
        self.image.save(&path)?;
        log::info!(
            "saved {}x{} canvas to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(path)
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}

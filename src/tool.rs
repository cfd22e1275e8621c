use egui::Color32;

/// Preset stroke widths offered in the toolbar next to the free slider.
pub const WIDTH_PRESETS: [u32; 4] = [1, 2, 5, 10];

/// The process-wide drawing mode. Switched by toolbar buttons, read by every
/// pointer-event handler. There are no ordering constraints between modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    /// Armed text placement: the next canvas click anchors the pending text.
    Text,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Brush => "🖌 Brush",
            Self::Eraser => "⌫ Eraser",
            Self::Text => "🗛 Text",
        }
    }
}

/// Brush configuration, replaced wholesale on change and persisted across
/// sessions. The eraser never overwrites `color`: its stroke color is derived
/// from the current background at draw time, so switching back to the brush
/// restores the old color for free.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BrushSettings {
    pub color: Color32,
    pub width: u32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: WIDTH_PRESETS[0],
        }
    }
}

impl BrushSettings {
    /// Color to stroke with for the given tool: the eraser paints in the
    /// background color, simulating erasure rather than transparency.
    pub fn stroke_color(&self, tool: Tool, background: Color32) -> Color32 {
        match tool {
            Tool::Eraser => background,
            _ => self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eraser_strokes_with_background() {
        let brush = BrushSettings::default();
        assert_eq!(
            brush.stroke_color(Tool::Eraser, Color32::BLUE),
            Color32::BLUE
        );
        assert_eq!(
            brush.stroke_color(Tool::Brush, Color32::BLUE),
            Color32::BLACK
        );
    }

    #[test]
    fn test_brush_color_untouched_by_eraser() {
        let brush = BrushSettings {
            color: Color32::RED,
            width: 5,
        };
        let _ = brush.stroke_color(Tool::Eraser, Color32::WHITE);
        assert_eq!(brush.color, Color32::RED);
    }
}

use egui::Color32;

use crate::canvas::{CanvasBuffer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::dialogs::{DialogAction, Dialogs};
use crate::input::StrokeTracker;
use crate::panels;
use crate::text::FontStore;
use crate::tool::{BrushSettings, Tool};

/// Text waiting for its anchor click on the canvas.
#[derive(Debug)]
pub struct PendingText {
    pub text: String,
    pub size: f32,
}

/// We derive Deserialize/Serialize so tool and canvas settings persist
/// across restarts; the raster buffer itself starts fresh each session.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    tool: Tool,
    brush: BrushSettings,
    canvas_width: u32,
    canvas_height: u32,
    #[serde(skip)]
    canvas: CanvasBuffer,
    // The displayed texture, re-uploaded from the buffer whenever it changes.
    #[serde(skip)]
    texture: Option<egui::TextureHandle>,
    #[serde(skip)]
    stroke: StrokeTracker,
    #[serde(skip)]
    fonts: FontStore,
    #[serde(skip)]
    dialogs: Dialogs,
    #[serde(skip)]
    pending_text: Option<PendingText>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            brush: BrushSettings::default(),
            canvas_width: DEFAULT_WIDTH,
            canvas_height: DEFAULT_HEIGHT,
            canvas: CanvasBuffer::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Color32::WHITE),
            texture: None,
            stroke: StrokeTracker::new(),
            fonts: FontStore::load(),
            dialogs: Dialogs::default(),
            pending_text: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        // The buffer is not persisted; size it from the restored dimensions.
        app.canvas = CanvasBuffer::new(app.canvas_width, app.canvas_height, Color32::WHITE);
        log::info!(
            "starting with a {}x{} canvas",
            app.canvas.width(),
            app.canvas.height()
        );
        app
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Selecting the text tool opens the content prompt;
    /// leaving it drops any un-anchored text.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.stroke.reset();
        self.tool = tool;
        match tool {
            Tool::Text => self.dialogs.open_text(),
            _ => self.pending_text = None,
        }
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushSettings {
        &mut self.brush
    }

    pub fn canvas(&self) -> &CanvasBuffer {
        &self.canvas
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    pub fn pending_text(&self) -> Option<&PendingText> {
        self.pending_text.as_ref()
    }

    /// Reset to a blank white canvas and go back to the brush.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.set_tool(Tool::Brush);
    }

    pub fn open_save_dialog(&mut self) {
        self.dialogs.open_save();
    }

    pub fn open_brush_color_dialog(&mut self) {
        self.dialogs.open_brush_color(self.brush.color);
    }

    pub fn open_background_dialog(&mut self) {
        self.dialogs.open_background_color(self.canvas.background());
    }

    pub fn open_resize_dialog(&mut self) {
        self.dialogs
            .open_resize(self.canvas.width(), self.canvas.height());
    }

    /// Pipette: make the buffer pixel under `pos` the brush color.
    fn pick_color_at(&mut self, pos: egui::Pos2) {
        if let Some(color) = self.canvas.pixel(pos.x as i64, pos.y as i64) {
            log::debug!("pipette picked {color:?} at {pos:?}");
            self.brush.color = color;
            self.set_tool(Tool::Brush);
        }
    }

    /// Pointer handling for the canvas region. `rect` is where the canvas is
    /// drawn on screen; buffer coordinates are screen coordinates minus its
    /// origin (the canvas is displayed 1:1).
    pub fn handle_canvas_input(&mut self, response: &egui::Response, rect: egui::Rect) {
        // Open dialogs are modal: the canvas takes no input underneath them.
        if self.dialogs.any_open() {
            self.stroke.reset();
            return;
        }
        let to_canvas = |pos: egui::Pos2| (pos - rect.min).to_pos2();

        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.pick_color_at(to_canvas(pos));
            }
            return;
        }

        match self.tool {
            Tool::Text => {
                if response.clicked() {
                    if let (Some(pos), Some(pending)) =
                        (response.interact_pointer_pos(), self.pending_text.take())
                    {
                        self.place_text(to_canvas(pos), pending);
                    }
                }
            }
            Tool::Brush | Tool::Eraser => {
                if response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if let Some(segment) = self.stroke.advance(to_canvas(pos)) {
                            let color = self
                                .brush
                                .stroke_color(self.tool, self.canvas.background());
                            self.canvas.stroke_segment(
                                segment.from,
                                segment.to,
                                color,
                                self.brush.width,
                            );
                        }
                    }
                }
                if response.drag_stopped() {
                    self.stroke.reset();
                }
            }
        }
    }

    fn place_text(&mut self, pos: egui::Pos2, pending: PendingText) {
        if let Err(err) = self.fonts.draw_text(
            &mut self.canvas,
            pos,
            &pending.text,
            pending.size,
            self.brush.color,
        ) {
            log::error!("text placement failed: {err}");
            self.dialogs
                .show_error(format!("Could not draw text: {err}"));
        }
        self.set_tool(Tool::Brush);
    }

    fn apply_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::SaveTo(path) => match self.canvas.save(&path) {
                Ok(written) => {
                    self.dialogs
                        .show_info(format!("Image saved to {}", written.display()));
                }
                Err(err) => {
                    log::error!("export failed: {err}");
                    self.dialogs
                        .show_error(format!("Could not save image: {err}"));
                }
            },
            DialogAction::ArmText { text, size } => {
                self.pending_text = Some(PendingText { text, size });
            }
            DialogAction::Resize { width, height } => {
                self.canvas.resize(width, height);
                self.canvas_width = self.canvas.width();
                self.canvas_height = self.canvas.height();
                // The texture is recreated at the new size on the next upload.
                self.texture = None;
            }
            DialogAction::BrushColor(color) => {
                self.brush.color = color;
            }
            DialogAction::BackgroundColor(color) => {
                self.canvas.fill(color);
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::S)) {
            self.open_save_dialog();
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::C)) {
            self.open_brush_color_dialog();
        }
    }

    /// Re-upload the buffer into the displayed texture if it changed this
    /// frame. This is the only path from buffer to screen, which is what
    /// keeps the two in lockstep.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        if !self.canvas.take_dirty() {
            return;
        }
        let image = self.canvas.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        for action in self.dialogs.show(ctx) {
            self.apply_dialog_action(action);
        }

        self.sync_texture(ctx);
    }
}

use std::path::PathBuf;

use egui::{Color32, Context};

use crate::canvas::MAX_DIMENSION;

/// What a confirmed dialog asks the app to do. Cancelled dialogs produce
/// nothing: cancellation is a no-op, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    SaveTo(PathBuf),
    /// Arm the text tool: the next canvas click anchors this text.
    ArmText { text: String, size: f32 },
    Resize { width: u32, height: u32 },
    BrushColor(Color32),
    /// Destructive: refills the whole canvas.
    BackgroundColor(Color32),
}

struct SaveDialog {
    path: String,
}

struct TextDialog {
    text: String,
    size: f32,
}

struct ResizeDialog {
    width: u32,
    height: u32,
}

struct ColorDialog {
    color: Color32,
}

struct MessageDialog {
    title: &'static str,
    body: String,
}

/// All modal dialog state. While any dialog is open the canvas ignores
/// pointer input, which is as close to "modal suspends event dispatch" as an
/// immediate-mode loop gets.
#[derive(Default)]
pub struct Dialogs {
    save: Option<SaveDialog>,
    text: Option<TextDialog>,
    resize: Option<ResizeDialog>,
    brush_color: Option<ColorDialog>,
    background_color: Option<ColorDialog>,
    message: Option<MessageDialog>,
}

impl Dialogs {
    pub fn any_open(&self) -> bool {
        self.save.is_some()
            || self.text.is_some()
            || self.resize.is_some()
            || self.brush_color.is_some()
            || self.background_color.is_some()
            || self.message.is_some()
    }

    pub fn open_save(&mut self) {
        self.save = Some(SaveDialog {
            path: "drawing.png".to_owned(),
        });
    }

    pub fn open_text(&mut self) {
        self.text = Some(TextDialog {
            text: String::new(),
            size: 20.0,
        });
    }

    pub fn open_resize(&mut self, width: u32, height: u32) {
        self.resize = Some(ResizeDialog { width, height });
    }

    pub fn open_brush_color(&mut self, current: Color32) {
        self.brush_color = Some(ColorDialog { color: current });
    }

    pub fn open_background_color(&mut self, current: Color32) {
        self.background_color = Some(ColorDialog { color: current });
    }

    pub fn show_info(&mut self, body: impl Into<String>) {
        self.message = Some(MessageDialog {
            title: "Information",
            body: body.into(),
        });
    }

    pub fn show_error(&mut self, body: impl Into<String>) {
        self.message = Some(MessageDialog {
            title: "Error",
            body: body.into(),
        });
    }

    /// Render whichever dialogs are open and collect the actions the user
    /// confirmed this frame.
    pub fn show(&mut self, ctx: &Context) -> Vec<DialogAction> {
        let mut actions = Vec::new();

        if let Some(dialog) = &mut self.save {
            let mut close = false;
            modal("Save image").show(ctx, |ui| {
                ui.label("File path (extension picks the format, .png default):");
                ui.text_edit_singleline(&mut dialog.path);
                ui.horizontal(|ui| {
                    let path = dialog.path.trim();
                    if ui
                        .add_enabled(!path.is_empty(), egui::Button::new("Save"))
                        .clicked()
                    {
                        actions.push(DialogAction::SaveTo(PathBuf::from(path)));
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
            if close {
                self.save = None;
            }
        }

        if let Some(dialog) = &mut self.text {
            let mut close = false;
            modal("Add text").show(ctx, |ui| {
                ui.label("Text:");
                ui.text_edit_singleline(&mut dialog.text);
                ui.horizontal(|ui| {
                    ui.label("Size:");
                    ui.add(egui::DragValue::new(&mut dialog.size).range(4.0..=200.0));
                });
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!dialog.text.is_empty(), egui::Button::new("OK"))
                        .clicked()
                    {
                        actions.push(DialogAction::ArmText {
                            text: dialog.text.clone(),
                            size: dialog.size,
                        });
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
                ui.small("Then click the canvas where the text should go.");
            });
            if close {
                self.text = None;
            }
        }

        if let Some(dialog) = &mut self.resize {
            let mut close = false;
            modal("Canvas size").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Width:");
                    ui.add(egui::DragValue::new(&mut dialog.width).range(1..=MAX_DIMENSION));
                    ui.label("Height:");
                    ui.add(egui::DragValue::new(&mut dialog.height).range(1..=MAX_DIMENSION));
                });
                ui.label("Resizing clears the canvas.");
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        actions.push(DialogAction::Resize {
                            width: dialog.width,
                            height: dialog.height,
                        });
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
            if close {
                self.resize = None;
            }
        }

        if let Some(dialog) = &mut self.brush_color {
            let mut close = false;
            modal("Brush color").show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut dialog.color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        actions.push(DialogAction::BrushColor(dialog.color));
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
            if close {
                self.brush_color = None;
            }
        }

        if let Some(dialog) = &mut self.background_color {
            let mut close = false;
            modal("Background color").show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut dialog.color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.label("Changing the background erases all drawing.");
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        actions.push(DialogAction::BackgroundColor(dialog.color));
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
            if close {
                self.background_color = None;
            }
        }

        if let Some(dialog) = &self.message {
            let mut close = false;
            modal(dialog.title).show(ctx, |ui| {
                ui.label(&dialog.body);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
            if close {
                self.message = None;
            }
        }

        actions
    }
}

fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_flags() {
        let mut dialogs = Dialogs::default();
        assert!(!dialogs.any_open());
        dialogs.open_save();
        assert!(dialogs.any_open());
        dialogs.show_error("boom");
        assert!(dialogs.any_open());
    }
}

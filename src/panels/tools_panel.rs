use crate::PaintApp;
use crate::tool::{Tool, WIDTH_PRESETS};

/// The top toolbar: tool selection, brush color and width, and the
/// clear / background / resize / save actions.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            for tool in [Tool::Brush, Tool::Eraser, Tool::Text] {
                let selected = app.tool() == tool;
                let hover = match tool {
                    Tool::Brush => "Draw with the brush color",
                    Tool::Eraser => "Paint over with the background color",
                    Tool::Text => "Type text, then click where it should go",
                };
                if ui
                    .selectable_label(selected, tool.label())
                    .on_hover_text(hover)
                    .clicked()
                {
                    app.set_tool(tool);
                }
            }

            ui.separator();

            ui.label("Color:");
            // The eraser always paints in the background color, so the
            // picker is disabled while it is active.
            ui.add_enabled_ui(app.tool() != Tool::Eraser, |ui| {
                let mut color = app.brush().color;
                let response = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .on_hover_text("Brush color (Ctrl+C for the full picker, right-click the canvas to pick)");
                if response.changed() {
                    app.brush_mut().color = color;
                }
            });

            ui.separator();

            ui.label("Width:");
            ui.add(egui::Slider::new(&mut app.brush_mut().width, 1..=50));
            for preset in WIDTH_PRESETS {
                if ui
                    .selectable_label(app.brush().width == preset, preset.to_string())
                    .clicked()
                {
                    app.brush_mut().width = preset;
                }
            }

            ui.separator();

            if ui
                .button("🗑 Clear")
                .on_hover_text("Reset to a blank white canvas")
                .clicked()
            {
                app.clear_canvas();
            }
            if ui
                .button("🎨 Background")
                .on_hover_text("Fill the canvas with a new background color")
                .clicked()
            {
                app.open_background_dialog();
            }
            if ui
                .button("↔ Resize")
                .on_hover_text("Change the canvas size (clears the drawing)")
                .clicked()
            {
                app.open_resize_dialog();
            }
            if ui
                .button("💾 Save")
                .on_hover_text("Export as an image file (Ctrl+S)")
                .clicked()
            {
                app.open_save_dialog();
            }
        });
    });
}

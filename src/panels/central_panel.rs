use egui::{Color32, Pos2, Rect};

use crate::PaintApp;
use crate::tool::Tool;

/// The canvas region: blits the canvas texture 1:1 and feeds pointer input
/// back into the app.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = egui::vec2(app.canvas().width() as f32, app.canvas().height() as f32);

        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let rect = response.rect;

            match app.texture() {
                Some(texture) => {
                    painter.image(
                        texture.id(),
                        rect,
                        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                // First frame: the texture upload happens after this panel.
                None => {
                    painter.rect_filled(rect, 0.0, app.canvas().background());
                }
            }

            // Ghost preview of armed text under the cursor.
            if let (Tool::Text, Some(pending), Some(hover)) =
                (app.tool(), app.pending_text(), response.hover_pos())
            {
                painter.text(
                    hover,
                    egui::Align2::LEFT_TOP,
                    &pending.text,
                    egui::FontId::proportional(pending.size),
                    app.brush().color.gamma_multiply(0.5),
                );
            }

            app.handle_canvas_input(&response, rect);
        });
    });
}

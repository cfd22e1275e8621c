use egui::Color32;
use sketchpad::app::PaintApp;
use sketchpad::tool::{BrushSettings, Tool, WIDTH_PRESETS};

#[test]
fn default_session_is_a_white_brush_canvas() {
    let app = PaintApp::default();
    assert_eq!(app.tool(), Tool::Brush);
    assert_eq!(app.canvas().width(), 600);
    assert_eq!(app.canvas().height(), 400);
    assert_eq!(app.canvas().background(), Color32::WHITE);
    assert_eq!(app.brush().color, Color32::BLACK);
    assert_eq!(app.brush().width, WIDTH_PRESETS[0]);
}

#[test]
fn clear_canvas_returns_to_the_brush() {
    let mut app = PaintApp::default();
    app.set_tool(Tool::Eraser);
    app.clear_canvas();
    assert_eq!(app.tool(), Tool::Brush);
    assert_eq!(app.canvas().background(), Color32::WHITE);
}

#[test]
fn tool_switches_have_no_ordering_constraints() {
    let mut app = PaintApp::default();
    for tool in [Tool::Eraser, Tool::Brush, Tool::Eraser, Tool::Text, Tool::Brush] {
        app.set_tool(tool);
        assert_eq!(app.tool(), tool);
    }
}

#[test]
fn eraser_paints_whatever_the_background_is() {
    let brush = BrushSettings {
        color: Color32::GREEN,
        width: 3,
    };
    for background in [Color32::WHITE, Color32::BLUE, Color32::from_rgb(1, 2, 3)] {
        assert_eq!(brush.stroke_color(Tool::Eraser, background), background);
    }
    // The brush itself ignores the background.
    assert_eq!(brush.stroke_color(Tool::Brush, Color32::BLUE), Color32::GREEN);
}

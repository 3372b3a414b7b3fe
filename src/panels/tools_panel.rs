use egui::{Button, Color32, Sense, Slider, Stroke};

use crate::app::MosaicApp;
use crate::tool::Tool;

/// The fixed color palette offered in the sidebar.
const PALETTE: [Color32; 12] = [
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0xff, 0x00, 0x00),
    Color32::from_rgb(0x00, 0xff, 0x00),
    Color32::from_rgb(0x00, 0x00, 0xff),
    Color32::from_rgb(0xff, 0xff, 0x00),
    Color32::from_rgb(0xff, 0x00, 0xff),
    Color32::from_rgb(0x00, 0xff, 0xff),
    Color32::from_rgb(0xff, 0x88, 0x00),
    Color32::from_rgb(0x88, 0xff, 0x00),
    Color32::from_rgb(0x00, 0x88, 0xff),
    Color32::from_rgb(0xff, 0x00, 0x88),
    Color32::from_rgb(0x88, 0x00, 0xff),
];

/// Sidebar with history actions, tool selection, shape options, the color
/// palette, pen size, and the import/export actions.
pub fn tools_panel(app: &mut MosaicApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.editor.can_undo(), Button::new("Undo"))
                    .clicked()
                {
                    app.editor.undo();
                }
                if ui
                    .add_enabled(app.editor.can_redo(), Button::new("Redo"))
                    .clicked()
                {
                    app.editor.redo();
                }
            });
            ui.separator();

            for tool in [Tool::Move, Tool::Draw, Tool::Rectangle, Tool::Circle, Tool::Triangle] {
                if ui
                    .selectable_label(app.editor.tool() == tool, tool.label())
                    .clicked()
                {
                    app.editor.set_tool(tool);
                }
            }
            ui.separator();

            let mut fill = app.editor.fill();
            if ui.checkbox(&mut fill, "Fill shapes").changed() {
                app.editor.set_fill(fill);
            }

            if ui.button("Import image…").clicked() {
                app.editor.set_tool(Tool::Image);
                app.file_handler.open_dialog(ctx);
            }
            ui.separator();

            ui.label("Color");
            ui.horizontal_wrapped(|ui| {
                for color in PALETTE {
                    let selected = app.editor.color() == color;
                    if color_swatch(ui, color, selected).clicked() {
                        app.editor.set_color(color);
                    }
                }
            });

            ui.label("Pen size");
            let mut pen_size = app.editor.pen_size();
            if ui.add(Slider::new(&mut pen_size, 1.0..=10.0)).changed() {
                app.editor.set_pen_size(pen_size);
            }
            ui.separator();

            if ui.button("Save PNG").clicked() {
                app.exporter.request_export(ctx);
            }
        });
}

fn color_swatch(ui: &mut egui::Ui, color: Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), Sense::click());
    let ring = if selected {
        Stroke::new(2.0, ui.visuals().selection.stroke.color)
    } else {
        Stroke::new(1.0, Color32::from_gray(160))
    };
    ui.painter().rect_filled(rect, 3.0, color);
    ui.painter().rect_stroke(rect, 3.0, ring);
    response
}

use egui::{Color32, Rect, Sense, Stroke};

use crate::app::{MosaicApp, CANVAS_SIZE};

/// Hosts the drawing surface: allocates the fixed-size canvas, translates
/// egui pointer input into editor pointer sessions, and runs the renderer.
///
/// Positions handed to the editor are canvas-local. Because the pointer is
/// captured for the whole drag, they may leave the canvas (and go negative);
/// the editor uses them unclamped.
pub fn central_panel(app: &mut MosaicApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let canvas_rect = Rect::from_center_size(available.center(), CANVAS_SIZE);
        app.canvas_rect = Some(canvas_rect);

        let response = ui.interact(canvas_rect, ui.id().with("canvas"), Sense::drag());
        if let Some(pos) = response.interact_pointer_pos() {
            let local = (pos - canvas_rect.min).to_pos2();
            if response.drag_started() {
                app.editor.pointer_pressed(local);
            } else if response.dragged() && response.drag_delta() != egui::Vec2::ZERO {
                // egui reports a drag every held frame; only actual movement
                // is a session-move event.
                app.editor.pointer_moved(local);
            }
        }
        // Covers release and loss of pointer capture alike.
        if response.drag_stopped() {
            app.editor.pointer_released();
        }

        let painter = ui.painter_at(canvas_rect);
        app.renderer.render(ctx, &painter, canvas_rect, &app.editor);

        ui.painter().rect_stroke(
            canvas_rect.expand(1.0),
            0.0,
            Stroke::new(1.0, Color32::from_gray(200)),
        );
    });
}

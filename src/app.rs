use egui::{Color32, Key, KeyboardShortcut, Modifiers, Rect, Vec2};

use crate::export::Exporter;
use crate::file_handler::FileHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// Logical extent of the drawing surface.
pub const CANVAS_SIZE: Vec2 = Vec2::new(800.0, 600.0);

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

/// Tool preferences persisted across restarts. Scene content is deliberately
/// never persisted; the scene lives for one editing session only.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
struct Prefs {
    color: Color32,
    pen_size: f32,
    fill: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            pen_size: 2.0,
            fill: false,
        }
    }
}

/// The editor application: an editor-session context plus the rendering,
/// import, and export plumbing, mounted in an eframe window.
pub struct MosaicApp {
    pub(crate) editor: EditorContext,
    pub(crate) renderer: Renderer,
    pub(crate) file_handler: FileHandler,
    pub(crate) exporter: Exporter,
    /// Canvas placement from the last laid-out frame, used to crop exports.
    pub(crate) canvas_rect: Option<Rect>,
}

impl MosaicApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut editor = EditorContext::new(CANVAS_SIZE);
        if let Some(prefs) = cc
            .storage
            .and_then(|storage| eframe::get_value::<Prefs>(storage, eframe::APP_KEY))
        {
            editor.set_color(prefs.color);
            editor.set_pen_size(prefs.pen_size);
            editor.set_fill(prefs.fill);
        }
        Self {
            editor,
            renderer: Renderer::new(),
            file_handler: FileHandler::new(),
            exporter: Exporter::new(),
            canvas_rect: None,
        }
    }

    /// Global shortcuts, consumed from the input queue so they never reach
    /// other widgets and fire regardless of pointer focus.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Redo first: its modifiers are a strict superset of undo's.
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
            self.editor.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.editor.undo();
        }
        let delete = ctx.input_mut(|i| {
            i.consume_key(Modifiers::NONE, Key::Delete) || i.consume_key(Modifiers::NONE, Key::Backspace)
        });
        if delete {
            self.editor.delete_selected();
        }
    }
}

impl eframe::App for MosaicApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let prefs = Prefs {
            color: self.editor.color(),
            pen_size: self.editor.pen_size(),
            fill: self.editor.fill(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &prefs);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.file_handler.check_for_dropped_files(ctx);

        // Deferred insertion of decoded imports, outside any pointer session.
        if self.editor.session().is_idle() {
            for pixels in self.file_handler.poll() {
                self.editor.insert_image(pixels);
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        if let Some(canvas_rect) = self.canvas_rect {
            self.exporter.process(ctx, canvas_rect);
        }
    }
}

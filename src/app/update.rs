//! App::update() method and related logic.

use std::path::{Path, PathBuf};

use iced::widget::text_editor;
use iced::{window, Point, Task};

use crate::extract;

use super::app::App;
use super::Message;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => self.content.perform(action),
            Message::PointerMoved(pos) => return self.handle_pointer_moved(pos),
            Message::PointerPressed => self.handle_pointer_pressed(),
            Message::PointerReleased => self.handle_pointer_released(),
            Message::WindowEntered => self.controls.pointer_entered(),
            Message::WindowLeft => self.controls.pointer_left(),
            Message::SurfaceEntered => self.surface_hovered = true,
            Message::SurfaceExited => self.surface_hovered = false,
            Message::WheelScrolled(lines) => self.handle_wheel(lines),
            Message::WindowMoved(pos) => self.window_position = pos,
            Message::ImportPressed => self.handle_import(),
            Message::TransparencyToggled(on) => self.handle_transparency(on),
            Message::ClosePressed => return window::latest().and_then(window::close),
        }

        Task::none()
    }

    // ── Pointer handlers ────────────────────────────────────────────────

    /// Track the pointer and, while a drag is active and the primary button
    /// is held, move the window so it follows the pointer 1:1 from the
    /// original press point.
    fn handle_pointer_moved(&mut self, pos: Point) -> Task<Message> {
        self.cursor = pos;

        if self.drag.is_active() && !self.primary_held {
            // A drag without the button down means a release went missing;
            // do not leave the window glued to the pointer.
            self.drag.release();
            return Task::none();
        }

        if let Some(target) = self.drag.target(self.window_position, pos) {
            // The pointer position is window-local, so the arithmetic
            // self-corrects even if a move event is still in flight.
            self.window_position = target;
            return window::latest().and_then(move |id| window::move_to(id, target));
        }

        Task::none()
    }

    /// A primary-button press on the text surface starts a drag anchored at
    /// the press point. The window itself has no press-time bookkeeping of
    /// its own beyond what the surface records.
    fn handle_pointer_pressed(&mut self) {
        self.primary_held = true;
        if self.surface_hovered {
            self.drag.press(self.cursor);
        }
    }

    /// Any button release ends the drag. If the window moved, persist its
    /// new position.
    fn handle_pointer_released(&mut self) {
        self.primary_held = false;
        if self.drag.is_active() {
            self.drag.release();
            self.config.window_x = self.window_position.x;
            self.config.window_y = self.window_position.y;
            self.config.save();
        }
    }

    /// Redirect a wheel scroll to the text surface. The transparent window
    /// background swallows wheel events that miss the editor, so the window
    /// forwards them explicitly. Fractional deltas accumulate until they
    /// amount to a whole line.
    fn handle_wheel(&mut self, lines: f32) {
        let whole = self.scroll.add(lines);
        if whole != 0 {
            self.content.perform(text_editor::Action::Scroll { lines: whole });
        }
    }

    // ── Control handlers ────────────────────────────────────────────────

    /// Show the file dialog and load the chosen document. Cancelling is a
    /// no-op; the surface keeps its current text.
    fn handle_import(&mut self) {
        if let Some(path) = choose_document() {
            self.load_path(&path);
        }
    }

    /// An explicit toggle is a real preference change: it also clears any
    /// `--opaque` override so the choice persists.
    fn handle_transparency(&mut self, on: bool) {
        self.transparent = on;
        self.transparency_overridden = false;
        self.config.transparent_background = on;
        self.config.save();
    }

    /// Load a document into the text surface, replacing its content.
    ///
    /// Unknown extensions load nothing; extraction failures are surfaced as
    /// a status message and leave the current text intact.
    pub(super) fn load_path(&mut self, path: &Path) {
        match extract::load_document(path) {
            Ok(Some(text)) => {
                tracing::info!(path = %path.display(), chars = text.len(), "document loaded");
                self.content = text_editor::Content::with_text(&text);
                self.status = None;
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "unknown extension, nothing loaded");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "document load failed");
                self.status = Some(format!("Load failed: {e}"));
            }
        }
    }
}

/// Present the file selection dialog. Blocks the UI thread until the user
/// picks a file or cancels.
fn choose_document() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select file")
        .add_filter("Text Files", &["txt"])
        .add_filter("PDF Files", &["pdf"])
        .add_filter("Word Files", &["docx", "doc"])
        .add_filter("All Files", &["*"])
        .pick_file()
}

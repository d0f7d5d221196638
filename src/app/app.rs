//! App struct definition and core initialization.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use iced::widget::text_editor;
use iced::{Color, Point, Task, Theme};

use crate::config::ViewerConfig;

use super::state::{ControlsVisibility, DragState, ScrollAccumulator};
use super::styles::palette;
use super::Message;

// Thread-local storage for init params
thread_local! {
    pub static INIT_CONFIG: RefCell<Option<ViewerConfig>> = const { RefCell::new(None) };
    pub static INIT_FILE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
    pub static INIT_OPAQUE: Cell<bool> = const { Cell::new(false) };
}

/// Application state.
pub struct App {
    /// Text surface content, fully replaced on each successful load.
    pub(crate) content: text_editor::Content,
    /// Drag bookkeeping for the text surface.
    pub(crate) drag: DragState,
    /// Whether the import/transparency/close controls are shown.
    pub(crate) controls: ControlsVisibility,
    /// Whether the text surface background is fully transparent.
    pub(crate) transparent: bool,
    /// The transparency state was forced by `--opaque`; a one-shot override
    /// that must not overwrite the saved preference on exit.
    pub(crate) transparency_overridden: bool,
    /// Whether the pointer is currently over the text surface.
    pub(crate) surface_hovered: bool,
    /// Whether the primary button is currently held.
    pub(crate) primary_held: bool,
    /// Last known pointer position (window-local coordinates).
    pub(crate) cursor: Point,
    /// Carries fractional wheel deltas between scroll events.
    pub(crate) scroll: ScrollAccumulator,
    /// Current window position on screen, tracked from move events.
    pub(crate) window_position: Point,
    /// Non-fatal load failure to surface alongside the controls.
    pub(crate) status: Option<String>,
    pub(crate) config: ViewerConfig,
}

impl App {
    pub fn title(_state: &Self) -> String {
        "Floating Text Viewer".to_string()
    }

    /// Transparent window background; only the text surface paints a fill.
    pub fn style(_state: &Self, _theme: &Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: palette::TEXT,
        }
    }

    pub fn boot() -> (Self, Task<Message>) {
        let config = INIT_CONFIG
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(ViewerConfig::load);
        let file = INIT_FILE.with(|cell| cell.borrow_mut().take());
        let opaque = INIT_OPAQUE.with(|cell| cell.get());

        let transparent = !opaque && config.transparent_background;
        let window_position = Point::new(config.window_x, config.window_y);

        let mut app = App {
            content: text_editor::Content::new(),
            drag: DragState::default(),
            controls: ControlsVisibility::default(),
            transparent,
            transparency_overridden: opaque,
            surface_hovered: false,
            primary_held: false,
            cursor: Point::ORIGIN,
            window_position,
            scroll: ScrollAccumulator::default(),
            status: None,
            config,
        };

        if let Some(path) = file {
            app.load_path(&path);
        }

        (app, Task::none())
    }

    /// Fold runtime state back into the config before saving.
    ///
    /// A forced `--opaque` start leaves the saved transparency preference
    /// alone unless the user toggled the checkbox during the session.
    pub(crate) fn sync_config(&mut self) {
        self.config.window_x = self.window_position.x;
        self.config.window_y = self.window_position.y;
        if !self.transparency_overridden {
            self.config.transparent_background = self.transparent;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.sync_config();
        self.config.save();
    }
}

//! Iced-based UI for the floating text window.
//!
//! This module is split into several submodules:
//! - `app`: App struct and initialization
//! - `state`: drag and controls-visibility state machines
//! - `styles`: UI styling functions and color palette
//! - `update`: App::update() and message handling
//! - `view`: App::view() and subscription

mod app;
pub mod state;
mod styles;
mod update;
mod view;

use std::path::PathBuf;

use iced::widget::text_editor;
use iced::{window, Point, Size};

use crate::config::ViewerConfig;

// Re-export public types
pub use app::App;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Editing action performed on the text surface.
    EditorAction(text_editor::Action),
    /// Pointer moved inside the window (window-local coordinates).
    PointerMoved(Point),
    /// Primary button pressed.
    PointerPressed,
    /// Any button released.
    PointerReleased,
    /// Pointer entered the window's bounding area.
    WindowEntered,
    /// Pointer left the window's bounding area.
    WindowLeft,
    /// Pointer entered the text surface.
    SurfaceEntered,
    /// Pointer left the text surface.
    SurfaceExited,
    /// Wheel scroll the text surface did not consume, in (fractional) lines.
    WheelScrolled(f32),
    /// The OS reports a new window position.
    WindowMoved(Point),
    /// Import button pressed.
    ImportPressed,
    /// Transparency checkbox toggled.
    TransparencyToggled(bool),
    /// Close button pressed.
    ClosePressed,
}

/// Run the floating window UI until the window is closed.
///
/// `file` is an optional document to load before the first frame; `opaque`
/// starts the text surface with the semi-opaque background regardless of the
/// saved preference.
pub fn run_ui(file: Option<PathBuf>, opaque: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ViewerConfig::load();

    let window = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: window::Position::Specific(Point::new(config.window_x, config.window_y)),
        resizable: false,
        decorations: false,
        transparent: true,
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    };

    // Store in thread-locals for the boot function
    app::INIT_CONFIG.with(|cell| *cell.borrow_mut() = Some(config));
    app::INIT_FILE.with(|cell| *cell.borrow_mut() = file);
    app::INIT_OPAQUE.with(|cell| cell.set(opaque));

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .style(App::style)
        .window(window)
        .run()?;

    Ok(())
}

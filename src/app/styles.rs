//! UI style functions for iced widgets.

use iced::widget::{button, checkbox, text_editor};
use iced::{Border, Color, Theme};

// Viewer color palette
pub mod palette {
    use iced::Color;

    /// Semi-opaque gray shown when background transparency is off
    /// (rgba 128,128,128,200 in 8-bit terms).
    pub const SURFACE_OPAQUE: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.78);
    pub const TEXT: Color = Color::BLACK;
    pub const SELECTION: Color = Color::from_rgba(0.3, 0.5, 0.8, 0.4);
    pub const PLACEHOLDER: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);
    pub const CONTROL_BG: Color = Color::from_rgba(0.92, 0.92, 0.92, 0.95);
    pub const CONTROL_BG_HOVER: Color = Color::from_rgba(0.82, 0.82, 0.85, 0.95);
    pub const CONTROL_BG_PRESSED: Color = Color::from_rgba(0.70, 0.70, 0.74, 0.95);
    pub const BORDER: Color = Color::from_rgba(0.35, 0.35, 0.35, 0.8);
    pub const STATUS_ERROR: Color = Color::from_rgb(0.75, 0.15, 0.15);
}

/// Style for the text surface, fully transparent or semi-opaque gray.
///
/// Black text in both states; only the background fill changes.
pub fn surface_style(
    transparent: bool,
    _theme: &Theme,
    _status: text_editor::Status,
) -> text_editor::Style {
    let background = if transparent {
        Color::TRANSPARENT
    } else {
        palette::SURFACE_OPAQUE
    };

    text_editor::Style {
        background: iced::Background::Color(background),
        border: Border::default(),
        placeholder: palette::PLACEHOLDER,
        value: palette::TEXT,
        selection: palette::SELECTION,
    }
}

/// Style for the import/close control buttons.
pub fn control_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => palette::CONTROL_BG,
        button::Status::Hovered => palette::CONTROL_BG_HOVER,
        button::Status::Pressed => palette::CONTROL_BG_PRESSED,
        button::Status::Disabled => palette::CONTROL_BG,
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: palette::TEXT,
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the transparency checkbox.
pub fn control_checkbox_style(_theme: &Theme, _status: checkbox::Status) -> checkbox::Style {
    checkbox::Style {
        background: iced::Background::Color(palette::CONTROL_BG),
        icon_color: palette::TEXT,
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 2.0.into(),
        },
        text_color: Some(palette::TEXT),
    }
}

//! App::view() and subscription plus UI building helpers.

use iced::widget::{button, checkbox, column, container, mouse_area, text, text_editor, Column};
use iced::{event, mouse, window, Element, Event, Length, Subscription};

use super::app::App;
use super::styles::{control_button_style, control_checkbox_style, palette, surface_style};
use super::Message;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let transparent = self.transparent;
        let surface = mouse_area(
            text_editor(&self.content)
                .on_action(Message::EditorAction)
                .height(Length::Fill)
                .size(16)
                .style(move |theme, status| surface_style(transparent, theme, status)),
        )
        .on_enter(Message::SurfaceEntered)
        .on_exit(Message::SurfaceExited);

        let mut content = column![surface].spacing(6).padding(8);
        if self.controls.shown() {
            content = content.push(self.build_controls());
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Build the import/transparency/close control column, with any pending
    /// load failure above it.
    fn build_controls(&self) -> Column<'_, Message> {
        let mut controls = Column::new().spacing(6);

        if let Some(status) = &self.status {
            controls = controls.push(text(status).size(12).color(palette::STATUS_ERROR));
        }

        controls
            .push(
                button(text("Import file").size(14))
                    .on_press(Message::ImportPressed)
                    .width(Length::Fill)
                    .style(control_button_style),
            )
            .push(
                checkbox(self.transparent)
                    .label("Transparent background")
                    .on_toggle(Message::TransparencyToggled)
                    .size(16)
                    .text_size(14)
                    .style(control_checkbox_style),
            )
            .push(
                button(text("Close window").size(14))
                    .on_press(Message::ClosePressed)
                    .width(Length::Fill)
                    .style(control_button_style),
            )
    }

    pub fn subscription(_state: &Self) -> Subscription<Message> {
        event::listen_with(map_event)
    }
}

/// Map runtime events to messages.
///
/// Wheel events are forwarded only when nothing consumed them, so scrolls
/// landing on the transparent background still reach the text surface.
fn map_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(_)) => Some(Message::PointerReleased),
        Event::Mouse(mouse::Event::CursorEntered) => Some(Message::WindowEntered),
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::WindowLeft),
        Event::Mouse(mouse::Event::WheelScrolled { delta }) if status == event::Status::Ignored => {
            Some(Message::WheelScrolled(scroll_lines(delta)))
        }
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved(position)),
        _ => None,
    }
}

/// Convert a wheel delta to editor scroll lines (positive scrolls down).
/// Fractions are kept; the update handler accumulates them across events.
fn scroll_lines(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y * 3.0,
        mouse::ScrollDelta::Pixels { y, .. } => -y / 20.0,
    }
}

use ratatui::style::{Color, Modifier, Style};

// Centralized chrome colors. Each managed element gets its own helper so the
// regions stay distinguishable while they appear and disappear.

pub const ACCENT_RGB: (u8, u8, u8) = (200, 100, 0);

pub fn accent() -> Color {
    Color::Rgb(ACCENT_RGB.0, ACCENT_RGB.1, ACCENT_RGB.2)
}

pub fn title_bar() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

pub fn tab_header() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn tab_active() -> Style {
    Style::default()
        .bg(Color::Gray)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

pub fn view_header() -> Style {
    Style::default().bg(Color::Black).fg(Color::Gray)
}

pub fn ribbon() -> Style {
    Style::default().bg(Color::DarkGray).fg(accent())
}

pub fn dock() -> Style {
    Style::default().bg(Color::Black).fg(Color::DarkGray)
}

pub fn status_bar() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::Black)
}

pub fn content() -> Style {
    Style::default()
}

pub fn mode_marker() -> Style {
    Style::default().fg(accent()).add_modifier(Modifier::BOLD)
}

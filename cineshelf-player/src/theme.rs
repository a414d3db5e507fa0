//! Visual styling for the filter screen.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Palette for the catalog screens.
#[derive(Debug)]
pub struct CineshelfTheme;

impl CineshelfTheme {
    pub const ACCENT: Color = Color::from_rgb(0.20, 0.45, 0.95);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.30, 0.55, 1.0);

    // Card colors
    pub const CARD_BG: Color = Color::from_rgb(0.12, 0.12, 0.13);
    pub const CARD_HOVER: Color = Color::from_rgb(0.17, 0.17, 0.18);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.22, 0.22, 0.22);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

    // Status colors
    pub const ERROR: Color = Color::from_rgb(1.0, 0.25, 0.25);
    pub const DESTRUCTIVE: Color = Color::from_rgb(0.85, 0.20, 0.20);
    pub const DESTRUCTIVE_HOVER: Color = Color::from_rgb(0.95, 0.30, 0.30);

    pub fn theme() -> Theme {
        Theme::Dark
    }
}

/// Container styles using closures.
#[derive(Debug)]
pub enum Container {
    Card,
    ErrorBox,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(CineshelfTheme::TEXT_PRIMARY),
                background: Some(Background::Color(CineshelfTheme::CARD_BG)),
                border: Border {
                    color: CineshelfTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(CineshelfTheme::ERROR),
                background: Some(Background::Color(CineshelfTheme::CARD_BG)),
                border: Border {
                    color: CineshelfTheme::ERROR,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

/// Button styles using closures.
#[derive(Debug)]
pub enum Button {
    Primary,
    Danger,
    Page,
    PageCurrent,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        CineshelfTheme::ACCENT_HOVER
                    }
                    _ => CineshelfTheme::ACCENT,
                };
                filled(background, CineshelfTheme::TEXT_PRIMARY)
            },
            Button::Danger => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        CineshelfTheme::DESTRUCTIVE_HOVER
                    }
                    _ => CineshelfTheme::DESTRUCTIVE,
                };
                filled(background, CineshelfTheme::TEXT_PRIMARY)
            },
            Button::Page => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        CineshelfTheme::CARD_HOVER
                    }
                    _ => CineshelfTheme::CARD_BG,
                };
                filled(background, CineshelfTheme::TEXT_SECONDARY)
            },
            Button::PageCurrent => {
                |_, _| filled(CineshelfTheme::ACCENT, CineshelfTheme::TEXT_PRIMARY)
            }
        }
    }
}

fn filled(background: Color, text_color: Color) -> button::Style {
    button::Style {
        text_color,
        background: Some(Background::Color(background)),
        border: Border {
            color: background,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    }
}

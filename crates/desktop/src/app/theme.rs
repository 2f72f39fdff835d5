//! Palette definitions so the desktop shell matches the tickbox brand language.

use dark_light::Mode as ThemePreference;
use iced::{Color, Theme};

pub(crate) fn detect_theme() -> Theme {
    match dark_light::detect() {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
        ThemePreference::Default => Theme::Dark,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_muted: Color,
    pub(crate) primary: Color,
    pub(crate) primary_hover: Color,
    pub(crate) primary_text: Color,
    pub(crate) secondary_text: Color,
    pub(crate) ghost_hover: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) info: Color,
    pub(crate) favourite: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_muted: Color,
    pub(crate) border: Color,
}

impl Palette {
    pub(crate) fn for_theme(theme: &iced::Theme) -> Self {
        match theme {
            iced::Theme::Dark => Self {
                // Indigo accents over near-black panels.
                background: Color::from_rgb(0.05, 0.05, 0.08),
                surface: Color::from_rgb(0.09, 0.09, 0.13),
                surface_muted: Color::from_rgb(0.12, 0.12, 0.17),
                primary: Color::from_rgb(0.35, 0.49, 0.97),
                primary_hover: Color::from_rgb(0.45, 0.58, 1.0),
                primary_text: Color::from_rgb(0.98, 0.98, 0.99),
                secondary_text: Color::from_rgb(0.62, 0.68, 0.92),
                ghost_hover: Color::from_rgba(0.35, 0.49, 0.97, 0.18),
                success: Color::from_rgb(0.26, 0.72, 0.40),
                danger: Color::from_rgb(0.88, 0.32, 0.32),
                info: Color::from_rgb(0.38, 0.70, 0.92),
                favourite: Color::from_rgb(0.92, 0.30, 0.34),
                text_primary: Color::from_rgb(0.90, 0.91, 0.95),
                text_secondary: Color::from_rgb(0.60, 0.63, 0.72),
                text_muted: Color::from_rgb(0.40, 0.42, 0.50),
                border: Color::from_rgba(0.42, 0.52, 0.95, 0.30),
            },
            _ => Self {
                background: Color::from_rgb(0.96, 0.96, 0.98),
                surface: Color::from_rgb(1.0, 1.0, 1.0),
                surface_muted: Color::from_rgb(0.93, 0.94, 0.97),
                primary: Color::from_rgb(0.35, 0.49, 0.97),
                primary_hover: Color::from_rgb(0.27, 0.40, 0.88),
                primary_text: Color::from_rgb(1.0, 1.0, 1.0),
                secondary_text: Color::from_rgb(0.30, 0.36, 0.62),
                ghost_hover: Color::from_rgba(0.35, 0.49, 0.97, 0.12),
                success: Color::from_rgb(0.18, 0.58, 0.32),
                danger: Color::from_rgb(0.80, 0.22, 0.24),
                info: Color::from_rgb(0.16, 0.46, 0.74),
                favourite: Color::from_rgb(0.86, 0.20, 0.26),
                text_primary: Color::from_rgb(0.12, 0.13, 0.18),
                text_secondary: Color::from_rgb(0.38, 0.40, 0.48),
                text_muted: Color::from_rgb(0.58, 0.60, 0.66),
                border: Color::from_rgba(0.35, 0.49, 0.97, 0.28),
            },
        }
    }
}

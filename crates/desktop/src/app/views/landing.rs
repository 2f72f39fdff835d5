use iced::widget::{button, column, text};
use iced::{Alignment, Element, Length};

use crate::app::message::Message;

use super::styles::primary_button_style;

use super::super::desktop::TickboxDesktop;

impl TickboxDesktop {
    pub(crate) fn landing(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let heading = text("Tickbox").size(40).color(palette.text_primary);
        let tagline = text("Your tasks, one list, nothing lost.")
            .size(16)
            .color(palette.text_secondary);

        let label = if self.signing_in {
            "Signing in…"
        } else {
            "Sign in"
        };
        let mut sign_in = button(text(label).size(16).color(palette.primary_text))
            .padding([10, 32])
            .style(move |_, status| primary_button_style(palette, status));
        if !self.signing_in {
            sign_in = sign_in.on_press(Message::SignInPressed);
        }

        column![heading, tagline, sign_in]
            .spacing(24)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}

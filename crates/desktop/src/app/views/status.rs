use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length};

use tickbox_core::notify::Severity;

use crate::app::message::Message;

use super::styles::ghost_button_style;

use super::super::desktop::TickboxDesktop;

impl TickboxDesktop {
    /// Bottom strip showing the visible notice, if any. Only the close
    /// button dismisses it; clicks elsewhere leave it alone.
    pub(crate) fn notice_strip(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let left = match &self.session {
            Some(session) => text(format!("Signed in as {}", session.identity().display_name))
                .size(12)
                .color(palette.text_secondary),
            None => text("Not signed in").size(12).color(palette.text_muted),
        };

        let mut strip = row![left].spacing(12).align_y(Alignment::Center);
        strip = strip.push(Space::new().width(Length::Fill));

        if let Some(notice) = self.notices.current() {
            let color = match notice.severity {
                Severity::Success => palette.success,
                Severity::Error => palette.danger,
            };
            strip = strip.push(text(notice.message.clone()).size(12).color(color));
            strip = strip.push(
                button(text("✕").size(12).color(palette.text_secondary))
                    .on_press(Message::NoticeClosed)
                    .padding([2, 6])
                    .style(move |_, status| ghost_button_style(palette, status)),
            );
        }

        strip.into()
    }
}

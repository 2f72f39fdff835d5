use iced::alignment::Horizontal;
use iced::border::Border;
use iced::widget::{column, container};
use iced::{Background, Element, Length, Shadow};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::TickboxDesktop;

/// Root view. The dashboard is only reachable with an established
/// session; everyone else lands on the sign-in screen.
pub(crate) fn compose(app: &TickboxDesktop) -> Element<'_, Message> {
    let body: Element<'_, Message> = match &app.session {
        Some(session) => app.dashboard(session),
        None => app.landing(),
    };

    let content = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([20, 24])
        .style(move |_| surface_container_style(app.palette));

    let status = container(app.notice_strip())
        .width(Length::Fill)
        .padding([8, 24])
        .style(move |_| status_container_style(app.palette));

    container(
        column![content, status]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Left)
    .style(move |_| app_background_style(app.palette))
    .into()
}

fn surface_container_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn status_container_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface_muted)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn app_background_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

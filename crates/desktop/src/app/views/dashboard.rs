use chrono::Local;
use iced::widget::{
    button, checkbox, column, container, pick_list, row, scrollable, text, text_input, Space,
};
use iced::{Alignment, Element, Length, Theme};

use tickbox_core::model::{FilterMode, Task};
use tickbox_core::session::Session;
use tickbox_core::view::TaskPage;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::{ghost_button_style, primary_button_style, text_input_style, with_alpha};

use super::super::desktop::TickboxDesktop;

impl TickboxDesktop {
    pub(crate) fn dashboard(&self, session: &Session) -> Element<'_, Message> {
        let palette = self.palette;

        let list: Element<'_, Message> = if session.is_loaded() {
            self.task_list(session.page())
        } else {
            text("Loading…").size(14).color(palette.info).into()
        };

        column![
            self.header(session),
            self.compose_panel(),
            self.toolbar(session),
            list,
        ]
        .spacing(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn header(&self, session: &Session) -> Element<'_, Message> {
        let palette = self.palette;
        let welcome = text(format!("Welcome, {}", session.identity().display_name))
            .size(20)
            .color(palette.text_primary);

        let theme_label = match self.theme {
            Theme::Dark => "Switch to light",
            _ => "Switch to dark",
        };
        let theme_button = button(text(theme_label).size(14).color(palette.secondary_text))
            .on_press(Message::ThemeToggled)
            .style(move |_, status| ghost_button_style(palette, status));

        let logout = button(text("Logout").size(14).color(palette.secondary_text))
            .on_press(Message::SignOutPressed)
            .style(move |_, status| ghost_button_style(palette, status));

        let mut bar = row![welcome].spacing(16).align_y(Alignment::Center);
        bar = bar.push(Space::new().width(Length::Fill));
        if self.pending_mutations > 0 {
            bar = bar.push(text("Applying changes…").size(14).color(palette.info));
        }
        bar = bar.push(theme_button);
        bar = bar.push(logout);
        bar.into()
    }

    fn compose_panel(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let title = text_input("Title", &self.form.title)
            .id(self.title_input_id.clone())
            .on_input(Message::TitleChanged)
            .on_submit(Message::CreateSubmitted)
            .padding(10)
            .style(move |_, status| text_input_style(palette, status));

        let description = text_input("Description", &self.form.description)
            .on_input(Message::DescriptionChanged)
            .on_submit(Message::CreateSubmitted)
            .padding(10)
            .style(move |_, status| text_input_style(palette, status));

        let add = button(text("Add Task").size(14).color(palette.primary_text))
            .on_press(Message::CreateSubmitted)
            .padding([10, 24])
            .style(move |_, status| primary_button_style(palette, status));

        row![title, description, add]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
    }

    fn toolbar(&self, session: &Session) -> Element<'_, Message> {
        let palette = self.palette;
        let query = session.query();

        let search = text_input("Search tasks", &query.search)
            .id(self.search_input_id.clone())
            .on_input(Message::SearchChanged)
            .padding(10)
            .style(move |_, status| text_input_style(palette, status));

        let filter = pick_list(FilterMode::ALL, Some(query.filter), Message::FilterPicked)
            .padding(10)
            .width(Length::Fixed(160.0));

        row![search, filter]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
    }

    fn task_list(&self, page: TaskPage) -> Element<'_, Message> {
        let palette = self.palette;

        // An out-of-range page renders empty while more than one page
        // of matches exists, so the pager stays up as the way back.
        let body: Element<'_, Message> = if page.is_empty() {
            text("No tasks to show.")
                .size(14)
                .color(palette.text_muted)
                .into()
        } else {
            let mut list = column![].spacing(8);
            for task in &page.tasks {
                list = list.push(task_row(task, palette));
            }
            scrollable(list).height(Length::Fill).into()
        };

        let mut content = column![body].spacing(12);
        if page.needs_pager() {
            content = content.push(self.pager(&page));
        }
        content.height(Length::Fill).into()
    }

    fn pager(&self, page: &TaskPage) -> Element<'_, Message> {
        let palette = self.palette;
        let current = self
            .session
            .as_ref()
            .map(|session| session.query().page)
            .unwrap_or(1);

        let mut bar = row![].spacing(8).align_y(Alignment::Center);
        for number in 1..=page.total_pages {
            let label = text(number.to_string()).size(14).color(if number == current {
                palette.primary_text
            } else {
                palette.secondary_text
            });
            let style_current = number == current;
            bar = bar.push(
                button(label)
                    .on_press(Message::PagePressed(number))
                    .padding([6, 12])
                    .style(move |_, status| {
                        if style_current {
                            primary_button_style(palette, status)
                        } else {
                            ghost_button_style(palette, status)
                        }
                    }),
            );
        }
        bar.into()
    }
}

fn task_row(task: &Task, palette: Palette) -> Element<'static, Message> {
    let id = task.id.clone();
    let done = checkbox(task.completed).on_toggle(move |_| Message::CompletedToggled(id.clone()));

    let title_color = if task.completed {
        palette.text_muted
    } else {
        palette.text_primary
    };
    let created = task
        .created_at
        .with_timezone(&Local)
        .format("%b %d, %H:%M")
        .to_string();
    let body = column![
        text(task.title.clone()).size(16).color(title_color),
        text(task.description.clone())
            .size(13)
            .color(palette.text_secondary),
        text(created).size(11).color(palette.text_muted),
    ]
    .spacing(2)
    .width(Length::Fill);

    let favourite_glyph = if task.favourite { "♥" } else { "♡" };
    let favourite_color = if task.favourite {
        palette.favourite
    } else {
        palette.text_muted
    };
    let id = task.id.clone();
    let favourite = button(text(favourite_glyph).size(16).color(favourite_color))
        .on_press(Message::FavouriteToggled(id))
        .style(move |_, status| ghost_button_style(palette, status));

    let id = task.id.clone();
    let delete = button(text("Delete").size(13).color(palette.danger))
        .on_press(Message::DeletePressed(id))
        .style(move |_, status| ghost_button_style(palette, status));

    container(
        row![done, body, favourite, delete]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .padding(12)
    .style(move |_| row_container_style(palette))
    .into()
}

fn row_container_style(palette: Palette) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(palette.surface_muted)),
        border: iced::border::Border {
            color: with_alpha(palette.border, 0.5),
            width: 1.0,
            radius: iced::border::Radius::from(8.0),
        },
        ..iced::widget::container::Style::default()
    }
}

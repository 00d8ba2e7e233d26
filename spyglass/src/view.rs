use iced::widget::text::Wrapping;
use iced::widget::{Column, column, container, mouse_area, scrollable, text};
use iced::{Element, Length, Theme, alignment};
use spyglass_ui_sources::row_view;

use super::{App, Message};
use crate::context_menu;

const HEADER_HEIGHT: f32 = 28.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 12.0;
const STATUS_HEIGHT: f32 = 22.0;
const STATUS_FONT_SIZE: f32 = 11.0;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let rows = app
        .rendered_rows()
        .into_iter()
        .map(|(path, description)| {
            let is_selected = app.selected.as_deref() == Some(path.as_str());
            row_view(&description, is_selected, &app.settings).map(
                move |event| Message::Row {
                    path: path.clone(),
                    event,
                },
            )
        })
        .fold(Column::new(), |column, row| column.push(row))
        .width(Length::Fill);

    let header_label = if app.project_root.is_set() {
        format!("Root: {}", app.project_root.normalized())
    } else {
        String::from("Sources")
    };

    let content = column![
        bar(header_label, HEADER_HEIGHT, HEADER_FONT_SIZE),
        scrollable(rows).width(Length::Fill).height(Length::Fill),
        bar(app.selection_status(), STATUS_HEIGHT, STATUS_FONT_SIZE),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let body = mouse_area(content).on_move(Message::CursorMoved);

    match &app.menu {
        Some(menu) => iced::widget::stack!(
            body,
            context_menu::view(context_menu::Props {
                menu,
                area_size: app.area_size,
            })
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => body.into(),
    }
}

fn bar<'a>(label: String, height: f32, size: f32) -> Element<'a, Message> {
    container(
        text(label)
            .size(size)
            .wrapping(Wrapping::None)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.weak.color.into()),
            text_color: Some(palette.background.weak.text),
            ..Default::default()
        }
    })
    .into()
}

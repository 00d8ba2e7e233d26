use iced::border::Radius;
use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{Column, button, container, mouse_area, row, text};
use iced::{Element, Length, Point, Size, Theme, alignment};
use spyglass_ui_sources::MenuEntry;

use crate::app::Message;

const MENU_CONTAINER_WIDTH: f32 = 220.0;
const MENU_ITEM_FONT_SIZE: f32 = 13.0;
const MENU_ITEM_HEIGHT: f32 = 24.0;
const MENU_VERTICAL_PADDING: f32 = 16.0;
const MENU_MARGIN: f32 = 6.0;
const MENU_CONTAINER_PADDING_Y: f32 = 8.0;

/// Context menu opened for a tree row, anchored at the press position.
#[derive(Debug, Clone)]
pub(crate) struct OpenMenu {
    pub(crate) position: Point,
    pub(crate) entries: Vec<MenuEntry>,
}

impl OpenMenu {
    /// Entry bound to `key`, compared case-insensitively.
    pub(crate) fn entry_for_accesskey(&self, key: &str) -> Option<usize> {
        let mut chars = key.chars();
        let pressed = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }
        self.entries.iter().position(|entry| {
            !entry.disabled
                && entry.accesskey.is_some_and(|access| {
                    access.to_ascii_lowercase() == pressed
                })
        })
    }
}

/// Props for rendering the tree context menu.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) menu: &'a OpenMenu,
    pub(crate) area_size: Size,
}

pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, Message> {
    let items = props
        .menu
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| menu_item(index, entry));

    let menu_size = Size::new(
        MENU_CONTAINER_WIDTH,
        menu_height_for_items(props.menu.entries.len()),
    );
    let menu_column = items
        .fold(Column::new(), |column, item| column.push(item))
        .spacing(0)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left);

    let anchor =
        anchor_position(props.menu.position, props.area_size, menu_size);
    let padding = iced::Padding {
        top: anchor.y,
        left: anchor.x,
        ..iced::Padding::ZERO
    };

    let menu_container = container(menu_column)
        .padding([MENU_CONTAINER_PADDING_Y, 0.0])
        .width(MENU_CONTAINER_WIDTH)
        .style(menu_panel_style);

    let positioned_menu = container(menu_container)
        .padding(padding)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top);

    let dismiss_layer = mouse_area(
        container(text("")).width(Length::Fill).height(Length::Fill),
    )
    .on_press(Message::MenuDismissed)
    .on_right_press(Message::MenuDismissed)
    .on_move(Message::CursorMoved);

    iced::widget::stack!(dismiss_layer, positioned_menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn menu_item<'a>(index: usize, entry: &MenuEntry) -> Element<'a, Message> {
    let label = text(entry.label.clone())
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    let hint = text(
        entry
            .accesskey
            .map(|key| key.to_ascii_uppercase().to_string())
            .unwrap_or_default(),
    )
    .size(MENU_ITEM_FONT_SIZE)
    .align_y(alignment::Vertical::Center);

    let item = button(row![label, hint].align_y(alignment::Vertical::Center))
        .padding([1, 10])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(menu_button_style);

    if entry.disabled {
        item.into()
    } else {
        item.on_press(Message::MenuEntryPressed(index)).into()
    }
}

fn menu_panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        border: iced::Border {
            width: 0.25,
            color: palette.background.strong.color,
            radius: Radius::new(4.0),
        },
        ..Default::default()
    }
}

fn menu_button_style(theme: &Theme, status: ButtonStatus) -> button::Style {
    let palette = theme.extended_palette();
    let (background, text_color) = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            (palette.primary.weak.color, palette.primary.weak.text)
        },
        ButtonStatus::Disabled => {
            (palette.background.weak.color, palette.background.strong.color)
        },
        ButtonStatus::Active => {
            (palette.background.weak.color, palette.background.weak.text)
        },
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top-left corner for a menu of `menu_size` opened at `cursor`.
///
/// Near the right edge the menu slides left instead of flipping across the
/// cursor. It opens above the cursor when there is no room below.
fn anchor_position(cursor: Point, area_size: Size, menu_size: Size) -> Point {
    let x = (cursor.x + MENU_MARGIN)
        .min(area_size.width - menu_size.width - MENU_MARGIN);

    let below = cursor.y + MENU_MARGIN;
    let y = if below + menu_size.height + MENU_MARGIN <= area_size.height {
        below
    } else {
        cursor.y - menu_size.height - MENU_MARGIN
    };
    let y = y.min(area_size.height - menu_size.height - MENU_MARGIN);

    Point::new(x.max(MENU_MARGIN), y.max(MENU_MARGIN))
}

fn menu_height_for_items(item_count: usize) -> f32 {
    MENU_VERTICAL_PADDING + MENU_ITEM_HEIGHT * item_count as f32
}

use iced::alignment;
use iced::widget::text::Wrapping;
use iced::widget::{Space, container, mouse_area, row, svg, text};
use iced::{Border, Element, Length, Theme, mouse};

use crate::icons;
use crate::row::{RowDescription, RowIcon};
use crate::settings::TreeItemSettings;

const ROW_FONT_SIZE: f32 = 12.0;
const ROW_PADDING_X: f32 = 6.0;
const ROW_SPACING: f32 = 4.0;
const FOCUS_BORDER_WIDTH: f32 = 1.0;

/// Pointer input produced by a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMessage {
    Pressed,
    RightPressed,
}

/// Draw a described row as an interactive [`iced`] element.
///
/// The caller maps [`RowMessage`] into its own message type and forwards it
/// to the matching `SourcesTreeItem` handler.
pub fn row_view<'a>(
    description: &RowDescription,
    is_selected: bool,
    settings: &TreeItemSettings,
) -> Element<'a, RowMessage> {
    let icon_size = settings.icon_size;

    let arrow: Element<'a, RowMessage> = match description.arrow {
        Some(arrow) => icon(icons::arrow_bytes(arrow), icon_size, false),
        None => Space::new()
            .width(Length::Fixed(icon_size))
            .height(Length::Fill)
            .into(),
    };

    let highlighted =
        matches!(description.icon, RowIcon::Domain { debuggee: true });
    let row_icon = icon(
        icons::row_icon_bytes(description.icon),
        icon_size,
        highlighted,
    );

    let label = container(
        text(description.label.clone())
            .size(ROW_FONT_SIZE)
            .width(Length::Fill)
            .wrapping(Wrapping::None)
            .align_x(alignment::Horizontal::Left),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    let content = row![
        Space::new().width(Length::Fixed(description.indent)),
        arrow,
        row_icon,
        label,
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center);

    let is_focused = description.focused;
    let row = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(settings.row_height))
        .padding([0.0, ROW_PADDING_X])
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let background = if is_selected {
                let mut color = palette.primary.weak.color;
                color.a = 0.7;
                Some(color.into())
            } else {
                None
            };
            let border = if is_focused {
                Border {
                    color: palette.primary.strong.color,
                    width: FOCUS_BORDER_WIDTH,
                    radius: 2.0.into(),
                }
            } else {
                Border::default()
            };
            container::Style {
                background,
                border,
                text_color: Some(palette.background.base.text),
                ..Default::default()
            }
        });

    mouse_area(row)
        .interaction(mouse::Interaction::Pointer)
        .on_press(RowMessage::Pressed)
        .on_right_press(RowMessage::RightPressed)
        .into()
}

fn icon<'a>(
    bytes: &'static [u8],
    size: f32,
    highlighted: bool,
) -> Element<'a, RowMessage> {
    let handle = svg::Handle::from_memory(bytes);
    let svg_icon = svg::Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |theme: &Theme, _| {
            let palette = theme.extended_palette();
            let color = if highlighted {
                palette.primary.base.color
            } else {
                palette.background.strong.text
            };
            svg::Style { color: Some(color) }
        });

    container(svg_icon)
        .width(Length::Fixed(size))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

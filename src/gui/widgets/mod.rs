use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

/// Stacks `dialog` over `base` with a dimmed backdrop, keeping input away
/// from the widgets underneath. Clicking the backdrop produces `on_blur`.
pub fn modal<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

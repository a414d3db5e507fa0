use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::theme;

/// Page controls: renders one button per page plus previous/next, and
/// reports the selected page index through `on_change`. Renders nothing
/// when there are no pages.
pub fn view<'a, Message: Clone + 'a>(
    current_page: u32,
    total_pages: u32,
    on_change: fn(u32) -> Message,
) -> Element<'a, Message> {
    let mut controls = row![].spacing(6).align_y(Alignment::Center);

    if total_pages == 0 {
        return controls.into();
    }

    controls = controls.push(
        button(text("Previous").size(14))
            .style(theme::Button::Page.style())
            .on_press_maybe(
                (current_page > 1).then(|| on_change(current_page - 1)),
            ),
    );

    for page in 1..=total_pages {
        let style = if page == current_page {
            theme::Button::PageCurrent
        } else {
            theme::Button::Page
        };
        let mut page_button =
            button(text(page.to_string()).size(14)).style(style.style());
        if page != current_page {
            page_button = page_button.on_press(on_change(page));
        }
        controls = controls.push(page_button);
    }

    controls = controls.push(
        button(text("Next").size(14))
            .style(theme::Button::Page.style())
            .on_press_maybe(
                (current_page < total_pages).then(|| on_change(current_page + 1)),
            ),
    );

    controls.into()
}

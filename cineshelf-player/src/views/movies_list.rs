use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use cineshelf_model::MovieSummary;

use crate::message::Message;
use crate::theme::{self, CineshelfTheme};

/// Render a sequence of movie records, passed through from the filter
/// endpoint unmodified.
pub fn view(movies: &[MovieSummary]) -> Element<'_, Message> {
    if movies.is_empty() {
        return container(
            text("No movies match the current filter")
                .size(16)
                .color(CineshelfTheme::TEXT_SECONDARY),
        )
        .padding(24)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into();
    }

    let mut list = column![].spacing(8).width(Length::Fill);
    for movie in movies {
        let released = movie
            .release_date
            .map(|date| date.format("%b %e, %Y").to_string())
            .unwrap_or_else(|| "Unannounced".to_owned());

        list = list.push(
            container(
                row![
                    text(&movie.title)
                        .size(18)
                        .color(CineshelfTheme::TEXT_PRIMARY),
                    Space::with_width(Length::Fill),
                    text(released)
                        .size(14)
                        .color(CineshelfTheme::TEXT_SECONDARY),
                ]
                .align_y(Alignment::Center),
            )
            .padding(12)
            .width(Length::Fill)
            .style(theme::Container::Card.style()),
        );
    }

    list.into()
}

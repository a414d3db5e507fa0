use iced::widget::{
    Space, button, checkbox, column, container, pick_list, row, scrollable,
    text, text_input,
};
use iced::{Alignment, Element, Length};

use cineshelf_model::SortOrder;

use crate::message::Message;
use crate::state::State;
use crate::theme::{self, CineshelfTheme};

use super::{movies_list, pagination};

/// Render the filter screen: heading, filter form, notice line, results
/// and pager.
pub fn view(state: &State) -> Element<'_, Message> {
    let heading = text("Filter movies")
        .size(28)
        .color(CineshelfTheme::TEXT_PRIMARY);

    let mut content = column![heading, filter_form(state)]
        .spacing(16)
        .padding(20)
        .width(Length::Fill);

    if let Some(notice) = &state.notice {
        content = content.push(
            container(text(notice).size(14))
                .padding(10)
                .width(Length::Fill)
                .style(theme::Container::ErrorBox.style()),
        );
    }

    content = content.push(movies_list::view(&state.movies));
    content = content.push(pagination::view(
        state.active.page,
        state.total_pages,
        Message::PageSelected,
    ));

    scrollable(content).into()
}

fn filter_form(state: &State) -> Element<'_, Message> {
    let title_input = text_input("Title of the movie", &state.form.title)
        .on_input(Message::TitleChanged)
        .on_submit(Message::SubmitFilter)
        .padding(10)
        .width(Length::Fixed(220.0));

    let sort_pick = pick_list(
        SortOrder::all(),
        Some(SortOrder::from_ascending(state.form.sort_by_ascending)),
        Message::SortOrderSelected,
    )
    .width(Length::Fixed(180.0));

    let selected_genre = state
        .genres
        .iter()
        .find(|genre| genre.id == state.form.genre_id)
        .cloned();
    let genre_pick = pick_list(
        state.genres.as_slice(),
        selected_genre,
        Message::GenreSelected,
    )
    .placeholder("--Choose a genre")
    .width(Length::Fixed(180.0));

    let upcoming = checkbox("Upcoming Releases", state.form.upcoming_releases)
        .on_toggle(Message::UpcomingReleasesToggled);
    let in_theaters = checkbox("In theaters", state.form.in_theaters)
        .on_toggle(Message::InTheatersToggled);

    let actions = row![
        button(text("Filter"))
            .on_press(Message::SubmitFilter)
            .style(theme::Button::Primary.style()),
        button(text("Clear"))
            .on_press(Message::ClearFilter)
            .style(theme::Button::Danger.style()),
    ]
    .spacing(12);

    container(
        row![
            title_input,
            sort_pick,
            genre_pick,
            upcoming,
            in_theaters,
            Space::with_width(Length::Fill),
            actions,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}

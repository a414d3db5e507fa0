use iced::Task;

use crate::message::Message;
use crate::state::State;
use crate::updates::filter_actions::{self, FilterAction};
use crate::updates::completions;

/// Single state-update entry point: every trigger (form edit, submit,
/// clear, pager click) and every network completion resolves here.
pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        // Form edits
        Message::TitleChanged(title) => {
            state.form.title = title;
            Task::none()
        }
        Message::SortOrderSelected(order) => {
            state.form.sort_by_ascending = order.is_ascending();
            Task::none()
        }
        Message::GenreSelected(genre) => {
            state.form.genre_id = genre.id;
            Task::none()
        }
        Message::UpcomingReleasesToggled(checked) => {
            state.form.upcoming_releases = checked;
            Task::none()
        }
        Message::InTheatersToggled(checked) => {
            state.form.in_theaters = checked;
            Task::none()
        }

        // Search triggers
        Message::SubmitFilter => {
            filter_actions::apply(state, FilterAction::Submit)
        }
        Message::ClearFilter => filter_actions::apply(state, FilterAction::Clear),
        Message::PageSelected(page) => {
            filter_actions::apply(state, FilterAction::SetPage(page))
        }

        // Network completions
        Message::GenresLoaded(result) => {
            completions::handle_genres_loaded(state, result)
        }
        Message::SearchCompleted(seq, result) => {
            completions::handle_search_completed(state, seq, result)
        }
    }
}

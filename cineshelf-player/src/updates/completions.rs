//! Network completion handlers.

use iced::Task;

use cineshelf_model::Genre;

use crate::api_client::SearchPage;
use crate::message::Message;
use crate::state::State;

/// Install the fetched genre list behind the sentinel option.
pub fn handle_genres_loaded(
    state: &mut State,
    result: Result<Vec<Genre>, String>,
) -> Task<Message> {
    match result {
        Ok(fetched) => {
            let mut options = Vec::with_capacity(fetched.len() + 1);
            options.push(Genre::sentinel());
            options.extend(fetched);
            state.genres = options;
        }
        Err(error) => {
            log::warn!("Genre lookup failed: {error}");
            state.notice = Some(format!("Could not load genres: {error}"));
        }
    }
    Task::none()
}

/// Apply a search completion, unless a newer search has been issued since.
pub fn handle_search_completed(
    state: &mut State,
    seq: u64,
    result: Result<SearchPage, String>,
) -> Task<Message> {
    if seq != state.search_seq {
        // Applying an out-of-date completion would let stale data
        // overwrite fresher data.
        log::debug!(
            "Dropping stale search completion {seq} (latest is {})",
            state.search_seq
        );
        return Task::none();
    }

    match result {
        Ok(page) => {
            state.movies = page.movies;
            state.total_pages = page.total_pages;
            state.notice = None;
        }
        Err(error) => {
            // Prior results and pager state stay as they were.
            log::warn!("Search failed: {error}");
            state.notice = Some(format!("Search failed: {error}"));
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use cineshelf_model::MovieSummary;

    fn fresh_state() -> State {
        State::new(Config::default(), "").0
    }

    fn movie(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_owned(),
            poster: None,
            release_date: None,
            in_theaters: false,
        }
    }

    #[test]
    fn loaded_genres_sit_behind_the_sentinel() {
        let mut state = fresh_state();

        let _task = handle_genres_loaded(
            &mut state,
            Ok(vec![
                Genre { id: 1, name: "Action".to_owned() },
                Genre { id: 2, name: "Drama".to_owned() },
            ]),
        );

        assert!(state.genres[0].is_sentinel());
        assert_eq!(state.genres.len(), 3);
        assert_eq!(state.genres[2].name, "Drama");
    }

    #[test]
    fn failed_genre_lookup_keeps_the_sentinel_and_sets_a_notice() {
        let mut state = fresh_state();

        let _task =
            handle_genres_loaded(&mut state, Err("connection refused".into()));

        assert!(state.genres[0].is_sentinel());
        assert_eq!(state.genres.len(), 1);
        assert!(state.notice.as_deref().unwrap().contains("genres"));
    }

    #[test]
    fn matching_completion_replaces_results_and_clears_the_notice() {
        let mut state = fresh_state();
        state.notice = Some("Search failed: earlier outage".to_owned());
        let seq = state.search_seq;

        let _task = handle_search_completed(
            &mut state,
            seq,
            Ok(SearchPage {
                movies: vec![movie(1, "The Matrix")],
                total_pages: 3,
            }),
        );

        assert_eq!(state.movies.len(), 1);
        assert_eq!(state.total_pages, 3);
        assert!(state.notice.is_none());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut state = fresh_state();
        state.movies = vec![movie(5, "Fresh")];
        state.total_pages = 2;
        let stale_seq = state.search_seq;
        state.search_seq += 1; // a newer search has been issued

        let _task = handle_search_completed(
            &mut state,
            stale_seq,
            Ok(SearchPage {
                movies: vec![movie(9, "Stale")],
                total_pages: 7,
            }),
        );

        assert_eq!(state.movies[0].title, "Fresh");
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn failed_search_retains_prior_results() {
        let mut state = fresh_state();
        state.movies = vec![movie(5, "Kept")];
        state.total_pages = 4;
        let seq = state.search_seq;

        let _task = handle_search_completed(
            &mut state,
            seq,
            Err("server unreachable".into()),
        );

        assert_eq!(state.movies[0].title, "Kept");
        assert_eq!(state.total_pages, 4);
        assert!(
            state.notice.as_deref().unwrap().contains("server unreachable")
        );
    }
}

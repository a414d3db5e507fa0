use iced::Task;

use cineshelf_model::{FilterCriteria, Genre, MovieSummary, query};

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::message::Message;

/// State of the filter screen.
#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub api: ApiClient,

    /// Values currently being edited in the form.
    pub form: FilterCriteria,
    /// Criteria of the most recently issued search. The pager pages
    /// through these, not through unsubmitted form edits.
    pub active: FilterCriteria,

    /// Selector options: the sentinel followed by the fetched genre list.
    pub genres: Vec<Genre>,
    pub movies: Vec<MovieSummary>,
    pub total_pages: u32,

    /// Location query string synchronized with the active criteria.
    pub location: String,
    /// Non-blocking notice from the last failed request, if any.
    pub notice: Option<String>,

    /// Sequence number of the latest issued search; completions carrying
    /// an older number are dropped.
    pub search_seq: u64,
}

impl State {
    /// Build the initial state and the startup task: the one-time location
    /// parse, then the genre fetch and the initial search (independent and
    /// unordered).
    pub fn new(config: Config, initial_location: &str) -> (Self, Task<Message>) {
        let criteria = query::parse(initial_location);

        let mut state = Self {
            api: ApiClient::new(config.server_url.clone()),
            config,
            form: criteria.clone(),
            active: criteria,
            genres: vec![Genre::sentinel()],
            movies: Vec::new(),
            total_pages: 0,
            location: String::new(),
            notice: None,
            search_seq: 0,
        };

        let genres = state.fetch_genres_task();
        let search = state.issue_search();
        (state, Task::batch([genres, search]))
    }

    fn fetch_genres_task(&self) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(async move { api.fetch_all_genres().await }, |result| {
            Message::GenresLoaded(result.map_err(|e| e.to_string()))
        })
    }

    /// Resynchronize the location with the active criteria and issue
    /// exactly one search for them. Every search trigger funnels through
    /// here, so the location can never lag a request.
    pub fn issue_search(&mut self) -> Task<Message> {
        self.location = query::encode(&self.active);
        if self.config.last_location != self.location {
            self.config.last_location = self.location.clone();
            if let Err(err) = self.config.save() {
                log::warn!("Failed to persist location: {err}");
            }
        }

        self.search_seq += 1;
        let seq = self.search_seq;
        let api = self.api.clone();
        let criteria = self.active.clone();
        Task::perform(
            async move { api.search_movies(&criteria).await },
            move |result| {
                Message::SearchCompleted(seq, result.map_err(|e| e.to_string()))
            },
        )
    }
}

use cineshelf_model::{Genre, SortOrder};

use crate::api_client::SearchPage;

/// Messages driving the filter screen.
#[derive(Debug, Clone)]
pub enum Message {
    // Form edits: update in-form values only; nothing is searched until a
    // trigger fires.
    TitleChanged(String),
    SortOrderSelected(SortOrder),
    GenreSelected(Genre),
    UpcomingReleasesToggled(bool),
    InTheatersToggled(bool),

    // Search triggers
    SubmitFilter,
    ClearFilter,
    PageSelected(u32),

    // Network completions
    GenresLoaded(Result<Vec<Genre>, String>),
    SearchCompleted(u64, Result<SearchPage, String>), // sequence, outcome
}

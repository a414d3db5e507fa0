//! Search-triggering filter actions.
//!
//! Submit, clear and pager clicks all resolve to a [`FilterAction`] and go
//! through the same path: mutate the active criteria, resynchronize the
//! location, issue exactly one search. No trigger mutates in-flight form
//! values behind the form's back.

use iced::Task;

use cineshelf_model::FilterCriteria;

use crate::message::Message;
use crate::state::State;

/// The three ways a search can be triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Adopt the in-form values, rewound to the first page.
    Submit,
    /// Restore default criteria.
    Clear,
    /// Page through the active criteria.
    SetPage(u32),
}

/// Apply a filter action and issue the resulting search.
pub fn apply(state: &mut State, action: FilterAction) -> Task<Message> {
    match action {
        FilterAction::Submit => {
            log::debug!("Filter values: {:?}", state.form);
            state.active = state.form.on_first_page();
            state.form = state.active.clone();
        }
        FilterAction::Clear => {
            state.form = FilterCriteria::default();
            state.active = FilterCriteria::default();
        }
        FilterAction::SetPage(page) => {
            state.active = state.active.with_page(page);
            state.form.page = state.active.page;
        }
    }

    state.issue_search()
}

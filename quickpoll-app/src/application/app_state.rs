use crate::domain::{DraftPoll, MenuItem, NewPoll, Poll, PollId, PollResult};

/// Everything the root shell owns: the fetched polls, the creation draft and
/// the navigation selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub polls: Vec<Poll>,
    pub draft: DraftPoll,
    pub selected_menu: MenuItem,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_polls(&mut self, polls: Vec<Poll>) {
        self.polls = polls;
    }

    /// Attaches results to the poll with `poll_id`. Other polls are untouched.
    pub fn attach_results(&mut self, poll_id: &PollId, results: Vec<PollResult>) {
        if let Some(poll) = self.polls.iter_mut().find(|p| &p.id == poll_id) {
            poll.results = Some(results);
        }
    }

    pub fn set_question(&mut self, question: String) {
        self.draft.set_question(question);
    }

    pub fn set_option(&mut self, index: usize, value: String) {
        self.draft.set_option(index, value);
    }

    pub fn select_menu(&mut self, item: MenuItem) {
        self.selected_menu = item;
    }

    pub fn submission(&self) -> NewPoll {
        self.draft.submission()
    }

    pub fn finish_creation(&mut self) {
        self.draft.reset();
        self.selected_menu = MenuItem::ActivePolls;
    }
}

use super::NewPoll;
use serde::{Deserialize, Serialize};

const INITIAL_OPTION_SLOTS: usize = 2;

/// Poll creation input that has not been submitted yet.
///
/// The option list always ends in a slot the user has not filled: typing into
/// the last slot grows the list by one blank slot, with no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPoll {
    pub question: String,
    pub options: Vec<String>,
}

impl Default for DraftPoll {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftPoll {
    pub fn new() -> Self {
        Self {
            question: String::new(),
            options: vec![String::new(); INITIAL_OPTION_SLOTS],
        }
    }

    pub fn set_question(&mut self, question: String) {
        self.question = question;
    }

    pub fn set_option(&mut self, index: usize, value: String) {
        let last = self.options.len().checked_sub(1);
        let Some(slot) = self.options.get_mut(index) else {
            return;
        };
        let grows = Some(index) == last && !value.is_empty();
        *slot = value;
        if grows {
            self.options.push(String::new());
        }
    }

    /// Request body for this draft. Blank options are dropped; nothing else is checked.
    pub fn submission(&self) -> NewPoll {
        NewPoll {
            question: self.question.clone(),
            options: self
                .options
                .iter()
                .filter(|option| !option.is_empty())
                .cloned()
                .collect(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(options: &[&str]) -> DraftPoll {
        DraftPoll {
            question: String::new(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn test_starts_with_two_blank_slots() {
        assert_eq!(DraftPoll::new().options, vec!["", ""]);
    }

    #[test]
    fn test_editing_last_slot_appends_blank() {
        let mut draft = draft_with(&["A", "B"]);
        draft.set_option(1, "B2".to_string());
        assert_eq!(draft.options, vec!["A", "B2", ""]);
    }

    #[test]
    fn test_editing_other_slot_never_appends() {
        let mut draft = draft_with(&["A", "B"]);
        draft.set_option(0, "A2".to_string());
        assert_eq!(draft.options, vec!["A2", "B"]);
    }

    #[test]
    fn test_clearing_last_slot_does_not_append() {
        let mut draft = draft_with(&["A", "B"]);
        draft.set_option(1, String::new());
        assert_eq!(draft.options, vec!["A", ""]);
    }

    #[test]
    fn test_growth_is_unbounded() {
        let mut draft = DraftPoll::new();
        for i in 0..50 {
            let last = draft.options.len() - 1;
            draft.set_option(last, format!("option {i}"));
        }
        assert_eq!(draft.options.len(), 52);
        assert_eq!(draft.options.last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut draft = draft_with(&["A", "B"]);
        draft.set_option(5, "Z".to_string());
        assert_eq!(draft.options, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_option_list_is_left_alone() {
        let mut draft = draft_with(&[]);
        draft.set_option(0, "A".to_string());
        assert!(draft.options.is_empty());
    }

    #[test]
    fn test_submission_filters_empty_options_in_order() {
        let mut draft = draft_with(&["X", "", "Y"]);
        draft.set_question("Pick one".to_string());
        let submission = draft.submission();
        assert_eq!(submission.question, "Pick one");
        assert_eq!(submission.options, vec!["X", "Y"]);
    }

    #[test]
    fn test_submission_allows_blank_question_and_single_option() {
        let submission = draft_with(&["only", ""]).submission();
        assert_eq!(submission.question, "");
        assert_eq!(submission.options, vec!["only"]);
    }

    #[test]
    fn test_reset() {
        let mut draft = draft_with(&["A", "B", ""]);
        draft.set_question("Q".to_string());
        draft.reset();
        assert_eq!(draft, DraftPoll::new());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResult {
    pub option_text: String,
    pub vote_count: u64,
}

impl PollResult {
    pub fn new(option_text: impl Into<String>, vote_count: u64) -> Self {
        Self {
            option_text: option_text.into(),
            vote_count,
        }
    }
}

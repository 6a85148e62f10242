use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    #[default]
    ActivePolls,
    CreatePoll,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::ActivePolls, MenuItem::CreatePoll];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ActivePolls => "Active Polls",
            Self::CreatePoll => "Create Poll",
        }
    }
}

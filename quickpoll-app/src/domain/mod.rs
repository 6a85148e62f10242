mod draft;
mod menu;
mod poll;
mod poll_result;
mod requests;

pub use draft::DraftPoll;
pub use menu::MenuItem;
pub use poll::{Poll, PollId, PollView};
pub use poll_result::PollResult;
pub use requests::{NewPoll, VoteRequest};

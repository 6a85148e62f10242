mod app_state;
mod poll_actions;
mod poll_api;

pub use app_state::AppState;
pub use poll_actions::{load_polls, submit_draft, vote_and_fetch_results};
pub use poll_api::PollApi;

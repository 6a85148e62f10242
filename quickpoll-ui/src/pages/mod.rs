mod active_polls;
mod create_poll;

pub use active_polls::ActivePollsPage;
pub use create_poll::CreatePollPage;

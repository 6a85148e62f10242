use crate::domain::{NewPoll, Poll, PollId, PollResult};
use quickpoll_errors::AppError;

/// The polls backend as seen from the UI.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait PollApi {
    async fn list_polls(&self) -> Result<Vec<Poll>, AppError>;

    async fn create_poll(&self, poll: &NewPoll) -> Result<(), AppError>;

    async fn cast_vote(&self, poll_id: &PollId, option: &str) -> Result<(), AppError>;

    async fn poll_results(&self, poll_id: &PollId) -> Result<Vec<PollResult>, AppError>;
}

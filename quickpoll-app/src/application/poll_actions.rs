use super::PollApi;
use crate::domain::{NewPoll, Poll, PollId, PollResult};
use quickpoll_errors::AppError;

pub async fn load_polls<A: PollApi>(api: &A) -> Result<Vec<Poll>, AppError> {
    let polls = api.list_polls().await?;
    tracing::debug!("Loaded {} polls", polls.len());
    Ok(polls)
}

/// Records a vote, then fetches that poll's results.
///
/// The vote response is not inspected: only a transport failure keeps the
/// results request from being sent.
pub async fn vote_and_fetch_results<A: PollApi>(
    api: &A,
    poll_id: &PollId,
    option: &str,
) -> Result<Vec<PollResult>, AppError> {
    if let Err(e) = api.cast_vote(poll_id, option).await {
        if e.is_transport() {
            return Err(e);
        }
        tracing::warn!("Vote on poll {} returned an error: {}", poll_id, e);
    }
    api.poll_results(poll_id).await
}

pub async fn submit_draft<A: PollApi>(api: &A, poll: &NewPoll) -> Result<(), AppError> {
    tracing::debug!("Creating poll with {} options", poll.options.len());
    api.create_poll(poll).await
}

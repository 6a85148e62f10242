use leptos::prelude::*;
use quickpoll_app::domain::{Poll, PollId, PollResult, PollView};

/// What each vote button sends when clicked, in option order.
fn vote_targets(poll: &Poll, options: &[String]) -> Vec<(PollId, String)> {
    options
        .iter()
        .map(|option| (poll.id.clone(), option.clone()))
        .collect()
}

fn result_lines(results: &[PollResult]) -> Vec<String> {
    results
        .iter()
        .map(|result| format!("{}: {}", result.option_text, result.vote_count))
        .collect()
}

#[component]
pub fn PollCard(poll: Poll, on_vote: Callback<(PollId, String)>) -> impl IntoView {
    let created = poll.created_label();

    let body = match poll.view() {
        PollView::Voting(options) => {
            let buttons = vote_targets(&poll, options)
                .into_iter()
                .map(|target| {
                    let label = target.1.clone();
                    view! {
                        <button
                            class="poll-card__vote"
                            on:click=move |_| on_vote.run(target.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="poll-card__actions">{buttons}</div> }.into_any()
        }
        PollView::Results(results) => {
            let rows = result_lines(results)
                .into_iter()
                .map(|line| view! { <li class="poll-card__result">{line}</li> })
                .collect::<Vec<_>>();
            view! {
                <div class="poll-card__results">
                    <h4 class="poll-card__results-title">"Results:"</h4>
                    <ul>{rows}</ul>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <article class="card poll-card">
            <h3 class="poll-card__question">{poll.question_text.clone()}</h3>
            {created.map(|label| view! { <p class="poll-card__created">{label}</p> })}
            {body}
        </article>
    }
}

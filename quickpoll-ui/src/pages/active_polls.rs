use crate::components::PollCard;
use leptos::prelude::*;
use quickpoll_app::application::AppState;
use quickpoll_app::domain::PollId;

#[component]
pub fn ActivePollsPage(
    state: RwSignal<AppState>,
    on_vote: Callback<(PollId, String)>,
) -> impl IntoView {
    view! {
        <section class="container">
            <h2 class="page__title">"Active Polls"</h2>
            <div class="poll-list">
                {move || {
                    state.with(|s| {
                        s.polls
                            .iter()
                            .cloned()
                            .map(|poll| view! { <PollCard poll=poll on_vote=on_vote/> })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </section>
    }
}

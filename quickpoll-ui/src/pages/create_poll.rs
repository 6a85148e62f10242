use crate::components::CreatePollForm;
use leptos::prelude::*;
use quickpoll_app::application::AppState;

#[component]
pub fn CreatePollPage(state: RwSignal<AppState>, on_create: Callback<()>) -> impl IntoView {
    let question = Signal::derive(move || state.with(|s| s.draft.question.clone()));
    let options = Signal::derive(move || state.with(|s| s.draft.options.clone()));

    let on_question = Callback::new(move |value: String| state.update(|s| s.set_question(value)));
    let on_option = Callback::new(move |(index, value): (usize, String)| {
        state.update(|s| s.set_option(index, value))
    });

    view! {
        <section class="container">
            <CreatePollForm
                question=question
                options=options
                on_question=on_question
                on_option=on_option
                on_submit=on_create
            />
        </section>
    }
}

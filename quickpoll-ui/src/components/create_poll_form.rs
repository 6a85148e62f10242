use leptos::prelude::*;

/// Poll creation inputs. Holds no state and makes no requests: every edit goes
/// straight to the caller.
#[component]
pub fn CreatePollForm(
    #[prop(into)] question: Signal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    on_question: Callback<String>,
    on_option: Callback<(usize, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="card poll-form" on:submit=on_form_submit>
            <h2 class="poll-form__title">"Create a New Poll"</h2>
            <label class="poll-form__field">
                <span class="poll-form__label">"Poll Question"</span>
                <input
                    type="text"
                    class="poll-form__input"
                    prop:value=move || question.get()
                    on:input=move |ev| on_question.run(event_target_value(&ev))
                />
            </label>
            // Keyed by slot index so a growing list keeps the focused input.
            <For
                each=move || 0..options.with(|o| o.len())
                key=|index| *index
                children=move |index| {
                    view! {
                        <label class="poll-form__field">
                            <span class="poll-form__label">{format!("Option {}", index + 1)}</span>
                            <input
                                type="text"
                                class="poll-form__input"
                                prop:value=move || {
                                    options.with(|o| o.get(index).cloned().unwrap_or_default())
                                }
                                on:input=move |ev| on_option.run((index, event_target_value(&ev)))
                            />
                        </label>
                    }
                }
            />
            <button type="submit" class="poll-form__submit">"Create Poll"</button>
        </form>
    }
}

use super::icons::{AddIcon, PollIcon};
use leptos::prelude::*;
use quickpoll_app::domain::MenuItem;

#[component]
pub fn NavDrawer(
    #[prop(into)] selected: Signal<MenuItem>,
    on_select: Callback<MenuItem>,
) -> impl IntoView {
    let items = MenuItem::ALL
        .into_iter()
        .map(|item| {
            let icon = match item {
                MenuItem::ActivePolls => view! { <PollIcon/> }.into_any(),
                MenuItem::CreatePoll => view! { <AddIcon/> }.into_any(),
            };
            view! {
                <li>
                    <button
                        class=move || {
                            if selected.get() == item {
                                "nav-drawer__item nav-drawer__item--selected"
                            } else {
                                "nav-drawer__item"
                            }
                        }
                        on:click=move |_| on_select.run(item)
                    >
                        <span class="nav-drawer__icon">{icon}</span>
                        <span class="nav-drawer__label">{item.label()}</span>
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-drawer">
            <ul class="nav-drawer__list">{items}</ul>
        </nav>
    }
}

pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use quickpoll_app::application::{load_polls, submit_draft, vote_and_fetch_results, AppState};
use quickpoll_app::domain::{MenuItem, PollId};
use quickpoll_app::infrastructure::api_client::PollsClient;
use url::Url;

use components::NavDrawer;
use pages::{ActivePollsPage, CreatePollPage};

const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Origin the page was served from; `/api` calls go back through it.
fn page_origin() -> Url {
    window()
        .location()
        .origin()
        .ok()
        .and_then(|origin| Url::parse(&origin).ok())
        .or_else(|| Url::parse(FALLBACK_ORIGIN).ok())
        .expect("fallback origin is a valid URL")
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(AppState::new());
    let api = StoredValue::new_local(PollsClient::new(page_origin()));

    spawn_local(async move {
        let client = api.get_value();
        match load_polls(&client).await {
            Ok(polls) => state.update(|s| s.replace_polls(polls)),
            Err(e) => tracing::warn!("Loading polls failed: {}", e),
        }
    });

    let on_vote = Callback::new(move |(poll_id, option): (PollId, String)| {
        spawn_local(async move {
            let client = api.get_value();
            match vote_and_fetch_results(&client, &poll_id, &option).await {
                Ok(results) => state.update(|s| s.attach_results(&poll_id, results)),
                Err(e) => tracing::warn!("Voting on poll {} failed: {}", poll_id, e),
            }
        });
    });

    let on_create = Callback::new(move |()| {
        let submission = state.with_untracked(|s| s.submission());
        spawn_local(async move {
            let client = api.get_value();
            if let Err(e) = submit_draft(&client, &submission).await {
                tracing::warn!("Creating poll failed: {}", e);
                return;
            }
            state.update(|s| s.finish_creation());
            match load_polls(&client).await {
                Ok(polls) => state.update(|s| s.replace_polls(polls)),
                Err(e) => tracing::warn!("Reloading polls failed: {}", e),
            }
        });
    });

    let selected = Signal::derive(move || state.with(|s| s.selected_menu));
    let on_select = Callback::new(move |item: MenuItem| state.update(|s| s.select_menu(item)));

    view! {
        <Title text="QuickPoll"/>
        <Meta name="description" content="Create polls, vote, and see the results"/>

        <div class="layout">
            <header class="app-bar">
                <h1 class="app-bar__title">"QuickPoll"</h1>
            </header>
            <NavDrawer selected=selected on_select=on_select/>
            <main class="layout__main">
                {move || match selected.get() {
                    MenuItem::ActivePolls => view! {
                        <ActivePollsPage state=state on_vote=on_vote/>
                    }.into_any(),
                    MenuItem::CreatePoll => view! {
                        <CreatePollPage state=state on_create=on_create/>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

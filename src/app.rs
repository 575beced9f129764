use leptos::prelude::*;
use crate::config::BoardConfig;
use crate::pages::BoardView;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <main class="app">
            <BoardView />
        </main>
    }
}

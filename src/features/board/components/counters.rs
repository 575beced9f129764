use leptos::prelude::*;
use crate::models::Counters;

#[component]
pub fn BoardCounters(#[prop(into)] counters: Signal<Counters>) -> impl IntoView {
    view! {
        <div class="counters">
            <p>"Add Count: " {move || counters.get().add_count}</p>
            <p>"Update Count: " {move || counters.get().update_count}</p>
        </div>
    }
}

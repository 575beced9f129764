use leptos::prelude::*;
use crate::features::board::hooks::use_drag_resize;
use crate::models::CardSize;

/// Fixed-size frame whose whole body is a resize handle.
#[component]
pub fn ResizableCard(
    #[prop(into)] width: Signal<i32>,
    #[prop(into)] height: Signal<i32>,
    on_resize: Callback<CardSize>,
    children: Children,
) -> impl IntoView {
    let drag = use_drag_resize(width, height, on_resize);

    view! {
        <div
            class="resizable-card"
            class:resizing=move || drag.resizing.get()
            style=move || format!("width: {}px; height: {}px;", width.get(), height.get())
        >
            <div class="resize-handle" on:mousedown=move |ev| drag.start.run(ev)>
                {children()}
            </div>
        </div>
    }
}

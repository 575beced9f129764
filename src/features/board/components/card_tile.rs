use leptos::prelude::*;
use crate::features::board::services::Board;
use crate::models::CardSize;
use super::ResizableCard;

#[component]
pub fn CardTile(
    card_id: u32,
    board: ReadSignal<Board>,
    on_edit: Callback<u32>,
    on_resize: Callback<(u32, CardSize)>,
) -> impl IntoView {
    let size = Memo::new(move |_| {
        board.with(|b| b.card(card_id).map(|c| c.size()).unwrap_or_default())
    });
    let title = move || board.with(|b| b.card(card_id).map(|c| c.title.clone()).unwrap_or_default());
    let content = move || board.with(|b| b.card(card_id).map(|c| c.content.clone()).unwrap_or_default());

    view! {
        <ResizableCard
            width=Signal::derive(move || size.get().width)
            height=Signal::derive(move || size.get().height)
            on_resize=Callback::new(move |size: CardSize| on_resize.run((card_id, size)))
        >
            <div class="component" on:click=move |_| on_edit.run(card_id)>
                <h3>{title}</h3>
                <p>{content}</p>
            </div>
        </ResizableCard>
    }
}

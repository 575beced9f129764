use leptos::prelude::*;
use crate::features::board::{use_board, BoardCounters, CardForm, CardTile};

#[component]
pub fn BoardView() -> impl IntoView {
    let hook = use_board();
    let board = hook.board;

    let form = Signal::derive(move || board.with(|b| b.form().clone()));
    let counters = Signal::derive(move || board.with(|b| b.counters()));

    view! {
        <div class="board-page">
            <div class="form-container">
                <CardForm
                    form=form
                    on_title=hook.set_title
                    on_content=hook.set_content
                    on_submit=hook.submit
                    on_add_new=hook.start_new
                />
                <BoardCounters counters=counters />

                // Keyed by id so a card keeps its drag subscription while its size changes
                <For
                    each=move || 0..board.with(|b| b.row_count())
                    key=|row: &usize| *row
                    children=move |row: usize| {
                        view! {
                            <div class="card-row">
                                <For
                                    each=move || board.with(|b| b.row(row).iter().map(|c| c.id).collect::<Vec<_>>())
                                    key=|id: &u32| *id
                                    children=move |card_id: u32| {
                                        view! {
                                            <CardTile
                                                card_id=card_id
                                                board=board
                                                on_edit=hook.edit
                                                on_resize=hook.resize
                                            />
                                        }
                                    }
                                />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

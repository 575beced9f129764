use leptos::prelude::*;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::features::board::services::{
    edit_card, resize_card, set_form_content, set_form_title, start_new_card, submit_form, Board,
};
use crate::models::CardSize;

#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: ReadSignal<Board>,
    pub submit: Callback<()>,
    pub start_new: Callback<()>,
    pub edit: Callback<u32>,
    pub resize: Callback<(u32, CardSize)>,
    pub set_title: Callback<String>,
    pub set_content: Callback<String>,
}

pub fn use_board() -> BoardHook {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let board = RwSignal::new(Board::new(&config));

    let submit = Callback::new(move |_: ()| {
        if let Err(e @ BoardError::BlankField) = submit_form(board) {
            // Blocking, like the browser's own required-field prompt
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&e.to_string());
            }
        }
    });

    BoardHook {
        board: board.read_only(),
        submit,
        start_new: Callback::new(move |_: ()| start_new_card(board)),
        edit: Callback::new(move |card_id: u32| edit_card(board, card_id)),
        resize: Callback::new(move |(card_id, size): (u32, CardSize)| resize_card(board, card_id, size)),
        set_title: Callback::new(move |title: String| set_form_title(board, title)),
        set_content: Callback::new(move |content: String| set_form_content(board, content)),
    }
}

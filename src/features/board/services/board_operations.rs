use leptos::prelude::*;
use crate::error::BoardError;
use crate::models::CardSize;
use super::board_state::{Board, Submitted};

// Submit the form: add in create mode, update in edit mode
pub fn submit_form(board: RwSignal<Board>) -> Result<Submitted, BoardError> {
    let result = board
        .try_update(|board| board.submit())
        .unwrap_or(Err(BoardError::Disposed));

    match &result {
        Ok(Submitted::Added(id)) => {
            web_sys::console::log_1(&format!("Card {} added", id).into());
        }
        Ok(Submitted::Updated(id)) => {
            web_sys::console::log_1(&format!("Card {} updated", id).into());
        }
        Ok(Submitted::Unmatched(id)) => {
            web_sys::console::warn_1(&format!("Card {} not found, nothing updated", id).into());
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Submit rejected: {}", e).into());
        }
    }
    result
}

// Load a card into the form for editing
pub fn edit_card(board: RwSignal<Board>, card_id: u32) {
    let found = board.try_update(|board| board.edit(card_id)).unwrap_or(false);
    if !found {
        web_sys::console::error_1(&format!("Card {} not found in board!", card_id).into());
    }
}

// Resize a card, looked up by id since rows shift when cards are prepended
pub fn resize_card(board: RwSignal<Board>, card_id: u32, size: CardSize) {
    board.update(|board| {
        if let Some(index) = board.position(card_id) {
            board.resize(index, size);
        }
    });
}

pub fn start_new_card(board: RwSignal<Board>) {
    board.update(Board::reset_form);
}

pub fn set_form_title(board: RwSignal<Board>, title: String) {
    board.update(|board| board.set_title(title));
}

pub fn set_form_content(board: RwSignal<Board>, content: String) {
    board.update(|board| board.set_content(content));
}

//! In-memory board: the card list, the add/edit form and the counters.
//!
//! Pure state with no DOM access; `board_operations` wraps it in a signal.

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::models::{CardForm, CardRecord, CardSize, Counters, FormMode};

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Added(u32),
    Updated(u32),
    /// Edit target no longer exists; nothing changed.
    Unmatched(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cards: Vec<CardRecord>,
    form: CardForm,
    counters: Counters,
    default_size: CardSize,
    row_len: usize,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Self {
        let default_size = CardSize::new(config.card_width, config.card_height);
        let cards = (1..=config.seed_cards)
            .map(|n| {
                CardRecord::new(
                    n,
                    default_size,
                    format!("Component {}", n),
                    format!("Content of Component {}", n),
                )
            })
            .collect();

        Self {
            cards,
            form: CardForm::default(),
            counters: Counters {
                add_count: config.seed_cards,
                update_count: 0,
            },
            default_size,
            row_len: config.row_len.max(1),
        }
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn card(&self, id: u32) -> Option<&CardRecord> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn form(&self) -> &CardForm {
        &self.form
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn set_title(&mut self, title: String) {
        self.form.title = title;
    }

    pub fn set_content(&mut self, content: String) {
        self.form.content = content;
    }

    /// "Add New": back to create mode with an empty form.
    pub fn reset_form(&mut self) {
        self.form = CardForm::default();
    }

    pub fn edit(&mut self, id: u32) -> bool {
        match self.card(id) {
            Some(card) => {
                self.form = CardForm::editing(card);
                true
            }
            None => false,
        }
    }

    pub fn submit(&mut self) -> Result<Submitted, BoardError> {
        match self.form.mode {
            FormMode::Creating => self.add().map(Submitted::Added),
            FormMode::Editing(id) => Ok(if self.update(id) {
                Submitted::Updated(id)
            } else {
                Submitted::Unmatched(id)
            }),
        }
    }

    /// Prepends a card built from the form and returns its id.
    ///
    /// Ids are `len + 1`; they stay unique only because cards are never removed.
    pub fn add(&mut self) -> Result<u32, BoardError> {
        if self.form.is_blank() {
            return Err(BoardError::BlankField);
        }

        let id = self.cards.len() as u32 + 1;
        let form = std::mem::take(&mut self.form);
        self.cards
            .insert(0, CardRecord::new(id, self.default_size, form.title, form.content));
        self.counters.add_count += 1;
        Ok(id)
    }

    /// Replaces title and content of card `id`. The form is kept when nothing matches.
    pub fn update(&mut self, id: u32) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let form = std::mem::take(&mut self.form);
        self.cards[index] = CardRecord {
            title: form.title,
            content: form.content,
            ..self.cards[index].clone()
        };
        self.counters.update_count += 1;
        true
    }

    pub fn resize(&mut self, index: usize, size: CardSize) -> bool {
        match self.cards.get(index) {
            Some(card) => {
                self.cards[index] = card.resized(size);
                true
            }
            None => false,
        }
    }

    pub fn row_count(&self) -> usize {
        self.cards().len().div_ceil(self.row_len)
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, CardRecord> {
        self.cards().chunks(self.row_len)
    }

    pub fn row(&self, index: usize) -> &[CardRecord] {
        self.rows().nth(index).unwrap_or(&[])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(seed_cards: u32) -> Board {
        Board::new(&BoardConfig {
            seed_cards,
            ..BoardConfig::default()
        })
    }

    fn fill_form(board: &mut Board, title: &str, content: &str) {
        board.set_title(title.to_string());
        board.set_content(content.to_string());
    }

    #[test]
    fn starts_with_seed_cards_counted_as_adds() {
        let board = Board::default();
        assert_eq!(board.cards().len(), 3);
        assert_eq!(board.cards()[0].title, "Component 1");
        assert_eq!(board.cards()[2].content, "Content of Component 3");
        assert_eq!(board.counters(), Counters { add_count: 3, update_count: 0 });
        assert_eq!(board.form().mode, FormMode::Creating);
    }

    #[test]
    fn add_prepends_card_with_next_id_and_default_size() {
        let mut board = Board::default();
        fill_form(&mut board, "T", "C");

        assert_eq!(board.submit(), Ok(Submitted::Added(4)));
        assert_eq!(board.cards().len(), 4);
        assert_eq!(
            board.cards()[0],
            CardRecord::new(4, CardSize::new(200, 200), "T".into(), "C".into())
        );
        assert_eq!(board.cards()[1].id, 1);
        assert_eq!(board.counters().add_count, 4);
        assert_eq!(board.form(), &CardForm::default());
    }

    #[test]
    fn add_with_blank_field_changes_nothing() {
        let mut board = Board::default();
        fill_form(&mut board, "Title", "   \n");
        let before = board.clone();

        assert_eq!(board.submit(), Err(BoardError::BlankField));
        assert_eq!(board.cards(), before.cards());
        assert_eq!(board.counters(), before.counters());
        assert_eq!(board.form().title, "Title");
    }

    #[test]
    fn edit_then_submit_replaces_text_only() {
        let mut board = Board::default();
        board.resize(1, CardSize::new(310, 120));

        assert!(board.edit(2));
        assert_eq!(board.form().mode, FormMode::Editing(2));
        assert_eq!(board.form().title, "Component 2");
        fill_form(&mut board, "New title", "New content");

        assert_eq!(board.submit(), Ok(Submitted::Updated(2)));
        let card = board.card(2).unwrap();
        assert_eq!(card.title, "New title");
        assert_eq!(card.content, "New content");
        assert_eq!(card.size(), CardSize::new(310, 120));
        assert_eq!(board.cards().len(), 3);
        assert_eq!(board.counters(), Counters { add_count: 3, update_count: 1 });
        assert_eq!(board.form().mode, FormMode::Creating);
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let mut board = Board::default();
        assert!(!board.edit(42));

        assert!(!board.update(42));
        assert_eq!(board.counters().update_count, 0);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn submit_for_missing_card_keeps_the_form() {
        let mut board = Board::default();
        board.form.mode = FormMode::Editing(99);
        fill_form(&mut board, "x", "y");
        let cards_before = board.cards().to_vec();

        assert_eq!(board.submit(), Ok(Submitted::Unmatched(99)));
        assert_eq!(board.form().mode, FormMode::Editing(99));
        assert_eq!(board.form().title, "x");
        assert_eq!(board.form().content, "y");
        assert_eq!(board.counters().update_count, 0);
        assert_eq!(board.cards(), cards_before.as_slice());
    }

    #[test]
    fn reset_form_leaves_edit_mode() {
        let mut board = Board::default();
        board.edit(1);
        board.reset_form();
        assert_eq!(board.form(), &CardForm::default());

        fill_form(&mut board, "Fresh", "Card");
        assert_eq!(board.submit(), Ok(Submitted::Added(4)));
        assert_eq!(board.card(1).unwrap().title, "Component 1");
    }

    #[test]
    fn resize_touches_only_the_target_card() {
        let mut board = Board::default();
        let before = board.cards().to_vec();
        let size = before[1].size().grow((25, -40));

        assert!(board.resize(1, size));
        assert_eq!(board.cards()[1].size(), CardSize::new(225, 160));
        assert_eq!(board.cards()[1].title, before[1].title);
        assert_eq!(board.cards()[0], before[0]);
        assert_eq!(board.cards()[2], before[2]);
    }

    #[test]
    fn resize_out_of_range_is_ignored() {
        let mut board = Board::default();
        assert!(!board.resize(3, CardSize::new(1, 1)));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn seven_cards_make_rows_of_five_and_two() {
        let board = board_with(7);
        let rows: Vec<Vec<u32>> = board
            .rows()
            .map(|row| row.iter().map(|c| c.id).collect())
            .collect();

        assert_eq!(rows, vec![vec![1, 2, 3, 4, 5], vec![6, 7]]);
        assert_eq!(board.row_count(), 2);
        assert_eq!(board.row(1).len(), 2);
        assert!(board.row(2).is_empty());
    }

    #[test]
    fn empty_board_has_no_rows() {
        let mut board = board_with(0);
        assert_eq!(board.row_count(), 0);

        fill_form(&mut board, "only", "one");
        assert_eq!(board.add(), Ok(1));
        assert_eq!(board.row_count(), 1);
    }
}

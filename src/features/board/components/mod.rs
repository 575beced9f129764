pub mod card_form;
pub mod card_tile;
pub mod counters;
pub mod resizable_card;

pub use card_form::CardForm;
pub use card_tile::CardTile;
pub use counters::BoardCounters;
pub use resizable_card::ResizableCard;

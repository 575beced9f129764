pub mod board_state;
pub mod board_operations;
pub mod document_listener;
pub mod drag;

pub use board_state::*;
pub use board_operations::*;
pub use document_listener::*;
pub use drag::*;

pub mod use_board;
pub mod use_drag_resize;

pub use use_board::*;
pub use use_drag_resize::*;

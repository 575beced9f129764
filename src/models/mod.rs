pub mod card;
pub mod form;

pub use card::{CardRecord, CardSize};
pub use form::{CardForm, Counters, FormMode};

pub mod calculations;
pub mod history;
pub mod models;
pub mod words;

pub use calculations::{VatBreakdown, VatError, calculate, parse_input};
pub use history::{HistoryStore, SharedHistory};
pub use models::*;

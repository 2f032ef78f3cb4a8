//! Better Selection - word-aware cursor motion and click placement for text fields

pub mod buffer;
pub mod error;
pub mod field;
pub mod movement;
pub mod settings;
pub mod snap;

pub use buffer::{CharBuffer, Direction};
pub use error::{ErrorType, Result, SelectionError};
pub use field::EditField;
pub use movement::{move_by_words, CharClass, TokenState, WordMotion};
pub use settings::SelectionOptions;
pub use snap::{nearest_boundary, nearest_boundary_in, ClickSnap, TextMeasurer};

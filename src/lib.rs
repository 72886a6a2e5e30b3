pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::document::{DocumentCursor, DocumentView, DocumentsCursor, ExtJsonLinesCursor, RawValue};
pub use engine::errors::{CursorError, TranscodeError};
pub use engine::frame::{Field, FieldValues, Frame};
pub use engine::query::{QueryMode, QueryOptions, execute};

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;

pub mod cursor;
pub mod extjson;
pub mod value;
pub mod view;

pub use cursor::{DocumentCursor, DocumentsCursor, ExtJsonLinesCursor};
pub use value::RawValue;
pub use view::DocumentView;

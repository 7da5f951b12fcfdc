//! Domain layer - Diary model and pure view computations

pub mod calendar;
pub mod date_ref;
pub mod draft;
pub mod entry;
pub mod grouping;
pub mod range;

pub use calendar::{DayCell, WeekDay};
pub use date_ref::DateRef;
pub use draft::{DraftSession, Selection};
pub use entry::{DiaryEntry, EntryDraft, FontSize, TagSet};
pub use range::{HighlightRange, StrikethroughRange, TextSpan};

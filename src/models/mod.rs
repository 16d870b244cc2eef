pub mod coverage;
pub mod role;
pub mod snapshot;
pub mod tutor;

pub use coverage::CoverageCode;
pub use role::Role;
pub use snapshot::{DayGrid, ScheduleSnapshot};
pub use tutor::Tutor;

pub mod config;
pub mod duration;
pub mod error;
pub mod record;
pub mod session;
pub mod stopwatch;

pub use config::TrackerConfig;
pub use duration::{format_duration, format_elapsed, ZERO_DISPLAY};
pub use error::{ErrorSeverity, TimekeepError, TimekeepResult};
pub use record::{Record, RecordStore, DEFAULT_RECORDS_FILE};
pub use session::{Notice, StartOutcome, TimeTracker, APP_TITLE};
pub use stopwatch::{Clock, ManualClock, Stopwatch, SystemClock};

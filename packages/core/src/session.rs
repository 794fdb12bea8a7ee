//! Tracker session: the application state behind the timer window
//!
//! Owns the task field text, the stopwatch, the record store, the timer
//! display text and any notice waiting to be shown. The UI shell forwards
//! user intent here and renders what it reads back.

use crate::duration::{format_duration, ZERO_DISPLAY};
use crate::record::{corrupt_path, Record, RecordStore};
use crate::stopwatch::{Clock, Stopwatch, SystemClock};
use crate::{ErrorSeverity, TimekeepError, TimekeepResult, TrackerConfig};
use tracing::{error, info, warn};

pub const APP_TITLE: &str = "Time Tracker";

/// A modal message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: ErrorSeverity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorSeverity::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorSeverity::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorSeverity::Error, title, message)
    }

    fn new(severity: ErrorSeverity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Result of pressing Start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// Already running; the original start time is kept
    AlreadyRunning,
    /// The task field was empty; a warning notice is pending
    MissingTask,
}

pub struct TimeTracker<C = SystemClock> {
    task: String,
    stopwatch: Stopwatch<C>,
    store: RecordStore,
    display: String,
    notice: Option<Notice>,
}

impl TimeTracker<SystemClock> {
    /// Open the records file named by `config` against the system clock
    ///
    /// A load failure leaves the session with an empty list and a pending
    /// warning notice instead of aborting.
    pub fn open(config: &TrackerConfig) -> Self {
        let (store, load_error) = RecordStore::open_or_recover(&config.records_path);
        let mut tracker = Self::new(store, SystemClock);
        if let Some(e) = load_error {
            tracker.notice = Some(load_failure_notice(&e, tracker.store.is_protected()));
        }
        tracker
    }
}

impl<C: Clock> TimeTracker<C> {
    pub fn new(store: RecordStore, clock: C) -> Self {
        Self {
            task: String::new(),
            stopwatch: Stopwatch::with_clock(clock),
            store,
            display: ZERO_DISPLAY.to_string(),
            notice: None,
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    /// Replace the task field text. Allowed while running; the text at
    /// stop time is what gets recorded.
    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    pub fn start(&mut self) -> StartOutcome {
        if self.task.is_empty() {
            warn!("Start pressed without a task name");
            self.notice = Some(Notice::warning(
                "Input Error",
                "Please enter a task name!",
            ));
            return StartOutcome::MissingTask;
        }

        if !self.stopwatch.start() {
            return StartOutcome::AlreadyRunning;
        }

        info!("Started timing task {:?}", self.task);
        self.display = ZERO_DISPLAY.to_string();
        StartOutcome::Started
    }

    /// Stop timing and record the session under the current task text
    ///
    /// Returns `None` when nothing was running.
    pub fn stop(&mut self) -> Option<Record> {
        let elapsed = self.stopwatch.stop()?;
        let duration = format_duration(elapsed);
        let record = self.store.append(self.task.clone(), duration);
        info!(
            "Recorded {:?} for {}",
            record.task(),
            record.duration()
        );
        self.reset();
        Some(record)
    }

    /// Refresh the timer display from the stopwatch
    ///
    /// Ticks that arrive after a stop leave the display alone.
    pub fn tick(&mut self) -> &str {
        if self.stopwatch.is_running() {
            self.display = format_duration(self.stopwatch.elapsed_now());
        }
        &self.display
    }

    /// Discard any run in progress and clear the display
    pub fn reset(&mut self) {
        self.stopwatch.reset();
        self.display = ZERO_DISPLAY.to_string();
    }

    /// Persist the records, leaving a confirmation or failure notice
    pub fn save(&mut self) -> TimekeepResult<()> {
        match self.store.save() {
            Ok(()) => {
                self.notice = Some(Notice::info(
                    "Save Successful",
                    "Records saved successfully!",
                ));
                Ok(())
            }
            Err(e) => {
                error!("Saving records failed: {}", e);
                self.notice = Some(Notice::error(
                    "Save Failed",
                    format!("Could not save records: {}", e),
                ));
                Err(e)
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn title(&self) -> String {
        if self.is_running() {
            format!("{} - {}", APP_TITLE, self.display)
        } else {
            APP_TITLE.to_string()
        }
    }
}

fn load_failure_notice(e: &TimekeepError, protected: bool) -> Notice {
    let message = match e {
        _ if protected => format!(
            "{}\n\nStarting with an empty list. Saving is disabled until the file is fixed or removed.",
            e
        ),
        TimekeepError::MalformedStore { path, .. } => format!(
            "{}\n\nStarting with an empty list. The unreadable file was kept as {}.",
            e,
            corrupt_path(path).display()
        ),
        _ => format!("{}\n\nStarting with an empty list.", e),
    };
    Notice::new(e.severity(), "Records Not Loaded", message)
}

//! Main application wiring the tracker session to the window

use crate::ui::main_view;
use iced::{executor, time, Application, Command, Element, Subscription, Theme};
use timekeep_core::{StartOutcome, TimeTracker, TrackerConfig};
use tracing::debug;

pub struct TimekeepApp {
    pub tracker: TimeTracker,
    pub config: TrackerConfig,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Form
    TaskChanged(String),

    // Timer controls
    StartTimer,
    StopTimer,
    Tick,

    // Records
    SaveRecords,

    // Notices
    DismissNotice,
}

impl Application for TimekeepApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = TrackerConfig;

    fn new(config: TrackerConfig) -> (Self, Command<Message>) {
        let tracker = TimeTracker::open(&config);
        debug!(
            "Session opened with {} records from {:?}",
            tracker.records().len(),
            config.records_path
        );

        (
            Self {
                tracker,
                config,
                theme: Theme::Light,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        self.tracker.title()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        if !matches!(message, Message::Tick) {
            debug!("Handling message: {:?}", message);
        }

        match message {
            Message::TaskChanged(task) => {
                self.tracker.set_task(task);
            }
            Message::StartTimer => {
                if self.tracker.start() == StartOutcome::AlreadyRunning {
                    debug!("Timer already running");
                }
            }
            Message::StopTimer => {
                self.tracker.stop();
            }
            Message::Tick => {
                self.tracker.tick();
            }
            Message::SaveRecords => {
                // Failures surface as a notice
                let _ = self.tracker.save();
            }
            Message::DismissNotice => {
                self.tracker.dismiss_notice();
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Refresh the timer display only while it runs
        if self.tracker.is_running() {
            time::every(self.config.tick_interval).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

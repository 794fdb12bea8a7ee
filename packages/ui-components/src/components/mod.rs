pub mod button;
pub mod input;
pub mod notice_dialog;
pub mod record_table;

pub use button::*;
pub use input::task_input;
pub use notice_dialog::*;
pub use record_table::*;

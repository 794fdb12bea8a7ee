//! Read-only two-column list of completed records

use iced::{
    widget::{column, container, horizontal_rule, row, scrollable, text, Column},
    Element, Length,
};
use timekeep_core::Record;

/// Column headings, in display order
pub const COLUMNS: [&str; 2] = ["Task", "Duration"];

const TASK_PORTION: u16 = 2;
const DURATION_PORTION: u16 = 1;

/// Heading above the table, with a count once there is something to count
pub fn table_caption(records: &[Record]) -> String {
    match records.len() {
        0 => "Recorded Times:".to_string(),
        1 => "Recorded Times (1 entry):".to_string(),
        n => format!("Recorded Times ({} entries):", n),
    }
}

fn table_row<'a, Message: 'a>(task: &str, duration: &str, size: u16) -> Element<'a, Message> {
    row![
        text(task)
            .size(size)
            .width(Length::FillPortion(TASK_PORTION)),
        text(duration)
            .size(size)
            .width(Length::FillPortion(DURATION_PORTION)),
    ]
    .spacing(12)
    .into()
}

/// Render `records` in insertion order under a fixed header
pub fn record_table<'a, Message: 'a>(records: &[Record], height: f32) -> Element<'a, Message> {
    let header = table_row(COLUMNS[0], COLUMNS[1], 14);

    let body: Element<'a, Message> = if records.is_empty() {
        text("No records yet")
            .size(13)
            .style(iced::theme::Text::Color(iced::Color::from_rgb(
                0.5, 0.5, 0.5,
            )))
            .into()
    } else {
        let rows = records
            .iter()
            .map(|record| table_row(record.task(), record.duration(), 13))
            .collect::<Vec<_>>();
        scrollable(Column::with_children(rows).spacing(6))
            .height(Length::Fill)
            .into()
    };

    container(column![header, horizontal_rule(1), body].spacing(6))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        assert_eq!(COLUMNS, ["Task", "Duration"]);
    }

    #[test]
    fn test_table_caption_counts_entries() {
        assert_eq!(table_caption(&[]), "Recorded Times:");

        let one = vec![Record::new("A", "00:00:10")];
        assert_eq!(table_caption(&one), "Recorded Times (1 entry):");

        let two = vec![Record::new("A", "00:00:10"), Record::new("B", "00:00:20")];
        assert_eq!(table_caption(&two), "Recorded Times (2 entries):");
    }
}

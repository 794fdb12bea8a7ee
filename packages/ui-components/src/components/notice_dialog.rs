//! Modal notice for warnings, confirmations and failures

use iced::{
    widget::{button, column, container, row, text, Space},
    Alignment, Element, Length,
};
use iced_aw::{Card, Modal};
use timekeep_core::{ErrorSeverity, Notice};

/// Accent colour for a notice title
pub fn severity_color(severity: ErrorSeverity) -> iced::Color {
    match severity {
        ErrorSeverity::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
        ErrorSeverity::Warning => iced::Color::from_rgb(1.0, 0.6, 0.0),
        ErrorSeverity::Error => iced::Color::from_rgb(1.0, 0.3, 0.3),
    }
}

/// Fallback heading when a notice carries no title
pub fn severity_label(severity: ErrorSeverity) -> &'static str {
    match severity {
        ErrorSeverity::Info => "Information",
        ErrorSeverity::Warning => "Warning",
        ErrorSeverity::Error => "Error",
    }
}

/// Lay `notice` over `underlay` as a modal card
///
/// With no notice the underlay is returned unchanged. The OK button,
/// the card's close control, Escape and a backdrop click all emit
/// `on_dismiss`.
pub fn notice_overlay<'a, Message: Clone + 'a>(
    underlay: impl Into<Element<'a, Message>>,
    notice: Option<&'a Notice>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let card = notice.map(|notice| notice_card(notice, on_dismiss.clone()));

    Modal::new(underlay, card)
        .backdrop(on_dismiss.clone())
        .on_esc(on_dismiss)
        .into()
}

fn notice_card<'a, Message: Clone + 'a>(
    notice: &'a Notice,
    on_dismiss: Message,
) -> Card<'a, Message> {
    let heading = if notice.title.is_empty() {
        severity_label(notice.severity)
    } else {
        notice.title.as_str()
    };

    let head = row![
        container(Space::new(Length::Fixed(4.0), Length::Fixed(20.0))),
        text(heading)
            .size(18)
            .style(iced::theme::Text::Color(severity_color(notice.severity))),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let body = column![text(&notice.message).size(14)].spacing(8);

    let foot = row![
        Space::with_width(Length::Fill),
        button(
            text("OK")
                .size(14)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .padding([6, 24])
        .style(iced::theme::Button::Primary)
        .on_press(on_dismiss.clone()),
    ]
    .align_items(Alignment::Center);

    Card::new(head, body)
        .foot(foot)
        .max_width(380.0)
        .on_close(on_dismiss)
}

use iced::widget::{button, text};

fn labelled<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    button(
        text(label)
            .size(14)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .padding([10, 20])
}

pub fn primary_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    labelled(label).style(iced::theme::Button::Primary)
}

pub fn destructive_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    labelled(label).style(iced::theme::Button::Destructive)
}

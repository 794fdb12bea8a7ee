//! Main window: task form, timer, record list

use super::header::header_view;
use crate::app::{Message, TimekeepApp};
use iced::{
    widget::{column, container, row, text, Space},
    Alignment, Element, Length,
};
use timekeep_ui::{
    destructive_button, notice_overlay, primary_button, record_table, table_caption, task_input,
};

const RECORD_LIST_HEIGHT: f32 = 150.0;

pub fn main_view(app: &TimekeepApp) -> Element<'_, Message> {
    let content = column![header_view(), form_view(app), footer_view(app)].spacing(0);

    let window = container(content).width(Length::Fill).height(Length::Fill);

    notice_overlay(window, app.tracker.notice(), Message::DismissNotice)
}

fn form_view(app: &TimekeepApp) -> Element<'_, Message> {
    let running = app.tracker.is_running();

    let task_row = row![
        text("App/Task Name:").size(14),
        task_input(app.tracker.task(), Message::TaskChanged),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let timer = text(app.tracker.display())
        .size(40)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(
            0.1, 0.3, 0.9,
        )));

    // Only the action that changes state is enabled
    let start_button =
        primary_button("Start").on_press_maybe((!running).then_some(Message::StartTimer));
    let stop_button =
        destructive_button("Stop").on_press_maybe(running.then_some(Message::StopTimer));

    let controls = row![start_button, Space::with_width(12), stop_button].spacing(8);

    container(
        column![task_row, Space::with_height(12), timer, controls]
            .spacing(12)
            .align_items(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(20)
    .into()
}

fn footer_view(app: &TimekeepApp) -> Element<'_, Message> {
    let records = app.tracker.records();

    let caption = text(table_caption(records)).size(14);

    let save_button = primary_button("Save Records").on_press(Message::SaveRecords);

    let unsaved = if app.tracker.store().is_dirty() {
        "Unsaved changes"
    } else {
        ""
    };
    let status = text(unsaved)
        .size(12)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(
            0.5, 0.5, 0.5,
        )));

    container(
        column![
            caption,
            record_table(records, RECORD_LIST_HEIGHT),
            row![save_button, status]
                .spacing(12)
                .align_items(Alignment::Center),
        ]
        .spacing(8),
    )
    .width(Length::Fill)
    .padding([10, 20])
    .into()
}

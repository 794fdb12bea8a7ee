use iced::widget::text_input as iced_text_input;

/// Single-line task name field
pub fn task_input<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> iced_text_input::TextInput<'a, Message> {
    iced_text_input::TextInput::new("What are you working on?", value)
        .on_input(on_input)
        .padding(8)
        .size(16)
}

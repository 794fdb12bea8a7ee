use crate::app::Message;
use iced::{
    widget::{container, text},
    Element, Length,
};
use timekeep_core::APP_TITLE;

pub fn header_view() -> Element<'static, Message> {
    container(
        text(APP_TITLE)
            .size(22)
            .style(iced::theme::Text::Color(iced::Color::WHITE)),
    )
    .width(Length::Fill)
    .padding([12, 0])
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(HeaderBand)))
    .into()
}

struct HeaderBand;

impl iced::widget::container::StyleSheet for HeaderBand {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(iced::Color::from_rgb8(
                0x4C, 0xAF, 0x50,
            ))),
            ..Default::default()
        }
    }
}

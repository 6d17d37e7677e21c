use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn warning<'a, T: 'a>(message: String, detail: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(5)
            .push(text::p1_bold(message))
            .push_maybe(if detail.is_empty() {
                None
            } else {
                Some(text::p2_regular(detail))
            }),
    )
    .padding(15)
    .style(theme::notification::warning)
    .width(Length::Fill)
}

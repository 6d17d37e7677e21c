use crate::{component::text, theme, widget::*};
use iced::Length;

/// Advisory strength meter: a 0..=4 score rendered as a filled bar with a
/// one-word label. Never blocks anything, feedback only.
pub fn strength_meter<'a, T: 'a>(score: u8) -> Column<'a, T> {
    let label = match score {
        0 => "Very weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        _ => "Strong",
    };
    Column::new()
        .spacing(5)
        .push(
            ProgressBar::new(0.0..=4.0, score as f32)
                .height(Length::Fixed(8.0))
                .style(move |t| match score {
                    0 | 1 => theme::progress_bar::weak(t),
                    2 | 3 => theme::progress_bar::fair(t),
                    _ => theme::progress_bar::strong(t),
                }),
        )
        .push(text::caption(label).style(theme::text::secondary))
}

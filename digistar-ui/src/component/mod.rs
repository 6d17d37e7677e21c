pub mod button;
pub mod card;
pub mod form;
pub mod notification;
pub mod progress;
pub mod text;

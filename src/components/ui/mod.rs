mod alert;
mod button;
mod spinner;
mod text_field;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use spinner::Spinner;
pub(crate) use text_field::TextField;

//! Fallback panel for rejected edits
//!
//! The app captures an error into an [`ErrorReport`] instead of the
//! affected section, shows the panel, and lets the user either dismiss it
//! (retry) or reset the editor state (reload).

use std::fmt;

use chrono::{DateTime, Local};
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};
use rand::Rng;

use crate::theme;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// `ERR_<unix millis>_<9 base-36 chars>`
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl ErrorReport {
    /// Capture an error, assigning it a fresh id and logging it
    pub fn capture<E: fmt::Display + ?Sized, R: Rng + ?Sized>(error: &E, rng: &mut R) -> Self {
        let timestamp = Local::now();
        let report = Self {
            id: error_id(timestamp.timestamp_millis(), rng),
            message: error.to_string(),
            timestamp,
        };
        log::error!("[{}] {} (at {})", report.id, report.message, report.timestamp.to_rfc3339());
        report
    }
}

/// Build an error id from a timestamp and nine random base-36 characters
pub fn error_id<R: Rng + ?Sized>(millis: i64, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("ERR_{millis}_{suffix}")
}

/// Render the fallback panel
pub fn error_panel<'a, Message: Clone + 'a>(
    report: &'a ErrorReport,
    on_retry: Message,
    on_reload: Message,
) -> Element<'a, Message> {
    let title = text("Something went wrong")
        .size(16)
        .color(theme::to_color(theme::DESTRUCTIVE));
    let message = text(report.message.as_str()).size(13).color(theme::VALUE_TEXT);
    let details = text(format!(
        "Error ID: {}  |  {}",
        report.id,
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    ))
    .size(11)
    .color(theme::LABEL);

    let actions = row![
        button(text("Try Again").size(12)).on_press(on_retry),
        button(text("Reset Editor").size(12)).on_press(on_reload),
    ]
    .spacing(8);

    container(column![title, message, details, actions].spacing(8))
        .padding(16)
        .width(Length::Fill)
        .style(|_| container::Style {
            background: Some(theme::to_color(theme::KNOB_BODY).into()),
            border: iced::Border {
                color: theme::to_color(theme::DESTRUCTIVE),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_error_id_format() {
        let mut rng = StdRng::seed_from_u64(11);
        let id = error_id(1_700_000_000_123, &mut rng);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ERR");
        assert_eq!(parts[1], "1700000000123");
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_capture_keeps_message() {
        let mut rng = StdRng::seed_from_u64(11);
        let error = soundforge_core::EditError::NoteNotFound(4);
        let report = ErrorReport::capture(&error, &mut rng);
        assert_eq!(report.message, error.to_string());
        assert!(report.id.starts_with("ERR_"));

        let other = ErrorReport::capture(&error, &mut rng);
        assert_ne!(report.id, other.id);
    }
}

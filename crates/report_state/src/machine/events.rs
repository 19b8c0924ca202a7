//! Workflow events - inbound chat inputs that drive transitions
//!
//! Button callbacks arrive as opaque callback ids from the transport;
//! `from_callback` is the single place that vocabulary is parsed.

use serde::{Deserialize, Serialize};

use report_core::Shift;

/// An input event for one report session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportEvent {
    // ========== Button callbacks ==========
    /// The begin-report button was pressed.
    BeginReport,

    /// A shift was chosen from the shift menu.
    ShiftChosen(Shift),

    /// "Today" was chosen from the date menu.
    DateToday,

    /// "Manual input" was chosen from the date menu.
    DateManualChosen,

    /// Yes/no answer to the special-products menu.
    SpecialProducts(bool),

    // ========== Free text ==========
    /// A free-text message for the pending step.
    Text(String),
}

impl ReportEvent {
    /// Parse a transport callback id into an event. Returns `None` for
    /// ids outside the workflow vocabulary.
    pub fn from_callback(data: &str) -> Option<ReportEvent> {
        match data {
            "start_laporan" => Some(Self::BeginReport),
            "shift_1" => Some(Self::ShiftChosen(Shift::One)),
            "shift_2" => Some(Self::ShiftChosen(Shift::Two)),
            "tgl_today" => Some(Self::DateToday),
            "tgl_manual" => Some(Self::DateManualChosen),
            "produk_yes" => Some(Self::SpecialProducts(true)),
            "produk_no" => Some(Self::SpecialProducts(false)),
            _ => None,
        }
    }

    /// Whether this event came from a button press.
    pub fn is_button(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Short name used in transition errors and logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::BeginReport => "begin_report",
            Self::ShiftChosen(_) => "shift_chosen",
            Self::DateToday => "date_today",
            Self::DateManualChosen => "date_manual",
            Self::SpecialProducts(_) => "special_products",
            Self::Text(_) => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_vocabulary_round_trips() {
        assert_eq!(
            ReportEvent::from_callback("shift_2"),
            Some(ReportEvent::ShiftChosen(Shift::Two))
        );
        assert_eq!(
            ReportEvent::from_callback("produk_no"),
            Some(ReportEvent::SpecialProducts(false))
        );
        assert_eq!(ReportEvent::from_callback("bogus"), None);
    }

    #[test]
    fn button_event_detection() {
        assert!(ReportEvent::BeginReport.is_button());
        assert!(!ReportEvent::Text("100".into()).is_button());
    }
}

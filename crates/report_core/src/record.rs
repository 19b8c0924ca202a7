//! Per-session report record and shift vocabulary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::keys;

/// Checklist fields seeded with this mark when a shift is selected.
pub const CHECKLIST_MARK: &str = "✅";

/// One of the two working periods of a store day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    One,
    Two,
}

impl Shift {
    /// The shift number as it appears in record keys and the report.
    pub fn as_digit(&self) -> &'static str {
        match self {
            Shift::One => "1",
            Shift::Two => "2",
        }
    }

    /// Parse a record's `shift` field back into a `Shift`. Anything
    /// other than `"2"` counts as shift 1, mirroring the report's
    /// defaulting.
    pub fn from_digit(digit: &str) -> Shift {
        if digit == "2" {
            Shift::Two
        } else {
            Shift::One
        }
    }
}

/// Primary ("induk") or secondary ("anak") till in a register pairing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Register {
    Induk,
    Anak,
}

impl Register {
    pub fn as_key(&self) -> &'static str {
        match self {
            Register::Induk => "induk",
            Register::Anak => "anak",
        }
    }
}

/// A single field value: free text or a parsed amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Amount(i64),
}

impl FieldValue {
    pub fn as_amount(&self) -> Option<i64> {
        match self {
            FieldValue::Amount(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(t) => Some(t),
            FieldValue::Amount(_) => None,
        }
    }
}

/// The accumulating per-session record.
///
/// Fields are added incrementally as steps complete and are only ever
/// read back through the defaulting accessors. The record is never
/// persisted; it lives and dies with the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), FieldValue::Text(value.into()));
    }

    pub fn set_amount(&mut self, key: impl Into<String>, value: i64) {
        self.fields.insert(key.into(), FieldValue::Amount(value));
    }

    /// Amount value of a field, or zero when the field is unset or
    /// holds text.
    pub fn amount_or_zero(&self, key: &str) -> i64 {
        self.get(key).and_then(FieldValue::as_amount).unwrap_or(0)
    }

    /// Text value of a field; amounts render as plain digits, unset
    /// fields as the empty string.
    pub fn text_or_empty(&self, key: &str) -> String {
        match self.get(key) {
            Some(FieldValue::Text(t)) => t.clone(),
            Some(FieldValue::Amount(n)) => n.to_string(),
            None => String::new(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Whether a shift has been chosen yet. `preview` reports "no data"
    /// until this is true.
    pub fn has_shift(&self) -> bool {
        !self.text_or_empty(keys::SHIFT).is_empty()
    }

    /// The active shift, defaulting to shift 1 when unset.
    pub fn active_shift(&self) -> Shift {
        Shift::from_digit(&self.text_or_empty(keys::SHIFT))
    }

    /// Seed the five per-shift checklist fields with a check mark,
    /// leaving already-filled fields alone.
    pub fn seed_checklist(&mut self, shift: Shift) {
        for key in [
            keys::tertib_setor(shift),
            keys::store_activity(shift),
            keys::kbk(shift),
            keys::pjr(shift),
            keys::itt(shift),
        ] {
            if self.text_or_empty(&key).is_empty() {
                self.set_text(key, CHECKLIST_MARK);
            }
        }
    }

    /// Seed the checklist fields for both shifts (a shift-2 session
    /// reports on the whole day).
    pub fn seed_checklist_both(&mut self) {
        self.seed_checklist(Shift::One);
        self.seed_checklist(Shift::Two);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_empty() {
        let record = Record::new();
        assert!(record.is_empty());
        assert!(!record.has_shift());
        assert_eq!(record.amount_or_zero("sales_induk"), 0);
        assert_eq!(record.text_or_empty("tanggal"), "");
    }

    #[test]
    fn amounts_round_trip_as_text() {
        let mut record = Record::new();
        record.set_amount(keys::TOTAL_STRUK, 150);
        assert_eq!(record.amount_or_zero(keys::TOTAL_STRUK), 150);
        assert_eq!(record.text_or_empty(keys::TOTAL_STRUK), "150");
    }

    #[test]
    fn active_shift_defaults_to_one() {
        let mut record = Record::new();
        assert_eq!(record.active_shift(), Shift::One);
        record.set_text(keys::SHIFT, "2");
        assert_eq!(record.active_shift(), Shift::Two);
        assert!(record.has_shift());
    }

    #[test]
    fn checklist_seeding_skips_filled_fields() {
        let mut record = Record::new();
        record.set_text(keys::kbk(Shift::One), "libur");
        record.seed_checklist(Shift::One);

        assert_eq!(record.text_or_empty(&keys::kbk(Shift::One)), "libur");
        assert_eq!(
            record.text_or_empty(&keys::tertib_setor(Shift::One)),
            CHECKLIST_MARK
        );
        assert!(!record.contains(&keys::tertib_setor(Shift::Two)));
    }

    #[test]
    fn serialization() {
        let mut record = Record::new();
        record.set_text(keys::SHIFT, "2");
        record.set_amount(keys::TOTAL_SALES, 1_500_000);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.text_or_empty(keys::SHIFT), "2");
        assert_eq!(deserialized.amount_or_zero(keys::TOTAL_SALES), 1_500_000);
    }

    #[test]
    fn clearing_destroys_all_fields() {
        let mut record = Record::new();
        record.set_text(keys::SHIFT, "1");
        record.set_amount(keys::SALES_INDUK, 1000);
        record.clear();
        assert!(record.is_empty());
        assert!(!record.has_shift());
    }
}

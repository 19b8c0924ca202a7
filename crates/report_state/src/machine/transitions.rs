//! Step transitions - FSM transition logic
//!
//! Implements the event-driven machine that advances a report session
//! one step per inbound message or button press. Each step updates the
//! record, picks the next state and produces the outbound replies.

use thiserror::Error;

use report_core::{keys, parse, render_report, Record, Register, Shift};

use super::events::ReportEvent;
use super::states::ReportState;

const SALES_INDUK_PROMPT: &str = "Masukkan *Sales Induk* (angka):";
const VARIANCE_INDUK_PROMPT: &str = "Masukkan *Variance Induk* (contoh: +4.139 Dini):";
const DATE_RETRY_PROMPT: &str = "Format salah. Contoh benar: 22/08/2025";

/// Error type for inputs a state cannot accept.
#[derive(Error, Debug, Clone)]
pub enum StepError {
    #[error("unexpected {event} event in state {state:?}")]
    UnexpectedEvent {
        state: ReportState,
        event: &'static str,
    },
}

/// One option of a structured choice menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub callback: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, callback: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback: callback.into(),
        }
    }
}

/// An outbound reply produced by a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text { body: String, markdown: bool },
    Menu { prompt: String, options: Vec<MenuOption> },
}

impl Reply {
    pub fn plain(body: impl Into<String>) -> Self {
        Reply::Text {
            body: body.into(),
            markdown: false,
        }
    }

    pub fn markdown(body: impl Into<String>) -> Self {
        Reply::Text {
            body: body.into(),
            markdown: true,
        }
    }

    pub fn menu(prompt: impl Into<String>, options: Vec<MenuOption>) -> Self {
        Reply::Menu {
            prompt: prompt.into(),
            options,
        }
    }
}

fn shift_menu() -> Reply {
    Reply::menu(
        "Pilih shift:",
        vec![
            MenuOption::new("Shift 1", "shift_1"),
            MenuOption::new("Shift 2", "shift_2"),
        ],
    )
}

fn date_menu(prompt: &str) -> Reply {
    Reply::menu(
        prompt,
        vec![
            MenuOption::new("Hari ini", "tgl_today"),
            MenuOption::new("Input manual", "tgl_manual"),
        ],
    )
}

fn produk_menu() -> Reply {
    Reply::menu(
        "Jual *Produk Khusus* hari ini?",
        vec![
            MenuOption::new("Ya", "produk_yes"),
            MenuOption::new("Tidak", "produk_no"),
        ],
    )
}

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: ReportState,
    /// The state after the transition.
    pub to: ReportState,
    /// The event that triggered the transition.
    pub event: ReportEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// Result of one processed step: the transition plus the replies to
/// forward through the transport.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub transition: StateTransition,
    pub replies: Vec<Reply>,
}

/// State machine driving one report session.
#[derive(Debug, Clone)]
pub struct ReportMachine {
    /// Current state.
    current_state: ReportState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for ReportMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportMachine {
    /// Create a new machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: ReportState::Idle,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &ReportState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Return to Idle. The caller clears the record; the machine only
    /// drops its step pointer.
    pub fn reset(&mut self) {
        self.current_state = ReportState::Idle;
    }

    /// Process one inbound event against the record.
    ///
    /// On `Err` the state is left unchanged at the step that failed.
    pub fn step(
        &mut self,
        record: &mut Record,
        event: ReportEvent,
    ) -> Result<StepOutcome, StepError> {
        let from = self.current_state.clone();
        let (to, replies) = self.apply(record, &from, &event)?;
        let changed = from != to;

        self.current_state = to.clone();
        tracing::debug!(?from, ?to, changed, "report step");

        let transition = StateTransition {
            from,
            to,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        Ok(StepOutcome { transition, replies })
    }

    /// Compute the record update, next state and replies for an event.
    fn apply(
        &self,
        record: &mut Record,
        state: &ReportState,
        event: &ReportEvent,
    ) -> Result<(ReportState, Vec<Reply>), StepError> {
        use ReportEvent::*;
        use ReportState::*;

        match (state, event) {
            // ========== Menu selections ==========
            (Idle, BeginReport) => {
                record.clear();
                Ok((AwaitingShift, vec![shift_menu()]))
            }

            (AwaitingShift, ShiftChosen(shift)) => {
                record.set_text(keys::SHIFT, shift.as_digit());
                match shift {
                    // Shift 2 reports the whole day: collect shift 1's
                    // figures first.
                    Shift::Two => {
                        record.seed_checklist_both();
                        Ok((
                            PrefillStrukInduk,
                            vec![Reply::markdown(
                                "Masukkan *Struk Induk Shift 1* (angka, 0 jika tidak ada):",
                            )],
                        ))
                    }
                    Shift::One => {
                        record.seed_checklist(Shift::One);
                        Ok((AwaitingDateChoice, vec![date_menu("Set tanggal:")]))
                    }
                }
            }

            (AwaitingDateChoice, DateToday) => {
                record.set_text(keys::TANGGAL, parse::today_string());
                Ok((SalesInduk, vec![Reply::markdown(SALES_INDUK_PROMPT)]))
            }

            (AwaitingDateChoice, DateManualChosen) => Ok((
                DateManual,
                vec![Reply::markdown(
                    "Ketik tanggal *dd/mm/yyyy* (contoh 22/08/2025):",
                )],
            )),

            (AwaitingSpecialProducts, SpecialProducts(true)) => {
                Ok((MrBread, vec![Reply::plain("Mr Bread berapa? (angka)")]))
            }

            (AwaitingSpecialProducts, SpecialProducts(false)) => {
                Ok((VarianceInduk, vec![Reply::markdown(VARIANCE_INDUK_PROMPT)]))
            }

            // ========== Shift-2 prefill ==========
            (PrefillStrukInduk, Text(text)) => {
                record.set_amount(keys::PREFILL_STRUK_INDUK, parse::parse_amount(text));
                Ok((
                    PrefillStrukAnak,
                    vec![Reply::markdown(
                        "Masukkan *Struk Anak Shift 1* (angka, 0 jika tidak ada):",
                    )],
                ))
            }

            (PrefillStrukAnak, Text(text)) => {
                record.set_amount(keys::PREFILL_STRUK_ANAK, parse::parse_amount(text));
                let induk = record.amount_or_zero(keys::PREFILL_STRUK_INDUK);
                let anak = record.amount_or_zero(keys::PREFILL_STRUK_ANAK);
                record.set_amount(keys::trx_cpu(Shift::One, Register::Induk), induk);
                record.set_amount(keys::trx_cpu(Shift::One, Register::Anak), anak);
                Ok((
                    PrefillVarianceInduk,
                    vec![Reply::markdown(
                        "Masukkan *Variance Induk Shift 1* (contoh: +4.139 Dini):",
                    )],
                ))
            }

            (PrefillVarianceInduk, Text(text)) => {
                record.set_text(keys::variance(Shift::One, Register::Induk), text.clone());
                Ok((
                    PrefillVarianceAnak,
                    vec![Reply::markdown(
                        "Masukkan *Variance Anak Shift 1* (contoh: +334 Rifa):",
                    )],
                ))
            }

            (PrefillVarianceAnak, Text(text)) => {
                record.set_text(keys::variance(Shift::One, Register::Anak), text.clone());
                Ok((
                    AwaitingDateChoice,
                    vec![date_menu("Set tanggal untuk Shift 2:")],
                ))
            }

            // ========== Date ==========
            (DateManual, Text(text)) => {
                if !parse::is_valid_date(text) {
                    // Retry without advancing
                    return Ok((DateManual, vec![Reply::plain(DATE_RETRY_PROMPT)]));
                }
                record.set_text(keys::TANGGAL, text.clone());
                Ok((SalesInduk, vec![Reply::markdown(SALES_INDUK_PROMPT)]))
            }

            // ========== Sales ==========
            (SalesInduk, Text(text)) => {
                record.set_amount(keys::SALES_INDUK, parse::parse_amount(text));
                Ok((SalesAnak, vec![Reply::markdown("Masukkan *Sales Anak* (angka):")]))
            }

            (SalesAnak, Text(text)) => {
                record.set_amount(keys::SALES_ANAK, parse::parse_amount(text));
                let total = record.amount_or_zero(keys::SALES_INDUK)
                    + record.amount_or_zero(keys::SALES_ANAK);
                record.set_amount(keys::TOTAL_SALES, total);
                Ok((
                    StrukInduk,
                    vec![Reply::markdown(format!(
                        "Total Sales sementara: {}\nMasukkan *Struk Induk* (angka):",
                        parse::format_thousands(total)
                    ))],
                ))
            }

            // ========== Struk -> TRX CPU for the active shift ==========
            (StrukInduk, Text(text)) => {
                record.set_amount(keys::STRUK_INDUK, parse::parse_amount(text));
                Ok((StrukAnak, vec![Reply::markdown("Masukkan *Struk Anak* (angka):")]))
            }

            (StrukAnak, Text(text)) => {
                record.set_amount(keys::STRUK_ANAK, parse::parse_amount(text));
                let induk = record.amount_or_zero(keys::STRUK_INDUK);
                let anak = record.amount_or_zero(keys::STRUK_ANAK);
                record.set_amount(keys::TOTAL_STRUK, induk + anak);

                let shift = record.active_shift();
                record.set_amount(keys::trx_cpu(shift, Register::Induk), induk);
                record.set_amount(keys::trx_cpu(shift, Register::Anak), anak);
                match shift {
                    Shift::One => record.seed_checklist(Shift::One),
                    Shift::Two => record.seed_checklist_both(),
                }

                Ok((AwaitingSpecialProducts, vec![produk_menu()]))
            }

            // ========== Special products (per item) ==========
            (MrBread, Text(text)) => {
                record.set_amount(keys::MRBREAD, parse::parse_amount(text));
                Ok((PrimeBread, vec![Reply::plain("Prime Bread berapa? (angka)")]))
            }

            (PrimeBread, Text(text)) => {
                record.set_amount(keys::PRIMEBREAD, parse::parse_amount(text));
                Ok((Telur, vec![Reply::plain("Telur berapa? (angka)")]))
            }

            (Telur, Text(text)) => {
                record.set_amount(keys::TELUR, parse::parse_amount(text));
                Ok((BuahImport, vec![Reply::plain("Buah Import berapa? (angka)")]))
            }

            (BuahImport, Text(text)) => {
                record.set_amount(keys::BUAH_IMPORT, parse::parse_amount(text));
                Ok((BuahLokal, vec![Reply::plain("Buah Lokal berapa? (angka)")]))
            }

            (BuahLokal, Text(text)) => {
                record.set_amount(keys::BUAH_LOKAL, parse::parse_amount(text));
                let total = record.amount_or_zero(keys::MRBREAD)
                    + record.amount_or_zero(keys::PRIMEBREAD)
                    + record.amount_or_zero(keys::TELUR)
                    + record.amount_or_zero(keys::BUAH_IMPORT)
                    + record.amount_or_zero(keys::BUAH_LOKAL);
                record.set_amount(keys::ALL_PRODUK, total);
                Ok((VarianceInduk, vec![Reply::markdown(VARIANCE_INDUK_PROMPT)]))
            }

            // ========== Variance (into the active shift) ==========
            (VarianceInduk, Text(text)) => {
                let shift = record.active_shift();
                record.set_text(keys::variance(shift, Register::Induk), text.clone());
                Ok((
                    VarianceAnak,
                    vec![Reply::markdown("Masukkan *Variance Anak* (contoh: +334 Rifa):")],
                ))
            }

            (VarianceAnak, Text(text)) => {
                let shift = record.active_shift();
                record.set_text(keys::variance(shift, Register::Anak), text.clone());
                // Terminal step: render and go idle
                Ok((Idle, vec![Reply::markdown(render_report(record))]))
            }

            (state, event) => Err(StepError::UnexpectedEvent {
                state: state.clone(),
                event: event.describe(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ReportEvent {
        ReportEvent::Text(s.to_string())
    }

    fn start_shift(machine: &mut ReportMachine, record: &mut Record, shift: Shift) {
        machine.step(record, ReportEvent::BeginReport).unwrap();
        machine
            .step(record, ReportEvent::ShiftChosen(shift))
            .unwrap();
    }

    #[test]
    fn begin_report_clears_record_and_offers_shifts() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        record.set_text(keys::TANGGAL, "01/01/2025");

        let outcome = machine.step(&mut record, ReportEvent::BeginReport).unwrap();

        assert!(record.is_empty());
        assert_eq!(machine.state(), &ReportState::AwaitingShift);
        assert!(matches!(&outcome.replies[0], Reply::Menu { options, .. } if options.len() == 2));
    }

    #[test]
    fn shift_one_goes_straight_to_date_choice() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);

        assert_eq!(machine.state(), &ReportState::AwaitingDateChoice);
        assert_eq!(record.text_or_empty(keys::SHIFT), "1");
        assert_eq!(
            record.text_or_empty(&keys::tertib_setor(Shift::One)),
            report_core::record::CHECKLIST_MARK
        );
    }

    #[test]
    fn shift_two_inserts_prefill_chain() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::Two);
        assert_eq!(machine.state(), &ReportState::PrefillStrukInduk);

        machine.step(&mut record, text("100")).unwrap();
        machine.step(&mut record, text("50")).unwrap();
        machine.step(&mut record, text("+100 Dini")).unwrap();
        let outcome = machine.step(&mut record, text("+50 Rifa")).unwrap();

        // Prefill figures propagate into the shift-1 report fields
        assert_eq!(
            record.amount_or_zero(&keys::trx_cpu(Shift::One, Register::Induk)),
            100
        );
        assert_eq!(
            record.amount_or_zero(&keys::trx_cpu(Shift::One, Register::Anak)),
            50
        );
        assert_eq!(
            record.text_or_empty(&keys::variance(Shift::One, Register::Induk)),
            "+100 Dini"
        );
        assert_eq!(
            record.text_or_empty(&keys::variance(Shift::One, Register::Anak)),
            "+50 Rifa"
        );

        // Chain rejoins at the date choice
        assert_eq!(machine.state(), &ReportState::AwaitingDateChoice);
        assert!(matches!(&outcome.replies[0], Reply::Menu { prompt, .. }
            if prompt == "Set tanggal untuk Shift 2:"));
    }

    #[test]
    fn invalid_date_retries_without_advancing() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);
        machine
            .step(&mut record, ReportEvent::DateManualChosen)
            .unwrap();

        let outcome = machine.step(&mut record, text("2025-08-22")).unwrap();
        assert!(!outcome.transition.changed);
        assert_eq!(machine.state(), &ReportState::DateManual);
        assert_eq!(record.text_or_empty(keys::TANGGAL), "");

        machine.step(&mut record, text("22/08/2025")).unwrap();
        assert_eq!(machine.state(), &ReportState::SalesInduk);
        assert_eq!(record.text_or_empty(keys::TANGGAL), "22/08/2025");
    }

    #[test]
    fn sales_total_is_computed_and_echoed() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);
        machine.step(&mut record, ReportEvent::DateToday).unwrap();

        machine.step(&mut record, text("1000000")).unwrap();
        let outcome = machine.step(&mut record, text("500000")).unwrap();

        assert_eq!(record.amount_or_zero(keys::TOTAL_SALES), 1_500_000);
        assert!(matches!(&outcome.replies[0], Reply::Text { body, .. }
            if body.contains("Total Sales sementara: 1.500.000")));
        assert_eq!(machine.state(), &ReportState::StrukInduk);
    }

    #[test]
    fn struk_mirrors_trx_cpu_for_active_shift() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);
        machine.step(&mut record, ReportEvent::DateToday).unwrap();
        machine.step(&mut record, text("0")).unwrap();
        machine.step(&mut record, text("0")).unwrap();

        machine.step(&mut record, text("210")).unwrap();
        machine.step(&mut record, text("90")).unwrap();

        assert_eq!(record.amount_or_zero(keys::TOTAL_STRUK), 300);
        assert_eq!(
            record.amount_or_zero(&keys::trx_cpu(Shift::One, Register::Induk)),
            210
        );
        assert_eq!(
            record.amount_or_zero(&keys::trx_cpu(Shift::One, Register::Anak)),
            90
        );
        assert_eq!(machine.state(), &ReportState::AwaitingSpecialProducts);
    }

    #[test]
    fn special_products_chain_computes_all_produk() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);
        machine.step(&mut record, ReportEvent::DateToday).unwrap();
        for input in ["0", "0", "0", "0"] {
            machine.step(&mut record, text(input)).unwrap();
        }
        machine
            .step(&mut record, ReportEvent::SpecialProducts(true))
            .unwrap();

        for input in ["10000", "20000", "5000", "3000", "2000"] {
            machine.step(&mut record, text(input)).unwrap();
        }

        assert_eq!(record.amount_or_zero(keys::ALL_PRODUK), 40_000);
        assert_eq!(machine.state(), &ReportState::VarianceInduk);
    }

    #[test]
    fn declining_special_products_skips_to_variance() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);
        machine.step(&mut record, ReportEvent::DateToday).unwrap();
        for input in ["0", "0", "0", "0"] {
            machine.step(&mut record, text(input)).unwrap();
        }

        machine
            .step(&mut record, ReportEvent::SpecialProducts(false))
            .unwrap();
        assert_eq!(machine.state(), &ReportState::VarianceInduk);
        assert!(!record.contains(keys::ALL_PRODUK));
    }

    #[test]
    fn final_variance_renders_report_and_goes_idle() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);
        machine.step(&mut record, ReportEvent::DateToday).unwrap();
        for input in ["100", "50", "10", "5"] {
            machine.step(&mut record, text(input)).unwrap();
        }
        machine
            .step(&mut record, ReportEvent::SpecialProducts(false))
            .unwrap();
        machine.step(&mut record, text("+4.139 Dini")).unwrap();
        let outcome = machine.step(&mut record, text("+334 Rifa")).unwrap();

        assert_eq!(machine.state(), &ReportState::Idle);
        assert_eq!(
            record.text_or_empty(&keys::variance(Shift::One, Register::Anak)),
            "+334 Rifa"
        );
        assert!(matches!(&outcome.replies[0], Reply::Text { body, markdown: true }
            if body.contains("*VARIANCE*") && body.contains("+4.139 Dini")));
    }

    #[test]
    fn unexpected_event_leaves_state_unchanged() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::One);

        let err = machine
            .step(&mut record, text("1000"))
            .expect_err("text during a menu step must be rejected");
        assert!(matches!(err, StepError::UnexpectedEvent { .. }));
        assert_eq!(machine.state(), &ReportState::AwaitingDateChoice);
    }

    #[test]
    fn history_tracking() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        machine.step(&mut record, ReportEvent::BeginReport).unwrap();
        machine
            .step(&mut record, ReportEvent::ShiftChosen(Shift::One))
            .unwrap();

        assert_eq!(machine.history().len(), 2);
        assert!(machine.history()[0].changed);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut machine = ReportMachine::new();
        let mut record = Record::new();
        start_shift(&mut machine, &mut record, Shift::Two);
        machine.reset();
        assert!(machine.state().is_idle());
    }
}

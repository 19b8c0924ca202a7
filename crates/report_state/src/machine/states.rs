//! Workflow states - one state per pending input step
//!
//! The chain is strictly linear per shift branch: choosing shift 2
//! inserts the four prefill states before rejoining the common chain
//! at the date choice.

use serde::{Deserialize, Serialize};

/// The pending step of a report session.
///
/// `Idle` doubles as the initial and the terminal state: a session
/// returns to it after the final report is rendered or after a reset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportState {
    // ========== Menus ==========
    /// No report in progress; awaiting the begin-report button.
    Idle,

    /// Shift menu shown, awaiting shift 1 / shift 2.
    AwaitingShift,

    /// Date menu shown, awaiting "today" / "manual input".
    AwaitingDateChoice,

    /// Special-products menu shown, awaiting yes / no.
    AwaitingSpecialProducts,

    // ========== Shift-2 prefill (shift 1 figures) ==========
    PrefillStrukInduk,
    PrefillStrukAnak,
    PrefillVarianceInduk,
    PrefillVarianceAnak,

    // ========== Free-text steps ==========
    /// Manual date entry, the one strictly validated step.
    DateManual,

    SalesInduk,
    SalesAnak,
    StrukInduk,
    StrukAnak,

    MrBread,
    PrimeBread,
    Telur,
    BuahImport,
    BuahLokal,

    VarianceInduk,
    VarianceAnak,
}

impl Default for ReportState {
    fn default() -> Self {
        ReportState::Idle
    }
}

impl ReportState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether this state consumes free text (as opposed to a button press).
    pub fn expects_free_text(&self) -> bool {
        !matches!(
            self,
            Self::Idle | Self::AwaitingShift | Self::AwaitingDateChoice | Self::AwaitingSpecialProducts
        )
    }

    /// Whether this state is waiting on a menu selection.
    pub fn expects_button(&self) -> bool {
        !self.expects_free_text()
    }

    /// Get a human-readable description of the pending step.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Tidak ada laporan berjalan",
            Self::AwaitingShift => "Menunggu pilihan shift",
            Self::AwaitingDateChoice => "Menunggu pilihan tanggal",
            Self::AwaitingSpecialProducts => "Menunggu pilihan produk khusus",
            Self::DateManual => "Menunggu input tanggal",
            Self::PrefillStrukInduk | Self::PrefillStrukAnak => "Menunggu data struk shift 1",
            Self::PrefillVarianceInduk | Self::PrefillVarianceAnak => {
                "Menunggu data variance shift 1"
            }
            Self::SalesInduk | Self::SalesAnak => "Menunggu data sales",
            Self::StrukInduk | Self::StrukAnak => "Menunggu data struk",
            Self::MrBread | Self::PrimeBread | Self::Telur | Self::BuahImport | Self::BuahLokal => {
                "Menunggu data produk khusus"
            }
            Self::VarianceInduk | Self::VarianceAnak => "Menunggu data variance",
        }
    }
}

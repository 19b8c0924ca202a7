//! Canonical field key names
//!
//! The state machine writes and the renderer reads the same record keys.
//! Keeping them as constants (plus builders for the shift-parameterized
//! families) prevents the two sides from drifting apart.

use crate::record::{Register, Shift};

pub const STORE: &str = "store";
pub const KPI_TITLE: &str = "kpi_title";
pub const SHIFT: &str = "shift";
pub const TANGGAL: &str = "tanggal";

pub const SALES_INDUK: &str = "sales_induk";
pub const SALES_ANAK: &str = "sales_anak";
pub const TOTAL_SALES: &str = "total_sales";

pub const STRUK_INDUK: &str = "struk_induk";
pub const STRUK_ANAK: &str = "struk_anak";
pub const TOTAL_STRUK: &str = "total_struk";

// Special product sales
pub const MRBREAD: &str = "mrbread";
pub const PRIMEBREAD: &str = "primebread";
pub const TELUR: &str = "telur";
pub const BUAH_IMPORT: &str = "buah_import";
pub const BUAH_LOKAL: &str = "buah_lokal";
pub const ALL_PRODUK: &str = "all_produk";

// Shift-2 prefill inputs (shift 1 figures re-entered at the start of a
// shift-2 session)
pub const PREFILL_STRUK_INDUK: &str = "s1_struk_induk_for_s2";
pub const PREFILL_STRUK_ANAK: &str = "s1_struk_anak_for_s2";

pub const VARIANCE_POIN: &str = "variance_poin";
pub const VARIANCE_PLUS_GT10K: &str = "variance_plus_total_gt10k";

pub const CANCEL_POIN: &str = "cancel_poin";
pub const CANCEL_BUDGET: &str = "cancel_budget";
pub const CANCEL_SHIFT1: &str = "cancel_shift1";
pub const CANCEL_SHIFT2: &str = "cancel_shift2";
pub const CANCEL_TOTAL: &str = "cancel_total";

pub const TERTIB_POIN: &str = "tertib_poin";

pub const CPU_50_LEFT: &str = "cpu_50_left";
pub const CPU_50_RIGHT: &str = "cpu_50_right";

pub const TUNAI_POIN: &str = "tunai_poin";
pub const TUNAI_TARGET: &str = "tunai_target";
pub const TUNAI_SHIFT1: &str = "tunai_shift1";
pub const TUNAI_SHIFT2: &str = "tunai_shift2";
pub const TUNAI_TOTAL: &str = "tunai_total";
pub const TUNAI_SISA: &str = "tunai_sisa";

pub const ISAKU_POIN: &str = "isaku_poin";
pub const ISAKU_TARGET: &str = "isaku_target";
pub const ISAKU_SHIFT1: &str = "isaku_shift1";
pub const ISAKU_SHIFT2: &str = "isaku_shift2";
pub const ISAKU_TOTAL: &str = "isaku_total";
pub const ISAKU_SISA: &str = "isaku_sisa";

pub const POINKU_POIN: &str = "poinku_poin";
pub const POINKU_TARGET: &str = "poinku_target";
pub const POINKU_SHIFT1: &str = "poinku_shift1";
pub const POINKU_SHIFT2: &str = "poinku_shift2";
pub const POINKU_TOTAL: &str = "poinku_total";
pub const POINKU_SISA: &str = "poinku_sisa";

pub const KLIK_POIN: &str = "klik_poin";
pub const KLIK_TARGET: &str = "klik_target";
pub const KLIK_SHIFT1: &str = "klik_shift1";
pub const KLIK_SHIFT2: &str = "klik_shift2";
pub const KLIK_TOTAL: &str = "klik_total";
pub const KLIK_SISA: &str = "klik_sisa";

pub const KBK_POIN: &str = "kbk_poin";
pub const KBK_TOTAL: &str = "kbk_total";
pub const KBK_SISA: &str = "kbk_sisa";

pub const PJR_POIN: &str = "pjr_poin";
pub const PJR_TARGET: &str = "pjr_target";

pub const ITT_POIN: &str = "itt_poin";
pub const ITT_BUDGET: &str = "itt_budget";
pub const ITT_TOTAL: &str = "itt_total";

// Accumulated variance by person
pub const TOTAL_VARMIN: &str = "total_varmin";
pub const VARMIN_DIAN: &str = "varmin_dian";
pub const VARMIN_DINDA: &str = "varmin_dinda";
pub const VARMIN_AGUNG: &str = "varmin_agung";
pub const VARMIN_RIFA: &str = "varmin_rifa";
pub const VARMIN_PUTRI: &str = "varmin_putri";
pub const TOTAL_VARPLUS: &str = "total_varplus";
pub const VARPLUS_DIAN: &str = "variance_plus_dian";
pub const VARPLUS_DINDA: &str = "variance_plus_dinda";
pub const VARPLUS_AGUNG: &str = "variance_plus_agung";
pub const VARPLUS_RIFA: &str = "variance_plus_rifa";
pub const VARPLUS_PUTRI: &str = "variance_plus_putri";

/// Key for a per-shift, per-register variance annotation
/// (e.g. `variance_shift1_induk`).
pub fn variance(shift: Shift, register: Register) -> String {
    format!("variance_shift{}_{}", shift.as_digit(), register.as_key())
}

/// Key for a per-shift, per-register card-transaction count
/// (e.g. `trx_cpu_shift2_anak`).
pub fn trx_cpu(shift: Shift, register: Register) -> String {
    format!("trx_cpu_shift{}_{}", shift.as_digit(), register.as_key())
}

pub fn tertib_setor(shift: Shift) -> String {
    format!("tertib_setor_shift{}", shift.as_digit())
}

pub fn store_activity(shift: Shift) -> String {
    format!("store_activity_shift{}", shift.as_digit())
}

pub fn kbk(shift: Shift) -> String {
    format!("kbk_shift{}", shift.as_digit())
}

pub fn pjr(shift: Shift) -> String {
    format!("pjr_shift{}", shift.as_digit())
}

pub fn itt(shift: Shift) -> String {
    format!("itt_shift{}", shift.as_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_keys_match_report_vocabulary() {
        assert_eq!(variance(Shift::One, Register::Induk), "variance_shift1_induk");
        assert_eq!(trx_cpu(Shift::Two, Register::Anak), "trx_cpu_shift2_anak");
        assert_eq!(tertib_setor(Shift::One), "tertib_setor_shift1");
        assert_eq!(store_activity(Shift::Two), "store_activity_shift2");
    }
}

//! Fixed-layout report renderer
//!
//! Pure function from record to text. Every section always appears in
//! the same order; unset fields render as their field-specific default
//! (usually the empty string, sometimes a fixed point or target value).
//! Money figures get thousands grouping, the shift number gets
//! zero-padding, variance annotations pass through verbatim.

use crate::keys;
use crate::parse::{format_thousands, shift_two_digits, today_string};
use crate::record::{FieldValue, Record, Register, Shift};

const DEFAULT_STORE: &str = "T67T CIBULARENG";
const DEFAULT_KPI_TITLE: &str = "KPI";

/// Field as text with a default for the unset case.
fn text_or(record: &Record, key: &str, default: &str) -> String {
    match record.get(key) {
        Some(FieldValue::Text(t)) => t.clone(),
        Some(FieldValue::Amount(n)) => n.to_string(),
        None => default.to_string(),
    }
}

/// Money field: grouped digits when set, empty string when not.
fn money_or_empty(record: &Record, key: &str) -> String {
    match record.get(key) {
        Some(FieldValue::Amount(n)) => format_thousands(*n),
        Some(FieldValue::Text(t)) => t.clone(),
        None => String::new(),
    }
}

/// Render the full monitoring report from the accumulated record.
///
/// Idempotent and side-effect-free: two calls on the same record (with
/// the date set) produce byte-identical output.
pub fn render_report(record: &Record) -> String {
    let store = text_or(record, keys::STORE, DEFAULT_STORE);
    let kpi_title = text_or(record, keys::KPI_TITLE, DEFAULT_KPI_TITLE);
    let shift = shift_two_digits(&text_or(record, keys::SHIFT, "1"));
    let tanggal = {
        let t = record.text_or_empty(keys::TANGGAL);
        if t.is_empty() {
            today_string()
        } else {
            t
        }
    };

    let sales = money_or_empty(record, keys::TOTAL_SALES);
    let struk = text_or(record, keys::TOTAL_STRUK, "");

    let mrbread = money_or_empty(record, keys::MRBREAD);
    let primebread = money_or_empty(record, keys::PRIMEBREAD);
    let telur = money_or_empty(record, keys::TELUR);
    let buah_import = money_or_empty(record, keys::BUAH_IMPORT);
    let buah_lokal = money_or_empty(record, keys::BUAH_LOKAL);
    let all_produk = money_or_empty(record, keys::ALL_PRODUK);

    let v1i = text_or(record, &keys::variance(Shift::One, Register::Induk), "");
    let v1a = text_or(record, &keys::variance(Shift::One, Register::Anak), "");
    let v2i = text_or(record, &keys::variance(Shift::Two, Register::Induk), "");
    let v2a = text_or(record, &keys::variance(Shift::Two, Register::Anak), "");

    let cpu_s1_induk = text_or(record, &keys::trx_cpu(Shift::One, Register::Induk), "");
    let cpu_s1_anak = text_or(record, &keys::trx_cpu(Shift::One, Register::Anak), "");
    let cpu_s2_induk = text_or(record, &keys::trx_cpu(Shift::Two, Register::Induk), "");
    let cpu_s2_anak = text_or(record, &keys::trx_cpu(Shift::Two, Register::Anak), "");

    let mut lines: Vec<String> = Vec::with_capacity(110);
    lines.push(format!("*{}*", store));
    lines.push(format!("Monitoring *{}* ", kpi_title));
    lines.push(format!(" SHIFT {}", shift));
    lines.push(format!("Tanggal: {}\n", tanggal));
    lines.push(format!("Sales: {}", sales));
    lines.push(format!("Struk : {}\n", struk));
    lines.push("*Sales produk khusus*".to_string());
    lines.push(format!("Mr.bread: {}", mrbread));
    lines.push(format!("Prime bread: {}", primebread));
    lines.push(format!("Telur : {}", telur));
    lines.push(format!("Buah Import : {}", buah_import));
    lines.push(format!("Buah lokal : {}", buah_lokal));
    lines.push(format!("All Produk : {}\n", all_produk));
    lines.push("*VARIANCE*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::VARIANCE_POIN, "5")));
    lines.push("Budget".to_string());
    lines.push("Shift 1".to_string());
    lines.push(format!("Induk : {}", v1i));
    lines.push(format!("Anak : {}\n", v1a));
    lines.push("Shift 2".to_string());
    lines.push(format!("Induk  : {}", v2i));
    lines.push(format!("Anak : {}\n", v2a));
    lines.push(format!(
        "Total Variance Plus di atas Rp.10.000 : {}\n",
        text_or(record, keys::VARIANCE_PLUS_GT10K, "0")
    ));
    lines.push("*CANCEL SALES*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::CANCEL_POIN, "5")));
    lines.push(format!("Budget : {}", text_or(record, keys::CANCEL_BUDGET, "")));
    lines.push(format!("Shift 1 : {}", text_or(record, keys::CANCEL_SHIFT1, "")));
    lines.push(format!("Shift 2 : {}", text_or(record, keys::CANCEL_SHIFT2, "")));
    lines.push(format!("Total cancel : {}\n", text_or(record, keys::CANCEL_TOTAL, "0")));
    lines.push("*TERTIB SETOR*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::TERTIB_POIN, "5")));
    lines.push(format!("Shift 1 : {}", text_or(record, &keys::tertib_setor(Shift::One), "")));
    lines.push(format!("Shift 2 : {}\n", text_or(record, &keys::tertib_setor(Shift::Two), "")));
    lines.push("*JMLH TRX CPU*".to_string());
    lines.push(format!(
        "{} : {}",
        text_or(record, keys::CPU_50_LEFT, "50 %"),
        text_or(record, keys::CPU_50_RIGHT, "50 %")
    ));
    lines.push("Shift 1".to_string());
    lines.push(format!("Induk : {}", cpu_s1_induk));
    lines.push(format!("Anak : {}\n", cpu_s1_anak));
    lines.push("Shift 2".to_string());
    lines.push(format!("Induk : {}", cpu_s2_induk));
    lines.push(format!("Anak : {}\n", cpu_s2_anak));
    lines.push("*JMLH TRX TUNAI*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::TUNAI_POIN, "5")));
    lines.push(format!("Target : {}", text_or(record, keys::TUNAI_TARGET, "215")));
    lines.push(format!("Shift 1 : {}", text_or(record, keys::TUNAI_SHIFT1, "")));
    lines.push(format!("Shift 2 : {}", text_or(record, keys::TUNAI_SHIFT2, "")));
    lines.push(format!("Total trx tunai : {}", text_or(record, keys::TUNAI_TOTAL, "")));
    lines.push(format!("Sisa : {}\n", text_or(record, keys::TUNAI_SISA, "")));
    lines.push("*NEW MEMBER ISAKU*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::ISAKU_POIN, "5")));
    lines.push(format!("Target : {}", text_or(record, keys::ISAKU_TARGET, "8")));
    lines.push(format!("Shift 1 : {}", text_or(record, keys::ISAKU_SHIFT1, "")));
    lines.push(format!("Shift 2 : {}", text_or(record, keys::ISAKU_SHIFT2, "")));
    lines.push(format!("Total  : {}", text_or(record, keys::ISAKU_TOTAL, "")));
    lines.push(format!("Sisa : {}\n", text_or(record, keys::ISAKU_SISA, "")));
    lines.push("*NEW MEMBER POINKU*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::POINKU_POIN, "10")));
    lines.push(format!("Target : {}", text_or(record, keys::POINKU_TARGET, "10")));
    lines.push(format!("Shift 1 : {}", text_or(record, keys::POINKU_SHIFT1, "")));
    lines.push(format!("Shift 2 : {}", text_or(record, keys::POINKU_SHIFT2, "")));
    lines.push(format!("Total : {}", text_or(record, keys::POINKU_TOTAL, "")));
    lines.push(format!("Sisa : {}\n", text_or(record, keys::POINKU_SISA, "")));
    lines.push("*NEW MEMBER KLIK*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::KLIK_POIN, "10")));
    lines.push(format!("Target : {}", text_or(record, keys::KLIK_TARGET, "13")));
    lines.push(format!("Shift 1 : {}", text_or(record, keys::KLIK_SHIFT1, "")));
    lines.push(format!("Shift 2 : {}", text_or(record, keys::KLIK_SHIFT2, "")));
    lines.push(format!("Total : {}", text_or(record, keys::KLIK_TOTAL, "")));
    lines.push(format!("Sisa : {}\n", text_or(record, keys::KLIK_SISA, "")));
    lines.push("*STORE ACTIVITY*".to_string());
    lines.push("Poin 5".to_string());
    lines.push(format!(
        "Shift 1 : {} ",
        text_or(record, &keys::store_activity(Shift::One), "")
    ));
    lines.push(format!(
        "Shift 2 : {}\n",
        text_or(record, &keys::store_activity(Shift::Two), "")
    ));
    lines.push("*TOKO PRIMA/KBK*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::KBK_POIN, "5")));
    lines.push(format!("Shift 1 : {}", text_or(record, &keys::kbk(Shift::One), "")));
    lines.push(format!("Shift 2 : {}", text_or(record, &keys::kbk(Shift::Two), "")));
    lines.push(format!("Total : {}", text_or(record, keys::KBK_TOTAL, "5")));
    lines.push(format!("Sisa : {}\n", text_or(record, keys::KBK_SISA, "")));
    lines.push("*PELAKSANAAN  PJR(scan itt)*".to_string());
    lines.push(format!("Target : {}", text_or(record, keys::PJR_TARGET, "")));
    lines.push(format!("POIN {}", text_or(record, keys::PJR_POIN, "10")));
    lines.push("Target".to_string());
    lines.push(format!("Shift 1 : {}", text_or(record, &keys::pjr(Shift::One), "")));
    lines.push(format!("Shift 2 : {}\n", text_or(record, &keys::pjr(Shift::Two), "")));
    lines.push("*QTY ITT*".to_string());
    lines.push(format!("POIN {}", text_or(record, keys::ITT_POIN, "5")));
    lines.push(format!("Budget : {}", text_or(record, keys::ITT_BUDGET, "")));
    lines.push(format!("Shift 1 : {}", text_or(record, &keys::itt(Shift::One), "")));
    lines.push(format!("Shift 2 : {}", text_or(record, &keys::itt(Shift::Two), "")));
    lines.push(format!("Total itt : {}\n", text_or(record, keys::ITT_TOTAL, "")));
    lines.push("*TARGET POIN 100*\n".to_string());
    lines.push("*Akumulasi varian mines*".to_string());
    lines.push(format!("Total varmin : {}", text_or(record, keys::TOTAL_VARMIN, "0")));
    lines.push(format!("Dian : {}", text_or(record, keys::VARMIN_DIAN, "0")));
    lines.push(format!("Dinda : {}", text_or(record, keys::VARMIN_DINDA, "0")));
    lines.push(format!("Agung : {}", text_or(record, keys::VARMIN_AGUNG, "0")));
    lines.push(format!("Rifa : {}", text_or(record, keys::VARMIN_RIFA, "0")));
    lines.push(format!("Putri : {}\n", text_or(record, keys::VARMIN_PUTRI, "0")));
    lines.push("*Akumulasi variance plus*".to_string());
    lines.push(format!(
        "Total variance plus : {}",
        text_or(record, keys::TOTAL_VARPLUS, "")
    ));
    lines.push(format!("Dian : {}", text_or(record, keys::VARPLUS_DIAN, "")));
    lines.push(format!("Dinda : {}", text_or(record, keys::VARPLUS_DINDA, "")));
    lines.push(format!("Agung : {}", text_or(record, keys::VARPLUS_AGUNG, "")));
    lines.push(format!("Rifa : {}", text_or(record, keys::VARPLUS_RIFA, "")));
    lines.push(format!("Putri : {}", text_or(record, keys::VARPLUS_PUTRI, "")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated_record() -> Record {
        let mut record = Record::new();
        record.set_text(keys::TANGGAL, "22/08/2025");
        record
    }

    #[test]
    fn deterministic_for_same_record() {
        let mut record = dated_record();
        record.set_text(keys::SHIFT, "1");
        record.set_amount(keys::TOTAL_SALES, 1_500_000);
        assert_eq!(render_report(&record), render_report(&record));
    }

    #[test]
    fn every_section_present_on_empty_record() {
        let report = render_report(&dated_record());
        for header in [
            "*T67T CIBULARENG*",
            "*Sales produk khusus*",
            "*VARIANCE*",
            "*CANCEL SALES*",
            "*TERTIB SETOR*",
            "*JMLH TRX CPU*",
            "*JMLH TRX TUNAI*",
            "*NEW MEMBER ISAKU*",
            "*NEW MEMBER POINKU*",
            "*NEW MEMBER KLIK*",
            "*STORE ACTIVITY*",
            "*TOKO PRIMA/KBK*",
            "*PELAKSANAAN  PJR(scan itt)*",
            "*QTY ITT*",
            "*TARGET POIN 100*",
            "*Akumulasi varian mines*",
            "*Akumulasi variance plus*",
        ] {
            assert!(report.contains(header), "missing section {header}");
        }
    }

    #[test]
    fn line_count_is_stable_regardless_of_unset_fields() {
        let empty = render_report(&dated_record());

        let mut full = dated_record();
        full.set_text(keys::SHIFT, "2");
        full.set_amount(keys::TOTAL_SALES, 2_000_000);
        full.set_amount(keys::TOTAL_STRUK, 321);
        full.set_amount(keys::MRBREAD, 120_000);
        full.set_text(keys::variance(Shift::One, Register::Induk), "+4.139 Dini");
        let filled = render_report(&full);

        assert_eq!(empty.lines().count(), filled.lines().count());
        assert_eq!(empty.lines().count(), 126);
    }

    #[test]
    fn unset_fields_render_as_defaults() {
        let report = render_report(&dated_record());
        assert!(report.contains(" SHIFT 01"));
        assert!(report.contains("Sales: \n"));
        assert!(report.contains("Target : 215"));
        assert!(report.contains("Total varmin : 0"));
        assert!(report.contains("Tanggal: 22/08/2025"));
    }

    #[test]
    fn money_and_shift_formatting_applied() {
        let mut record = dated_record();
        record.set_text(keys::SHIFT, "2");
        record.set_amount(keys::TOTAL_SALES, 1_500_000);
        record.set_amount(keys::ALL_PRODUK, 75_500);
        record.set_text(keys::variance(Shift::Two, Register::Anak), "+334 Rifa");

        let report = render_report(&record);
        assert!(report.contains(" SHIFT 02"));
        assert!(report.contains("Sales: 1.500.000"));
        assert!(report.contains("All Produk : 75.500"));
        assert!(report.contains("Anak : +334 Rifa"));
    }
}

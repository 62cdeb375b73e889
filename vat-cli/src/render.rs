//! Plain-text rendering of results and history listings.

use vat_core::history::HistoryStore;
use vat_core::words::amount_in_words;
use vat_core::{CalculationRecord, Language};

use crate::i18n::Labels;

/// Renders one calculation as a labelled result block.
///
/// With `show_in_words` on, every money figure is repeated in words below
/// the numeric lines (long-form for Azerbaijani, plain formatting
/// otherwise).
pub fn result_block(
    record: &CalculationRecord,
    labels: &Labels,
    language: Language,
    show_in_words: bool,
) -> String {
    let code = record.currency.code();
    let mut out = format!(
        "{}: {} {}\n{} ({}%): {} {}\n{}: {} {}",
        labels.base_amount,
        record.base_amount,
        code,
        labels.vat_amount,
        record.rate,
        record.vat_amount,
        code,
        labels.total_amount,
        record.total,
        code,
    );

    if show_in_words {
        for (label, figure) in [
            (labels.base_amount, record.base_amount),
            (labels.vat_amount, record.vat_amount),
            (labels.total_amount, record.total),
        ] {
            out.push_str(&format!(
                "\n{}: {}",
                label,
                amount_in_words(figure, language, record.currency)
            ));
        }
    }

    out
}

/// Renders the history as a header plus one summary line per record,
/// newest first. An empty history renders as a dash.
pub fn history_listing(
    history: &HistoryStore,
    labels: &Labels,
) -> String {
    if history.is_empty() {
        return format!("{}: —", labels.history);
    }

    let mut out = String::from(labels.history);
    for record in history.list() {
        out.push_str(&format!("\n  [{}] {}", record.id, record.summary_line()));
    }
    out
}

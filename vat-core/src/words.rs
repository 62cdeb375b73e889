//! Azerbaijani long-form numeral spelling for monetary amounts.
//!
//! Amounts are decomposed base-1000: each group of up to three digits (a
//! segment) is spelled with the hundreds/tens/units tables, followed by its
//! scale word (`min`, `milyon`, `milyard`); zero segments are skipped
//! entirely. `100`–`199` use bare `yüz`, other hundreds prefix the digit
//! word. The currency's major-unit word follows the whole part; a non-zero
//! fractional part (minor units, 0–99) is spelled the same way and followed
//! by the minor-unit word.
//!
//! Every other language, and any amount the scale table cannot cover, falls
//! back to plain numeric formatting; the converter always returns a string.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use vat_core::words::amount_in_words;
//! use vat_core::{Currency, Language};
//!
//! assert_eq!(
//!     amount_in_words(dec!(1234.50), Language::Az, Currency::Azn),
//!     "bir min iki yüz otuz dörd manat əlli qəpik",
//! );
//! assert_eq!(
//!     amount_in_words(dec!(1234.50), Language::En, Currency::Azn),
//!     "1234.50 AZN",
//! );
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculations::common::to_money;
use crate::models::{Currency, Language};

const UNITS: [&str; 10] = [
    "", "bir", "iki", "üç", "dörd", "beş", "altı", "yeddi", "səkkiz", "doqquz",
];

const TENS: [&str; 10] = [
    "", "on", "iyirmi", "otuz", "qırx", "əlli", "altmış", "yetmiş", "səksən", "doxsan",
];

/// Scale words for powers of one thousand; the units segment has none.
const SCALES: [&str; 4] = ["", "min", "milyon", "milyard"];

const ZERO: &str = "sıfır";
const HUNDRED: &str = "yüz";

/// Largest whole part the scale table covers: 999 milyard and change.
const MAX_SPELLABLE: i64 = 999_999_999_999;

/// Renders a monetary amount as human-readable text.
///
/// Azerbaijani gets the long-form spelling; every other language gets the
/// amount formatted to two decimals followed by the currency code. The
/// amount is rounded to two decimals before the whole/fraction split, so
/// spelled text always agrees with displayed figures.
///
/// Negative amounts and whole parts beyond [`MAX_SPELLABLE`] use the plain
/// fallback; spelling is defined for non-negative in-range values only.
pub fn amount_in_words(
    amount: Decimal,
    language: Language,
    currency: Currency,
) -> String {
    let money = to_money(amount);

    if language != Language::Az || money < Decimal::ZERO {
        return plain_fallback(money, currency);
    }

    let Some(whole) = money.trunc().to_i64() else {
        return plain_fallback(money, currency);
    };
    if whole > MAX_SPELLABLE {
        return plain_fallback(money, currency);
    }

    // The scale is exactly 2 after to_money, so this is the minor-unit count.
    let fraction = (money.fract() * Decimal::ONE_HUNDRED)
        .to_i64()
        .unwrap_or(0);

    let mut result = spell_whole(whole);
    result.push(' ');
    result.push_str(currency.major_unit_word());

    if fraction > 0 {
        result.push(' ');
        result.push_str(&spell_whole(fraction));
        result.push(' ');
        result.push_str(currency.minor_unit_word());
    }

    result
}

/// Two-decimal numeric rendering with the currency code appended.
fn plain_fallback(
    money: Decimal,
    currency: Currency,
) -> String {
    format!("{} {}", money, currency.code())
}

/// Spells a non-negative whole number through the base-1000 scale table.
fn spell_whole(mut n: i64) -> String {
    if n == 0 {
        return ZERO.to_string();
    }

    // Collected least-significant segment first, reversed before joining.
    let mut parts: Vec<String> = Vec::new();
    let mut scale = 0;

    while n > 0 {
        let segment = (n % 1000) as u16;
        if segment > 0 {
            let mut words = spell_segment(segment);
            if scale > 0 {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            parts.push(words);
        }
        n /= 1000;
        scale += 1;
    }

    parts.reverse();
    parts.join(" ")
}

/// Spells a single 1–999 segment from the hundreds/tens/units tables.
fn spell_segment(n: u16) -> String {
    let mut words: Vec<&'static str> = Vec::new();

    let hundreds = (n / 100) as usize;
    if hundreds > 0 {
        // "yüz" stands alone for 1xx; other hundreds prefix the digit word.
        if hundreds > 1 {
            words.push(UNITS[hundreds]);
        }
        words.push(HUNDRED);
    }

    let tens = ((n % 100) / 10) as usize;
    if tens > 0 {
        words.push(TENS[tens]);
    }

    let units = (n % 10) as usize;
    if units > 0 {
        words.push(UNITS[units]);
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn az(amount: Decimal) -> String {
        amount_in_words(amount, Language::Az, Currency::Azn)
    }

    // =========================================================================
    // fallback formatting
    // =========================================================================

    #[test]
    fn unsupported_language_formats_plainly() {
        let result = amount_in_words(dec!(100), Language::En, Currency::Azn);

        assert_eq!(result, "100.00 AZN");
    }

    #[test]
    fn russian_also_falls_back() {
        let result = amount_in_words(dec!(1234.5), Language::Ru, Currency::Rub);

        assert_eq!(result, "1234.50 RUB");
    }

    #[test]
    fn fallback_rounds_to_two_decimals() {
        let result = amount_in_words(dec!(0.005), Language::En, Currency::Usd);

        assert_eq!(result, "0.01 USD");
    }

    #[test]
    fn negative_amount_falls_back_even_in_azerbaijani() {
        let result = az(dec!(-12.50));

        assert_eq!(result, "-12.50 AZN");
    }

    #[test]
    fn amount_beyond_scale_table_falls_back() {
        let result = az(dec!(1000000000000));

        assert_eq!(result, "1000000000000.00 AZN");
    }

    // =========================================================================
    // whole-number spelling
    // =========================================================================

    #[test]
    fn zero_spells_sifir() {
        assert_eq!(az(dec!(0)), "sıfır manat");
    }

    #[test]
    fn single_digit() {
        assert_eq!(az(dec!(5)), "beş manat");
    }

    #[test]
    fn tens_and_units() {
        assert_eq!(az(dec!(42)), "qırx iki manat");
    }

    #[test]
    fn round_tens_have_no_unit_word() {
        assert_eq!(az(dec!(90)), "doxsan manat");
    }

    #[test]
    fn one_hundred_uses_bare_hundred_word() {
        assert_eq!(az(dec!(100)), "yüz manat");
    }

    #[test]
    fn other_hundreds_prefix_the_digit_word() {
        assert_eq!(az(dec!(200)), "iki yüz manat");
        assert_eq!(az(dec!(345)), "üç yüz qırx beş manat");
    }

    #[test]
    fn thousands_segment_carries_scale_word() {
        assert_eq!(az(dec!(1234)), "bir min iki yüz otuz dörd manat");
    }

    #[test]
    fn zero_segments_are_skipped() {
        assert_eq!(az(dec!(1000234)), "bir milyon iki yüz otuz dörd manat");
        assert_eq!(az(dec!(5000000)), "beş milyon manat");
    }

    #[test]
    fn billions_scale_is_covered() {
        assert_eq!(
            az(dec!(999999999)),
            "doqquz yüz doxsan doqquz milyon doqquz yüz doxsan doqquz min \
             doqquz yüz doxsan doqquz manat",
        );
        assert_eq!(az(dec!(2000000001)), "iki milyard bir manat");
    }

    // =========================================================================
    // fractional clause
    // =========================================================================

    #[test]
    fn whole_amount_omits_fraction_clause() {
        assert_eq!(az(dec!(100.00)), "yüz manat");
    }

    #[test]
    fn fraction_is_spelled_with_minor_unit_word() {
        assert_eq!(az(dec!(1234.50)), "bir min iki yüz otuz dörd manat əlli qəpik");
    }

    #[test]
    fn fraction_only_amount_spells_zero_major_part() {
        assert_eq!(az(dec!(0.05)), "sıfır manat beş qəpik");
    }

    #[test]
    fn fraction_rounding_happens_before_the_split() {
        // 9.999 rounds to 10.00, so no fraction clause at all.
        assert_eq!(az(dec!(9.999)), "on manat");
    }

    // =========================================================================
    // currency unit words
    // =========================================================================

    #[test]
    fn dollar_amounts_use_dollar_and_sent() {
        let result = amount_in_words(dec!(2.25), Language::Az, Currency::Usd);

        assert_eq!(result, "iki dollar iyirmi beş sent");
    }

    #[test]
    fn euro_amounts_use_avro() {
        let result = amount_in_words(dec!(1), Language::Az, Currency::Eur);

        assert_eq!(result, "bir avro");
    }

    #[test]
    fn ruble_amounts_use_rubl_and_qepik() {
        let result = amount_in_words(dec!(3.10), Language::Az, Currency::Rub);

        assert_eq!(result, "üç rubl on qəpik");
    }
}

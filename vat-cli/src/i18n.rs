//! Interface label translations.
//!
//! One static table per language; lookup is a match on [`Language`], so a
//! missing label for a shipped language cannot compile.

use vat_core::Language;

/// The labels the frontend prints, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub enter_amount: &'static str,
    pub vat_included: &'static str,
    pub vat_excluded: &'static str,
    pub vat_type: &'static str,
    pub show_in_words: &'static str,
    pub reset: &'static str,
    pub calculate: &'static str,
    pub base_amount: &'static str,
    pub vat_amount: &'static str,
    pub total_amount: &'static str,
    pub history: &'static str,
    pub copy_to_clipboard: &'static str,
    pub custom: &'static str,
    pub vat_percentage: &'static str,
}

static EN: Labels = Labels {
    title: "VAT Calculator",
    enter_amount: "Enter amount",
    vat_included: "VAT Included",
    vat_excluded: "VAT Excluded",
    vat_type: "VAT Type",
    show_in_words: "Show in Words",
    reset: "Reset",
    calculate: "Calculate",
    base_amount: "Base Amount",
    vat_amount: "VAT",
    total_amount: "Total",
    history: "Calculation History",
    copy_to_clipboard: "Copy to clipboard",
    custom: "Custom",
    vat_percentage: "VAT Percentage",
};

static AZ: Labels = Labels {
    title: "ƏDV Kalkulyatoru",
    enter_amount: "Məbləği daxil edin",
    vat_included: "ƏDV daxildir",
    vat_excluded: "ƏDV xaricdir",
    vat_type: "ƏDV Növü",
    show_in_words: "Sözlərlə göstər",
    reset: "Sıfırla",
    calculate: "Hesabla",
    base_amount: "Əsas məbləğ",
    vat_amount: "ƏDV",
    total_amount: "Cəmi",
    history: "Hesablama Tarixçəsi",
    copy_to_clipboard: "Kopyala",
    custom: "Xüsusi",
    vat_percentage: "ƏDV Faizi",
};

static RU: Labels = Labels {
    title: "НДС Калькулятор",
    enter_amount: "Введите сумму",
    vat_included: "НДС включен",
    vat_excluded: "НДС не включен",
    vat_type: "Тип НДС",
    show_in_words: "Показать прописью",
    reset: "Сбросить",
    calculate: "Рассчитать",
    base_amount: "Базовая сумма",
    vat_amount: "НДС",
    total_amount: "Итого",
    history: "История расчетов",
    copy_to_clipboard: "Копировать",
    custom: "Другой",
    vat_percentage: "Процент НДС",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &EN,
            Language::Az => &AZ,
            Language::Ru => &RU,
        }
    }
}

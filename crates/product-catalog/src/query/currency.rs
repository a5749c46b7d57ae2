//! Currency text handling for Brazilian reais.
//!
//! Every field that accepts or displays money goes through this module: the product
//! form's price field and the min/max filter fields share the same parsing, so a
//! value typed in one place means the same amount everywhere.
//!
//! Parsing ignores everything but digits and reads them as centavos, which is what
//! makes "as-you-type" formatting work: typing `4`, `45`, `450`, `4500` shows
//! `R$ 0,04`, `R$ 0,45`, `R$ 4,50`, `R$ 45,00`.

/// How a currency text field should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceInput {
    /// The field is empty.
    Unset,
    /// The field holds an amount, in major units.
    Amount(f64),
    /// The field has text but no digits in it.
    Unparseable,
}

impl PriceInput {
    pub fn classify(text: &str) -> Self {
        if text.trim().is_empty() {
            return PriceInput::Unset;
        }
        match parse_currency(text) {
            Some(amount) => PriceInput::Amount(amount),
            None => PriceInput::Unparseable,
        }
    }

    /// The amount, treating both `Unset` and `Unparseable` as "no value".
    pub fn amount(self) -> Option<f64> {
        match self {
            PriceInput::Amount(amount) => Some(amount),
            PriceInput::Unset | PriceInput::Unparseable => None,
        }
    }
}

/// Reads every digit in `text` as one integer number of centavos.
///
/// Returns `None` when there are no digits. Saturates at `u64::MAX`.
pub fn minor_units(text: &str) -> Option<u64> {
    let mut digits = text.chars().filter_map(|c| c.to_digit(10)).peekable();
    digits.peek()?;
    Some(digits.fold(0u64, |acc, d| {
        acc.saturating_mul(10).saturating_add(u64::from(d))
    }))
}

/// Parses currency text into major units. No digits means no value.
pub fn parse_currency(text: &str) -> Option<f64> {
    minor_units(text).map(|cents| cents as f64 / 100.0)
}

/// Converts a major-unit amount to centavos, rounding to the nearest one.
pub fn to_minor_units(amount: f64) -> u64 {
    if amount.is_nan() || amount <= 0.0 {
        return 0;
    }
    // `as` saturates for values beyond u64
    (amount * 100.0).round() as u64
}

/// Formats centavos as `R$ 4.500,00`.
pub fn format_currency(minor: u64) -> String {
    let reais = minor / 100;
    let centavos = minor % 100;
    format!("R$ {},{:02}", group_thousands(reais), centavos)
}

/// The as-you-type formatter: keeps the digits of `raw` and renders them as
/// currency, or returns an empty string when there are none.
pub fn reformat_currency_input(raw: &str) -> String {
    minor_units(raw).map(format_currency).unwrap_or_default()
}

/// Price as shown on a product card, e.g. `R$ 4500.00`.
pub fn format_price(amount: f64) -> String {
    let minor = to_minor_units(amount);
    format!("R$ {}.{:02}", minor / 100, minor % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

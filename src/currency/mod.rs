//! Static currency catalog and en-US currency formatting.

use std::fmt;

use crate::errors::ExpenseError;

/// One selectable currency together with how it is displayed.
#[derive(Debug, PartialEq, Eq)]
pub struct CurrencyEntry {
    pub code: &'static str,
    pub name: &'static str,
    /// Prefix used by en-US formatting. Codes without a local symbol use the code itself.
    pub symbol: &'static str,
    pub minor_units: u8,
}

impl CurrencyEntry {
    const fn new(
        code: &'static str,
        name: &'static str,
        symbol: &'static str,
        minor_units: u8,
    ) -> Self {
        Self {
            code,
            name,
            symbol,
            minor_units,
        }
    }

    /// `PHP - Philippine Peso`, as shown in pickers.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    fn matches(&self, needle: &str) -> bool {
        self.code.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}

pub static CATALOG: [CurrencyEntry; 13] = [
    CurrencyEntry::new("PHP", "Philippine Peso", "₱", 2),
    CurrencyEntry::new("USD", "US Dollar", "$", 2),
    CurrencyEntry::new("EUR", "Euro", "€", 2),
    CurrencyEntry::new("JPY", "Japanese Yen", "¥", 0),
    CurrencyEntry::new("GBP", "British Pound", "£", 2),
    CurrencyEntry::new("AUD", "Australian Dollar", "A$", 2),
    CurrencyEntry::new("CAD", "Canadian Dollar", "CA$", 2),
    CurrencyEntry::new("CHF", "Swiss Franc", "CHF", 2),
    CurrencyEntry::new("CNY", "Chinese Yuan", "CN¥", 2),
    CurrencyEntry::new("NZD", "New Zealand Dollar", "NZ$", 2),
    CurrencyEntry::new("SGD", "Singapore Dollar", "SGD", 2),
    CurrencyEntry::new("KPW", "North Korean Won", "KPW", 0),
    CurrencyEntry::new("KRW", "South Korean Won", "₩", 0),
];

pub fn lookup(code: &str) -> Option<&'static CurrencyEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code.trim()))
}

/// Lazily filters the catalog by a case-insensitive substring of code or name.
pub fn search(query: &str) -> CurrencySearch {
    CurrencySearch {
        needle: query.to_lowercase(),
        position: 0,
    }
}

/// Iterator returned by [`search`]. Clone it to restart from the beginning.
#[derive(Debug, Clone)]
pub struct CurrencySearch {
    needle: String,
    position: usize,
}

impl Iterator for CurrencySearch {
    type Item = &'static CurrencyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = CATALOG.get(self.position) {
            self.position += 1;
            if entry.matches(&self.needle) {
                return Some(entry);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CATALOG.len().saturating_sub(self.position)))
    }
}

/// ISO 4217 code guaranteed to be present in [`CATALOG`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CurrencyCode(&'static CurrencyEntry);

impl CurrencyCode {
    pub fn parse(code: &str) -> Result<Self, ExpenseError> {
        lookup(code)
            .map(Self)
            .ok_or_else(|| ExpenseError::UnknownCurrency(code.trim().to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0.code
    }

    pub fn entry(&self) -> &'static CurrencyEntry {
        self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(&CATALOG[0])
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CurrencyCode").field(&self.0.code).finish()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.code)
    }
}

/// Renders `amount` the way an en-US locale displays `code`, whatever the
/// currency's home locale: `$1,234.50`, `¥1,235`, `CHF\u{a0}1,234.50`.
///
/// Rounding applies to the shortest decimal form of `amount`, so `1.005`
/// shows as `$1.01`. Negative amounts keep their sign even when they round
/// to zero (`-$0.00`).
pub fn format_currency_value(amount: f64, code: CurrencyCode) -> String {
    let entry = code.entry();
    let prefix = if entry.symbol == entry.code {
        format!("{}\u{a0}", entry.code)
    } else {
        entry.symbol.to_string()
    };

    if amount.is_nan() {
        return format!("{prefix}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{prefix}∞");
    }

    let body = format_number(amount.abs(), entry.minor_units);
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{prefix}{body}")
}

/// Formats a non-negative value with `,` grouping and `precision` decimals,
/// rounding half away from zero.
pub fn format_number(value: f64, precision: u8) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return "∞".to_string();
    }
    let (int_part, fraction) = round_decimal(&value.abs().to_string(), usize::from(precision));
    let grouped = group_digits(&int_part, ',');
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// Rounds a plain decimal such as `1234.005` to `precision` fraction digits.
/// `f64`'s `Display` never uses exponents and yields the shortest round-trip
/// digits, so no precision is lost before rounding.
fn round_decimal(plain: &str, precision: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));
    let mut digits: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(precision))
        .collect();

    let round_up = frac_part
        .chars()
        .nth(precision)
        .is_some_and(|next| next >= '5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == '9' {
                *digit = '0';
            } else {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, '1');
        }
    }

    let fraction = digits.split_off(digits.len() - precision);
    (digits.into_iter().collect(), fraction.into_iter().collect())
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().enumerate() {
        if count != 0 && (digits.len() - count) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

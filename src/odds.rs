use crate::model::Quote;

/// Display format for a decimal price. The region toggle picks the default
/// (us -> American), the format selector overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OddsFormat {
    #[default]
    Decimal,
    Fractional,
    American,
}

impl OddsFormat {
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "decimal" => Some(OddsFormat::Decimal),
            "fractional" => Some(OddsFormat::Fractional),
            "american" => Some(OddsFormat::American),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            OddsFormat::Decimal => "decimal",
            OddsFormat::Fractional => "fractional",
            OddsFormat::American => "american",
        }
    }
}

pub const PLACEHOLDER: &str = "-";

/// Common simplified fractions keyed by hundredths of (price - 1), so the
/// cosmetic lookup never compares floats. Covers denominators 1-5 and the
/// round book prices up to 100/1.
const COMMON_FRACTIONS: &[(i64, &str)] = &[
    (20, "1/5"),
    (25, "1/4"),
    (33, "1/3"),
    (40, "2/5"),
    (50, "1/2"),
    (60, "3/5"),
    (67, "2/3"),
    (75, "3/4"),
    (80, "4/5"),
    (100, "1/1"),
    (120, "6/5"),
    (125, "5/4"),
    (133, "4/3"),
    (140, "7/5"),
    (150, "3/2"),
    (160, "8/5"),
    (167, "5/3"),
    (175, "7/4"),
    (180, "9/5"),
    (200, "2/1"),
    (220, "11/5"),
    (225, "9/4"),
    (233, "7/3"),
    (240, "12/5"),
    (250, "5/2"),
    (260, "13/5"),
    (267, "8/3"),
    (275, "11/4"),
    (280, "14/5"),
    (300, "3/1"),
    (325, "13/4"),
    (333, "10/3"),
    (350, "7/2"),
    (367, "11/3"),
    (375, "15/4"),
    (400, "4/1"),
    (450, "9/2"),
    (500, "5/1"),
    (550, "11/2"),
    (600, "6/1"),
    (650, "13/2"),
    (700, "7/1"),
    (750, "15/2"),
    (800, "8/1"),
    (900, "9/1"),
    (1000, "10/1"),
    (1100, "11/1"),
    (1200, "12/1"),
    (1400, "14/1"),
    (1600, "16/1"),
    (1800, "18/1"),
    (2000, "20/1"),
    (2200, "22/1"),
    (2500, "25/1"),
    (2800, "28/1"),
    (3300, "33/1"),
    (4000, "40/1"),
    (5000, "50/1"),
    (6600, "66/1"),
    (8000, "80/1"),
    (10000, "100/1"),
];

/// Formats a quote for display. Missing or invalid prices always come out as
/// a single dash, never an error.
#[must_use]
pub fn format_quote(quote: Quote, format: OddsFormat) -> String {
    let Some(price) = quote.as_price() else {
        return PLACEHOLDER.to_string();
    };
    format_price(price, format)
}

#[must_use]
pub fn format_price(price: f64, format: OddsFormat) -> String {
    if !price.is_finite() || price < 1.0 {
        return PLACEHOLDER.to_string();
    }
    match format {
        OddsFormat::Decimal => format_decimal(price),
        OddsFormat::Fractional => format_fractional(price),
        OddsFormat::American => format_american(price),
    }
}

fn format_decimal(price: f64) -> String {
    if (price - price.round()).abs() < 1e-9 {
        format!("{}", price.round() as i64)
    } else {
        format!("{price:.1}")
    }
}

fn format_fractional(price: f64) -> String {
    // A price of exactly 1.0 is treated as evens.
    if (price - 1.0).abs() < 1e-9 {
        return "1/1".to_string();
    }
    let hundredths = ((price - 1.0) * 100.0).round() as i64;
    if let Some((_, display)) = COMMON_FRACTIONS.iter().find(|(h, _)| *h == hundredths) {
        return (*display).to_string();
    }
    let divisor = gcd(hundredths, 100);
    format!("{}/{}", hundredths / divisor, 100 / divisor)
}

fn format_american(price: f64) -> String {
    let american = decimal_to_american(price);
    if american > 0 {
        format!("+{american}")
    } else {
        format!("{american}")
    }
}

/// Evens and better take the "+" branch, so 2.0 renders as +100; a price of
/// exactly 1.0 is also treated as evens rather than dividing by zero.
#[must_use]
pub fn decimal_to_american(price: f64) -> i64 {
    if price >= 2.0 || (price - 1.0).abs() < 1e-9 {
        ((price.max(2.0) - 1.0) * 100.0).round() as i64
    } else {
        (-100.0 / (price - 1.0)).round() as i64
    }
}

#[must_use]
pub fn american_to_decimal(american: i64) -> f64 {
    if american > 0 {
        1.0 + american as f64 / 100.0
    } else {
        1.0 - 100.0 / american as f64
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.max(1)
}

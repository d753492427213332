//! Salary input normalization and display.
//!
//! Query strings and older rows carry pay in whatever form a person typed it:
//! `10000000`, `10,000,000`, `10.000.000`, `10 triệu`, `1,5tr`. Everything is
//! normalized to whole VND, and anything unreadable becomes `None`.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::search::record::SalaryShape;

const MILLION: i64 = 1_000_000;

/// Text shown for a posting without a determinate salary.
pub const NEGOTIABLE: &str = "Thỏa thuận";

/// `<number> triệu` / `<number>tr`, decimal point `.` or `,`. Input is
/// lower-cased before matching; edges are checked in [`shorthand`].
static MILLIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:[.,](\d+))?\s*(?:triệu|tr)").expect("salary shorthand pattern is valid")
});

/// Anything [`parse_salary`] accepts.
pub trait SalaryInput {
    fn into_salary(self) -> Option<i64>;
}

impl SalaryInput for i64 {
    fn into_salary(self) -> Option<i64> {
        Some(self)
    }
}

impl SalaryInput for i32 {
    fn into_salary(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl SalaryInput for &str {
    fn into_salary(self) -> Option<i64> {
        parse_text(self)
    }
}

impl SalaryInput for &String {
    fn into_salary(self) -> Option<i64> {
        parse_text(self)
    }
}

impl SalaryInput for String {
    fn into_salary(self) -> Option<i64> {
        parse_text(&self)
    }
}

impl<T: SalaryInput> SalaryInput for Option<T> {
    fn into_salary(self) -> Option<i64> {
        self.and_then(SalaryInput::into_salary)
    }
}

/// Normalize a salary-like value to whole VND. Never fails: malformed input
/// yields `None`.
pub fn parse_salary(raw: impl SalaryInput) -> Option<i64> {
    raw.into_salary()
}

fn parse_text(raw: &str) -> Option<i64> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if let Some(amount) = shorthand(&text) {
        return amount;
    }

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// First standalone `<number> triệu` in `text`. The number must not continue
/// a separated figure (`10.000.000 tr`) and the unit must not start a longer
/// word (`trên`, `trăm`). `Some(None)` is a shorthand that overflows.
fn shorthand(text: &str) -> Option<Option<i64>> {
    for caps in MILLIONS.captures_iter(text) {
        let (Some(unit), Some(whole)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let continues_figure = text[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit() || c == '.' || c == ',');
        let longer_word = text[unit.end()..]
            .chars()
            .next()
            .is_some_and(char::is_alphabetic);
        if continues_figure || longer_word {
            continue;
        }
        let fraction = caps.get(2).map_or("", |m| m.as_str());
        return Some(millions(whole.as_str(), fraction));
    }
    None
}

/// `whole.fraction` millions, truncated to whole units. Integer arithmetic
/// keeps `4.35tr` at exactly 4,350,000.
fn millions(whole: &str, fraction: &str) -> Option<i64> {
    let whole: i64 = whole.parse().ok()?;
    let mut scaled = 0i64;
    let mut place = MILLION;
    for digit in fraction.chars().filter_map(|c| c.to_digit(10)) {
        place /= 10;
        if place == 0 {
            break;
        }
        scaled += i64::from(digit) * place;
    }
    whole.checked_mul(MILLION)?.checked_add(scaled)
}

/// `10000000` -> `10,000,000`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Human-readable pay for listings.
pub fn format_salary(shape: &SalaryShape) -> String {
    let (min, max) = match *shape {
        SalaryShape::Range { min, max } => (min, max),
        SalaryShape::Single(amount) => (amount, amount),
    };
    match (min, max) {
        (None, None) => NEGOTIABLE.to_string(),
        (Some(min), Some(max)) if min == max => format!("{} VNĐ", format_amount(min)),
        (Some(min), Some(max)) => {
            format!("{} - {} VNĐ", format_amount(min), format_amount(max))
        }
        (Some(min), None) => format!("Từ {} VNĐ", format_amount(min)),
        (None, Some(max)) => format!("Đến {} VNĐ", format_amount(max)),
    }
}

use crate::config::CURRENCY_SYMBOL;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234567.891` -> `"1,234,567.89 €"`
pub fn balance(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.max(0.0));
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}.{} {CURRENCY_SYMBOL}", group_thousands(whole), frac)
}

pub fn rate(per_second: f64) -> String {
    format!("{per_second:.1} {CURRENCY_SYMBOL}/s")
}

pub fn cost(amount: u64) -> String {
    format!("Cost: {} {CURRENCY_SYMBOL}", group_thousands(&amount.to_string()))
}

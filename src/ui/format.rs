//! Display formatting for table cells.

/// Pledged amount with a currency prefix and comma-grouped thousands,
/// `1234567` -> `"$1,234,567"`. A fractional part, when the source carries
/// one, is appended as-is.
pub fn pledged_amount(amount: f64) -> String {
    let text = amount.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    let digits = int_part.strip_prefix('-').unwrap_or(int_part);
    if digits.len() < int_part.len() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("${}.{}", grouped, frac),
        None => format!("${}", grouped),
    }
}

/// Funded percentage as text. Deliberately unclamped: overfunded campaigns
/// show their real figure even though the bar caps at 100.
pub fn funded_text(percentage: f64) -> String {
    format!("{}%", percentage)
}

/// Bar fill in cells for a bar `width` cells wide. The ratio is capped at
/// 100%, so the fill never overruns the bar.
pub fn bar_fill(percentage: f64, width: usize) -> usize {
    let ratio = percentage.clamp(0.0, 100.0) / 100.0;
    (ratio * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(pledged_amount(1_234_567.0), "$1,234,567");
        assert_eq!(pledged_amount(15_823.0), "$15,823");
        assert_eq!(pledged_amount(999.0), "$999");
        assert_eq!(pledged_amount(0.0), "$0");
    }

    #[test]
    fn keeps_fractional_part_ungrouped() {
        assert_eq!(pledged_amount(1_234.5), "$1,234.5");
    }

    #[test]
    fn funded_text_is_never_clamped() {
        assert_eq!(funded_text(186.7), "186.7%");
        assert_eq!(funded_text(100.0), "100%");
        assert_eq!(funded_text(0.5), "0.5%");
    }

    #[test]
    fn bar_fill_caps_at_full_width() {
        assert_eq!(bar_fill(186.7, 20), 20);
        assert_eq!(bar_fill(100.0, 20), 20);
        assert_eq!(bar_fill(50.0, 20), 10);
        assert_eq!(bar_fill(0.0, 20), 0);
    }
}

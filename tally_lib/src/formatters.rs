use rust_decimal::{Decimal, RoundingStrategy};

// Number of decimals displayed
const PRECISION: u32 = 2;

// Inserted every 3 digits of the integer part
const THOUSANDS: char = ',';

/// Display of amounts.  Amounts are stored with their full precision, and
/// only rounded here, e.g. ₹1,234.50 or ₹-4.00
pub struct Formatter {
    // Written in front of the number, may be empty
    pub symbol: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
        }
    }
}

impl Formatter {
    /// Display the absolute value of an already rounded value
    fn push_abs_num(into: &mut String, rounded: Decimal) {
        let text = rounded.abs().to_string();
        let (int_part, frac_part) =
            text.split_once('.').unwrap_or((text.as_str(), ""));

        let len = int_part.chars().count();
        for (idx, c) in int_part.chars().enumerate() {
            if idx > 0 && (len - idx) % 3 == 0 {
                into.push(THOUSANDS);
            }
            into.push(c);
        }

        into.push('.');
        into.push_str(frac_part);
        for _ in frac_part.len()..PRECISION as usize {
            into.push('0');
        }
    }

    pub fn display(&self, value: Decimal) -> String {
        let mut buffer = String::new();
        self.push(&mut buffer, value);
        buffer
    }

    pub fn push(&self, into: &mut String, value: Decimal) {
        let rounded = value
            .round_dp_with_strategy(PRECISION, RoundingStrategy::MidpointNearestEven);
        into.push_str(&self.symbol);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            into.push('-');
        }
        Self::push_abs_num(into, rounded);
    }
}

#[cfg(test)]
mod test {
    use crate::formatters::Formatter;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        let f = Formatter::default();
        assert_eq!(f.display(dec!(4.5)), "₹4.50");
        assert_eq!(f.display(dec!(234567)), "₹234,567.00");
        assert_eq!(f.display(dec!(1234567.238)), "₹1,234,567.24");
        assert_eq!(f.display(dec!(-1234567.238)), "₹-1,234,567.24");
        assert_eq!(f.display(dec!(0)), "₹0.00");
        assert_eq!(f.display(dec!(-0.001)), "₹0.00");
        assert_eq!(f.display(dec!(123)), "₹123.00");

        // round to nearest even
        assert_eq!(f.display(dec!(0.234)), "₹0.23");
        assert_eq!(f.display(dec!(0.235)), "₹0.24");
        assert_eq!(f.display(dec!(0.245)), "₹0.24");

        let f = Formatter {
            symbol: String::new(),
        };
        assert_eq!(f.display(dec!(1234.5)), "1,234.50");
        assert_eq!(f.display(dec!(-12)), "-12.00");
    }
}

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

pub const CURRENCY_SYMBOL: char = '₹';

/// Whole-unit integer amount, displayed as-is with the rupee sign and
/// Indian digit grouping (`1234567` shows as `₹12,34,567`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(pub u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn amount(self) -> u64 {
        self.0
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, group_en_in(self.0))
    }
}

/// Groups digits the way the `en-IN` locale does: the last three digits
/// form one group, everything before it is split in pairs.
pub fn group_en_in(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        grouped.push_str(&head[..1]);
    }
    for pair in head.as_bytes()[lead..].chunks(2) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        // ASCII digits only
        grouped.extend(pair.iter().map(|b| *b as char));
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(group_en_in(0), "0");
        assert_eq!(group_en_in(899), "899");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_en_in(1499), "1,499");
        assert_eq!(group_en_in(42970), "42,970");
        assert_eq!(group_en_in(100000), "1,00,000");
        assert_eq!(group_en_in(1234567), "12,34,567");
        assert_eq!(group_en_in(123456789), "12,34,56,789");
    }

    #[test]
    fn test_display_prefixes_currency_symbol() {
        assert_eq!(Price(4297).to_string(), "₹4,297");
        assert_eq!(Price::ZERO.to_string(), "₹0");
    }

    #[test]
    fn test_sum_saturates() {
        let total: Price = [Price(u64::MAX), Price(1)].iter().sum();
        assert_eq!(total, Price(u64::MAX));
    }
}

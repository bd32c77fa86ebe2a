//! Core data types for trade outcomes.

use std::fmt;
use std::str::FromStr;

use crate::error::BotError;

/// Which token of the pair was the input, as reported by the contract.
/// Anything other than `"left"` is treated as the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn from_report(raw: &str) -> Self {
        if raw == "left" {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// An asset amount in `"<amount> <symbol>"` chain notation.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub symbol: String,
}

impl FromStr for Quantity {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let amount_str = parts
            .next()
            .ok_or_else(|| BotError::Parse(format!("empty quantity: {:?}", s)))?;
        let symbol = parts
            .next()
            .ok_or_else(|| BotError::Parse(format!("quantity missing symbol: {:?}", s)))?;
        let amount = amount_str
            .parse::<f64>()
            .map_err(|e| BotError::Parse(format!("bad quantity amount {:?}: {}", amount_str, e)))?;
        Ok(Self {
            amount,
            symbol: symbol.to_string(),
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.symbol)
    }
}

/// `"1.94350000 USDT/FLON"` - eight decimal places, numerator symbol first.
pub fn format_price(value: f64, numerator: &str, denominator: &str) -> String {
    format!("{:.8} {}/{}", value, numerator, denominator)
}

/// Fully parsed outcome of one executed trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOutcome {
    pub bot: String,
    pub side: Side,
    pub input: Quantity,
    pub output: Quantity,
    pub price: String,
    pub price_reverted: String,
}

impl TradeOutcome {
    /// Key/value rows of the report block, keys left-aligned to the longest.
    pub fn report_lines(&self) -> Vec<String> {
        let rows: Vec<(&str, String)> = vec![
            ("bot", self.bot.clone()),
            ("side", self.side.as_str().to_string()),
            ("input_quantity", self.input.to_string()),
            ("output_quantity", self.output.to_string()),
            ("price", self.price.clone()),
            ("price_reverted", self.price_reverted.clone()),
        ];
        let width = rows
            .iter()
            .map(|(k, _)| k.len())
            .max()
            .unwrap_or(0);
        rows.into_iter()
            .map(|(k, v)| format!("{:<width$} : {}", k, v, width = width))
            .collect()
    }
}

/// Result of scanning a receipt: either one executed trade or nothing
/// recognizable. The absence of a trade is a reportable outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeParse {
    Trade(TradeOutcome),
    NoTrade,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_parses_chain_notation() {
        let q: Quantity = "0.514535 USDT".parse().unwrap();
        assert!((q.amount - 0.514535).abs() < f64::EPSILON);
        assert_eq!(q.symbol, "USDT");
    }

    #[test]
    fn quantity_rejects_malformed_input() {
        assert!("".parse::<Quantity>().is_err());
        assert!("12.5".parse::<Quantity>().is_err());
        assert!("abc USDT".parse::<Quantity>().is_err());
    }

    #[test]
    fn side_defaults_to_right() {
        assert_eq!(Side::from_report("left"), Side::Left);
        assert_eq!(Side::from_report("right"), Side::Right);
        assert_eq!(Side::from_report(""), Side::Right);
        assert_eq!(Side::from_report("LEFT"), Side::Right);
    }

    #[test]
    fn price_format_uses_eight_decimals() {
        assert_eq!(format_price(1.9435, "USDT", "FLON"), "1.94350000 USDT/FLON");
        assert_eq!(format_price(0.0, "FLON", "USDT"), "0.00000000 FLON/USDT");
    }

    #[test]
    fn report_lines_align_keys() {
        let outcome = TradeOutcome {
            bot: "bot1.mm".to_string(),
            side: Side::Left,
            input: "0.5 USDT".parse().unwrap(),
            output: "9.5 FLON".parse().unwrap(),
            price: "0.05263158 USDT/FLON".to_string(),
            price_reverted: "19.00000000 FLON/USDT".to_string(),
        };

        let lines = outcome.report_lines();
        assert_eq!(lines.len(), 6);
        // All keys padded to the longest key ("output_quantity")
        assert!(lines[0].starts_with("bot             : bot1.mm"));
        assert!(lines[2].starts_with("input_quantity  : 0.5 USDT"));
        assert!(lines[3].starts_with("output_quantity : 9.5 FLON"));
        let sep_col = lines[0].find(':');
        assert!(lines.iter().all(|l| l.find(':') == sep_col));
    }
}

//! Currency codes supported by the converter

use crate::core::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Vnd,
    Eur,
    Jpy,
    Krw,
}

impl CurrencyCode {
    /// All supported codes, in selection order.
    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::Usd,
        CurrencyCode::Vnd,
        CurrencyCode::Eur,
        CurrencyCode::Jpy,
        CurrencyCode::Krw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Vnd => "VND",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Krw => "KRW",
        }
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "VND" => Ok(CurrencyCode::Vnd),
            "EUR" => Ok(CurrencyCode::Eur),
            "JPY" => Ok(CurrencyCode::Jpy),
            "KRW" => Ok(CurrencyCode::Krw),
            _ => Err(ConvertError::UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("usd".parse::<CurrencyCode>(), Ok(CurrencyCode::Usd));
        assert_eq!(" Eur ".parse::<CurrencyCode>(), Ok(CurrencyCode::Eur));
        assert_eq!("KRW".parse::<CurrencyCode>(), Ok(CurrencyCode::Krw));
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(
            "GBP".parse::<CurrencyCode>(),
            Err(ConvertError::UnknownCurrency("GBP".to_string()))
        );
        assert!("".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for code in CurrencyCode::ALL {
            assert_eq!(code.to_string().parse::<CurrencyCode>(), Ok(code));
        }
    }

    #[test]
    fn test_serde_uses_iso_code() {
        let yaml = serde_yaml::to_string(&CurrencyCode::Jpy).unwrap();
        assert_eq!(yaml.trim(), "JPY");
        let code: CurrencyCode = serde_yaml::from_str("VND").unwrap();
        assert_eq!(code, CurrencyCode::Vnd);
    }
}

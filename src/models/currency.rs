// ============================================================================
// Devises et formatage des montants
// ============================================================================
// Deux devises de récompense : Naira (₦) et USDC.
//
// Le formatage "locale" reproduit un affichage en-US classique :
// - séparateur de milliers ","
// - au plus 3 décimales, zéros de fin supprimés
// ============================================================================

use serde::{Deserialize, Serialize};

/// Devise d'une récompense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Naira nigérian
    #[default]
    Ngn,
    /// Stablecoin USDC
    Usdc,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Usdc => "USDC",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ngn => "₦",
            Currency::Usdc => "◉",
        }
    }

    /// Libellé affiché dans les sélecteurs
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Ngn => "Naira (₦)",
            Currency::Usdc => "USDC",
        }
    }

    /// Formate un montant dans cette devise
    ///
    /// - NGN : "₦1,234.5"
    /// - USDC : "1234.50 USDC"
    pub fn format(&self, value: f64) -> String {
        match self {
            Currency::Ngn => format!("₦{}", format_locale(value)),
            Currency::Usdc => format!("{:.2} USDC", value),
        }
    }
}

/// Formate un nombre avec séparateur de milliers et au plus 3 décimales
///
/// CONCEPT RUST : Manipulation de String
/// - format!("{:.3}") arrondit à 3 décimales
/// - On découpe partie entière / décimale, puis on groupe par 3 chiffres
pub fn format_locale(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // -0.0001 arrondi donne "0" : pas de signe dans ce cas
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_locale() {
        assert_eq!(format_locale(0.0), "0");
        assert_eq!(format_locale(1000.0), "1,000");
        assert_eq!(format_locale(12345.67), "12,345.67");
        assert_eq!(format_locale(1234567.0), "1,234,567");
        assert_eq!(format_locale(999.0), "999");
        assert_eq!(format_locale(-2500.5), "-2,500.5");
        assert_eq!(format_locale(1.23456), "1.235");
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(Currency::Ngn.format(2150.0), "₦2,150");
        assert_eq!(Currency::Usdc.format(12.5), "12.50 USDC");
    }

    #[test]
    fn test_currency_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Usdc).unwrap(), "\"USDC\"");
        let parsed: Currency = serde_json::from_str("\"NGN\"").unwrap();
        assert_eq!(parsed, Currency::Ngn);
    }
}

// ============================================================================
// Structure : BalanceRecord
// ============================================================================
// Résultat d'une recherche de solde pour un utilisateur.
//
// CONCEPT RUST : Option<f64> pour chaque champ
// - Chaque valeur est extraite indépendamment
// - None : colonne introuvable OU cellule non numérique
// - L'UI affiche "—" pour None
// ============================================================================

use crate::models::{format_locale, SheetRow};

/// Valeurs extraites de la ligne correspondant à l'utilisateur
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRecord {
    pub balance: Option<f64>,
    pub earnings: Option<f64>,
    pub completed: Option<f64>,

    /// Ligne brute trouvée (utile pour le debug et l'affichage détaillé)
    pub row: SheetRow,
}

impl BalanceRecord {
    /// Formate une statistique pour l'affichage : "—" si absente
    pub fn format_stat(value: Option<f64>, prefix: &str) -> String {
        match value {
            Some(v) => format!("{}{}", prefix, format_locale(v)),
            None => "—".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(BalanceRecord::format_stat(Some(250.0), "$"), "$250");
        assert_eq!(BalanceRecord::format_stat(Some(1500.0), "₦"), "₦1,500");
        assert_eq!(BalanceRecord::format_stat(Some(3.0), ""), "3");
        assert_eq!(BalanceRecord::format_stat(None, "$"), "—");
    }
}

// ============================================================================
// Extraction des champs numériques
// ============================================================================
// Les cellules sont du texte libre : "₦12,345.67", "1 000", "3 quests"...
//
// Règle : on supprime tout caractère qui n'est ni un chiffre ASCII, ni '.',
// ni '-', puis on parse en f64. Tout échec (vide, "1.2.3", "-", infini)
// donne None. L'appelant choisit la valeur sentinelle (None ou 0.0).
// ============================================================================

/// Garde uniquement les chiffres, '.' et '-'
pub fn clean_numeric(cell: &str) -> String {
    cell.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Parse une cellule en nombre, None si impossible
///
/// CONCEPT RUST : Option combinators
/// - .ok() : Result<T, E> -> Option<T>
/// - .filter() : garde la valeur seulement si le prédicat est vrai
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let cleaned = clean_numeric(cell);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Variante pour une cellule éventuellement absente (ligne plus courte que l'en-tête)
pub fn parse_cell(row: &[String], index: usize) -> Option<f64> {
    row.get(index).and_then(|cell| parse_numeric(cell))
}

/// Sentinelle du leaderboard : 0.0 au lieu de None
pub fn parse_cell_or_zero(row: &[String], index: usize) -> f64 {
    parse_cell(row, index).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_with_grouping() {
        assert_eq!(parse_numeric("₦12,345.67"), Some(12345.67));
        assert_eq!(parse_numeric("$1,000"), Some(1000.0));
    }

    #[test]
    fn test_plain_and_negative() {
        assert_eq!(parse_numeric("250"), Some(250.0));
        assert_eq!(parse_numeric("-42.5"), Some(-42.5));
        assert_eq!(parse_numeric(" 3 quests "), Some(3.0));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("1.2.3"), None);
        assert_eq!(parse_numeric("10-20"), None);
    }

    #[test]
    fn test_missing_cell_defaults() {
        let row = vec!["alice".to_string(), "n/a".to_string()];
        assert_eq!(parse_cell(&row, 5), None);
        assert_eq!(parse_cell(&row, 1), None);
        assert_eq!(parse_cell_or_zero(&row, 5), 0.0);
        assert_eq!(parse_cell_or_zero(&row, 1), 0.0);
    }
}

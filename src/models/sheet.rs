// ============================================================================
// Structure : SheetRow
// ============================================================================
// Une ligne de la feuille = une suite ordonnée de cellules texte.
// Aucun schéma typé : le sens d'une cellule dépend uniquement de sa position
// et du nom de la colonne dans l'en-tête (première ligne).
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ligne brute de la feuille (la première ligne est l'en-tête)
pub type SheetRow = Vec<String>;

/// Corps de réponse du proxy en cas de succès : `{ "values": [[...]] }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetsValuesBody {
    pub values: Vec<SheetRow>,
}

/// Corps de réponse du proxy en cas d'erreur : `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetsErrorBody {
    pub error: String,
}

/// Convertit une cellule JSON quelconque en texte
///
/// Google Sheets renvoie normalement des chaînes (FORMATTED_VALUE), mais une
/// cellule peut arriver en nombre ou booléen selon les options de rendu.
pub fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(json!("alice")), "alice");
        assert_eq!(cell_to_string(json!(1000)), "1000");
        assert_eq!(cell_to_string(json!(null)), "");
        assert_eq!(cell_to_string(json!(true)), "true");
    }

    #[test]
    fn test_values_body_serialization() {
        let body = SheetsValuesBody {
            values: vec![vec!["Username".to_string()], vec!["alice".to_string()]],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, json!({ "values": [["Username"], ["alice"]] }));
    }
}

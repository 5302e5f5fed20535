// ============================================================================
// Recherche de solde (Record Matcher)
// ============================================================================
// Trouve la ligne d'un utilisateur puis en extrait solde, gains et quêtes.
//
// 1. Aucune ligne -> LookupError::NoData (sans résolution de colonnes)
// 2. Égalité exacte (trim + minuscules) dans la colonne identité si elle existe
// 3. Sinon : première ligne dont UNE cellule contient l'identifiant
// 4. Sinon -> LookupError::UserNotFound (condition utilisateur, pas une panne)
// ============================================================================

use tracing::{debug, instrument};

use crate::config::ColumnConfig;
use crate::models::{BalanceRecord, SheetRow};
use crate::resolver::columns::BalanceColumns;
use crate::resolver::numeric::parse_cell;
use crate::resolver::LookupError;

/// Cherche la ligne correspondant à `identifier` dans les lignes de données
///
/// `data` exclut l'en-tête. `identity_column` vaut None si la colonne
/// identité n'a pas été trouvée : on passe alors directement au fallback.
pub fn find_record<'a>(
    data: &'a [SheetRow],
    identifier: &str,
    identity_column: Option<usize>,
) -> Option<&'a SheetRow> {
    let needle = identifier.trim().to_lowercase();

    // CONCEPT RUST : Lifetimes
    // - La référence retournée pointe dans `data`, d'où 'a
    let exact = identity_column.and_then(|idx| {
        data.iter().find(|row| {
            row.get(idx)
                .map(|cell| cell.trim().to_lowercase() == needle)
                .unwrap_or(false)
        })
    });

    exact.or_else(|| {
        debug!("No exact match in identity column, trying substring fallback");
        data.iter()
            .find(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)))
    })
}

/// Recherche complète du solde d'un utilisateur dans les lignes brutes
#[instrument(skip(rows, columns), fields(rows = rows.len()))]
pub fn lookup_balance(
    rows: &[SheetRow],
    identifier: &str,
    columns: &ColumnConfig,
) -> Result<BalanceRecord, LookupError> {
    let (headers, data) = rows.split_first().ok_or(LookupError::NoData)?;

    let cols = BalanceColumns::resolve(headers, columns);
    debug!(?cols, "Resolved balance columns");

    let matched = find_record(data, identifier, cols.username).ok_or(LookupError::UserNotFound)?;

    let extract = |idx: Option<usize>| idx.and_then(|i| parse_cell(matched, i));

    Ok(BalanceRecord {
        balance: extract(cols.balance),
        earnings: extract(cols.earnings),
        completed: extract(cols.completed),
        row: matched.clone(),
    })
}

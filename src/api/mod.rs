// ============================================================================
// Module : api
// ============================================================================
// Ce module contient les clients HTTP :
// - sheets : API Google Sheets (utilisé par le proxy, côté serveur)
// - proxy  : notre endpoint /api/sheets (utilisé par le client TUI)
// ============================================================================

pub mod proxy;   // Client du proxy SnappQuest
pub mod sheets;  // Client API Google Sheets

// Re-export des types principaux
pub use proxy::ProxyClient;
pub use sheets::{SheetsClient, UpstreamError};

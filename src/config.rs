// ============================================================================
// Configuration
// ============================================================================
// Charge la configuration UNE seule fois au démarrage, puis l'injecte
// (proxy, client, résolveur de colonnes).
//
// Sources, par ordre de priorité :
// 1. Variables d'environnement du process
// 2. .env.local puis .env (via dotenvy, qui n'écrase jamais une variable existante)
// 3. Valeurs par défaut codées en dur
//
// Une variable vide est traitée comme absente.
// ============================================================================

use std::env;

use thiserror::Error;
use tracing::{debug, info, warn};

/// Range lu par défaut (onglet des réponses du formulaire)
pub const DEFAULT_RANGE: &str = "Form responses 3!A1:K1000";

/// Base de l'API Google Sheets v4
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Adresse du proxy vue par le client TUI
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";

/// Erreurs de configuration détectées au chargement
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Valeur invalide pour {key} : {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Noms des colonnes recherchées dans l'en-tête de la feuille
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConfig {
    /// Colonne identité pour la recherche de solde (ex: "Username")
    pub username: String,

    /// Colonne nom préférée par le leaderboard (ex: "Name")
    pub name: String,

    pub earnings: String,
    pub balance: String,

    /// Nombre de quêtes complétées, côté recherche de solde
    pub completed: String,

    /// Nombre de quêtes complétées, côté leaderboard
    pub leaderboard_completed: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            username: "Username".to_string(),
            name: "Name".to_string(),
            earnings: "Total Earnings".to_string(),
            balance: "Balance".to_string(),
            completed: "Completed Quests".to_string(),
            leaderboard_completed: "Total Quests Completed".to_string(),
        }
    }
}

/// Identifiants de l'API Google Sheets (côté serveur uniquement)
#[derive(Clone, PartialEq)]
pub struct SheetsCredentials {
    pub api_key: String,
    pub spreadsheet_id: String,
}

// La clé API ne doit jamais finir dans les logs
impl std::fmt::Debug for SheetsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsCredentials")
            .field("api_key", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .finish()
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone)]
pub struct Config {
    /// None si SHEETS_API_KEY ou SHEETS_SPREADSHEET_ID manque
    pub credentials: Option<SheetsCredentials>,

    pub default_range: String,
    pub sheets_api_base: String,
    pub proxy_url: String,
    pub port: u16,
    pub columns: ColumnConfig,
    pub currency_symbol: String,
}

impl Config {
    /// Charge la configuration depuis l'environnement (et les fichiers .env)
    pub fn load() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construit la configuration à partir d'une fonction de lookup
    ///
    /// CONCEPT RUST : Générique avec trait bound Fn
    /// - En production : lookup = env::var
    /// - En test : lookup = une HashMap, sans toucher à l'environnement global
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or_default = |key: &str, default: &str| {
            get(key).unwrap_or_else(|| {
                debug!(key, default, "Variable not set, using default");
                default.to_string()
            })
        };

        let credentials = match (get("SHEETS_API_KEY"), get("SHEETS_SPREADSHEET_ID")) {
            (Some(api_key), Some(spreadsheet_id)) => Some(SheetsCredentials {
                api_key: api_key.trim().to_string(),
                spreadsheet_id: spreadsheet_id.trim().to_string(),
            }),
            _ => {
                warn!("SHEETS_API_KEY or SHEETS_SPREADSHEET_ID missing, proxy requests will fail");
                None
            }
        };

        let port = match get("SNAPPQUEST_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SNAPPQUEST_PORT".to_string(),
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let defaults = ColumnConfig::default();
        let columns = ColumnConfig {
            username: or_default("SHEETS_USERNAME_COLUMN", &defaults.username),
            name: or_default("SHEETS_NAME_COLUMN", &defaults.name),
            earnings: or_default("SHEETS_EARNINGS_COLUMN", &defaults.earnings),
            balance: or_default("SHEETS_BALANCE_COLUMN", &defaults.balance),
            completed: or_default("SHEETS_COMPLETED_COLUMN", &defaults.completed),
            leaderboard_completed: or_default(
                "SHEETS_LEADERBOARD_COMPLETED_COLUMN",
                &defaults.leaderboard_completed,
            ),
        };

        let config = Self {
            credentials,
            default_range: or_default("SHEETS_RANGE", DEFAULT_RANGE),
            sheets_api_base: or_default("SHEETS_API_BASE", DEFAULT_SHEETS_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            proxy_url: or_default("SNAPPQUEST_PROXY_URL", DEFAULT_PROXY_URL)
                .trim_end_matches('/')
                .to_string(),
            port,
            columns,
            currency_symbol: or_default("CURRENCY_SYMBOL", DEFAULT_CURRENCY_SYMBOL),
        };

        info!(
            range = %config.default_range,
            port = config.port,
            has_credentials = config.credentials.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: None,
            default_range: DEFAULT_RANGE.to_string(),
            sheets_api_base: DEFAULT_SHEETS_API_BASE.to_string(),
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            port: DEFAULT_PORT,
            columns: ColumnConfig::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Charge .env.local puis .env s'ils existent (erreurs ignorées)
///
/// Appelé aussi avant l'init du logging pour que RUST_LOG puisse venir du .env
pub fn load_dotenv() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
}

// ============================================================================
// Tests unitaires
// ============================================================================

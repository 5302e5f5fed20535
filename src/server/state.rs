use std::sync::Arc;

use crate::{api::SheetsClient, config::Config};

pub struct State {
    pub config: Config,

    /// None tant que les identifiants Google Sheets ne sont pas configurés
    pub sheets: Option<SheetsClient>,
}

impl State {
    pub fn new(config: Config) -> Arc<Self> {
        let sheets = config
            .credentials
            .clone()
            .map(|credentials| SheetsClient::new(config.sheets_api_base.clone(), credentials));

        Arc::new(Self { config, sheets })
    }
}

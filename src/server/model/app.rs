use sea_orm::DatabaseConnection;

use crate::server::{config::DEFAULT_MAX_NUMBER_PER_PAGE, service::blacklist::gsf::GsfClient};

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub esi_client: eve_esi::Client,
    /// `None` when no GSF blacklist URL is configured
    pub gsf_client: Option<GsfClient>,
    pub max_number_per_page: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, esi_client: eve_esi::Client) -> Self {
        Self {
            db,
            esi_client,
            gsf_client: None,
            max_number_per_page: DEFAULT_MAX_NUMBER_PER_PAGE,
        }
    }

    pub fn with_gsf_client(mut self, gsf_client: GsfClient) -> Self {
        self.gsf_client = Some(gsf_client);
        self
    }

    pub fn with_max_number_per_page(mut self, max_number_per_page: u64) -> Self {
        self.max_number_per_page = max_number_per_page;
        self
    }
}

impl From<(DatabaseConnection, eve_esi::Client)> for AppState {
    fn from((db, esi_client): (DatabaseConnection, eve_esi::Client)) -> Self {
        Self::new(db, esi_client)
    }
}

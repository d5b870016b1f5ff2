//! Environment-driven application configuration.

use crate::server::error::config::ConfigError;

/// Default number of records per page for paginated endpoints.
pub const DEFAULT_MAX_NUMBER_PER_PAGE: u64 = 20;
/// Default socket address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration read from environment variables (optionally via `.env`).
#[derive(Clone, Debug)]
pub struct Config {
    /// Contact email included in the ESI user agent.
    pub contact_email: String,
    /// EVE developer application client ID.
    pub esi_client_id: String,
    /// EVE developer application client secret.
    pub esi_client_secret: String,
    /// OAuth2 callback URL registered with the EVE developer application.
    pub esi_callback_url: String,
    /// Database connection string.
    pub database_url: String,
    /// Valkey/Redis URL for the session store.
    pub valkey_url: String,
    /// GSF blacklist lookup base URL, the character ID is appended to it.
    pub gsf_blacklist_url: Option<String>,
    /// Records per page for paginated endpoints.
    pub max_number_per_page: u64,
    /// Socket address the HTTP server binds to.
    pub bind_address: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_number_per_page = match optional_var("MAX_NUMBER_PER_PAGE") {
            Some(value) => parse_page_size(&value)?,
            None => DEFAULT_MAX_NUMBER_PER_PAGE,
        };

        Ok(Self {
            contact_email: required_var("CONTACT_EMAIL")?,
            esi_client_id: required_var("ESI_CLIENT_ID")?,
            esi_client_secret: required_var("ESI_CLIENT_SECRET")?,
            esi_callback_url: required_var("ESI_CALLBACK_URL")?,
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            gsf_blacklist_url: optional_var("GSF_BLACKLIST_URL"),
            max_number_per_page,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }

    /// User agent sent with every ESI request, as CCP asks for a contact address.
    pub fn user_agent(&self) -> String {
        format!(
            "Recruit/{} ({})",
            env!("CARGO_PKG_VERSION"),
            self.contact_email
        )
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty variables are both treated as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_page_size(value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(size) if size > 0 => Ok(size),
        Ok(_) => Err(ConfigError::InvalidEnvValue {
            var: "MAX_NUMBER_PER_PAGE".to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "MAX_NUMBER_PER_PAGE".to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_page_size() {
        assert_eq!(parse_page_size("50").unwrap(), 50);
        assert_eq!(parse_page_size(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_zero_page_size() {
        assert!(matches!(
            parse_page_size("0"),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_page_size() {
        assert!(matches!(
            parse_page_size("twenty"),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
    }
}

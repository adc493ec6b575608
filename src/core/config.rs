//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Table that receives lead rows when `LEAD_STORE_TABLE` is not set
pub const DEFAULT_LEADS_TABLE: &str = "emails";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted lead store (PostgREST / Supabase project)
    /// Example: https://abcdefgh.supabase.co
    pub lead_store_url: Option<String>,

    /// API key sent as `apikey` and bearer token
    pub lead_store_key: Option<String>,

    /// Table that receives lead rows
    pub leads_table: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            lead_store_url: non_empty_var("LEAD_STORE_URL"),
            lead_store_key: non_empty_var("LEAD_STORE_KEY"),
            leads_table: non_empty_var("LEAD_STORE_TABLE")
                .unwrap_or_else(|| DEFAULT_LEADS_TABLE.to_string()),
        }
    }

    /// Check if the hosted lead store is fully configured
    pub fn has_lead_store(&self) -> bool {
        self.lead_store_url.is_some() && self.lead_store_key.is_some()
    }

    /// URL and key of the hosted lead store, if both are set
    pub fn lead_store(&self) -> Option<(&str, &str)> {
        Some((
            self.lead_store_url.as_deref()?,
            self.lead_store_key.as_deref()?,
        ))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

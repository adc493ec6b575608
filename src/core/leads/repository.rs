//! Lead repositories
//!
//! - [`PostgrestLeadRepository`] inserts rows into a hosted PostgREST table
//!   (the Supabase REST interface).
//! - [`InMemoryLeadRepository`] keeps rows in process memory. Used when no
//!   hosted store is configured and in tests.
//!
//! Neither deduplicates: submitting the same email twice stores two rows.

use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::core::config::Config;
use crate::core::error::StoreError;
use crate::core::lead::LeadRecord;

/// Request timeout for the hosted store
pub const STORE_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Insert-only storage for lead rows
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> BoxFuture<'_, Result<(), StoreError>>;
}

/// Repository backed by a PostgREST endpoint
#[derive(Debug, Clone)]
pub struct PostgrestLeadRepository {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl PostgrestLeadRepository {
    pub fn new(base_url: &str, api_key: impl Into<String>, table: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(STORE_REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.into(),
        }
    }

    /// Build from config, if the hosted store is configured
    pub fn from_config(config: &Config) -> Option<Self> {
        let (url, key) = config.lead_store()?;
        Some(Self::new(url, key, &config.leads_table))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn insert_row(&self, record: LeadRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(StoreError::network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(StoreError::rejected(status.as_u16(), message))
    }
}

impl LeadRepository for PostgrestLeadRepository {
    fn insert(&self, record: LeadRecord) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(self.insert_row(record))
    }
}

/// Repository that keeps rows in memory
#[derive(Debug, Default)]
pub struct InMemoryLeadRepository {
    records: RwLock<Vec<LeadRecord>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored rows in insertion order
    pub async fn records(&self) -> Vec<LeadRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            self.records.write().await.push(record);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> LeadRecord {
        LeadRecord {
            email: email.to_string(),
            created_at: "2025-03-01T12:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_postgrest_endpoint() {
        let repo = PostgrestLeadRepository::new("https://x.supabase.co/", "anon", "emails");
        assert_eq!(repo.endpoint(), "https://x.supabase.co/rest/v1/emails");
    }

    #[test]
    fn test_from_config_requires_store() {
        let config = Config {
            lead_store_url: Some("https://x.supabase.co".to_string()),
            lead_store_key: None,
            leads_table: "emails".to_string(),
        };
        assert!(PostgrestLeadRepository::from_config(&config).is_none());

        let config = Config {
            lead_store_key: Some("anon".to_string()),
            leads_table: "waitlist".to_string(),
            ..config
        };
        let repo = PostgrestLeadRepository::from_config(&config).unwrap();
        assert_eq!(repo.endpoint(), "https://x.supabase.co/rest/v1/waitlist");
    }

    #[tokio::test]
    async fn test_in_memory_keeps_duplicates() {
        let repo = InMemoryLeadRepository::new();
        assert!(repo.is_empty().await);

        repo.insert(record("a@b.com")).await.unwrap();
        repo.insert(record("a@b.com")).await.unwrap();

        assert_eq!(repo.len().await, 2);
        assert_eq!(repo.records().await[1].email, "a@b.com");
    }
}

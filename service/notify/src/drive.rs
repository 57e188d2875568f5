use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use domain_notify::{model::vo::DriveFolder, service::DriveService};
use serde::Deserialize;
use tokio::sync::RwLock;
use typed_builder::TypedBuilder;

/// Bearer token for the Graph API with its absolute expiry.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub secret: String,
    pub expires_at: DateTime<Utc>,
}

/// Acquires a fresh Graph access token.
#[async_trait]
pub trait AccessTokenFetcher: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<AccessToken>;
}

/// OAuth2 client-credentials grant against the Microsoft identity
/// platform.
#[derive(TypedBuilder)]
pub struct ClientCredentialsFetcher {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    #[builder(default = "https://graph.microsoft.com/.default".into(), setter(into))]
    scope: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[async_trait]
impl AccessTokenFetcher for ClientCredentialsFetcher {
    async fn fetch(&self) -> anyhow::Result<AccessToken> {
        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", &self.client_id),
                ("client_secret", &self.client_secret),
                ("scope", &self.scope),
            ])
            .send()
            .await?
            .error_for_status()?;
        let token: TokenResponse = response.json().await?;
        Ok(AccessToken {
            secret: token.access_token,
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        })
    }
}

/// Explicitly constructed token state shared by Graph callers. The only
/// way to read it is `refresh_if_expired`, so no caller can observe a
/// stale token.
pub struct GraphTokenCache {
    fetcher: Arc<dyn AccessTokenFetcher>,
    current: RwLock<Option<AccessToken>>,
    /// Tokens are treated as expired this long before their real expiry
    /// to absorb clock drift and request latency.
    skew: Duration,
}

impl GraphTokenCache {
    pub fn new(fetcher: Arc<dyn AccessTokenFetcher>) -> Self {
        Self {
            fetcher,
            current: RwLock::new(None),
            skew: Duration::seconds(60),
        }
    }

    pub async fn refresh_if_expired(&self) -> anyhow::Result<String> {
        if let Some(secret) = self.usable_token(&*self.current.read().await) {
            return Ok(secret);
        }
        let mut current = self.current.write().await;
        // Another caller may have refreshed while we waited for the
        // write lock.
        if let Some(secret) = self.usable_token(&current) {
            return Ok(secret);
        }
        let token = self.fetcher.fetch().await?;
        let secret = token.secret.clone();
        *current = Some(token);
        Ok(secret)
    }

    fn usable_token(&self, current: &Option<AccessToken>) -> Option<String> {
        current
            .as_ref()
            .filter(|token| token.expires_at - self.skew > Utc::now())
            .map(|token| token.secret.clone())
    }
}

#[derive(TypedBuilder)]
pub struct GraphDriveService {
    client: reqwest::Client,
    tokens: GraphTokenCache,
    drive_id: String,
    #[builder(default = "https://graph.microsoft.com/v1.0".into(), setter(into))]
    api_base: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveItem {
    id: String,
    web_url: Option<String>,
}

impl From<DriveItem> for DriveFolder {
    fn from(item: DriveItem) -> Self {
        Self {
            id: item.id,
            web_url: item.web_url,
        }
    }
}

#[async_trait]
impl DriveService for GraphDriveService {
    async fn ensure_folder(&self, name: &str) -> anyhow::Result<DriveFolder> {
        let token = self.tokens.refresh_if_expired().await?;
        let response = self
            .client
            .post(format!("{}/drives/{}/root/children", self.api_base, self.drive_id))
            .bearer_auth(&token)
            .json(&serde_json::json!({
                "name": name,
                "folder": {},
                "@microsoft.graph.conflictBehavior": "fail",
            }))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::CONFLICT {
            // Folder already provisioned earlier; look it up by path.
            let existing: DriveItem = self
                .client
                .get(format!("{}/drives/{}/root:/{}", self.api_base, self.drive_id, name))
                .bearer_auth(&token)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            return Ok(existing.into());
        }

        let created: DriveItem = response.error_for_status()?.json().await?;
        tracing::info!(folder = name, id = %created.id, "drive folder provisioned");
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        Fetcher {}
        #[async_trait]
        impl AccessTokenFetcher for Fetcher {
            async fn fetch(&self) -> anyhow::Result<AccessToken>;
        }
    }

    fn token(secret: &str, valid_for_secs: i64) -> AccessToken {
        AccessToken {
            secret: secret.into(),
            expires_at: Utc::now() + Duration::seconds(valid_for_secs),
        }
    }

    #[tokio::test]
    async fn a_valid_token_is_fetched_once_and_reused() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().once().returning(|| Ok(token("t-1", 3600)));
        let cache = GraphTokenCache::new(Arc::new(fetcher));

        assert_eq!(cache.refresh_if_expired().await.unwrap(), "t-1");
        assert_eq!(cache.refresh_if_expired().await.unwrap(), "t-1");
    }

    #[tokio::test]
    async fn a_token_inside_the_skew_window_is_refreshed() {
        let mut fetcher = MockFetcher::new();
        let mut tokens = vec![token("t-2", 3600), token("t-1", 30)];
        // 30 s of validity is within the 60 s skew, so the second call
        // must refresh.
        fetcher.expect_fetch().times(2).returning(move || Ok(tokens.pop().unwrap()));
        let cache = GraphTokenCache::new(Arc::new(fetcher));

        assert_eq!(cache.refresh_if_expired().await.unwrap(), "t-1");
        assert_eq!(cache.refresh_if_expired().await.unwrap(), "t-2");
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_and_leaves_no_token_behind() {
        let mut fetcher = MockFetcher::new();
        let mut outcomes: Vec<anyhow::Result<AccessToken>> =
            vec![Ok(token("t-1", 3600)), Err(anyhow::anyhow!("identity platform down"))];
        fetcher.expect_fetch().times(2).returning(move || outcomes.pop().unwrap());
        let cache = GraphTokenCache::new(Arc::new(fetcher));

        assert!(cache.refresh_if_expired().await.is_err());
        assert_eq!(cache.refresh_if_expired().await.unwrap(), "t-1");
    }
}

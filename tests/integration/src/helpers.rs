//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, seeding data, and making
//! HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use blog_api::{create_app, create_memory_app_state};
use blog_common::{AppConfig, JwtService};
use blog_core::{Group, GroupRepository, Snowflake, SnowflakeGenerator, User, UserRepository};
use blog_db::MemoryStore;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

const TEST_JWT_SECRET: &str = "integration-test-secret";

/// A seeded user and a valid access token for them
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Snowflake,
    pub username: String,
    pub token: String,
}

/// In-process server on an ephemeral port, backed by a memory store the
/// test can seed directly
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    store: MemoryStore,
    jwt: JwtService,
    ids: SnowflakeGenerator,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let store = MemoryStore::new();
        let jwt = JwtService::from_config(&config.jwt);
        let app = create_app(create_memory_app_state(config, store.clone()));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            jwt,
            // distinct worker id from the server's generator
            ids: SnowflakeGenerator::new(1023),
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    // === Seeding ===

    /// Create a user with a unique username starting with `prefix`
    pub async fn create_user(&self, prefix: &str) -> Result<TestUser> {
        let username = format!("{prefix}{}", unique_suffix());
        let user = User::new(self.ids.generate(), username.clone());
        UserRepository::create(&self.store, &user).await?;

        Ok(TestUser {
            id: user.id,
            username,
            token: self.jwt.issue_access_token(user.id)?,
        })
    }

    pub async fn create_group(&self, slug: &str) -> Result<Group> {
        let group = Group::new(self.ids.generate(), slug.to_uppercase(), slug, "");
        GroupRepository::create(&self.store, &group).await?;
        Ok(group)
    }

    // === Requests ===

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }

    /// POST without a body or credentials
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// POST without a body, as `token`
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).bearer_auth(token).send().await?)
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }
}

/// Test configuration with in-memory storage; `overrides` replace defaults
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = [
        ("API_PORT", "0"),
        ("DATABASE_URL", "memory"),
        ("JWT_SECRET", TEST_JWT_SECRET),
    ]
    .iter()
    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
    .collect();
    for (k, v) in overrides {
        vars.insert((*k).to_string(), (*v).to_string());
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

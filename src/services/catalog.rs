//! Catalog API client.
//!
//! Raw HTTP access to the catalog server. Search endpoints answer either with
//! a detail record or with a result list; detail endpoints take the path
//! found in a result list entry.

use crate::models::catalog::{Human, Movie, MovieResponse, PersonResponse};
use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Access to the catalog's search and detail endpoints.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search movies by free-text query.
    async fn search_movie(&self, query: &str) -> Result<MovieResponse>;

    /// Search people by free-text query.
    async fn search_person(&self, query: &str) -> Result<PersonResponse>;

    /// Fetch a movie detail record by its result path.
    async fn movie_detail(&self, path: &str) -> Result<Movie>;

    /// Fetch a person detail record by its result path.
    async fn person_detail(&self, path: &str) -> Result<Human>;
}

/// Catalog client over HTTP.
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    /// Create a new client for the given server.
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self, kind: &str, query: &str) -> String {
        format!(
            "{}/api/{}/search?q={}",
            self.base_url,
            kind,
            urlencoding::encode(query)
        )
    }

    fn detail_url(&self, kind: &str, path: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, kind, path.trim_start_matches('/'))
    }

    /// Check whether the server answers at all.
    pub async fn ping(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Catalog ping failed: {}", e);
                false
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Get '{}'", url);

        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(crate::Error::CatalogStatus(resp.status().as_u16()));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn search_movie(&self, query: &str) -> Result<MovieResponse> {
        self.get_json(&self.search_url("movie", query)).await
    }

    async fn search_person(&self, query: &str) -> Result<PersonResponse> {
        self.get_json(&self.search_url("human", query)).await
    }

    async fn movie_detail(&self, path: &str) -> Result<Movie> {
        self.get_json(&self.detail_url("movie", path)).await
    }

    async fn person_detail(&self, path: &str) -> Result<Human> {
        self.get_json(&self.detail_url("human", path)).await
    }
}

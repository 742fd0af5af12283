//! Shared test doubles for the catalog, downloads and the operator prompt.

#![allow(dead_code)]

use async_trait::async_trait;
use gcollect::core::assets::AssetFetcher;
use gcollect::core::cache::{KeyValueStore, Stores};
use gcollect::core::catalog::CatalogClient;
use gcollect::core::organizer::{DirectoryOrganizer, OrganizeOptions};
use gcollect::core::tagger::TagClassifier;
use gcollect::models::catalog::{Human, Movie, MovieResponse, PersonResponse};
use gcollect::services::{CatalogApi, Fetch, Prompt};
use gcollect::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory catalog answering from canned JSON payloads.
#[derive(Default)]
pub struct MockCatalog {
    movie_searches: HashMap<String, Value>,
    person_searches: HashMap<String, Value>,
    movie_details: HashMap<String, Value>,
    person_details: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie_search(mut self, query: &str, response: Value) -> Self {
        self.movie_searches.insert(query.to_string(), response);
        self
    }

    pub fn with_person_search(mut self, query: &str, response: Value) -> Self {
        self.person_searches.insert(query.to_string(), response);
        self
    }

    pub fn with_movie_detail(mut self, path: &str, response: Value) -> Self {
        self.movie_details.insert(path.to_string(), response);
        self
    }

    pub fn with_person_detail(mut self, path: &str, response: Value) -> Self {
        self.person_details.insert(path.to_string(), response);
        self
    }

    /// Number of requests served (including failed ones).
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn answer<T: DeserializeOwned>(
        &self,
        kind: &str,
        table: &HashMap<String, Value>,
        key: &str,
    ) -> Result<T> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{}:{}", kind, key));
        match table.get(key) {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Err(Error::CatalogStatus(404)),
        }
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn search_movie(&self, query: &str) -> Result<MovieResponse> {
        self.answer("movie-search", &self.movie_searches, query)
    }

    async fn search_person(&self, query: &str) -> Result<PersonResponse> {
        self.answer("person-search", &self.person_searches, query)
    }

    async fn movie_detail(&self, path: &str) -> Result<Movie> {
        self.answer("movie", &self.movie_details, path)
    }

    async fn person_detail(&self, path: &str) -> Result<Human> {
        self.answer("person", &self.person_details, path)
    }
}

/// Downloader writing the URL itself as file content.
#[derive(Default)]
pub struct MockFetcher {
    failing: HashSet<String>,
    rejecting: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make downloads of `url` fail after writing a partial file.
    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Make downloads of `url` fail without touching the destination.
    pub fn rejecting(mut self, url: &str) -> Self {
        self.rejecting.insert(url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.rejecting.contains(url) {
            return Err(Error::DownloadStatus {
                status: 404,
                url: url.to_string(),
            });
        }
        if self.failing.contains(url) {
            std::fs::write(dest, b"partial")?;
            return Err(Error::DownloadStatus {
                status: 500,
                url: url.to_string(),
            });
        }
        std::fs::write(dest, url.as_bytes())?;
        Ok(url.len() as u64)
    }
}

/// Prompt replaying scripted answers.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    asked: AtomicUsize,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn ask(&self, _prompt: &str) -> Result<String> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Prompt("no scripted answer".to_string()))
    }
}

/// Test doubles wired together.
pub struct Harness {
    pub catalog: Arc<MockCatalog>,
    pub fetcher: Arc<MockFetcher>,
    pub prompt: Arc<ScriptedPrompt>,
}

impl Harness {
    pub fn new(catalog: MockCatalog, fetcher: MockFetcher, prompt: ScriptedPrompt) -> Self {
        Self {
            catalog: Arc::new(catalog),
            fetcher: Arc::new(fetcher),
            prompt: Arc::new(prompt),
        }
    }

    pub fn catalog_client(&self) -> CatalogClient {
        let api: Arc<dyn CatalogApi> = self.catalog.clone();
        let prompt: Arc<dyn Prompt> = self.prompt.clone();
        CatalogClient::new(api, prompt)
    }

    pub fn organizer(&self, options: OrganizeOptions) -> DirectoryOrganizer {
        let fetcher: Arc<dyn Fetch> = self.fetcher.clone();
        DirectoryOrganizer::new(
            self.catalog_client(),
            AssetFetcher::new(fetcher),
            TagClassifier::default(),
            options,
        )
    }
}

/// Stores flushing into `dir`, with the given tag rules.
pub fn stores(dir: &Path, tags: &[(&str, &str)]) -> Stores {
    Stores::new(
        KeyValueStore::new(dir.join("actors.json")),
        KeyValueStore::with_entries(dir.join("tags.json"), tags.iter().copied()),
    )
}

/// Movie detail payload.
pub fn movie_json(movid: &str, actors: &[&str]) -> Value {
    json!({
        "__type__": "MovieInfo",
        "movid": movid,
        "actors": actors
            .iter()
            .map(|a| json!({"text": a, "url": format!("/human/{}", a)}))
            .collect::<Vec<_>>(),
        "director": null,
        "label": null,
        "covers": [],
        "thumb": [],
        "screenshots": [],
    })
}

/// Person detail payload.
pub fn human_json(value: &str, engname: &str) -> Value {
    json!({
        "__type__": "HumanInfo",
        "name": {"value": value, "type": "ja", "hiragana": "", "engname": engname},
        "url": format!("/human/{}", value),
    })
}

/// Search result list payload.
pub fn search_result(results: Vec<Value>) -> Value {
    json!({
        "__type__": "SearchResult",
        "url": "/search",
        "queryString": "",
        "results": results,
    })
}

/// Person entry of a search result list.
pub fn person_candidate(value: &str, engname: &str, url: &str) -> Value {
    json!({
        "name": {"value": value, "type": "ja", "hiragana": "", "engname": engname},
        "url": url,
    })
}

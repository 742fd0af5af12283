//! Catalog data model.
//!
//! Payloads returned by the catalog service. Every response carries a
//! `__type__` discriminator telling a direct detail payload apart from a
//! search result list.

use serde::{Deserialize, Serialize};

/// A text/link reference (actor credit, director, label, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Href {
    pub text: String,
    pub url: String,
}

/// Movie record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// Catalog identifier (e.g. `ABC-123`).
    pub movid: String,
    pub title: String,
    pub origtitle: String,
    pub transtitle: String,
    pub year: String,
    /// Credited actors, in credit order.
    pub actors: Vec<Href>,
    pub director: Option<Href>,
    pub label: Option<Href>,
    pub maker: String,
    /// Cover image URLs.
    pub covers: Vec<String>,
    /// Thumbnail image URLs.
    pub thumb: Vec<String>,
    /// Screenshot image URLs.
    pub screenshots: Vec<String>,
    pub url: String,
}

impl Movie {
    /// Label text used for tag lookups, falling back to the maker name.
    pub fn label_text(&self) -> Option<&str> {
        self.label
            .as_ref()
            .map(|l| l.text.trim())
            .filter(|t| !t.is_empty())
            .or_else(|| Some(self.maker.trim()).filter(|m| !m.is_empty()))
    }
}

/// Canonical name structure of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanName {
    /// Canonical name value, family name first.
    pub value: String,
    #[serde(rename = "type")]
    pub name_type: String,
    pub hiragana: String,
    /// Romanized name, family name first.
    pub engname: String,
}

/// Person record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Human {
    pub name: HumanName,
    pub url: String,
}

/// Movie entry of a search result list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieCandidate {
    pub movid: String,
    pub title: String,
    pub url: String,
}

/// Person entry of a search result list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonCandidate {
    pub name: HumanName,
    pub url: String,
}

/// Multi-result payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult<C> {
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "queryString")]
    pub query_string: String,
    #[serde(default = "Vec::new")]
    pub results: Vec<C>,
}

/// Response of the movie search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__type__")]
pub enum MovieResponse {
    #[serde(rename = "MovieInfo")]
    Detail(Movie),
    #[serde(rename = "SearchResult")]
    Results(SearchResult<MovieCandidate>),
}

/// Response of the person search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__type__")]
pub enum PersonResponse {
    #[serde(rename = "HumanInfo")]
    Detail(Human),
    #[serde(rename = "SearchResult")]
    Results(SearchResult<PersonCandidate>),
}

/// A search result entry that can be presented to the operator.
pub trait Candidate {
    /// Human-readable label shown in the disambiguation list.
    fn label(&self) -> String;

    /// Path of the detail record, relative to the detail endpoint.
    fn detail_path(&self) -> &str;
}

impl Candidate for MovieCandidate {
    fn label(&self) -> String {
        if self.title.is_empty() {
            self.movid.clone()
        } else {
            format!("{} - {}", self.movid, self.title)
        }
    }

    fn detail_path(&self) -> &str {
        &self.url
    }
}

impl Candidate for PersonCandidate {
    fn label(&self) -> String {
        if self.name.engname.is_empty() {
            self.name.value.clone()
        } else {
            format!("{} ({})", self.name.value, self.name.engname)
        }
    }

    fn detail_path(&self) -> &str {
        &self.url
    }
}

//! Catalog lookups with disambiguation.
//!
//! Wraps the raw [`CatalogApi`] so that every call produces an outcome:
//! transport and decoding failures become [`Resolution::NotFound`] and are
//! only visible in debug logs.

use crate::models::catalog::{
    Candidate, Human, Movie, MovieCandidate, MovieResponse, PersonCandidate, PersonResponse,
};
use crate::models::task::Resolution;
use crate::services::{CatalogApi, Prompt};
use std::sync::Arc;

/// Movie search outcome.
pub type MovieResolution = Resolution<Movie, MovieCandidate>;

/// Person search outcome.
pub type PersonResolution = Resolution<Human, PersonCandidate>;

/// Catalog client applying the disambiguation policy.
pub struct CatalogClient {
    api: Arc<dyn CatalogApi>,
    prompt: Arc<dyn Prompt>,
}

impl CatalogClient {
    pub fn new(api: Arc<dyn CatalogApi>, prompt: Arc<dyn Prompt>) -> Self {
        Self { api, prompt }
    }

    /// Search movies.
    pub async fn search_movie(&self, query: &str) -> MovieResolution {
        match self.api.search_movie(query).await {
            Ok(MovieResponse::Detail(movie)) => Resolution::Single(movie),
            Ok(MovieResponse::Results(list)) if list.results.is_empty() => Resolution::NotFound,
            Ok(MovieResponse::Results(list)) => Resolution::Ambiguous(list.results),
            Err(e) => {
                tracing::debug!("Movie search '{}' failed: {}", query, e);
                Resolution::NotFound
            }
        }
    }

    /// Search people.
    pub async fn search_person(&self, query: &str) -> PersonResolution {
        match self.api.search_person(query).await {
            Ok(PersonResponse::Detail(human)) => Resolution::Single(human),
            Ok(PersonResponse::Results(list)) if list.results.is_empty() => Resolution::NotFound,
            Ok(PersonResponse::Results(list)) => Resolution::Ambiguous(list.results),
            Err(e) => {
                tracing::debug!("Person search '{}' failed: {}", query, e);
                Resolution::NotFound
            }
        }
    }

    /// Fetch the detail record of a movie result.
    pub async fn movie_detail(&self, candidate: &MovieCandidate) -> Option<Movie> {
        match self.api.movie_detail(candidate.detail_path()).await {
            Ok(movie) => Some(movie),
            Err(e) => {
                tracing::debug!("Movie detail '{}' failed: {}", candidate.detail_path(), e);
                None
            }
        }
    }

    /// Fetch the detail record of a person result.
    pub async fn person_detail(&self, candidate: &PersonCandidate) -> Option<Human> {
        match self.api.person_detail(candidate.detail_path()).await {
            Ok(human) => Some(human),
            Err(e) => {
                tracing::debug!("Person detail '{}' failed: {}", candidate.detail_path(), e);
                None
            }
        }
    }

    /// Let the operator pick one of several candidates.
    ///
    /// Silent mode, an unreadable answer, a non-numeric answer or an index
    /// outside `1..=len` all yield `None`.
    pub async fn choose<'c, C: Candidate>(
        &self,
        what: &str,
        candidates: &'c [C],
        silent: bool,
    ) -> Option<&'c C> {
        if silent {
            tracing::debug!("Silent mode, not choosing among {} {}", candidates.len(), what);
            return None;
        }

        println!("We found {} {}. Please choose one.", candidates.len(), what);
        for (idx, candidate) in candidates.iter().enumerate() {
            println!("{}. {}", idx + 1, candidate.label());
        }

        let answer = match self.prompt.ask("You choose: ").await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!("Prompt failed: {}", e);
                return None;
            }
        };

        let index: usize = answer.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| candidates.get(i))
    }

    /// Find a movie by query, disambiguating result lists.
    pub async fn find_movie(&self, query: &str, silent: bool) -> Option<Movie> {
        match self.search_movie(query).await {
            Resolution::Single(movie) => Some(movie),
            Resolution::Ambiguous(candidates) => {
                let chosen = self.choose("movies", &candidates, silent).await?;
                self.movie_detail(chosen).await
            }
            Resolution::NotFound => None,
        }
    }
}

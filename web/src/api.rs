use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use trivia_core::{
    CategoryId, CategoryRecord, ProviderError, ProviderResult, RandomClue, TriviaApi,
};

pub(crate) const DEFAULT_API_BASE: &str = "http://jservice.io/api";

/// [`TriviaApi`] over `fetch`, the endpoints live under one base URL.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaApi {
    base: Rc<str>,
}

impl HttpTriviaApi {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').into(),
        }
    }

    fn random_url(&self) -> String {
        format!("{}/random", self.base)
    }

    fn category_url(&self) -> String {
        format!("{}/category", self.base)
    }

    async fn get_json<T: DeserializeOwned>(url: &str, param: (&str, String)) -> ProviderResult<T> {
        log::trace!("GET {}?{}={}", url, param.0, param.1);
        let response = Request::get(url)
            .query([param])
            .send()
            .await
            .map_err(|err| ProviderError::Unavailable(err.to_string()))?;
        if !response.ok() {
            return Err(ProviderError::Unavailable(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|err| ProviderError::InvalidContent(err.to_string()))
    }
}

impl TriviaApi for HttpTriviaApi {
    async fn random_clues(&self, count: usize) -> ProviderResult<Vec<RandomClue>> {
        Self::get_json(&self.random_url(), ("count", count.to_string())).await
    }

    async fn category(&self, id: CategoryId) -> ProviderResult<CategoryRecord> {
        Self::get_json(&self.category_url(), ("id", id.to_string())).await
    }
}

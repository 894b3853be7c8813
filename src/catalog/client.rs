/// TVMaze catalog client.
///
/// Issues the two read-only calls the widget needs: show search by query
/// term and episode listing by show id. Responses are returned as the
/// parsed JSON array, unmodified; converting records into the canonical
/// shapes is the mapper's job.
use serde_json::Value;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Errors produced by the catalog calls.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request failed at the transport level (connection, DNS, TLS)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status code
    #[error("{url} returned HTTP {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: &'static str,
    },

    /// The response body was not the expected JSON array
    #[error("failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        source: reqwest::Error,
    },
}

/// Blocking client for a TVMaze-compatible catalog API.
///
/// One outstanding request per call, no retries, no caching; a failed call
/// is reported once and requires a new user-initiated trigger.
pub struct TvMazeClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Creates a client against the public TVMaze API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Searches the catalog for shows matching the given term.
    ///
    /// Issues `GET {base}/search/shows?q={term}` and returns the raw result
    /// records. An empty array is a valid answer for a term with no matches.
    pub fn search_shows(&self, term: &str) -> Result<Vec<Value>, NetworkError> {
        let url = format!("{}/search/shows", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", term)])
            .send()
            .map_err(|e| NetworkError::Transport {
                url: url.clone(),
                source: e,
            })?;

        Self::read_records(url, response)
    }

    /// Fetches the episode list for the given show id.
    ///
    /// Issues `GET {base}/shows/{show_id}/episodes`. What an unknown id
    /// yields is up to the catalog: an empty array passes through, an error
    /// status becomes a `NetworkError::Status`.
    pub fn list_episodes(&self, show_id: u64) -> Result<Vec<Value>, NetworkError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| NetworkError::Transport {
                url: url.clone(),
                source: e,
            })?;

        Self::read_records(url, response)
    }

    /// Checks the status and parses the body as a JSON array of records.
    fn read_records(
        url: String,
        response: reqwest::blocking::Response,
    ) -> Result<Vec<Value>, NetworkError> {
        let status = response.status();

        if !status.is_success() {
            return Err(NetworkError::Status {
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown"),
            });
        }

        response
            .json()
            .map_err(|e| NetworkError::Parse { url, source: e })
    }
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::{Context, Result};
use cineshelf_model::{FilterCriteria, Genre, MovieSummary, paging, query};
use reqwest::{Client, StatusCode};

use crate::routes;

/// One page of filter results together with the derived page count.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub movies: Vec<MovieSummary>,
    pub total_pages: u32,
}

/// HTTP client for the catalog API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self { client, base_url }
    }

    /// Build a full API URL.
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.trim_end_matches('/'),
            routes::API_BASE,
            path
        )
    }

    /// Fetch the full genre list. Invoked once at startup to populate the
    /// selector options.
    pub async fn fetch_all_genres(&self) -> Result<Vec<Genre>> {
        let url = self.build_url(routes::genres::ALL);
        log::debug!("[ApiClient] GET {url}");

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(request_failed(status, response).await),
        }
    }

    /// Run a filtered catalog search.
    ///
    /// The result page comes from the body; the page count is derived from
    /// the `totalamountofrecords` response header and the criteria's page
    /// size.
    pub async fn search_movies(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<SearchPage> {
        let url = format!(
            "{}?{}",
            self.build_url(routes::movies::FILTER),
            query::encode(criteria)
        );
        log::debug!("[ApiClient] GET {url}");

        let response = self.client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            let status = response.status();
            return Err(request_failed(status, response).await);
        }

        let total_records: u64 = response
            .headers()
            .get(routes::TOTAL_RECORDS_HEADER)
            .with_context(|| {
                format!(
                    "response is missing the `{}` header",
                    routes::TOTAL_RECORDS_HEADER
                )
            })?
            .to_str()
            .context("record total header is not valid UTF-8")?
            .trim()
            .parse()
            .context("record total header is not an integer")?;

        let movies: Vec<MovieSummary> = response.json().await?;

        Ok(SearchPage {
            movies,
            total_pages: paging::total_pages(
                total_records,
                criteria.records_per_page,
            ),
        })
    }
}

async fn request_failed(
    status: StatusCode,
    response: reqwest::Response,
) -> anyhow::Error {
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    anyhow::anyhow!("Request failed with status {status}: {error_text}")
}

use std::time::Duration;

use chrono::NaiveDate;
use image::DynamicImage;
use serde::{Deserialize, Deserializer};

use crate::config::Config;
use crate::error::FetchError;

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

impl Movie {
    pub fn rating_label(&self) -> String {
        format!("{:.1}/10", self.vote_average)
    }

    pub fn release_label(&self) -> String {
        self.release_date
            .map(|date| date.format("%-d %B %Y").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn release_year(&self) -> Option<String> {
        self.release_date.map(|date| date.format("%Y").to_string())
    }

    /// Image for the detail overlay: the full-size backdrop, or the poster
    /// when the movie has no backdrop.
    pub fn detail_image_url(&self) -> String {
        match self.backdrop_path.as_deref().filter(|p| !p.is_empty()) {
            Some(backdrop) => image_url(Some(backdrop), ImageSize::Original),
            None => image_url(self.poster_path.as_deref(), ImageSize::W500),
        }
    }
}

/// TMDB sends `""` for movies without a known release date. Anything else
/// that isn't `YYYY-MM-DD` is also treated as unknown so one bad record
/// doesn't fail the whole page.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                tracing::warn!(value, "unparsable release date");
                Ok(None)
            }
        },
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SearchResponse {
    #[allow(dead_code)]
    page: u32,
    results: Vec<Movie>,
    total_pages: u32,
    #[allow(dead_code)]
    total_results: u32,
}

/// One page of search results as the orchestrator sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub movies: Vec<Movie>,
    pub total_pages: u32,
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            movies: response.results,
            total_pages: response.total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    #[default]
    W500,
    Original,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Full CDN URL for an image path, or the placeholder when there is none.
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path),
        None => PLACEHOLDER_IMAGE_URL.to_string(),
    }
}

/// Where movies come from. Implemented by [`TmdbClient`] and by test doubles.
///
/// Implementations are called from worker threads.
pub trait MovieSource: Send + Sync {
    fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, FetchError>;

    fn fetch_image(&self, url: &str) -> Result<DynamicImage, FetchError>;
}

pub struct TmdbClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        })
    }

    fn search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/search/movie?query={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            page
        )
    }
}

impl MovieSource for TmdbClient {
    /// Searches TMDB movies by title.
    fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, FetchError> {
        let token = self.token.as_deref().ok_or_else(FetchError::missing_token)?;

        if query.is_empty() {
            return Ok(SearchPage::default());
        }

        tracing::debug!(query = %query, page, "searching TMDB movies");

        let response = self
            .http
            .get(self.search_url(query, page))
            .bearer_auth(token)
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body: SearchResponse = response.json()?;
        tracing::debug!(
            query = %query,
            page,
            results = body.results.len(),
            total_pages = body.total_pages,
            "TMDB search complete"
        );

        Ok(body.into())
    }

    /// Downloads and decodes an image for rendering.
    fn fetch_image(&self, url: &str) -> Result<DynamicImage, FetchError> {
        let response = self.http.get(url).send()?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let bytes = response.bytes()?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens here, so any request that is actually sent fails
    // with a network error rather than the errors asserted below.
    fn client(token: Option<&str>) -> TmdbClient {
        let config = Config {
            api_token: token.map(str::to_string),
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        TmdbClient::new(&config).expect("client builds")
    }

    #[test]
    fn image_url_uses_placeholder_without_path() {
        assert_eq!(image_url(None, ImageSize::W500), PLACEHOLDER_IMAGE_URL);
        assert_eq!(image_url(Some(""), ImageSize::Original), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn image_url_composes_cdn_size_and_path() {
        assert_eq!(
            image_url(Some("/abc.jpg"), ImageSize::W500),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            image_url(Some("/abc.jpg"), ImageSize::Original),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert_eq!(ImageSize::default(), ImageSize::W500);
    }

    #[test]
    fn missing_token_fails_before_any_request() {
        let err = client(None).search_movies("matrix", 1).unwrap_err();
        assert!(err.is_configuration(), "unexpected error: {err}");
    }

    #[test]
    fn empty_query_returns_empty_page_without_request() {
        let page = client(Some("token")).search_movies("", 1).expect("no request made");
        assert_eq!(page, SearchPage::default());
    }

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            client(Some("token")).search_url("the matrix & co", 2),
            "http://127.0.0.1:9/search/movie?query=the%20matrix%20%26%20co&page=2"
        );
    }

    #[test]
    fn decodes_search_response() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 603,
                    "title": "The Matrix",
                    "overview": "A hacker learns the truth.",
                    "release_date": "1999-03-31",
                    "vote_average": 8.217,
                    "poster_path": "/p.jpg",
                    "backdrop_path": null,
                    "popularity": 80.1
                },
                {
                    "id": 1,
                    "title": "Untitled",
                    "release_date": "",
                    "vote_average": 0,
                    "poster_path": null,
                    "backdrop_path": null
                }
            ],
            "total_pages": 5,
            "total_results": 93
        }"#;

        let page: SearchPage = serde_json::from_str::<SearchResponse>(json).unwrap().into();
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.movies.len(), 2);

        let matrix = &page.movies[0];
        assert_eq!(matrix.release_date, NaiveDate::from_ymd_opt(1999, 3, 31));
        assert_eq!(matrix.rating_label(), "8.2/10");
        assert_eq!(matrix.release_label(), "31 March 1999");
        assert_eq!(matrix.backdrop_path, None);

        assert_eq!(matrix.detail_image_url(), "https://image.tmdb.org/t/p/w500/p.jpg");

        let untitled = &page.movies[1];
        assert_eq!(untitled.release_date, None);
        assert_eq!(untitled.overview, "");
        assert_eq!(untitled.release_label(), "Unknown");
        assert_eq!(untitled.rating_label(), "0.0/10");
        assert_eq!(untitled.detail_image_url(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn malformed_release_date_keeps_the_rest_of_the_page() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-31",
                 "vote_average": 8.2, "poster_path": null, "backdrop_path": "/b.jpg"},
                {"id": 604, "title": "Reloaded", "release_date": "1999",
                 "vote_average": 7.0, "poster_path": null, "backdrop_path": null}
            ],
            "total_pages": 1,
            "total_results": 2
        }"#;

        let page: SearchPage = serde_json::from_str::<SearchResponse>(json)
            .expect("page decodes despite one bad date")
            .into();
        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.movies[0].release_date, NaiveDate::from_ymd_opt(1999, 3, 31));
        assert_eq!(page.movies[1].release_date, None);
        assert_eq!(page.movies[1].release_label(), "Unknown");
        assert_eq!(
            page.movies[0].detail_image_url(),
            "https://image.tmdb.org/t/p/original/b.jpg"
        );
    }
}

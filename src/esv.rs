//! Passage retrieval from the ESV API (<https://api.esv.org>).

use crate::error::SlidesError;
use crate::passage::Passage;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.esv.org/v3/passage/text/";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct PassageResponse {
    #[serde(default)]
    passages: Vec<String>,
    #[serde(default)]
    passage_meta: Vec<PassageMeta>,
}

#[derive(Debug, Deserialize)]
struct PassageMeta {
    canonical: Option<String>,
}

/// Raw passage text as returned by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPassage {
    /// The API's canonical form of the reference, e.g. `John 3:16–21`
    pub reference: String,
    pub text: String,
}

impl FetchedPassage {
    pub fn into_passage(self, indent_unit: usize) -> Passage {
        Passage::parse(self.reference, &self.text, indent_unit)
    }
}

pub struct EsvClient {
    client: Client,
    endpoint: String,
    api_key: String,
    include_headings: bool,
}

impl EsvClient {
    pub fn new<E: Into<String>, K: Into<String>>(
        endpoint: E,
        api_key: K,
        include_headings: bool,
    ) -> Result<EsvClient, SlidesError> {
        let client = Client::builder().timeout(TIMEOUT).build()?;
        Ok(EsvClient {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            include_headings,
        })
    }

    /// Query parameters for one reference. Verse numbers come back as `[n]`
    /// markers and poetry as indented lines; the API does no wrapping of its own.
    pub fn query(&self, reference: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", reference.to_string()),
            ("include-passage-references", "false".to_string()),
            ("include-verse-numbers", "true".to_string()),
            ("include-first-verse-numbers", "true".to_string()),
            ("include-footnotes", "false".to_string()),
            ("include-headings", self.include_headings.to_string()),
            ("include-short-copyright", "false".to_string()),
            ("indent-paragraphs", "0".to_string()),
            ("indent-poetry", "true".to_string()),
            ("indent-poetry-lines", "2".to_string()),
            ("line-length", "0".to_string()),
        ]
    }

    pub fn fetch(&self, reference: &str) -> Result<FetchedPassage, SlidesError> {
        info!("fetching passage: {reference}");
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("Token {}", self.api_key))
            .query(&self.query(reference))
            .send()
            .map_err(request_error)?;

        let status = response.status().as_u16();
        debug!("API response status: {status}");
        let body = response.text().map_err(request_error)?;
        let passage = parse_response(reference, status, &body)?;
        info!("fetched passage: {}", passage.reference);
        Ok(passage)
    }
}

fn request_error(err: reqwest::Error) -> SlidesError {
    if err.is_timeout() {
        SlidesError::Api("ESV API request timed out, please try again".to_string())
    } else if err.is_connect() {
        SlidesError::Api(
            "can't connect to the ESV API, check your internet connection and try again"
                .to_string(),
        )
    } else {
        SlidesError::Http(err)
    }
}

/// Interpret an API response for `requested`
pub fn parse_response(
    requested: &str,
    status: u16,
    body: &str,
) -> Result<FetchedPassage, SlidesError> {
    match status {
        200 => {}
        401 => {
            return Err(SlidesError::Api(
                "ESV API key is invalid, please check the key in your config file".to_string(),
            ))
        }
        429 => {
            return Err(SlidesError::Api(
                "ESV API rate limit reached, please wait a few minutes and try again".to_string(),
            ))
        }
        status => {
            debug!("API error body: {body}");
            return Err(SlidesError::Api(format!("ESV API error: {status}")));
        }
    }

    let response: PassageResponse = serde_json::from_str(body)?;
    let text = match response.passages.into_iter().next() {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            return Err(SlidesError::Api(format!(
                "ESV API returned no text for `{requested}`, this may be an invalid reference"
            )))
        }
    };

    let reference = response
        .passage_meta
        .into_iter()
        .next()
        .and_then(|meta| meta.canonical)
        .unwrap_or_else(|| requested.to_string());

    Ok(FetchedPassage { reference, text })
}

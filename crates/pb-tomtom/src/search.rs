use crate::{api_interfaces::search, util::default_http_client, ApiKey};

use crate::constants::{DEFAULT_SEARCH_SERVICE_URL, RESULT_LIMIT};
use crate::error::{ConfigError, GetError};
use serde::Serialize;
use tracing::error;
use url::Url;

/// A single fuzzy-search request: an API key plus the free-text address.
#[derive(Clone, Debug)]
pub struct Query {
    pub api_key: ApiKey,
    pub address: String,
}

impl Query {
    pub fn new(api_key: ApiKey, address: &str) -> Self {
        Self {
            api_key,
            address: address.to_owned(),
        }
    }

    /// Both fields must be non-empty before a request goes out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.address.is_empty() {
            return Err(ConfigError::MissingAddress);
        }
        Ok(())
    }
}

/// A place record normalized from the provider's response.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub place_id: String,
    pub street_number: Option<String>,
    pub country_code: String,
    pub country: String,
    pub freeform_address: String,
    pub municipality: Option<String>,
}

impl From<search::Place> for Place {
    fn from(raw: search::Place) -> Self {
        Self {
            place_id: raw.id,
            street_number: raw.address.street_number,
            country_code: raw.address.country_code.unwrap_or_default(),
            country: raw.address.country.unwrap_or_default(),
            freeform_address: raw.address.freeform_address.unwrap_or_default(),
            municipality: raw.address.municipality,
        }
    }
}

/// Places returned for one search, in provider order.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Places(Vec<Place>);

impl Places {
    /// Search with the default HTTP client and endpoint.
    pub async fn get(query: &Query) -> Result<Self, ConfigError> {
        let client = default_http_client();
        Self::get_custom(query, &client, None).await
    }

    /// Search with a custom HTTP client and endpoint.
    ///
    /// Transport failures are logged and returned as an empty result, so a
    /// caller cannot tell "no matches" from "provider unreachable" here; use
    /// [`Places::get_outcome_custom`] to observe the cause.
    pub async fn get_custom(
        query: &Query,
        client: &reqwest::Client,
        endpoint: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let outcome = Self::get_outcome_custom(query, client, endpoint).await?;
        if let Outcome::Degraded(cause) = &outcome {
            error!("Error fetching autocomplete data: {cause}");
        }
        Ok(outcome.into_places())
    }

    /// Search, reporting a transport failure as [`Outcome::Degraded`]
    /// instead of logging it away.
    pub async fn get_outcome_custom(
        query: &Query,
        client: &reqwest::Client,
        endpoint: Option<&str>,
    ) -> Result<Outcome, ConfigError> {
        query.validate()?;
        match fetch(query, client, endpoint).await {
            Ok(places) => Ok(Outcome::Fetched(places)),
            Err(cause) => Ok(Outcome::Degraded(cause)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.0.iter()
    }
}

impl IntoIterator for Places {
    type Item = Place;
    type IntoIter = std::vec::IntoIter<Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Place> for Places {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of a search exchange. The public getters flatten `Degraded` into
/// an empty result for compatibility; the cause stays inspectable here.
#[derive(Debug)]
pub enum Outcome {
    /// The provider answered; records mapped as returned.
    Fetched(Places),
    /// The exchange failed; stands in for an empty result.
    Degraded(GetError),
}

impl Outcome {
    pub fn into_places(self) -> Places {
        match self {
            Outcome::Fetched(places) => places,
            Outcome::Degraded(_) => Places::default(),
        }
    }
}

/// The address travels as a path segment, so it gets percent-encoded here.
fn search_url(endpoint: &str, address: &str) -> Result<Url, GetError> {
    let mut url = Url::parse(endpoint)?;
    url.path_segments_mut()
        .map_err(|()| GetError::EndpointNotABase)?
        .pop_if_empty()
        .push(&format!("{address}.json"));
    Ok(url)
}

async fn fetch(
    query: &Query,
    client: &reqwest::Client,
    endpoint: Option<&str>,
) -> Result<Places, GetError> {
    let url = search_url(
        endpoint.unwrap_or(DEFAULT_SEARCH_SERVICE_URL),
        &query.address,
    )?;
    let response = client
        .get(url)
        .query(&[("key", query.api_key.get())])
        .query(&[("limit", RESULT_LIMIT)])
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(GetError::ResponseError(response.status()));
    }
    let body = response.text().await.map_err(GetError::ResponseBodyError)?;
    let parsed: search::Response = serde_json::from_str(&body)?;
    Ok(Places(parsed.results.into_iter().map(Place::from).collect()))
}

mod api_interfaces;
mod api_key;
pub mod constants;
pub mod error;
pub mod search;
mod util;

pub use api_key::ApiKey;
pub use search::{Outcome, Place, Places, Query};

use thiserror::Error;
use url::Url;

use crate::error::ConfigError;

/// Facade over the search client: holds the injected transport, an optional
/// endpoint override, and the credential, and narrows search results to
/// Australian addresses.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    endpoint: Option<String>,
    api_key: ApiKey,
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl Client {
    pub fn new(
        http_client: reqwest::Client,
        endpoint: Option<String>,
        api_key: ApiKey,
    ) -> Result<Self, ClientInitError> {
        if let Some(endpoint) = &endpoint {
            Url::parse(endpoint)?;
        }
        Ok(Self {
            http_client,
            endpoint,
            api_key,
        })
    }

    /// Search for an address and keep only Australian matches, in provider
    /// order.
    ///
    /// Fails only when the held key or the address is empty; a transport
    /// failure surfaces as an empty result.
    pub async fn autocomplete_details(&self, address: &str) -> Result<Places, ConfigError> {
        let query = Query::new(self.api_key.clone(), address);
        let places =
            Places::get_custom(&query, &self.http_client, self.endpoint.as_deref()).await?;
        Ok(australian_only(places))
    }
}

fn australian_only(places: Places) -> Places {
    places
        .into_iter()
        .filter(|place| place.country_code == "AU")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const FAKE_API_KEY: &str = "fake-api-key";

    fn fake_client(endpoint: String) -> Client {
        Client::new(
            reqwest::Client::new(),
            Some(endpoint),
            ApiKey::from_raw(FAKE_API_KEY),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn autocomplete_details_maps_fields() {
        // Arrange
        let server = MockServer::start_async().await;
        let response_json = json!({
            "results": [
                {
                    "id": "123456",
                    "address": {
                        "streetNumber": "789",
                        "countryCode": "AU",
                        "country": "Australia",
                        "freeformAddress": "89 Charlotte Street, Brisbane City QLD 4000",
                        "municipality": "Brisbane City, QLD"
                    }
                }
            ]
        });
        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/Charlotte.json")
                    .query_param("key", FAKE_API_KEY)
                    .query_param("limit", "100");
                then.status(200).json_body(response_json);
            })
            .await;
        let client = fake_client(server.url("/"));

        // Act
        let places = client.autocomplete_details("Charlotte").await;

        // Assert
        let places = places.unwrap();
        assert_eq!(places.len(), 1);
        let place = places.iter().next().unwrap();
        assert_eq!(place.place_id, "123456");
        assert_eq!(place.street_number.as_deref(), Some("789"));
        assert_eq!(place.country_code, "AU");
        assert_eq!(place.country, "Australia");
        assert_eq!(
            place.freeform_address,
            "89 Charlotte Street, Brisbane City QLD 4000"
        );
        assert_eq!(place.municipality.as_deref(), Some("Brisbane City, QLD"));
        search_mock.assert();
    }

    #[tokio::test]
    async fn autocomplete_details_filters_to_australia() {
        // Arrange
        let server = MockServer::start_async().await;
        let response_json = json!({
            "results": [
                {
                    "id": "123456",
                    "address": {
                        "streetNumber": "789",
                        "countryCode": "AU",
                        "country": "Australia",
                        "freeformAddress": "89 Charlotte Street, Brisbane City QLD 4000",
                        "municipality": "Brisbane City, QLD"
                    }
                },
                {
                    "id": "654321",
                    "address": {
                        "streetNumber": "600",
                        "countryCode": "US",
                        "country": "United States",
                        "freeformAddress": "600 Charlotte Street, Sylacauga, AL 35150",
                        "municipality": "Sylacauga"
                    }
                }
            ]
        });
        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/Charlotte.json");
                then.status(200).json_body(response_json);
            })
            .await;
        let client = fake_client(server.url("/"));

        // Act
        let places = client.autocomplete_details("Charlotte").await;

        // Assert
        let places = places.unwrap();
        assert_eq!(places.len(), 1);
        let place = places.iter().next().unwrap();
        assert_eq!(place.place_id, "123456");
        assert_eq!(place.country_code, "AU");
        search_mock.assert();
    }

    #[tokio::test]
    async fn autocomplete_details_missing_key() {
        // Arrange
        let client =
            Client::new(reqwest::Client::new(), None, ApiKey::from_raw("")).unwrap();

        // Act
        let places = client.autocomplete_details("Charlotte").await;

        // Assert
        assert_eq!(places.unwrap_err(), ConfigError::MissingApiKey);
    }

    #[tokio::test]
    async fn autocomplete_details_missing_address() {
        // Arrange
        let client =
            Client::new(reqwest::Client::new(), None, ApiKey::from_raw(FAKE_API_KEY)).unwrap();

        // Act
        let places = client.autocomplete_details("").await;

        // Assert
        assert_eq!(places.unwrap_err(), ConfigError::MissingAddress);
    }

    #[tokio::test]
    async fn autocomplete_details_unreachable_provider_is_empty() {
        // Arrange
        let client = fake_client("http://test.invalid".to_string());

        // Act
        let places = client.autocomplete_details("Charlotte").await;

        // Assert
        assert!(places.unwrap().is_empty());
    }

    #[test]
    fn new_rejects_invalid_endpoint() {
        // Act
        let client = Client::new(
            reqwest::Client::new(),
            Some("not a url".to_string()),
            ApiKey::from_raw(FAKE_API_KEY),
        );

        // Assert
        assert!(matches!(
            client.unwrap_err(),
            ClientInitError::InvalidEndpoint(_)
        ));
    }
}

/// The default endpoint for the TomTom fuzzy search service
pub const DEFAULT_SEARCH_SERVICE_URL: &str = "https://api.tomtom.com/search/2/search";

/// The environment variable the API key is read from
pub const API_KEY_ENV_VAR: &str = "TOMTOM_API_KEY";

/// The number of results requested per search; excess results are not paged
pub const RESULT_LIMIT: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_service_url_parses() {
        assert!(url::Url::parse(DEFAULT_SEARCH_SERVICE_URL).is_ok());
    }
}

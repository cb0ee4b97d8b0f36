use serde::Deserialize;

/// Raw response from the fuzzy search service.
#[derive(Deserialize)]
pub struct Response {
    /// Absent when the provider has nothing to report; treated as empty.
    #[serde(default)]
    pub results: Vec<Place>,
}

/// Raw place record from the API. Fields the provider sends beyond these
/// are discarded at deserialization.
#[derive(Deserialize)]
pub struct Place {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub address: Address,
}

/// Raw address data from the API.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_number: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub freeform_address: Option<String>,
    pub municipality: Option<String>,
}

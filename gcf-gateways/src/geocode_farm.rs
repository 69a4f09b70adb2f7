use gcf_core::{
    entities::{Bounds, Coordinates, Degrees, LookupOptions, NormalizedAddress},
    gateways::{geocode::GeocodeProvider, http::HttpAdapter},
    validate, Error, Result,
};
use serde::Deserialize;
use url::Url;

pub const NAME: &str = "geocode_farm";

pub const DEFAULT_BASE_URL: &str = "https://www.geocode.farm";

const DEFAULT_COUNTRY: &str = "us";
const DEFAULT_LANGUAGE: &str = "en";

const FORWARD_PATH: &str = "v3/json/forward/";
const REVERSE_PATH: &str = "v3/json/reverse/";

// Only the first candidate is ever used
const RESULT_COUNT: &str = "1";

const STATUS_ACCESS_DENIED: &str = "FAILED, ACCESS_DENIED";
const STATUS_NO_RESULTS: &str = "FAILED, NO_RESULTS";

/// The forward and reverse geocoding endpoints of Geocode.Farm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    forward: Url,
    reverse: Url,
}

impl Endpoints {
    pub fn try_new(base_url: &str) -> std::result::Result<Self, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let forward = base.join(FORWARD_PATH)?;
        let reverse = base.join(REVERSE_PATH)?;
        Ok(Self { forward, reverse })
    }

    pub fn forward(&self) -> &Url {
        &self.forward
    }

    pub fn reverse(&self) -> &Url {
        &self.reverse
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::try_new(DEFAULT_BASE_URL).expect("Default Geocode.Farm endpoints")
    }
}

/// Geocoding with [Geocode.Farm](https://www.geocode.farm).
///
/// The service cannot geocode IP addresses.
/// An API key is optional: without one the free tier is used.
#[derive(Debug, Clone)]
pub struct GeocodeFarm<A> {
    adapter: A,
    api_key: Option<String>,
    locale: Option<String>,
    endpoints: Endpoints,
}

impl<A> GeocodeFarm<A>
where
    A: HttpAdapter,
{
    pub fn try_new(adapter: A, api_key: Option<String>, locale: Option<String>) -> Result<Self> {
        let api_key = validate::api_key(api_key)?;
        Ok(Self {
            adapter,
            api_key,
            locale,
            endpoints: Endpoints::default(),
        })
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    fn country<'a>(&self, options: &'a LookupOptions) -> &'a str {
        options.country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    fn language<'a>(&'a self, options: &'a LookupOptions) -> &'a str {
        options
            .language
            .as_deref()
            .or(self.locale.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    fn forward_url(&self, address: &str, options: &LookupOptions) -> Url {
        let mut url = self.endpoints.forward.clone();
        url.query_pairs_mut()
            .append_pair("addr", address)
            .append_pair("country", self.country(options))
            .append_pair("lang", self.language(options))
            .append_pair("count", RESULT_COUNT)
            .append_pair("key", self.api_key.as_deref().unwrap_or_default());
        url
    }

    fn reverse_url(&self, pos: Coordinates, options: &LookupOptions) -> Url {
        let mut url = self.endpoints.reverse.clone();
        url.query_pairs_mut()
            .append_pair("lat", &format!("{:.6}", pos.lat()))
            .append_pair("lon", &format!("{:.6}", pos.lng()))
            .append_pair("country", self.country(options))
            .append_pair("lang", self.language(options))
            .append_pair("count", RESULT_COUNT)
            .append_pair("key", self.api_key.as_deref().unwrap_or_default());
        url
    }

    fn execute_query(&self, url: &Url, query: &str) -> Result<NormalizedAddress> {
        let content = self
            .adapter
            .get_content(url.as_str())?
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                Error::UnsupportedOperation(format!(
                    "Could not execute query {}",
                    redact_api_key(url)
                ))
            })?;
        let response: Response = serde_json::from_str(&content)
            .map_err(|err| Error::InvalidResponse(err.to_string()))?;
        let GeocodingResults { status, results } = response.geocoding_results;
        // Any other status is treated as success
        match status.status.as_str() {
            STATUS_ACCESS_DENIED => {
                return Err(Error::QuotaExceeded(status.access.unwrap_or_default()));
            }
            STATUS_NO_RESULTS => {
                return Err(Error::NoResult(query.to_owned()));
            }
            _ => {}
        }
        results
            .into_iter()
            .next()
            .map(NormalizedAddress::from)
            .ok_or_else(|| Error::NoResult(query.to_owned()))
    }
}

impl<A> GeocodeProvider for GeocodeFarm<A>
where
    A: HttpAdapter,
{
    fn name(&self) -> &'static str {
        NAME
    }

    fn geocode(&self, address: &str, options: &LookupOptions) -> Result<NormalizedAddress> {
        validate::address("GeocodeFarm", address)?;
        let url = self.forward_url(address, options);
        log::debug!("Geocoding address '{address}': {}", redact_api_key(&url));
        self.execute_query(&url, address)
    }

    fn reverse(&self, pos: Coordinates, options: &LookupOptions) -> Result<NormalizedAddress> {
        let url = self.reverse_url(pos, options);
        log::debug!("Reverse geocoding position {pos}: {}", redact_api_key(&url));
        self.execute_query(&url, &pos.to_string())
    }
}

fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" && !value.is_empty() {
                "***".to_owned()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

#[derive(Debug, Deserialize)]
struct Response {
    geocoding_results: GeocodingResults,
}

#[derive(Debug, Deserialize)]
struct GeocodingResults {
    #[serde(rename = "STATUS")]
    status: Status,
    #[serde(rename = "RESULTS", default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct Status {
    status: String,
    access: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    formatted_address: Option<Scalar>,
    #[serde(rename = "ADDRESS")]
    address: Option<Address>,
    #[serde(rename = "COORDINATES")]
    coordinates: Option<LatLon>,
    #[serde(rename = "BOUNDARIES")]
    boundaries: Option<Boundaries>,
    #[serde(rename = "LOCATION_DETAILS")]
    location_details: Option<LocationDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    street_number: Option<Scalar>,
    street_name: Option<Scalar>,
    locality: Option<Scalar>,
    admin_2: Option<Scalar>,
    admin_1: Option<Scalar>,
    postal_code: Option<Scalar>,
    country: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
struct LatLon {
    latitude: Option<Scalar>,
    longitude: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
struct Boundaries {
    northeast_latitude: Option<Scalar>,
    northeast_longitude: Option<Scalar>,
    southwest_latitude: Option<Scalar>,
    southwest_longitude: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
struct LocationDetails {
    timezone_short: Option<Scalar>,
}

/// A string or number value, kept verbatim.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl From<Scalar> for String {
    fn from(from: Scalar) -> Self {
        match from {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
        }
    }
}

fn text(value: Option<Scalar>) -> Option<String> {
    value.map(String::from)
}

fn degrees(value: Option<Scalar>) -> Option<Degrees> {
    value.map(String::from).map(Degrees::new)
}

impl Boundaries {
    /// Only complete boundaries are usable.
    fn into_bounds(self) -> Option<Bounds> {
        let Self {
            northeast_latitude,
            northeast_longitude,
            southwest_latitude,
            southwest_longitude,
        } = self;
        Some(Bounds {
            south: degrees(southwest_latitude)?,
            west: degrees(southwest_longitude)?,
            north: degrees(northeast_latitude)?,
            east: degrees(northeast_longitude)?,
        })
    }
}

impl From<GeocodingResult> for NormalizedAddress {
    fn from(from: GeocodingResult) -> Self {
        let GeocodingResult {
            formatted_address,
            address,
            coordinates,
            boundaries,
            location_details,
        } = from;
        let Address {
            street_number,
            street_name,
            locality,
            admin_2,
            admin_1,
            postal_code,
            country,
        } = address.unwrap_or_default();
        let LatLon {
            latitude,
            longitude,
        } = coordinates.unwrap_or_default();
        Self {
            latitude: degrees(latitude),
            longitude: degrees(longitude),
            bounds: boundaries.and_then(Boundaries::into_bounds),
            street_number: text(street_number),
            street_name: text(street_name),
            city: text(locality),
            zipcode: text(postal_code),
            county: text(admin_2),
            region_code: text(admin_1),
            country: text(country),
            timezone: location_details.and_then(|details| text(details.timezone_short)),
            formatted_address: text(formatted_address),
        }
    }
}

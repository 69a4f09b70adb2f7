use gcf_entities::{address::NormalizedAddress, geo};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub bounds: Option<Bounds>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub county: Option<String>,
    pub region_code: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Bounds {
    pub south: String,
    pub west: String,
    pub north: String,
    pub east: String,
}

impl From<geo::Bounds> for Bounds {
    fn from(from: geo::Bounds) -> Self {
        let geo::Bounds {
            south,
            west,
            north,
            east,
        } = from;
        Self {
            south: south.to_string(),
            west: west.to_string(),
            north: north.to_string(),
            east: east.to_string(),
        }
    }
}

impl From<NormalizedAddress> for Address {
    fn from(from: NormalizedAddress) -> Self {
        let NormalizedAddress {
            latitude,
            longitude,
            bounds,
            street_number,
            street_name,
            city,
            zipcode,
            county,
            region_code,
            country,
            timezone,
            formatted_address,
        } = from;
        Self {
            latitude: latitude.map(|deg| deg.to_string()),
            longitude: longitude.map(|deg| deg.to_string()),
            bounds: bounds.map(Into::into),
            street_number,
            street_name,
            city,
            zipcode,
            county,
            region_code,
            country,
            timezone,
            formatted_address,
        }
    }
}

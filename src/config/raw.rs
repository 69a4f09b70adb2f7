use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("geocodefarm.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub http: Option<Http>,
    pub lookup: Option<Lookup>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Http {
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Http {
    fn default() -> Self {
        Config::default().http.expect("HTTP configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Lookup {
    pub locale: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub geocode_farm: Option<GeocodeFarm>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeocodeFarm {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Default for GeocodeFarm {
    fn default() -> Self {
        Gateway::default()
            .geocode_farm
            .expect("Geocode.Farm gateway configuration")
    }
}

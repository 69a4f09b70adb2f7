use anyhow::{anyhow, Result};
use gcf_gateways::geocode_farm::{Endpoints, DEFAULT_BASE_URL};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geocodefarm.toml";

const ENV_NAME_API_KEY: &str = "GEOCODEFARM_API_KEY";

pub struct Config {
    pub http: Http,
    pub lookup: Lookup,
    pub geocode_farm: GeocodeFarm,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Some(api_key) = env::var(ENV_NAME_API_KEY).ok().and_then(non_blank) {
            cfg.geocode_farm.api_key = Some(api_key);
        }
        Ok(cfg)
    }
}

// A blank key means "no key", i.e. the free tier.
fn non_blank(api_key: String) -> Option<String> {
    Some(api_key).filter(|key| !key.trim().is_empty())
}

pub struct Http {
    pub timeout: Duration,
}

pub struct Lookup {
    /// Language of lookups that do not specify one.
    pub locale: Option<String>,
}

pub struct GeocodeFarm {
    pub api_key: Option<String>,
    pub endpoints: Endpoints,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            http,
            lookup,
            gateway,
        } = from;

        let raw::Http { timeout } = http.unwrap_or_default();
        if timeout.is_zero() {
            return Err(anyhow!("The HTTP timeout must not be zero"));
        }
        let http = Http { timeout };

        let raw::Lookup { locale } = lookup.unwrap_or_default();
        let lookup = Lookup { locale };

        let raw::GeocodeFarm { api_key, base_url } = gateway
            .unwrap_or_default()
            .geocode_farm
            .unwrap_or_default();
        let base_url = base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let endpoints = Endpoints::try_new(base_url)
            .map_err(|err| anyhow!("Invalid Geocode.Farm base URL '{base_url}': {err}"))?;
        let geocode_farm = GeocodeFarm {
            api_key: api_key.and_then(non_blank),
            endpoints,
        };

        Ok(Self {
            http,
            lookup,
            geocode_farm,
        })
    }
}

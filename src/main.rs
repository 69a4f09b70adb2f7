use anyhow::{Context, Result};
use clap::Parser;
use gcf_core::gateways::geocode::GeocodeProvider;
use gcf_entities::lookup::LookupRequest;
use gcf_gateways::{geocode_farm::GeocodeFarm, http::ReqwestAdapter};

mod boundary;
mod cli;
mod config;
mod output;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli::Cli {
        config: config_file,
        json,
        command,
    } = cli::Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(config_file.as_ref())?;
    if cfg.geocode_farm.api_key.is_none() {
        log::info!("No Geocode.Farm API key configured: use the free tier");
    }

    let adapter = ReqwestAdapter::try_new(cfg.http.timeout)?;
    let provider = GeocodeFarm::try_new(adapter, cfg.geocode_farm.api_key, cfg.lookup.locale)?
        .with_endpoints(cfg.geocode_farm.endpoints);

    let req = LookupRequest::try_from(command)?;
    let addr = provider
        .lookup(&req)
        .with_context(|| format!("Lookup with {} failed", provider.name()))?;

    if json {
        let addr = boundary::Address::from(addr);
        println!("{}", serde_json::to_string_pretty(&addr)?);
    } else {
        print!("{}", output::render_text(&addr));
    }
    Ok(())
}

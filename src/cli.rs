use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use gcf_entities::{geo::Coordinates, lookup::LookupRequest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Geocoding with Geocode.Farm")]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve an address into a position
    Forward {
        address: String,
        #[command(flatten)]
        options: Options,
    },
    /// Resolve a position into an address
    #[command(allow_negative_numbers = true)]
    Reverse {
        /// Latitude in decimal degrees
        lat: f64,
        /// Longitude in decimal degrees
        lon: f64,
        #[command(flatten)]
        options: Options,
    },
}

#[derive(Args)]
pub struct Options {
    /// Country code, e.g. "us"
    #[arg(long)]
    pub country: Option<String>,
    /// Language code, e.g. "en"
    #[arg(long = "lang")]
    pub language: Option<String>,
}

impl TryFrom<Command> for LookupRequest {
    type Error = anyhow::Error;
    fn try_from(from: Command) -> Result<Self> {
        let (mut req, Options { country, language }) = match from {
            Command::Forward { address, options } => (Self::address(address), options),
            Command::Reverse { lat, lon, options } => {
                let pos = Coordinates::try_from_lat_lng_deg(lat, lon)
                    .ok_or_else(|| anyhow!("Invalid position ({lat}, {lon})"))?;
                (Self::coordinates(pos), options)
            }
        };
        req.options.country = country;
        req.options.language = language;
        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use gcf_entities::lookup::Query;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_forward() {
        let cli = Cli::try_parse_from([
            "geocodefarm",
            "--json",
            "forward",
            "522-534 West Main Street, Anoka",
            "--country",
            "us",
        ])
        .unwrap();
        assert!(cli.json);
        let req = LookupRequest::try_from(cli.command).unwrap();
        assert_eq!(
            Query::Address("522-534 West Main Street, Anoka".into()),
            req.query
        );
        assert_eq!(Some("us"), req.options.country.as_deref());
        assert!(req.options.language.is_none());
    }

    #[test]
    fn parse_reverse_with_negative_longitude() {
        let cli =
            Cli::try_parse_from(["geocodefarm", "reverse", "45.2", "-93.4", "--lang", "de"])
                .unwrap();
        let req = LookupRequest::try_from(cli.command).unwrap();
        let pos = Coordinates::try_from_lat_lng_deg(45.2, -93.4).unwrap();
        assert_eq!(Query::Coordinates(pos), req.query);
        assert_eq!(Some("de"), req.options.language.as_deref());
    }

    #[test]
    fn reject_invalid_position() {
        let cli = Cli::try_parse_from(["geocodefarm", "reverse", "91", "0"]).unwrap();
        assert!(LookupRequest::try_from(cli.command).is_err());
    }
}

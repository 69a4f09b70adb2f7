use crate::{Error, Result};
use std::net::IpAddr;

pub fn is_ip_address(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Checks a free-text address before it is sent upstream.
///
/// IP addresses are rejected first, then blank input.
pub fn address(provider: &str, address: &str) -> Result<()> {
    if is_ip_address(address) {
        return Err(Error::UnsupportedOperation(format!(
            "The {provider} provider does not support IP addresses"
        )));
    }
    if address.trim().is_empty() {
        return Err(Error::UnsupportedOperation(
            "Could not execute empty address".into(),
        ));
    }
    Ok(())
}

/// An absent key is fine, a blank one is not.
pub fn api_key(api_key: Option<String>) -> Result<Option<String>> {
    match api_key {
        Some(key) if key.trim().is_empty() => Err(Error::InvalidCredentials(
            "The provided API key is blank".into(),
        )),
        key => Ok(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_ip_addresses() {
        for ip in ["127.0.0.1", "::1", "2001:db8::ff00:42:8329", "10.0.0.255"] {
            let err = address("test", ip).unwrap_err();
            assert!(matches!(err, Error::UnsupportedOperation(_)), "{ip}");
            assert_eq!(
                "Unsupported operation: The test provider does not support IP addresses",
                err.to_string()
            );
        }
    }

    #[test]
    fn reject_empty_addresses() {
        for addr in ["", " ", "\t\n"] {
            let err = address("test", addr).unwrap_err();
            assert!(matches!(err, Error::UnsupportedOperation(_)));
            assert_eq!(
                "Unsupported operation: Could not execute empty address",
                err.to_string()
            );
        }
    }

    #[test]
    fn accept_addresses() {
        assert!(address("test", "522-534 West Main Street, Anoka, MN 55303, USA").is_ok());
        assert!(address("test", "127.0.0.1 Main Street").is_ok());
        assert!(address("test", "1234").is_ok());
    }

    #[test]
    fn check_api_keys() {
        assert_eq!(None, api_key(None).unwrap());
        assert_eq!(Some("secret".to_owned()), api_key(Some("secret".into())).unwrap());
        assert!(matches!(
            api_key(Some("  ".into())),
            Err(Error::InvalidCredentials(_))
        ));
    }
}

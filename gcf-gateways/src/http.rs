use anyhow::Result;
use gcf_core::gateways::http::HttpAdapter;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A blocking HTTP adapter based on reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestAdapter {
    client: Client,
}

impl ReqwestAdapter {
    pub fn try_new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpAdapter for ReqwestAdapter {
    fn get_content(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            // Some services still deliver a meaningful body
            log::debug!("Response status: {status}");
        }
        let body = response.text()?;
        Ok(content_from_body(body))
    }
}

fn content_from_body(body: String) -> Option<String> {
    Some(body).filter(|body| !body.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_adapter() {
        assert!(ReqwestAdapter::try_new(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn empty_body_has_no_content() {
        assert_eq!(None, content_from_body(String::new()));
        assert_eq!(Some("{}".to_owned()), content_from_body("{}".into()));
        assert_eq!(Some(" ".to_owned()), content_from_body(" ".into()));
    }

    #[test]
    fn user_agent_contains_version() {
        assert!(USER_AGENT.starts_with("gcf-gateways/"));
    }
}

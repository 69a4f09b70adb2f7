/// The capability to fetch the content behind a URL.
///
/// Timeouts, retries and TLS are the business of the
/// implementation, not of the providers using it.
pub trait HttpAdapter {
    /// Returns `Ok(None)` if the request succeeded but
    /// delivered no content at all.
    fn get_content(&self, url: &str) -> anyhow::Result<Option<String>>;
}

impl<T> HttpAdapter for &T
where
    T: HttpAdapter + ?Sized,
{
    fn get_content(&self, url: &str) -> anyhow::Result<Option<String>> {
        (**self).get_content(url)
    }
}

impl<T> HttpAdapter for Box<T>
where
    T: HttpAdapter + ?Sized,
{
    fn get_content(&self, url: &str) -> anyhow::Result<Option<String>> {
        (**self).get_content(url)
    }
}

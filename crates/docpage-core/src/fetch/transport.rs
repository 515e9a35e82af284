//! HTTP GET transport.
//!
//! Uses the curl crate (libcurl). Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

use std::time::Duration;

/// Status and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Anything that can perform a blocking GET. `Err` means no HTTP status was obtained.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, curl::Error>;
}

/// Timeouts applied to every transfer. `None` leaves libcurl's behavior in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// libcurl-backed transport. Follows redirects.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    opts: CurlOptions,
}

impl CurlTransport {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(d) = self.opts.connect_timeout {
            easy.connect_timeout(d)?;
        }
        if let Some(d) = self.opts.timeout {
            easy.timeout(d)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}

//! Retrieval of pre-rendered documentation pages.
//!
//! Derives the target URL from the request path, performs one GET against the
//! documentation host, and returns the page body or the not-found text.

mod error;
mod transport;

pub use error::FetchError;
pub use transport::{CurlOptions, CurlTransport, HttpResponse, Transport};

use crate::config::{DocpageConfig, NetworkFailurePolicy};
use crate::request::RequestUrl;
use crate::target;

/// Returned in place of the page body when the host has no page for the path.
pub const NOT_FOUND_FALLBACK: &str = "Page not found.";

/// Fetches documentation pages from a fixed host. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ContentFetcher<T = CurlTransport> {
    docs_host: String,
    transport: T,
    network_failure: NetworkFailurePolicy,
}

impl ContentFetcher<CurlTransport> {
    /// Builds a curl-backed fetcher from loaded configuration.
    pub fn from_config(cfg: &DocpageConfig) -> Self {
        let opts = CurlOptions {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
        };
        ContentFetcher::new(cfg.docs_host.clone(), CurlTransport::new(opts))
            .with_network_failure(cfg.network_failure_policy())
    }
}

impl<T: Transport> ContentFetcher<T> {
    pub fn new(docs_host: impl Into<String>, transport: T) -> Self {
        Self {
            docs_host: docs_host.into(),
            transport,
            network_failure: NetworkFailurePolicy::default(),
        }
    }

    pub fn with_network_failure(mut self, policy: NetworkFailurePolicy) -> Self {
        self.network_failure = policy;
        self
    }

    pub fn docs_host(&self) -> &str {
        &self.docs_host
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Target URL for a request, or `None` if the path references a file.
    pub fn target_for<R: RequestUrl + ?Sized>(&self, request_url: &R) -> Option<String> {
        target::target_url(&self.docs_host, request_url.pathname())
    }

    /// Fetches the page for `request_url`.
    ///
    /// `Ok(None)` when there is no URL or its path references a file; no
    /// request is made. `Ok(Some(body))` on a 2xx response,
    /// `Ok(Some(NOT_FOUND_FALLBACK))` on any other status. Transport failures
    /// are returned as errors unless the fetcher uses
    /// [`NetworkFailurePolicy::Fallback`].
    pub fn fetch_content<R: RequestUrl + ?Sized>(
        &self,
        request_url: Option<&R>,
    ) -> Result<Option<String>, FetchError> {
        let Some(request_url) = request_url else {
            return Ok(None);
        };
        let Some(target) = self.target_for(request_url) else {
            tracing::debug!("skipping fetch for file path {}", request_url.pathname());
            return Ok(None);
        };

        tracing::info!("fetching generated docs page {}", target);
        match self.transport.get(&target) {
            Ok(resp) if resp.is_success() => Ok(Some(resp.text())),
            Ok(resp) => {
                tracing::debug!("GET {} returned HTTP {}", target, resp.status);
                Ok(Some(NOT_FOUND_FALLBACK.to_string()))
            }
            Err(source) => match self.network_failure {
                NetworkFailurePolicy::Propagate => Err(FetchError::Transport {
                    url: target,
                    source,
                }),
                NetworkFailurePolicy::Fallback => {
                    tracing::warn!("GET {} failed, serving not-found page: {}", target, source);
                    Ok(Some(NOT_FOUND_FALLBACK.to_string()))
                }
            },
        }
    }
}

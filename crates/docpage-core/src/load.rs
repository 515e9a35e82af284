//! Page load entry point: fetch the page and wrap it for the rendering layer.

use crate::fetch::{ContentFetcher, FetchError, Transport};
use crate::request::RequestUrl;
use serde::Serialize;
use std::sync::Arc;

/// Data handed to the documentation page, serialized as `{"props":{"mydocs":...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub props: PageProps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageProps {
    /// Page HTML, the not-found text, or `None` when nothing was fetched.
    pub mydocs: Option<String>,
}

impl From<Option<String>> for PageData {
    fn from(mydocs: Option<String>) -> Self {
        Self {
            props: PageProps { mydocs },
        }
    }
}

/// Loads the documentation page for one request.
///
/// The blocking transfer runs in `spawn_blocking`; the request URL is reduced
/// to its pathname before being moved there.
pub async fn load<T, R>(
    fetcher: Arc<ContentFetcher<T>>,
    url: Option<&R>,
) -> Result<PageData, FetchError>
where
    T: Transport + 'static,
    R: RequestUrl + ?Sized,
{
    let pathname = url.map(|u| u.pathname().to_string());
    let mydocs = tokio::task::spawn_blocking(move || fetcher.fetch_content(pathname.as_ref()))
        .await??;
    Ok(PageData::from(mydocs))
}

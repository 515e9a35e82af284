//! The slice of an incoming page request the loader needs: its pathname.
//!
//! Any framework's request type can be plugged in by implementing
//! [`RequestUrl`]; the loader never sees more than the path.

/// A request URL that exposes its path component.
pub trait RequestUrl {
    fn pathname(&self) -> &str;
}

impl RequestUrl for url::Url {
    fn pathname(&self) -> &str {
        self.path()
    }
}

impl RequestUrl for str {
    fn pathname(&self) -> &str {
        self
    }
}

impl RequestUrl for String {
    fn pathname(&self) -> &str {
        self.as_str()
    }
}

impl<T: RequestUrl + ?Sized> RequestUrl for &T {
    fn pathname(&self) -> &str {
        (**self).pathname()
    }
}

/// Owned request path, used when the loader is driven outside a web framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePath(String);

impl PagePath {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self(pathname.into())
    }

    /// Accepts either an absolute URL (its path is taken) or a bare pathname.
    /// A bare pathname loses any query or fragment, as a URL path would.
    ///
    /// - `PagePath::from_input("https://site.example/docs/guide/")` → `/docs/guide/`
    /// - `PagePath::from_input("/docs/guide/?tab=1")` → `/docs/guide/`
    pub fn from_input(input: &str) -> Self {
        match url::Url::parse(input) {
            Ok(parsed) if !parsed.cannot_be_a_base() => Self(parsed.path().to_string()),
            Ok(_) => Self(input.to_string()),
            Err(_) => {
                let end = input.find(['?', '#']).unwrap_or(input.len());
                Self(input[..end].to_string())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RequestUrl for PagePath {
    fn pathname(&self) -> &str {
        &self.0
    }
}

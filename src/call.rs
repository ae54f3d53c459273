use crate::compat::{String, format};
use crate::error::{CallError, Result};
use crate::helpers::{prune_fragment, query_separator, visible_fragment};
use crate::request::RequestHeader;
use crate::scheme::{http_scheme, websocket_scheme};
use crate::token::TokenSource;
use crate::types::SchemeType;

/// An HTTP call produced by reverse routing: method, path plus query, and an
/// optional fragment.
///
/// The value is immutable. [`with_fragment`](Self::with_fragment) and
/// [`unique`](Self::unique) hand back modified copies.
///
/// The `url` is treated as an opaque, already encoded string. It is never
/// parsed; the only structure this type knows about is whether it holds a `?`.
///
/// # Examples
///
/// ```
/// use routecall::RoutedCall;
///
/// let call = RoutedCall::get("/users/42?active=true").with_fragment("profile");
///
/// assert_eq!(call.path(), "/users/42?active=true#profile");
/// assert_eq!(
///     call.absolute_url(true, "example.com"),
///     "https://example.com/users/42?active=true#profile"
/// );
/// assert_eq!(
///     call.web_socket_url(true, "example.com"),
///     "wss://example.com/users/42?active=true"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CallParts"))]
pub struct RoutedCall {
    method: String,
    url: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    fragment: Option<String>,
}

impl RoutedCall {
    /// Create a call from router output. Nothing is validated.
    pub fn new(method: impl Into<String>, url: impl Into<String>, fragment: Option<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            fragment,
        }
    }

    /// A `GET` call without fragment
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url, None)
    }

    /// A `POST` call without fragment
    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url, None)
    }

    /// Create a call, rejecting input a router should never produce.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::InvalidArgument`] if `method` or `url` is empty, or
    /// if `url` contains a `#` (fragments are kept apart from the url).
    pub fn try_new(
        method: impl Into<String>,
        url: impl Into<String>,
        fragment: Option<String>,
    ) -> Result<Self> {
        let call = Self::new(method, url, fragment);
        validate(&call.method, &call.url)?;
        Ok(call)
    }

    /// Create a call from a relative reference that may carry a fragment.
    ///
    /// The reference is split at its first `#`; `"/a#"` yields an empty
    /// fragment, which renders as no fragment at all.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::InvalidArgument`] if `method` or the url part is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use routecall::RoutedCall;
    ///
    /// let call = RoutedCall::from_reference("GET", "/docs?v=2#install").unwrap();
    /// assert_eq!(call.url(), "/docs?v=2");
    /// assert_eq!(call.fragment(), Some("install"));
    /// ```
    pub fn from_reference(method: impl Into<String>, reference: &str) -> Result<Self> {
        let (url, fragment) = prune_fragment(reference);
        Self::try_new(method, url, fragment.map(String::from))
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Path plus query, without fragment
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fragment without the leading `#`, exactly as stored (may be blank)
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Decompose into `(method, url, fragment)`
    pub fn into_parts(self) -> (String, String, Option<String>) {
        (self.method, self.url, self.fragment)
    }

    /// The url followed by `#fragment` when the fragment is not blank.
    ///
    /// Suitable for `Location` headers and `href` attributes when scheme and
    /// host are implied. Identical to the `Display` output.
    pub fn path(&self) -> String {
        let fragment = visible_fragment(self.fragment());
        let mut path = String::with_capacity(self.url.len() + fragment_len(fragment));
        path.push_str(&self.url);
        push_fragment(&mut path, fragment);
        path
    }

    /// Copy of this call with the fragment replaced
    #[must_use]
    pub fn with_fragment(&self, fragment: impl Into<String>) -> Self {
        Self {
            method: self.method.clone(),
            url: self.url.clone(),
            fragment: Some(fragment.into()),
        }
    }

    /// Copy of this call with the fragment cleared
    #[must_use]
    pub fn without_fragment(&self) -> Self {
        Self {
            method: self.method.clone(),
            url: self.url.clone(),
            fragment: None,
        }
    }

    /// Copy of this call with a random token appended to the query string,
    /// to defeat caches. See [`unique_with`](Self::unique_with).
    #[cfg(feature = "std")]
    #[must_use]
    pub fn unique(&self) -> Self {
        self.unique_with(&crate::token::RandomTokens)
    }

    /// Copy of this call with a token from `source` appended to the query string.
    ///
    /// The token is added as `?<token>`, or as `&<token>` when the url already
    /// contains a `?` anywhere. The fragment is carried over untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use routecall::{FixedToken, RoutedCall};
    ///
    /// let call = RoutedCall::get("/feed?page=2");
    /// assert_eq!(call.unique_with(&FixedToken(-17)).url(), "/feed?page=2&-17");
    /// ```
    #[must_use]
    pub fn unique_with<S: TokenSource + ?Sized>(&self, source: &S) -> Self {
        let token = source.next_token();
        let separator = query_separator(&self.url);
        tracing::trace!(url = %self.url, %separator, token, "uniquifying routed call");

        Self {
            method: self.method.clone(),
            url: format!("{}{separator}{token}", self.url),
            fragment: self.fragment.clone(),
        }
    }

    /// Absolute `http`/`https` URL on `host`, fragment included.
    ///
    /// `host` (`name[:port]`) is used verbatim; no default port is inserted.
    pub fn absolute_url(&self, secure: bool, host: &str) -> String {
        self.url_for_scheme(http_scheme(secure), host)
    }

    /// Absolute URL using the scheme and host of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::InvalidArgument`] if the request carries no host.
    pub fn absolute_url_for<R: RequestHeader + ?Sized>(&self, request: &R) -> Result<String> {
        self.absolute_url_for_secure(request, request.secure())
    }

    /// Absolute URL using the host of `request`, forcing the scheme through `secure`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::InvalidArgument`] if the request carries no host.
    pub fn absolute_url_for_secure<R: RequestHeader + ?Sized>(
        &self,
        request: &R,
        secure: bool,
    ) -> Result<String> {
        let host = request_host(request)?;
        Ok(self.absolute_url(secure, host))
    }

    /// `ws`/`wss` URL on `host`.
    ///
    /// The fragment is never part of a WebSocket URL, so only the url is used.
    pub fn web_socket_url(&self, secure: bool, host: &str) -> String {
        self.url_for_scheme(websocket_scheme(secure), host)
    }

    /// WebSocket URL using the scheme and host of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::InvalidArgument`] if the request carries no host.
    pub fn web_socket_url_for<R: RequestHeader + ?Sized>(&self, request: &R) -> Result<String> {
        self.web_socket_url_for_secure(request, request.secure())
    }

    /// WebSocket URL using the host of `request`, forcing the scheme through `secure`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::InvalidArgument`] if the request carries no host.
    pub fn web_socket_url_for_secure<R: RequestHeader + ?Sized>(
        &self,
        request: &R,
        secure: bool,
    ) -> Result<String> {
        let host = request_host(request)?;
        Ok(self.web_socket_url(secure, host))
    }

    /// Absolute URL with an explicit scheme.
    ///
    /// Fragments are rendered for `http`/`https` and left out for `ws`/`wss`.
    pub fn url_for_scheme(&self, scheme: SchemeType, host: &str) -> String {
        let fragment = if scheme.is_websocket() {
            None
        } else {
            visible_fragment(self.fragment())
        };
        let scheme = scheme.as_str();
        let mut out = String::with_capacity(
            scheme.len() + 3 + host.len() + self.url.len() + fragment_len(fragment),
        );
        out.push_str(scheme);
        out.push_str("://");
        out.push_str(host);
        out.push_str(&self.url);
        push_fragment(&mut out, fragment);
        out
    }
}

fn validate(method: &str, url: &str) -> Result<()> {
    let rejected = if method.is_empty() {
        CallError::invalid("method", "must not be empty")
    } else if url.is_empty() {
        CallError::invalid("url", "must not be empty")
    } else if prune_fragment(url).1.is_some() {
        CallError::invalid("url", "must not contain '#'")
    } else {
        return Ok(());
    };

    tracing::debug!(method, url, error = %rejected, "rejected routed call");
    Err(rejected)
}

fn request_host<R: RequestHeader + ?Sized>(request: &R) -> Result<&str> {
    request.host().ok_or_else(|| {
        tracing::debug!(secure = request.secure(), "request carries no host");
        CallError::invalid("host", "missing from request")
    })
}

fn fragment_len(fragment: Option<&str>) -> usize {
    fragment.map_or(0, |fragment| fragment.len() + 1)
}

fn push_fragment(out: &mut String, fragment: Option<&str>) {
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
}

impl core::fmt::Display for RoutedCall {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.url)?;
        if let Some(fragment) = visible_fragment(self.fragment()) {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl From<RoutedCall> for String {
    fn from(call: RoutedCall) -> Self {
        call.path()
    }
}

impl From<&RoutedCall> for String {
    fn from(call: &RoutedCall) -> Self {
        call.path()
    }
}

/// Wire shape of a call, checked on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CallParts {
    method: String,
    url: String,
    #[serde(default)]
    fragment: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<CallParts> for RoutedCall {
    type Error = CallError;

    fn try_from(parts: CallParts) -> Result<Self> {
        Self::try_new(parts.method, parts.url, parts.fragment)
    }
}

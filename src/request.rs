use crate::compat::String;

/// The part of an inbound request needed to render absolute URLs
pub trait RequestHeader {
    /// Whether the request arrived over TLS
    fn secure(&self) -> bool;

    /// The `Host` the request was addressed to, `host[:port]`, used verbatim
    fn host(&self) -> Option<&str>;
}

impl<T: RequestHeader + ?Sized> RequestHeader for &T {
    fn secure(&self) -> bool {
        (**self).secure()
    }

    fn host(&self) -> Option<&str> {
        (**self).host()
    }
}

/// Owned request context: scheme detection result plus `Host` header
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RequestContext {
    secure: bool,
    host: Option<String>,
}

impl RequestContext {
    pub fn new(secure: bool, host: impl Into<String>) -> Self {
        Self {
            secure,
            host: Some(host.into()),
        }
    }

    /// A request that carried no `Host` header
    pub fn without_host(secure: bool) -> Self {
        Self { secure, host: None }
    }
}

impl RequestHeader for RequestContext {
    fn secure(&self) -> bool {
        self.secure
    }

    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

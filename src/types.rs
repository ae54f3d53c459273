/// URL scheme types a routed call can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    #[default]
    Http,
    Https,
    Ws,
    Wss,
}

impl SchemeType {
    /// Scheme name without the trailing `:`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Ws => "ws",
            Self::Wss => "wss",
        }
    }

    /// Check if this is a TLS scheme
    pub fn is_secure(self) -> bool {
        matches!(self, Self::Https | Self::Wss)
    }

    /// Check if this is a WebSocket scheme
    pub fn is_websocket(self) -> bool {
        matches!(self, Self::Ws | Self::Wss)
    }

    /// Get the default port for this scheme.
    /// Informational only: rendered URLs never carry an inserted port.
    pub fn default_port(self) -> u16 {
        if self.is_secure() { 443 } else { 80 }
    }
}

impl core::fmt::Display for SchemeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(SchemeType::Http.default_port(), 80);
        assert_eq!(SchemeType::Ws.default_port(), 80);
        assert_eq!(SchemeType::Https.default_port(), 443);
        assert_eq!(SchemeType::Wss.default_port(), 443);
    }

    #[test]
    fn test_flags() {
        assert!(SchemeType::Wss.is_secure());
        assert!(SchemeType::Wss.is_websocket());
        assert!(!SchemeType::Https.is_websocket());
        assert!(!SchemeType::Ws.is_secure());
    }
}

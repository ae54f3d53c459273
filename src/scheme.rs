use crate::types::SchemeType;

/// Pick the HTTP scheme for the given security flag
pub fn http_scheme(secure: bool) -> SchemeType {
    if secure {
        SchemeType::Https
    } else {
        SchemeType::Http
    }
}

/// Pick the WebSocket scheme for the given security flag
pub fn websocket_scheme(secure: bool) -> SchemeType {
    if secure { SchemeType::Wss } else { SchemeType::Ws }
}

/// Get the scheme type from a scheme string.
/// Filters by length + first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> Option<SchemeType> {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (2, Some(b'w')) if bytes == b"ws" => Some(SchemeType::Ws),
        (3, Some(b'w')) if bytes == b"wss" => Some(SchemeType::Wss),
        (4, Some(b'h')) if bytes == b"http" => Some(SchemeType::Http),
        (5, Some(b'h')) if bytes == b"https" => Some(SchemeType::Https),
        _ => None,
    }
}

impl core::str::FromStr for SchemeType {
    type Err = crate::error::CallError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        get_scheme_type(s.trim_end_matches(':'))
            .ok_or(crate::error::CallError::invalid("scheme", "not http, https, ws or wss"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_selection() {
        assert_eq!(http_scheme(false), SchemeType::Http);
        assert_eq!(http_scheme(true), SchemeType::Https);
        assert_eq!(websocket_scheme(false), SchemeType::Ws);
        assert_eq!(websocket_scheme(true), SchemeType::Wss);
    }

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), Some(SchemeType::Http));
        assert_eq!(get_scheme_type("https"), Some(SchemeType::Https));
        assert_eq!(get_scheme_type("wss"), Some(SchemeType::Wss));
        assert_eq!(get_scheme_type("ftp"), None);
        assert_eq!("ws:".parse::<SchemeType>(), Ok(SchemeType::Ws));
        assert!("custom".parse::<SchemeType>().is_err());
    }
}

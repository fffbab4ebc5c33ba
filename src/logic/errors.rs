use anyhow::Error;

/// Broad category of a dataset load failure, for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Timeout,
    Network,         // DNS, connection refused, TLS
    HttpStatus(u16), // Non-2xx response
    Parse,           // Payload is not a countries array
    Io,              // Local dataset file unreadable
    Other,
}

impl ErrorType {
    pub fn label(&self) -> String {
        match self {
            ErrorType::Timeout => "timed out".to_string(),
            ErrorType::Network => "network error".to_string(),
            ErrorType::HttpStatus(code) => format!("HTTP {}", code),
            ErrorType::Parse => "malformed data".to_string(),
            ErrorType::Io => "file error".to_string(),
            ErrorType::Other => "error".to_string(),
        }
    }
}

/// Classify a load error by walking its cause chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if let Some(status) = reqwest_err.status() {
                return ErrorType::HttpStatus(status.as_u16());
            }
            if reqwest_err.is_decode() {
                return ErrorType::Parse;
            }
            if reqwest_err.is_connect() || reqwest_err.is_request() {
                return ErrorType::Network;
            }
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::Parse;
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ErrorType::Io;
        }
    }

    let error_msg = error.to_string().to_lowercase();
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("connection refused") || error_msg.contains("dns") {
        return ErrorType::Network;
    }

    ErrorType::Other
}

/// Most informative message in the chain: the reqwest error if there is one,
/// otherwise the root cause
pub fn format_error_message(error: &Error) -> String {
    if let Some(reqwest_err) = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
    {
        return reqwest_err.to_string();
    }

    error.root_cause().to_string()
}

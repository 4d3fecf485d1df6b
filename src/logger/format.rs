//! Access log format module
//!
//! Supports multiple log formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per line)
//! - Custom patterns with `$variables`

use chrono::{DateTime, Local};
use std::fmt::Write as _;

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Access log format, parsed once from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Combined,
    Common,
    Json,
    Custom(String),
}

impl LogFormat {
    pub fn parse(format: &str) -> Self {
        match format {
            "combined" => Self::Combined,
            "common" => Self::Common,
            "json" => Self::Json,
            custom => Self::Custom(custom.to_string()),
        }
    }
}

/// One served request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    /// Request path, still percent-encoded
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// How the request was answered: `listing`, `view`, `download`, `redirect`, ...
    pub outcome: &'static str,
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry stamped with the current time
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            outcome: "-",
            request_time_us: 0,
        }
    }

    pub fn format(&self, format: &LogFormat) -> String {
        match format {
            LogFormat::Combined => format!(
                "{} \"{}\" \"{}\"",
                self.common_line(),
                self.referer.as_deref().unwrap_or("-"),
                self.user_agent.as_deref().unwrap_or("-"),
            ),
            LogFormat::Common => self.common_line(),
            LogFormat::Json => self.json_line(),
            LogFormat::Custom(pattern) => self.custom_line(pattern),
        }
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn common_line(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format(CLF_TIME),
            self.method,
            self.request_uri(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    fn json_line(&self) -> String {
        let mut out = String::from("{");
        let _ = write!(out, "\"remote_addr\":{}", json_str(&self.remote_addr));
        let _ = write!(out, ",\"time\":{}", json_str(&self.time.to_rfc3339()));
        let _ = write!(out, ",\"method\":{}", json_str(&self.method));
        let _ = write!(out, ",\"path\":{}", json_str(&self.path));
        let _ = write!(out, ",\"query\":{}", json_opt(self.query.as_deref()));
        let _ = write!(out, ",\"http_version\":{}", json_str(&self.http_version));
        let _ = write!(out, ",\"status\":{}", self.status);
        let _ = write!(out, ",\"body_bytes\":{}", self.body_bytes);
        let _ = write!(out, ",\"referer\":{}", json_opt(self.referer.as_deref()));
        let _ = write!(out, ",\"user_agent\":{}", json_opt(self.user_agent.as_deref()));
        let _ = write!(out, ",\"outcome\":{}", json_str(self.outcome));
        let _ = write!(out, ",\"request_time_us\":{}", self.request_time_us);
        out.push('}');
        out
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables: `$remote_addr`, `$time_local`, `$time_iso8601`,
    /// `$request`, `$request_method`, `$request_uri`, `$request_time`
    /// (seconds, 3 decimals), `$status`, `$body_bytes_sent`, `$http_referer`,
    /// `$http_user_agent`, `$outcome`.
    fn custom_line(&self, pattern: &str) -> String {
        let request_uri = self.request_uri();
        let request_line = format!("{} {} HTTP/{}", self.method, request_uri, self.http_version);
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;

        // Longer names first: $request_time and $request_uri before $request
        let vars: [(&str, String); 12] = [
            ("$remote_addr", self.remote_addr.clone()),
            ("$time_local", self.time.format(CLF_TIME).to_string()),
            ("$time_iso8601", self.time.to_rfc3339()),
            ("$request_time", format!("{request_time:.3}")),
            ("$request_method", self.method.clone()),
            ("$request_uri", request_uri),
            ("$request", request_line),
            ("$status", self.status.to_string()),
            ("$body_bytes_sent", self.body_bytes.to_string()),
            ("$http_referer", self.referer.clone().unwrap_or_else(|| "-".to_string())),
            ("$http_user_agent", self.user_agent.clone().unwrap_or_else(|| "-".to_string())),
            ("$outcome", self.outcome.to_string()),
        ];

        vars.iter()
            .fold(pattern.to_string(), |line, (name, value)| line.replace(name, value))
    }
}

fn json_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn json_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "null".to_string(), json_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/files/src/main.rs".to_string(),
        );
        entry.query = Some("raw=1".to_string());
        entry.status = 200;
        entry.body_bytes = 1234;
        entry.referer = Some("http://localhost:8080/files/src".to_string());
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry.outcome = "view";
        entry.request_time_us = 1_250_000;
        entry
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(LogFormat::parse("combined"), LogFormat::Combined);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(
            LogFormat::parse("$status"),
            LogFormat::Custom("$status".to_string())
        );
    }

    #[test]
    fn test_format_combined() {
        let log = create_test_entry().format(&LogFormat::Combined);
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"GET /files/src/main.rs?raw=1 HTTP/1.1\" 200 1234"));
        assert!(log.ends_with("\"http://localhost:8080/files/src\" \"Mozilla/5.0\""));
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format(&LogFormat::Common);
        assert!(log.contains("GET /files/src/main.rs?raw=1 HTTP/1.1"));
        assert!(log.ends_with("200 1234"));
        assert!(!log.contains("Mozilla"));
    }

    #[test]
    fn test_format_json() {
        let mut entry = create_test_entry();
        entry.user_agent = Some("quote\" and\ttab".to_string());
        entry.referer = None;
        let log = entry.format(&LogFormat::Json);
        assert!(log.starts_with('{') && log.ends_with('}'));
        assert!(log.contains(r#""method":"GET""#));
        assert!(log.contains(r#""status":200"#));
        assert!(log.contains(r#""referer":null"#));
        assert!(log.contains(r#""user_agent":"quote\" and\ttab""#));
        assert!(log.contains(r#""outcome":"view""#));
    }

    #[test]
    fn test_format_custom() {
        let log = create_test_entry()
            .format(&LogFormat::Custom("$request_method $request_uri $status $outcome $request_time".to_string()));
        assert_eq!(log, "GET /files/src/main.rs?raw=1 200 view 1.250");
    }

    #[test]
    fn test_format_custom_request_line() {
        let log = create_test_entry().format(&LogFormat::Custom("[$request]".to_string()));
        assert_eq!(log, "[GET /files/src/main.rs?raw=1 HTTP/1.1]");
    }
}

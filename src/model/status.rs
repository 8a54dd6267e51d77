use serde::{Deserialize, Serialize};

/// Bot health as reported by `/api/status`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct StatusDto {
    pub ready: bool,
    /// Gateway latency in seconds, `None` until the first heartbeat.
    #[serde(default)]
    pub ping: Option<f64>,
    pub guilds: u64,
}

impl StatusDto {
    /// Gateway latency rounded to whole milliseconds. Missing, negative or
    /// non-finite readings become `None`.
    pub fn latency_ms(&self) -> Option<u64> {
        let ms = self.ping? * 1000.0;
        (ms.is_finite() && ms >= 0.0).then(|| ms.round() as u64)
    }

    pub fn label(&self) -> &'static str {
        if self.ready {
            "Online"
        } else {
            "Starting"
        }
    }
}

/// Bare number tokens Python's `json` emits for non-finite floats. Longest
/// first so `-Infinity` is not split.
const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Rewrites the `NaN`/`Infinity`/`-Infinity` tokens outside string literals
/// to `null`, turning the bot's output into strict JSON.
pub fn nullify_non_finite(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = body;

    while let Some(c) = rest.chars().next() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => (),
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE_TOKENS.iter().find(|t| rest.starts_with(*t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> StatusDto {
        serde_json::from_str(&nullify_non_finite(body)).unwrap()
    }

    #[test]
    fn rounds_latency_to_milliseconds() {
        let status = decode(r#"{"ready": true, "ping": 0.04262, "guilds": 3}"#);

        assert_eq!(status.latency_ms(), Some(43));
        assert_eq!(status.label(), "Online");
    }

    #[test]
    fn decodes_status_before_first_heartbeat() {
        let status = decode(r#"{"ready": false, "ping": NaN, "guilds": 0}"#);

        assert_eq!(status.ping, None);
        assert_eq!(status.latency_ms(), None);
        assert_eq!(status.label(), "Starting");
    }

    #[test]
    fn decodes_infinite_latency() {
        assert_eq!(decode(r#"{"ready": false, "ping": Infinity, "guilds": 0}"#).ping, None);
        assert_eq!(decode(r#"{"ready": false, "ping": -Infinity, "guilds": 0}"#).ping, None);
    }

    #[test]
    fn leaves_string_contents_alone() {
        let body = r#"{"name": "NaN \"Infinity\" club", "ping": NaN}"#;

        assert_eq!(
            nullify_non_finite(body),
            r#"{"name": "NaN \"Infinity\" club", "ping": null}"#
        );
    }
}

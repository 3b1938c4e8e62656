use event_desk::roster::Gender;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Gender filter values arrive as the exact form labels; anything else is
/// a caller mistake rather than an empty constraint.
pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    Gender::from_label(raw.trim())
        .ok_or_else(|| format!("'{raw}' is not a valid gender (expected Male, Female, or Other)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_labels_only() {
        assert_eq!(parse_gender("Female"), Ok(Gender::Female));
        assert_eq!(parse_gender(" Male "), Ok(Gender::Male));
        assert!(parse_gender("female").is_err());
        assert!(parse_gender("unknown").is_err());
    }
}

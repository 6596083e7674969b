//! Loading the external pricing document.
//!
//! The document is a static asset co-hosted with the site. A failed read or
//! parse is non-fatal: the caller surfaces "unavailable" and the next
//! request retries.

use std::path::Path;

use super::models::PricingTable;
use super::services::PricingError;

/// Read and parse the pricing document at `path`.
pub async fn load_pricing_table(path: &Path) -> Result<PricingTable, PricingError> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|e| PricingError::SourceUnavailable {
            reason: format!("read {}: {}", path.display(), e),
        })?;

    serde_json::from_slice(&raw).map_err(|e| PricingError::SourceUnavailable {
        reason: format!("parse {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SEQ: AtomicUsize = AtomicUsize::new(0);

    fn temp_doc(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "courtside-pricing-source-{}-{}.json",
            std::process::id(),
            SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&path, contents).expect("write temp document");
        path
    }

    #[tokio::test]
    async fn test_load_valid_document() {
        let path = temp_doc(
            r#"{"courts":{"A":{"peak":{"1":12}}},"sessions":{"30-min":1,"1-hour":1.8}}"#,
        );
        let table = load_pricing_table(&path).await.unwrap();
        assert_eq!(table.courts.len(), 1);
        assert_eq!(table.sessions.len(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let path = PathBuf::from("/nonexistent/courtside/pricing.json");
        let err = load_pricing_table(&path).await.unwrap_err();
        assert!(matches!(err, PricingError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_malformed_document_is_source_unavailable() {
        let path = temp_doc("{ not json");
        let err = load_pricing_table(&path).await.unwrap_err();
        assert!(matches!(err, PricingError::SourceUnavailable { .. }));
        std::fs::remove_file(&path).ok();
    }
}

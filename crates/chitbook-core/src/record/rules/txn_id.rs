//! Transaction identifier extraction.

use regex::Regex;

use super::patterns::{TXN_LABELED, TXN_RAIL, TXN_STANDALONE};

/// Identifier patterns in priority order. The final standalone pattern is a
/// best-effort catch-all and can pick up unrelated codes; labelled and
/// rail-prefixed forms always win over it.
fn id_patterns() -> [&'static Regex; 3] {
    [&*TXN_LABELED, &*TXN_RAIL, &*TXN_STANDALONE]
}

/// Extract a transaction/UTR identifier, or `None` when nothing matches.
pub fn extract_txn_id(text: &str) -> Option<String> {
    for pattern in id_patterns() {
        if let Some(caps) = pattern.captures(text) {
            return Some(caps[1].to_string());
        }
    }

    None
}

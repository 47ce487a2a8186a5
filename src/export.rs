//! Browser Export
//!
//! The only operation exposed across the WebAssembly boundary:
//! `verify(json) -> "OK" | "Error: <message>"`.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::proof::outcome::VerificationOutcome;
use crate::proof::verify::verify_str;

/// Returned when the caller passes no report.
pub const MISSING_INPUT: &str = "Error: need JSON string";

/// Verify a report and render the browser verdict string.
pub fn verify_to_status(json: Option<&str>) -> String {
    match json {
        Some(json) => VerificationOutcome::from_result(&verify_str(json)).status_line(),
        None => MISSING_INPUT.to_string(),
    }
}

/// JavaScript entry point.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = verify)]
pub fn verify_js(json: Option<String>) -> String {
    verify_to_status(json.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "game_id": "wasm",
        "server_seed": "00000000000000000000000000000000",
        "server_seed_hash": "374708fff7719dd5979ec875d56cd2286f6d3cf7ec317a3b25632aab28ec37bb",
        "rolls": "132525124345642525315365",
        "players": [
            {"uid": 2002, "client_seed": "ffeeddccbbaa99887766554433221100", "source": "fallback"},
            {"uid": 1001, "client_seed": "00112233445566778899aabbccddeeff", "source": "player"}
        ]
    }"#;

    #[test]
    fn test_ok() {
        assert_eq!(verify_to_status(Some(REPORT)), "OK");
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(verify_to_status(None), "Error: need JSON string");
    }

    #[test]
    fn test_error_prefix() {
        let tampered = REPORT.replace("\"1325", "\"1425");
        assert_eq!(
            verify_to_status(Some(&tampered)),
            "Error: roll 0 mismatch: expected (1,3), but got (1,4)"
        );

        assert!(verify_to_status(Some("")).starts_with("Error: malformed report"));
    }
}

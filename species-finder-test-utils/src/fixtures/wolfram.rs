use mockito::Matcher;
use serde_json::{json, Value};

use crate::constant::TEST_WOLFRAM_APP_ID;

/// Request path the Wolfram|Alpha provider uses
pub static QUERY_PATH: &str = "/v2/query";

/// Query string matcher for a lookup of `species` with the test app ID
pub fn query_matcher(species: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("appid".into(), TEST_WOLFRAM_APP_ID.into()),
        Matcher::UrlEncoded("output".into(), "json".into()),
        Matcher::UrlEncoded("input".into(), species.into()),
    ])
}

/// Common name reported in the identity pod for `species`
pub fn common_name(species: &str) -> String {
    format!("common {}", species.to_lowercase())
}

/// Summary the provider builds from [`query_result`]
pub fn expected_summary() -> String {
    "kingdom | animals\nlifespan | 13 years\n".to_string()
}

/// Successful query result for `species`
pub fn query_result(species: &str) -> Value {
    json!({
        "queryresult": {
            "success": true,
            "error": false,
            "numpods": 3,
            "pods": [
                {
                    "title": "Input interpretation",
                    "scanner": "Identity",
                    "subpods": [{ "title": "", "plaintext": common_name(species) }]
                },
                {
                    "title": "Taxonomy",
                    "scanner": "Data",
                    "subpods": [{ "title": "", "plaintext": "kingdom | animals" }]
                },
                {
                    "title": "Biological properties",
                    "scanner": "Data",
                    "subpods": [{ "title": "", "plaintext": "lifespan | 13 years" }]
                }
            ]
        }
    })
}

/// Query result for input Wolfram|Alpha could not interpret
pub fn no_result() -> Value {
    json!({
        "queryresult": {
            "success": false,
            "error": false,
            "numpods": 0
        }
    })
}

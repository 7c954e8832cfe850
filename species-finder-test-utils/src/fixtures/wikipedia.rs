use serde_json::{json, Value};

/// Request path the Wikipedia provider uses for `species`
pub fn summary_path(species: &str) -> String {
    format!("/page/summary/{}", species.trim().replace(' ', "_"))
}

/// Link a mock page summary reports for `species`
pub fn page_link(species: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", species.trim().replace(' ', "_"))
}

/// Image a mock page summary reports for `species`
pub fn image_link(species: &str) -> String {
    format!(
        "https://upload.wikimedia.org/wikipedia/commons/{}.jpg",
        species.trim().replace(' ', "_")
    )
}

/// Page summary document for `species`
pub fn page_summary(species: &str) -> Value {
    json!({
        "type": "standard",
        "title": species,
        "extract": format!("{} is a species described by the mock Wikipedia.", species),
        "thumbnail": { "source": image_link(species) },
        "originalimage": { "source": image_link(species) },
        "content_urls": {
            "desktop": { "page": page_link(species) },
            "mobile": { "page": page_link(species) }
        }
    })
}

/// Document Wikipedia answers with, alongside a 404, for unknown titles
pub fn not_found() -> Value {
    json!({
        "type": "https://mediawiki.org/wiki/HyperSwitch/errors/not_found",
        "title": "Not found.",
        "detail": "Page or revision not found."
    })
}

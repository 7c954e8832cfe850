use serde::{Deserialize, Serialize};

/// One knowledge source's answer about a species.
///
/// Records are built once by a provider and never mutated afterwards; the
/// aggregate returned to callers is a `Vec` of these, one per provider that
/// answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpeciesMetadata {
    /// The name as it was requested, not normalized
    pub species: String,
    /// Identifier of the provider that produced this record
    pub source: String,
    /// Link to the source's page for the species, empty if unknown
    pub link: String,
    /// The provider's display title for the species, empty if unknown
    pub name: String,
    /// Link to a representative image, empty if unknown
    pub image_path: String,
    /// Free-text description, empty if unknown
    pub summary: String,
}

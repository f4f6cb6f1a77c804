use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static reference data for a speaker questions can target. Owned by
/// external configuration; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Speaker {
    /// Unique key, used in routes and room names.
    pub slug: String,
    pub name: String,
}

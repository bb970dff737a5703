use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Regatta;

/// Request payload for creating a regatta
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegattaRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

/// Response containing regatta details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegattaResponse {
    pub regatta_id: i64,
    pub name: String,
    pub active: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Regatta> for RegattaResponse {
    fn from(regatta: Regatta) -> Self {
        Self {
            regatta_id: regatta.regatta_id,
            name: regatta.name,
            active: regatta.active,
            created_at: regatta.created_at,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Judge;

/// Request payload for creating a judge
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJudgeRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

/// Response containing judge details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeResponse {
    pub judge_id: i64,
    pub name: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Judge> for JudgeResponse {
    fn from(judge: Judge) -> Self {
        Self {
            judge_id: judge.judge_id,
            name: judge.name,
            created_at: judge.created_at,
        }
    }
}

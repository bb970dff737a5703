use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Attempt;

/// Request payload for registering a judged attempt
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterAttemptRequest {
    pub team_id: i64,
    pub question_id: i64,
    pub acertou: bool,
    pub judge_id: i64,
}

/// Outcome of a successful registration: which attempt this was, whether it
/// was correct, and the points awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttemptResult {
    pub numero: i64,
    pub acertou: bool,
    pub pontos: i64,
}

/// Identifies a (team, question) pair for the status query.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AttemptStatusQuery {
    pub team_id: i64,
    pub question_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttemptInfo {
    pub numero: i64,
    pub acertou: bool,
    pub pontos: i64,
    pub judge_id: i64,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Attempt> for AttemptInfo {
    fn from(attempt: Attempt) -> Self {
        Self {
            numero: attempt.numero,
            acertou: attempt.acertou,
            pontos: attempt.pontos,
            judge_id: attempt.judge_id,
            created_at: attempt.created_at,
        }
    }
}

/// Current state of a (team, question) pair, for the judge panel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttemptStatusResponse {
    pub attempts: Vec<AttemptInfo>,
    pub ja_acertou: bool,
    pub esgotado: bool,
}

impl AttemptStatusResponse {
    pub fn from_attempts(attempts: Vec<Attempt>, max_attempts: usize) -> Self {
        let ja_acertou = attempts.iter().any(|a| a.acertou);
        let esgotado = !ja_acertou && attempts.len() >= max_attempts;

        Self {
            attempts: attempts.into_iter().map(AttemptInfo::from).collect(),
            ja_acertou,
            esgotado,
        }
    }
}

use sqlx::{Executor, Sqlite, SqlitePool};
use thiserror::Error;

use crate::dto::attempt::{AttemptResult, AttemptStatusResponse};
use crate::dto::leaderboard::{LeaderboardEntry, LeaderboardScope};
use crate::error::{Result, StorageError};
use crate::repository::attempt::{self, AttemptRepository};
use crate::repository::leaderboard::LeaderboardRepository;

/// A team gets at most this many attempts on one question.
pub const MAX_ATTEMPTS: usize = 3;

/// Designed rejections of `register_attempt`, distinct from storage faults
/// so callers never confuse "try again" with a final answer.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A correct attempt already exists for this (team, question) pair.
    #[error("Equipe ja acertou esta questao.")]
    AlreadyCorrect,

    /// Three attempts recorded, none correct.
    #[error("Equipe ja esgotou as 3 tentativas nesta questao.")]
    AttemptsExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Points awarded for a correct answer on the given attempt number:
/// 100 on the first, 80 on the second, 50 on the third. An incorrect
/// outcome is worth 0 regardless of attempt number, and attempt numbers
/// outside 1..=3 fall through to 0 (the registrar's stop conditions make
/// them unreachable in normal operation).
pub fn points_for_attempt(numero: i64, acertou: bool) -> i64 {
    if !acertou {
        return 0;
    }

    match numero {
        1 => 100,
        2 => 80,
        3 => 50,
        _ => 0,
    }
}

/// Register a judged attempt and award points.
///
/// The read-validate-append sequence runs inside one write transaction,
/// opened with `BEGIN IMMEDIATE` so racing registrations serialize at
/// acquire instead of failing a deferred read-to-write upgrade with
/// `SQLITE_BUSY`. The unique index on (team_id, question_id, numero)
/// rejects any losing race atomically. A rejection leaves the ledger
/// untouched.
pub async fn register_attempt(
    pool: &SqlitePool,
    team_id: i64,
    question_id: i64,
    acertou: bool,
    judge_id: i64,
) -> std::result::Result<AttemptResult, ScoringError> {
    let mut tx = pool
        .begin_with("BEGIN IMMEDIATE")
        .await
        .map_err(StorageError::from)?;

    ensure_exists(&mut *tx, "SELECT 1 FROM teams WHERE team_id = ?1", team_id).await?;
    ensure_exists(
        &mut *tx,
        "SELECT 1 FROM questions WHERE question_id = ?1",
        question_id,
    )
    .await?;
    ensure_exists(
        &mut *tx,
        "SELECT 1 FROM judges WHERE judge_id = ?1",
        judge_id,
    )
    .await?;

    let priors = attempt::list_for_pair(&mut *tx, team_id, question_id).await?;

    if priors.iter().any(|a| a.acertou) {
        return Err(ScoringError::AlreadyCorrect);
    }

    if priors.len() >= MAX_ATTEMPTS {
        return Err(ScoringError::AttemptsExhausted);
    }

    let numero = priors.len() as i64 + 1;
    let pontos = points_for_attempt(numero, acertou);

    attempt::insert(&mut *tx, team_id, question_id, numero, acertou, pontos, judge_id).await?;

    tx.commit().await.map_err(StorageError::from)?;

    Ok(AttemptResult {
        numero,
        acertou,
        pontos,
    })
}

/// Current state of a (team, question) pair, for the judge panel display.
pub async fn attempt_status(
    pool: &SqlitePool,
    team_id: i64,
    question_id: i64,
) -> Result<AttemptStatusResponse> {
    let attempts = AttemptRepository::new(pool)
        .list_for_pair(team_id, question_id)
        .await?;
    Ok(AttemptStatusResponse::from_attempts(attempts, MAX_ATTEMPTS))
}

/// Ranked point totals per team over the scoped ledger rows. Teams with no
/// attempts appear with 0 points; ties order by team name ascending.
pub async fn compute_leaderboard(
    pool: &SqlitePool,
    scope: LeaderboardScope,
) -> Result<Vec<LeaderboardEntry>> {
    LeaderboardRepository::new(pool).compute(scope).await
}

async fn ensure_exists<'e, E>(executor: E, sql: &str, id: i64) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar::<_, i64>(sql)
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(StorageError::NotFound)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use crate::repository::judge::JudgeRepository;
    use crate::repository::question::QuestionRepository;
    use crate::repository::regatta::RegattaRepository;
    use crate::repository::team::TeamRepository;

    struct Fixture {
        db: Database,
        team_a: i64,
        team_b: i64,
        regatta_id: i64,
        question_id: i64,
        judge_id: i64,
    }

    async fn setup() -> Fixture {
        let db = Database::new("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        db.run_migrations().await.expect("Failed to run migrations");

        let team_a = TeamRepository::new(db.pool())
            .create("Equipe A")
            .await
            .unwrap()
            .team_id;
        let team_b = TeamRepository::new(db.pool())
            .create("Equipe B")
            .await
            .unwrap()
            .team_id;
        let judge_id = JudgeRepository::new(db.pool())
            .create("juiz1")
            .await
            .unwrap()
            .judge_id;
        let regatta = RegattaRepository::new(db.pool())
            .create("Regata 1")
            .await
            .unwrap();
        let regatta = RegattaRepository::new(db.pool())
            .activate(regatta.regatta_id)
            .await
            .unwrap();
        let question_id = QuestionRepository::new(db.pool())
            .create(regatta.regatta_id, "facil", "", b"png", "q1.png")
            .await
            .unwrap()
            .question_id;

        Fixture {
            db,
            team_a,
            team_b,
            regatta_id: regatta.regatta_id,
            question_id,
            judge_id,
        }
    }

    #[test]
    fn points_table_for_correct_attempts() {
        assert_eq!(points_for_attempt(1, true), 100);
        assert_eq!(points_for_attempt(2, true), 80);
        assert_eq!(points_for_attempt(3, true), 50);
    }

    #[test]
    fn incorrect_attempts_award_nothing() {
        for numero in 0..=5 {
            assert_eq!(points_for_attempt(numero, false), 0);
        }
    }

    #[test]
    fn out_of_range_attempt_numbers_award_nothing() {
        assert_eq!(points_for_attempt(0, true), 0);
        assert_eq!(points_for_attempt(4, true), 0);
        assert_eq!(points_for_attempt(-1, true), 0);
    }

    #[tokio::test]
    async fn correct_on_first_attempt_awards_100() {
        let f = setup().await;

        let result = register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();

        assert_eq!(
            result,
            AttemptResult {
                numero: 1,
                acertou: true,
                pontos: 100
            }
        );
    }

    #[tokio::test]
    async fn miss_then_hit_awards_80_then_rejects() {
        let f = setup().await;

        let first = register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        assert_eq!(
            first,
            AttemptResult {
                numero: 1,
                acertou: false,
                pontos: 0
            }
        );

        let second = register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();
        assert_eq!(
            second,
            AttemptResult {
                numero: 2,
                acertou: true,
                pontos: 80
            }
        );

        let third = register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id).await;
        assert!(matches!(third, Err(ScoringError::AlreadyCorrect)));
    }

    #[tokio::test]
    async fn correct_on_third_attempt_awards_50() {
        let f = setup().await;

        register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        let result = register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();

        assert_eq!(result.numero, 3);
        assert_eq!(result.pontos, 50);
    }

    #[tokio::test]
    async fn three_misses_then_exhausted() {
        let f = setup().await;

        for expected_numero in 1..=3 {
            let result =
                register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id)
                    .await
                    .unwrap();
            assert_eq!(result.numero, expected_numero);
            assert_eq!(result.pontos, 0);
            assert!(!result.acertou);
        }

        let fourth =
            register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id).await;
        assert!(matches!(fourth, Err(ScoringError::AttemptsExhausted)));
    }

    #[tokio::test]
    async fn rejection_is_idempotent_and_ledger_stops_growing() {
        let f = setup().await;

        for _ in 0..3 {
            register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id)
                .await
                .unwrap();
        }

        for _ in 0..5 {
            let rejected =
                register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id).await;
            assert!(matches!(rejected, Err(ScoringError::AttemptsExhausted)));
        }

        let ledger = AttemptRepository::new(f.db.pool())
            .list_for_pair(f.team_a, f.question_id)
            .await
            .unwrap();
        assert_eq!(ledger.len(), 3);
    }

    #[tokio::test]
    async fn ledger_stays_well_formed() {
        let f = setup().await;

        register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();
        let _ = register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id).await;
        let _ = register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id).await;

        let ledger = AttemptRepository::new(f.db.pool())
            .list_for_pair(f.team_a, f.question_id)
            .await
            .unwrap();

        assert!(ledger.len() <= MAX_ATTEMPTS);
        for (i, row) in ledger.iter().enumerate() {
            assert_eq!(row.numero, i as i64 + 1);
        }
        assert_eq!(ledger.iter().filter(|a| a.acertou).count(), 1);
        assert!(ledger.last().unwrap().acertou);
        for row in &ledger {
            assert!(row.pontos == 0 || row.acertou);
        }
    }

    #[tokio::test]
    async fn unknown_references_are_storage_errors() {
        let f = setup().await;

        let no_team = register_attempt(f.db.pool(), 9999, f.question_id, true, f.judge_id).await;
        assert!(matches!(
            no_team,
            Err(ScoringError::Storage(StorageError::NotFound))
        ));

        let no_question = register_attempt(f.db.pool(), f.team_a, 9999, true, f.judge_id).await;
        assert!(matches!(
            no_question,
            Err(ScoringError::Storage(StorageError::NotFound))
        ));

        let no_judge = register_attempt(f.db.pool(), f.team_a, f.question_id, true, 9999).await;
        assert!(matches!(
            no_judge,
            Err(ScoringError::Storage(StorageError::NotFound))
        ));

        let ledger = AttemptRepository::new(f.db.pool())
            .list_for_pair(f.team_a, f.question_id)
            .await
            .unwrap();
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn leaderboard_ranks_by_total_points() {
        let f = setup().await;

        // Equipe A: first-try hit, 100 points
        register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();
        // Equipe B: miss then hit, 80 points
        register_attempt(f.db.pool(), f.team_b, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        register_attempt(f.db.pool(), f.team_b, f.question_id, true, f.judge_id)
            .await
            .unwrap();

        let ranking = compute_leaderboard(f.db.pool(), LeaderboardScope::Regatta(f.regatta_id))
            .await
            .unwrap();

        assert_eq!(
            ranking,
            vec![
                LeaderboardEntry {
                    equipe: "Equipe A".into(),
                    pontos: 100
                },
                LeaderboardEntry {
                    equipe: "Equipe B".into(),
                    pontos: 80
                },
            ]
        );
    }

    #[tokio::test]
    async fn teams_without_attempts_appear_with_zero() {
        let f = setup().await;

        register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();

        let ranking = compute_leaderboard(f.db.pool(), LeaderboardScope::Global)
            .await
            .unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[1].equipe, "Equipe B");
        assert_eq!(ranking[1].pontos, 0);
    }

    #[tokio::test]
    async fn ties_break_by_team_name_ascending() {
        let f = setup().await;

        let ranking = compute_leaderboard(f.db.pool(), LeaderboardScope::Global)
            .await
            .unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].equipe, "Equipe A");
        assert_eq!(ranking[1].equipe, "Equipe B");
        assert_eq!(ranking[0].pontos, 0);
        assert_eq!(ranking[1].pontos, 0);
    }

    #[tokio::test]
    async fn regatta_scope_excludes_other_regattas() {
        let f = setup().await;

        let other_regatta = RegattaRepository::new(f.db.pool())
            .create("Regata 2")
            .await
            .unwrap();
        let other_question = QuestionRepository::new(f.db.pool())
            .create(other_regatta.regatta_id, "dificil", "", b"png", "q2.png")
            .await
            .unwrap();

        // Equipe B scores only in the other regatta
        register_attempt(
            f.db.pool(),
            f.team_b,
            other_question.question_id,
            true,
            f.judge_id,
        )
        .await
        .unwrap();
        // Equipe A scores in the first regatta
        register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();

        let scoped = compute_leaderboard(f.db.pool(), LeaderboardScope::Regatta(f.regatta_id))
            .await
            .unwrap();
        assert_eq!(scoped[0].equipe, "Equipe A");
        assert_eq!(scoped[0].pontos, 100);
        assert_eq!(scoped[1].equipe, "Equipe B");
        assert_eq!(scoped[1].pontos, 0);

        let global = compute_leaderboard(f.db.pool(), LeaderboardScope::Global)
            .await
            .unwrap();
        assert_eq!(global[0].pontos, 100);
        assert_eq!(global[1].pontos, 100);
    }

    #[tokio::test]
    async fn attempt_status_tracks_pair_state() {
        let f = setup().await;

        let fresh = attempt_status(f.db.pool(), f.team_a, f.question_id)
            .await
            .unwrap();
        assert!(fresh.attempts.is_empty());
        assert!(!fresh.ja_acertou);
        assert!(!fresh.esgotado);

        register_attempt(f.db.pool(), f.team_a, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();

        let after = attempt_status(f.db.pool(), f.team_a, f.question_id)
            .await
            .unwrap();
        assert_eq!(after.attempts.len(), 2);
        assert!(after.ja_acertou);
        assert!(!after.esgotado);

        register_attempt(f.db.pool(), f.team_b, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        register_attempt(f.db.pool(), f.team_b, f.question_id, false, f.judge_id)
            .await
            .unwrap();
        register_attempt(f.db.pool(), f.team_b, f.question_id, false, f.judge_id)
            .await
            .unwrap();

        let exhausted = attempt_status(f.db.pool(), f.team_b, f.question_id)
            .await
            .unwrap();
        assert!(!exhausted.ja_acertou);
        assert!(exhausted.esgotado);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn racing_registrations_never_overfill_a_pair() {
        let f = setup().await;

        let mut handles = Vec::new();
        for _ in 0..6 {
            let db = f.db.clone();
            let (team_id, question_id, judge_id) = (f.team_a, f.question_id, f.judge_id);
            handles.push(tokio::spawn(async move {
                register_attempt(db.pool(), team_id, question_id, false, judge_id).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(ScoringError::AttemptsExhausted) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 3);

        let ledger = AttemptRepository::new(f.db.pool())
            .list_for_pair(f.team_a, f.question_id)
            .await
            .unwrap();
        assert_eq!(ledger.len(), 3);
        for (i, row) in ledger.iter().enumerate() {
            assert_eq!(row.numero, i as i64 + 1);
        }
    }

    // A file-backed pool hands racers distinct connections; BEGIN IMMEDIATE
    // queues them on the write lock, so every outcome is a success or a
    // designed rejection, never a busy error.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn file_backed_racers_serialize_instead_of_erroring() {
        let path = format!("/tmp/regata-scoring-race-{}.db", std::process::id());
        let _ = std::fs::remove_file(&path);

        let db = Database::new(&format!("sqlite://{path}"))
            .await
            .expect("Failed to create test database");
        db.run_migrations().await.expect("Failed to run migrations");

        let team_id = TeamRepository::new(db.pool())
            .create("Equipe A")
            .await
            .unwrap()
            .team_id;
        let judge_id = JudgeRepository::new(db.pool())
            .create("juiz1")
            .await
            .unwrap()
            .judge_id;
        let regatta = RegattaRepository::new(db.pool())
            .create("Regata 1")
            .await
            .unwrap();
        let question_id = QuestionRepository::new(db.pool())
            .create(regatta.regatta_id, "facil", "", b"png", "q1.png")
            .await
            .unwrap()
            .question_id;

        let mut handles = Vec::new();
        for _ in 0..6 {
            let db = db.clone();
            handles.push(tokio::spawn(async move {
                register_attempt(db.pool(), team_id, question_id, false, judge_id).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(ScoringError::AttemptsExhausted) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 3);

        let ledger = AttemptRepository::new(db.pool())
            .list_for_pair(team_id, question_id)
            .await
            .unwrap();
        assert_eq!(ledger.len(), 3);

        drop(db);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn referenced_rows_cannot_be_deleted() {
        let f = setup().await;

        register_attempt(f.db.pool(), f.team_a, f.question_id, true, f.judge_id)
            .await
            .unwrap();

        let team_delete = TeamRepository::new(f.db.pool()).delete(f.team_a).await;
        assert!(matches!(
            team_delete,
            Err(StorageError::ConstraintViolation(_))
        ));

        let question_delete = QuestionRepository::new(f.db.pool())
            .delete(f.question_id)
            .await;
        assert!(matches!(
            question_delete,
            Err(StorageError::ConstraintViolation(_))
        ));

        let regatta_delete = RegattaRepository::new(f.db.pool()).delete(f.regatta_id).await;
        assert!(matches!(
            regatta_delete,
            Err(StorageError::ConstraintViolation(_))
        ));

        let judge_delete = JudgeRepository::new(f.db.pool()).delete(f.judge_id).await;
        assert!(matches!(
            judge_delete,
            Err(StorageError::ConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn activation_keeps_at_most_one_active() {
        let f = setup().await;

        let second = RegattaRepository::new(f.db.pool())
            .create("Regata 2")
            .await
            .unwrap();
        let activated = RegattaRepository::new(f.db.pool())
            .activate(second.regatta_id)
            .await
            .unwrap();
        assert!(activated.active);

        let regattas = RegattaRepository::new(f.db.pool()).list().await.unwrap();
        let active: Vec<_> = regattas.iter().filter(|r| r.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].regatta_id, second.regatta_id);
    }
}

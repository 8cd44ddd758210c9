use axum::{extract::State, routing::post, Json, Router};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_question_by_id, get_question_ids, get_question_ids_for_category},
        Question,
    },
    quiz::{select_next, CandidatePool},
    server::{app::AppState, deserializers::QuizCategory, extractors::ApiJson},
    telemetry::QUIZ_QUESTION_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<i64>,
    #[serde(default)]
    quiz_category: QuizCategory,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> ApiResponse<QuizResponse> {
    let candidates = CandidatePool::for_category(request.quiz_category.id);
    let ids = match candidates {
        CandidatePool::All => get_question_ids(&pool).await?,
        CandidatePool::Category(id) => get_question_ids_for_category(&pool, id).await?,
    };

    let mut rng = StdRng::from_entropy();
    let question = match select_next(&ids, &request.previous_questions, &mut rng) {
        Some(id) => get_question_by_id(&pool, id).await?,
        None => None,
    };

    match &question {
        Some(q) => {
            QUIZ_QUESTION_CNTR
                .with_label_values(&[candidates.label().as_str()])
                .inc();
            tracing::debug!(id = q.id, ?candidates, "Serving quiz question");
        }
        None => tracing::debug!(
            ?candidates,
            served = request.previous_questions.len(),
            "Quiz has no questions left"
        ),
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}

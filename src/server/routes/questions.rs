use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{current_category_name, get_category_map},
            questions::{self, get_all_questions, search_questions},
        },
        CategoryMap, NewQuestion, Question,
    },
    pagination::{first_page, paginate},
    server::{
        app::AppState,
        deserializers::{deserialize_optional_number, deserialize_page},
        error::ApiError,
        extractors::{ApiJson, ApiPath, ApiQuery},
    },
};

use super::{ApiResponse, PageQuery};

#[derive(Deserialize)]
struct ListingQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    page: i64,
    category: Option<i64>,
}

#[derive(Deserialize)]
struct QuestionForm {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    category: Option<i64>,
}

impl QuestionForm {
    fn validate(self) -> Option<NewQuestion> {
        let question = self.question.filter(|q| !q.is_empty())?;
        let answer = self.answer.filter(|a| !a.is_empty())?;
        Some(NewQuestion {
            question,
            answer,
            difficulty: self.difficulty?,
            category: self.category?,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody {
    #[serde(default)]
    search_term: Option<String>,
    #[serde(default)]
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct QuestionListing {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: CategoryMap,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<ListingQuery>,
) -> ApiResponse<QuestionListing> {
    let questions = get_all_questions(&pool).await?;
    let total_questions = questions.len();
    let questions = paginate(questions, query.page);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_category_map(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    let current_category = current_category_name(&categories, query.category);
    Ok(Json(QuestionListing {
        success: true,
        questions,
        total_questions,
        categories,
        current_category,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    ApiQuery(PageQuery { page }): ApiQuery<PageQuery>,
    ApiJson(form): ApiJson<QuestionForm>,
) -> ApiResponse<Created> {
    let Some(new_question) = form.validate() else {
        tracing::info!("Rejected question with missing fields");
        return Err(ApiError::Unprocessable);
    };
    let created = questions::create_question(&pool, &new_question)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "Failed to store question");
            ApiError::Unprocessable
        })?;
    tracing::info!(id = created, "Created question");

    let questions = get_all_questions(&pool).await?;
    let total_questions = questions.len();
    Ok(Json(Created {
        success: true,
        created,
        questions: paginate(questions, page),
        total_questions,
    }))
}

async fn search(
    State(pool): State<SqlitePool>,
    ApiQuery(PageQuery { page }): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<SearchResults> {
    let term = body.search_term.unwrap_or_default();
    let questions = search_questions(&pool, &term).await?;
    let total_questions = questions.len();
    let categories = get_category_map(&pool).await?;
    Ok(Json(SearchResults {
        success: true,
        questions: paginate(questions, page),
        total_questions,
        current_category: current_category_name(&categories, body.current_category),
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(PageQuery { page }): ApiQuery<PageQuery>,
) -> ApiResponse<Deleted> {
    let id = i64::from(id);
    let deleted = questions::delete_question(&pool, id).await.map_err(|err| {
        tracing::warn!(error = %err, id, "Failed to delete question");
        ApiError::Unprocessable
    })?;
    if deleted == 0 {
        tracing::info!(id, "Question to delete does not exist");
        return Err(ApiError::Unprocessable);
    }
    tracing::info!(id, "Deleted question");

    let questions = get_all_questions(&pool).await?;
    let total_questions = questions.len();
    Ok(Json(Deleted {
        success: true,
        deleted: id,
        questions: paginate(questions, page),
        total_questions,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/search", post(search))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}

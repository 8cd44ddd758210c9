use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_category, get_category_map},
            questions::get_questions_for_category,
        },
        CategoryMap, Question,
    },
    pagination::paginate,
    server::{
        app::AppState,
        error::ApiError,
        extractors::{ApiPath, ApiQuery},
    },
};

use super::{ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: CategoryMap,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = get_category_map(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn get_questions_by_category(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(PageQuery { page }): ApiQuery<PageQuery>,
) -> ApiResponse<CategoryQuestions> {
    let id = i64::from(id);
    let questions = get_questions_for_category(&pool, id).await?;
    let total_questions = questions.len();
    let questions = paginate(questions, page);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    // questions may point at a category that has no row
    let current_category = get_category(&pool, id).await?.map(|c| c.name);
    Ok(Json(CategoryQuestions {
        success: true,
        questions,
        total_questions,
        current_category,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_questions_by_category))
        .with_state(state)
}

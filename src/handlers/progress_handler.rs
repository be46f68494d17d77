use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::CurrentUser,
    errors::AppError,
    models::dto::{
        request::{TrackSessionRequest, UpdateProgressRequest},
        response::ProgressResponse,
    },
};

#[post("/api/progress")]
async fn update_progress(
    state: web::Data<AppState>,
    request: web::Json<UpdateProgressRequest>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let progress = state
        .progress_service
        .update_progress(user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[post("/api/progress/session")]
async fn track_session(
    state: web::Data<AppState>,
    request: web::Json<TrackSessionRequest>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .progress_service
        .track_session(user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/progress/{course_id}")]
async fn get_progress(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let progress = state
        .progress_service
        .get_progress(user.id(), &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(ProgressResponse::from(progress)))
}

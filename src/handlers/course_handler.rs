use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::CurrentUser,
    errors::AppError,
    models::dto::{
        request::{CreateCourseRequest, UpdateCourseRequest},
        response::MessageResponse,
    },
};

#[post("/api/courses")]
async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_course(user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/api/courses")]
async fn list_my_courses(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list_courses_for(user.id()).await?;
    Ok(HttpResponse::Ok().json(courses))
}

// Registered before `get_course` so "all" is not read as an id.
#[get("/api/courses/all")]
async fn list_all_courses(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list_all_courses().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/api/courses/{id}")]
async fn get_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[put("/api/courses/{id}")]
async fn update_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateCourseRequest>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_course(&id, user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/api/courses/{id}")]
async fn delete_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete_course(&id, user.id()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Course and associated quizzes removed",
    )))
}

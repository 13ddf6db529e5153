/**
 * Dashboard Handlers
 *
 * Role-gated dashboard endpoints. Each route is guarded for exactly one
 * role; a valid token of any other role gets a 403. Widget content is
 * assembled by the frontend; these handlers return the authenticated
 * profile the dashboards key off.
 */

use axum::response::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::envelope::ApiResponse;
use crate::shared::user::UserData;

/// GET /api/dashboard/student
pub async fn student_dashboard(AuthUser(auth): AuthUser) -> Json<ApiResponse<UserData>> {
    tracing::debug!("Student dashboard request for {}", auth.user.id);
    Json(ApiResponse::ok(UserData { user: auth.user }))
}

/// GET /api/dashboard/teacher
pub async fn teacher_dashboard(AuthUser(auth): AuthUser) -> Json<ApiResponse<UserData>> {
    tracing::debug!("Teacher dashboard request for {}", auth.user.id);
    Json(ApiResponse::ok(UserData { user: auth.user }))
}

/// GET /api/dashboard/society
pub async fn society_dashboard(AuthUser(auth): AuthUser) -> Json<ApiResponse<UserData>> {
    tracing::debug!("Society dashboard request for {}", auth.user.id);
    Json(ApiResponse::ok(UserData { user: auth.user }))
}

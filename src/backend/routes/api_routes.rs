/**
 * API Route Handlers
 *
 * Wires the auth and dashboard endpoints. Public routes carry no guard;
 * protected routes run the auth middleware, and each dashboard route
 * additionally requires its own role.
 */

use axum::{
    extract::Request,
    middleware::{self, Next},
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, signup, verify};
use crate::backend::dashboard::handlers::{
    society_dashboard, student_dashboard, teacher_dashboard,
};
use crate::backend::middleware::auth::{auth_middleware, guard_role};
use crate::backend::server::state::AppState;
use crate::shared::role::Role;

/// Configure API routes
///
/// ## Public Routes
///
/// - `POST /api/auth/signup` - User registration (role-email rule applied)
/// - `POST /api/auth/login` - User login
/// - `POST /api/auth/verify` - Token verification
///
/// ## Protected Routes (Bearer token via the auth middleware)
///
/// - `GET /api/auth/me` - Current user
/// - `GET /api/dashboard/student` - Requires role `student`
/// - `GET /api/dashboard/teacher` - Requires role `teacher`
/// - `GET /api/dashboard/society` - Requires role `society`
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route(
            "/api/dashboard/student",
            get(student_dashboard).route_layer(middleware::from_fn(
                |request: Request, next: Next| guard_role(Role::Student, request, next),
            )),
        )
        .route(
            "/api/dashboard/teacher",
            get(teacher_dashboard).route_layer(middleware::from_fn(
                |request: Request, next: Next| guard_role(Role::Teacher, request, next),
            )),
        )
        .route(
            "/api/dashboard/society",
            get(society_dashboard).route_layer(middleware::from_fn(
                |request: Request, next: Next| guard_role(Role::Society, request, next),
            )),
        )
        // The auth middleware wraps every protected route, so role guards
        // always see an AuthenticatedUser in extensions.
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify", post(verify))
        .merge(protected)
}

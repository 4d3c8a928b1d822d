use axum::{
    Router,
    routing::{get, post, put},
};

use campus_core::middleware::with_request_tracing;

use crate::handlers::{
    engagement::{add_interest, rate_comment, remove_interest},
    faculty::{
        attach_department, get_faculty, list_faculty_course_department_faculties,
        list_faculty_moderators,
    },
    health::{healthz, readyz},
    membership::{
        join_course_department_faculty, join_department_faculty, leave_course_department_faculty,
        leave_department_faculty,
    },
    question::{
        attach_question_tag, create_question, delete_question, detach_question_tag, get_question,
        list_questions, update_question,
    },
    user::{change_password, delete_user, get_me, get_profile, get_user, register_user, update_me},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(register_user))
        .route("/users/@me", get(get_me).patch(update_me))
        .route("/users/@me/password", put(change_password))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .route("/users/{id}/profile", get(get_profile))
        // Memberships
        .route(
            "/users/@me/department-faculties/{id}",
            put(join_department_faculty).delete(leave_department_faculty),
        )
        .route(
            "/users/@me/course-department-faculties/{id}",
            put(join_course_department_faculty).delete(leave_course_department_faculty),
        )
        // Questions
        .route("/questions", get(list_questions).post(create_question))
        .route(
            "/questions/{id}",
            get(get_question)
                .patch(update_question)
                .delete(delete_question),
        )
        .route(
            "/questions/{id}/tags/{tag_id}",
            put(attach_question_tag).delete(detach_question_tag),
        )
        // Faculties
        .route("/faculties/{id}", get(get_faculty))
        .route("/faculties/{id}/moderators", get(list_faculty_moderators))
        .route(
            "/faculties/{id}/course-department-faculties",
            get(list_faculty_course_department_faculties),
        )
        .route(
            "/faculties/{id}/departments/{department_id}",
            put(attach_department),
        )
        // Engagement
        .route(
            "/events/{id}/interest",
            put(add_interest).delete(remove_interest),
        )
        .route("/comments/{id}/rate", put(rate_comment));
    with_request_tracing(routes).with_state(state)
}

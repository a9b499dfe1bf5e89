pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::editor::handlers as editor;
use crate::state::AppState;
use crate::storage::handlers as storage;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Identity
        .route("/api/v1/me", get(storage::handle_me))
        // Resume CRUD
        .route(
            "/api/v1/resumes",
            get(storage::handle_list_resumes).post(storage::handle_save_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(storage::handle_get_resume).delete(storage::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/duplicate",
            post(storage::handle_duplicate_resume),
        )
        .route(
            "/api/v1/resumes/:id/export",
            get(storage::handle_export_resume),
        )
        // Image upload (multipart; bigger than the 2MB image cap so the
        // size check rejects with a clear message instead of a 413)
        .route(
            "/api/v1/images",
            post(storage::handle_upload_image).layer(DefaultBodyLimit::max(4 * 1024 * 1024)),
        )
        // Editor sessions
        .route("/api/v1/editor/sessions", post(editor::handle_open_session))
        .route(
            "/api/v1/editor/sessions/:id",
            get(editor::handle_get_session)
                .delete(editor::handle_close_session)
                .patch(editor::handle_edit_session),
        )
        .route(
            "/api/v1/editor/sessions/:id/save",
            post(editor::handle_save_session),
        )
        .route(
            "/api/v1/editor/sessions/:id/preview",
            get(editor::handle_preview_session),
        )
        .route(
            "/api/v1/editor/sessions/:id/ai/summary",
            post(editor::handle_ai_summary),
        )
        .route(
            "/api/v1/editor/sessions/:id/ai/improve",
            post(editor::handle_ai_improve),
        )
        .route(
            "/api/v1/editor/sessions/:id/ai/autofill",
            post(editor::handle_ai_autofill),
        )
        // AI connection test
        .route("/api/v1/ai/test", post(ai_handlers::handle_test_connection))
        .with_state(state)
}

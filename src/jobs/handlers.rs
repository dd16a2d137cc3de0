use super::queue::JobQueue;
use super::registry::JobHandlerRegistry;
use super::types::{JobId, JobStatusResponse, SubmitJobRequest, SubmitJobResponse};
use crate::error::AppError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_submit_job(
    Extension(queue): Extension<Arc<JobQueue>>,
    Extension(registry): Extension<Arc<JobHandlerRegistry>>,
    Json(req): Json<SubmitJobRequest>,
) -> Result<(StatusCode, Json<SubmitJobResponse>), AppError> {
    if !registry.has_handler(&req.handler) {
        return Err(AppError::Validation(format!(
            "unknown job handler '{}' (available: {})",
            req.handler,
            registry.list_handlers().join(", ")
        )));
    }

    let job_id = queue.submit(&req.handler)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmitJobResponse {
            job_id: job_id.0,
            handler: req.handler,
        }),
    ))
}

pub async fn handle_job_status(
    Path(id): Path<String>,
    Extension(queue): Extension<Arc<JobQueue>>,
) -> Result<Json<JobStatusResponse>, AppError> {
    let job_id = JobId(id);
    let entry = queue
        .get(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {}", job_id.0)))?;

    Ok(Json(JobStatusResponse {
        job_id: job_id.0,
        entry,
    }))
}

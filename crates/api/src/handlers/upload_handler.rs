//! Image upload handler.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart,
    },
    response::Json,
    routing::post,
    Router,
};

use common::{AppError, AppResult};
use domain::ImageUpload;

use crate::state::AppState;

/// Multipart part that carries the image
pub const IMAGE_FIELD: &str = "image";

/// Content type reported when the client sends none
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/post-image", post(post_image))
}

/// Report the name, content type and size of an uploaded image.
pub async fn post_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ImageUpload>> {
    let mut multipart =
        multipart.map_err(|e| AppError::from_rejection(e.status(), e.body_text()))?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::invalid_field(IMAGE_FIELD, "Image must be sent as a file"))?;
        let format = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let upload = ImageUpload::new(filename, format, bytes.len());
        tracing::info!(
            filename = %upload.filename,
            size_kb = upload.size_kb,
            "Image uploaded"
        );
        return Ok(Json(upload));
    }

    Err(AppError::invalid_field(IMAGE_FIELD, "Image file is required"))
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::from_rejection(e.status(), e.body_text())
}

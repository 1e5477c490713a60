//! QR code generation endpoint.

use axum::Json;
use axum::body::Body;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use qr_engine::{GenerateParams, PipelineError};

use super::err_json;

/// POST /generate
///
/// Streams the rendered image back with an attachment disposition.
/// Parameters arrive in the query string: `content` and `format` are
/// required, `size`, `color`, and `error_correction` optional.
pub async fn generate_qr_code(
    Query(params): Query<GenerateParams>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    // The pipeline is CPU-bound; keep it off the async worker threads.
    let image = tokio::task::spawn_blocking(move || qr_engine::generate(&params))
        .await
        .map_err(|e| err_json(500, &format!("generation task failed: {e}")))?
        .map_err(map_pipeline_error)?;

    let resp = Response::builder()
        .header(header::CONTENT_TYPE, image.media_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", image.file_name),
        )
        .body(Body::from(image.data))
        .map_err(|e| err_json(500, &e.to_string()))?;
    Ok(resp)
}

/// Map pipeline error kinds to distinguishable HTTP statuses.
fn map_pipeline_error(err: PipelineError) -> (StatusCode, Json<Value>) {
    tracing::warn!("QR generation failed: {err}");
    let status = match err {
        PipelineError::Validation(_) => 400,
        PipelineError::Encoding(_) => 422,
        PipelineError::Render(_) => 400,
    };
    err_json(status, &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(content: &str, format: &str) -> GenerateParams {
        GenerateParams {
            content: content.into(),
            size: None,
            color: None,
            error_correction: None,
            format: format.into(),
        }
    }

    #[tokio::test]
    async fn generate_returns_png_attachment() {
        let resp = generate_qr_code(Query(params("https://example.com", "PNG")))
            .await
            .expect("generation should succeed");

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=qr_code.png"
        );
    }

    #[tokio::test]
    async fn empty_content_maps_to_bad_request() {
        let (status, body) = generate_qr_code(Query(params("", "png")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0["error"].as_str().unwrap().contains("content"));
    }

    #[tokio::test]
    async fn oversized_content_maps_to_unprocessable() {
        let mut p = params(&"A".repeat(5000), "png");
        p.error_correction = Some("H".into());
        let (status, _) = generate_qr_code(Query(p)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unsupported_format_maps_to_bad_request() {
        let (status, _) = generate_qr_code(Query(params("hello", "gif")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

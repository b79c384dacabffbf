//! Prometheus metrics for gallery-service.
//!
//! Exposes gallery collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, Encoder, HistogramVec,
    IntCounter, IntCounterVec, TextEncoder,
};
use std::time::Duration;

lazy_static! {
    /// Total posts shared to the gallery.
    pub static ref POSTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "gallery_posts_created_total",
        "Total posts shared to the gallery"
    )
    .expect("failed to register gallery_posts_created_total");

    /// Total images generated from text prompts.
    pub static ref IMAGES_GENERATED_TOTAL: IntCounter = register_int_counter!(
        "gallery_images_generated_total",
        "Total images generated from text prompts"
    )
    .expect("failed to register gallery_images_generated_total");

    /// Duration of upstream calls by target (openai, cloudinary).
    pub static ref UPSTREAM_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "upstream_request_duration_seconds",
        "Upstream request duration segmented by target",
        &["target"]
    )
    .expect("failed to register upstream_request_duration_seconds");

    /// Upstream call outcomes by target (success/error).
    pub static ref UPSTREAM_REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "upstream_request_total",
        "Total upstream requests segmented by target and outcome",
        &["target", "result"]
    )
    .expect("failed to register upstream_request_total");
}

/// Record one upstream call with its duration and outcome.
pub fn record_upstream(target: &str, elapsed: Duration, ok: bool) {
    UPSTREAM_REQUEST_DURATION_SECONDS
        .with_label_values(&[target])
        .observe(elapsed.as_secs_f64());

    let result = if ok { "success" } else { "error" };
    UPSTREAM_REQUEST_TOTAL
        .with_label_values(&[target, result])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use bids_core::diagnostics::{run_diagnostic, DiagnosticReport, TextGenerator, DIAGNOSTIC_PROMPT};
use bids_core::llm::GenerationConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DiagnosticState {
    pub config: GenerationConfig,
    pub generator: Arc<dyn TextGenerator + Send + Sync>,
}

pub fn diagnostic_router(state: DiagnosticState) -> Router {
    Router::new()
        .route("/api/test-openai", get(handle_test_openai))
        .with_state(state)
}

async fn handle_test_openai(
    State(state): State<DiagnosticState>,
) -> (StatusCode, Json<serde_json::Value>) {
    // The secret is re-checked per request; its absence is a checked
    // condition, not a crash.
    let key_present = state.config.key_present();
    eprintln!(
        "diagnostic: {} present={key_present}",
        state.config.api_key_env
    );

    let report = if key_present {
        eprintln!("diagnostic: sending prompt: {DIAGNOSTIC_PROMPT}");
        let generator = state.generator.clone();
        match tokio::task::spawn_blocking(move || run_diagnostic(true, generator.as_ref())).await {
            Ok(report) => report,
            Err(_) => DiagnosticReport::Unavailable {
                error: "Unknown error".into(),
            },
        }
    } else {
        run_diagnostic(false, state.generator.as_ref())
    };

    match &report {
        DiagnosticReport::Ready { .. } => eprintln!("diagnostic: openai call succeeded"),
        DiagnosticReport::Unavailable { error } => eprintln!("diagnostic: unavailable: {error}"),
    }

    let status = StatusCode::from_u16(report.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(report.to_json()))
}

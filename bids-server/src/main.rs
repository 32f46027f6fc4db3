mod diag;

use bids_core::llm::{GenerationConfig, OpenAiGenerator};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = GenerationConfig::from_env();
    if !config.key_present() {
        eprintln!(
            "warning: {} is not set; /api/test-openai will report unavailable",
            config.api_key_env
        );
    }

    let state = diag::DiagnosticState {
        generator: Arc::new(OpenAiGenerator::new(config.clone())),
        config,
    };
    let app = diag::diagnostic_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("bind :8080");

    println!("bids-server listening on :8080");
    axum::serve(listener, app).await.expect("serve");
}

use serde_json::{json, Value};

/// Fixed prompt for the connectivity probe. Exploratory only; nothing else
/// depends on the wording.
pub const DIAGNOSTIC_PROMPT: &str = "Say \"Hello from OpenAI.\" and nothing else.";

/// Seam for the external text-generation call so the endpoint can be tested
/// without touching the network.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticReport {
    Ready { response: String },
    Unavailable { error: String },
}

impl DiagnosticReport {
    pub fn http_status(&self) -> u16 {
        match self {
            DiagnosticReport::Ready { .. } => 200,
            DiagnosticReport::Unavailable { .. } => 500,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            DiagnosticReport::Ready { response } => json!({
                "success": true,
                "response": response,
                "available": true,
            }),
            DiagnosticReport::Unavailable { error } => json!({
                "error": error,
                "available": false,
            }),
        }
    }
}

/// Runs the diagnostic. A missing secret short-circuits before the external
/// call; any generator failure is relayed with its message, falling back to
/// "Unknown error" when the message is blank.
pub fn run_diagnostic(key_present: bool, generator: &dyn TextGenerator) -> DiagnosticReport {
    if !key_present {
        return DiagnosticReport::Unavailable {
            error: "OPENAI_API_KEY is not configured".into(),
        };
    }

    match generator.generate(DIAGNOSTIC_PROMPT) {
        Ok(response) => DiagnosticReport::Ready { response },
        Err(message) => DiagnosticReport::Unavailable {
            error: if message.trim().is_empty() {
                "Unknown error".into()
            } else {
                message
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct CountingGenerator {
        calls: Cell<usize>,
        result: RefCell<Result<String, String>>,
    }

    impl CountingGenerator {
        fn succeeding(response: &str) -> Self {
            Self {
                calls: Cell::new(0),
                result: RefCell::new(Ok(response.to_string())),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Cell::new(0),
                result: RefCell::new(Err(message.to_string())),
            }
        }
    }

    impl TextGenerator for CountingGenerator {
        fn generate(&self, _prompt: &str) -> Result<String, String> {
            self.calls.set(self.calls.get() + 1);
            self.result.borrow().clone()
        }
    }

    #[test]
    fn missing_key_skips_the_external_call() {
        let generator = CountingGenerator::succeeding("Hello from OpenAI.");
        let report = run_diagnostic(false, &generator);

        assert_eq!(generator.calls.get(), 0);
        assert_eq!(report.http_status(), 500);
        let body = report.to_json();
        assert_eq!(body["available"], false);
        assert_eq!(body["error"], "OPENAI_API_KEY is not configured");
    }

    #[test]
    fn success_relays_the_response() {
        let generator = CountingGenerator::succeeding("Hello from OpenAI.");
        let report = run_diagnostic(true, &generator);

        assert_eq!(generator.calls.get(), 1);
        assert_eq!(report.http_status(), 200);
        let body = report.to_json();
        assert_eq!(body["success"], true);
        assert_eq!(body["response"], "Hello from OpenAI.");
        assert_eq!(body["available"], true);
    }

    #[test]
    fn generator_failure_relays_the_message() {
        let generator = CountingGenerator::failing("rate limited");
        let report = run_diagnostic(true, &generator);

        assert_eq!(report.http_status(), 500);
        let body = report.to_json();
        assert_eq!(body["error"], "rate limited");
        assert_eq!(body["available"], false);
    }

    #[test]
    fn blank_failure_message_becomes_unknown_error() {
        let generator = CountingGenerator::failing("  ");
        let report = run_diagnostic(true, &generator);

        let body = report.to_json();
        assert_eq!(body["error"], "Unknown error");
    }

    #[test]
    fn generator_receives_the_fixed_prompt() {
        struct PromptCapture(RefCell<String>);
        impl TextGenerator for PromptCapture {
            fn generate(&self, prompt: &str) -> Result<String, String> {
                *self.0.borrow_mut() = prompt.to_string();
                Ok(String::new())
            }
        }

        let capture = PromptCapture(RefCell::new(String::new()));
        run_diagnostic(true, &capture);
        assert_eq!(*capture.0.borrow(), DIAGNOSTIC_PROMPT);
    }
}

pub mod boundary;
pub mod diagnostics;
#[cfg(feature = "openai")]
pub mod llm;
pub mod selection;
pub mod vendor;

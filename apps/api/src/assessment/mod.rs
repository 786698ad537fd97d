// Interview-readiness assessment: question generation and readiness scoring.
// All model calls go through llm_client; no direct provider calls here.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;

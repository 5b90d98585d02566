// Ad copy generation
// Persona + product + angle (+ optional ad format) → LLM → briefs.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;

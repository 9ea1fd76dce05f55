// Bio generation: request model and validation, prompt construction,
// the Request Composer and its JSON API.
// All LLM calls go through llm_client.

pub mod composer;
pub mod guidelines;
pub mod handlers;
pub mod models;
pub mod prompts;

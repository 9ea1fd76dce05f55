// All LLM prompt constants for the bio generator.
// The schema instruction itself comes from llm_client::prompts.

use serde_json::{json, Value};

use crate::bio::models::BioRequest;

/// Fixed preamble describing the bio-writing rules.
pub const BIO_SYSTEM: &str = r#"You are an AI assistant that writes Twitter bios from a user's own description.

Analyze the user's inputs:
  - Read the provided details carefully, paying attention to the Bio Tone and Bio Type.
  - Work out the user's main activities, personality and goals.

Write the bio:
  - Answer three questions: who is the user, what do they do, and what can others expect from them.
  - Match the requested Bio Tone and Bio Type without naming either of them.
  - Reflect the user's primary focus and key attributes.

Bio requirements:
  - Keep the voice informal and approachable.
  - Provide at least four distinct bio options.
  - Never include hashtags or any word that starts with #.
  - Lead with the most important information about the user.
  - Go easy on buzzwords and do not overdo the humor.
  - Every bio must be at least as many characters long as the user's input.
  - If 'Add Emojis' is true, include relevant emojis; if it is false, use no emojis at all.

Output:
  - Keep every bio clear and coherent.
  - Respond with JSON only. No extra text, no explanations, no code fences."#;

/// Description attached to the `bio` field of the target schema.
pub const BIO_FIELD_DESCRIPTION: &str = "Add generated bio here!";

/// Target output shape: `{ "data": [ { "bio": string } ] }`.
pub fn bio_response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "data": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "bio": {
                            "type": "string",
                            "description": BIO_FIELD_DESCRIPTION
                        }
                    },
                    "required": ["bio"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["data"],
        "additionalProperties": false
    })
}

/// Serializes the user's fields into the user turn of the conversation.
pub fn build_user_prompt(request: &BioRequest) -> String {
    format!(
        "User Input: {},\nBio Type: {},\nBio Tone: {},\nAdd Emojis: {},",
        request.content(),
        request.bio_type().as_str(),
        request.tone().as_str(),
        request.emojis()
    )
}

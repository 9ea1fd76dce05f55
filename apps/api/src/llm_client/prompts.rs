// Shared prompt fragments for structured (JSON) output.
// Feature prompts live next to the feature that uses them.

use serde_json::Value;

/// Appends a JSON schema to a system prompt, instructing the model to answer
/// with a single object that matches it.
pub fn with_schema_instruction(system: &str, schema: &Value) -> String {
    format!(
        "{}\n\nJSON schema:\n{}\nYou MUST answer with a JSON object that matches the JSON schema above.",
        system.trim_end(),
        schema
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_is_appended_after_system_prompt() {
        let schema = json!({"type": "object"});
        let prompt = with_schema_instruction("Write bios.\n\n", &schema);
        assert!(prompt.starts_with("Write bios.\n\nJSON schema:\n"));
        assert!(prompt.contains(r#"{"type":"object"}"#));
        assert!(prompt.ends_with("matches the JSON schema above."));
    }
}

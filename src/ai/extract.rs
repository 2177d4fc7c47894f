use serde::Serialize;
use serde_json::Value;

const FENCE: &str = "```";
const SECTION_DELIMITER: &str = "**";

const OPTIMIZED_PROMPT_HEADER: &str = "Optimized System Prompt";
const DATA_REQUIREMENTS_HEADER: &str = "Data Requirements";
const JSON_SCHEMA_HEADER: &str = "Structured Output JSON";

/// The three artifacts pulled out of a single model reply. Each field is
/// independently empty when its section is missing or malformed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Extraction {
    pub optimized_prompt: String,
    pub data_requirements: String,
    pub json_schema: String,
}

/// Best-effort scan of the raw reply. The reply is partitioned on the `**`
/// emphasis markers the instruction asks the model to use; for each fragment
/// containing a known header phrase, the following fragment is that section's
/// content. No section ordering is enforced and a header phrase appearing in
/// ordinary text will be picked up too.
pub fn extract_sections(reply: &str) -> Extraction {
    let fragments: Vec<&str> = reply.split(SECTION_DELIMITER).collect();
    let mut result = Extraction::default();

    for (i, fragment) in fragments.iter().enumerate() {
        let Some(content) = fragments.get(i + 1) else {
            break;
        };

        if fragment.contains(OPTIMIZED_PROMPT_HEADER) {
            result.optimized_prompt = fenced_body(content, &["markdown", "md"]);
        }
        if fragment.contains(DATA_REQUIREMENTS_HEADER) {
            // Markdown table, kept verbatim
            result.data_requirements = content.trim().to_string();
        }
        if fragment.contains(JSON_SCHEMA_HEADER) {
            result.json_schema = format_json(&fenced_body(content, &["json"]));
        }
    }

    result
}

/// Pulls the body out of a ```-fenced block, dropping a recognized leading
/// language tag. Falls back to the raw content when there is no fence or the
/// fence markers are malformed (fewer than 3 parts after the split).
fn fenced_body(raw: &str, language_tags: &[&str]) -> String {
    let raw = raw.trim();
    if !raw.contains(FENCE) {
        return raw.to_string();
    }

    let parts: Vec<&str> = raw.split(FENCE).collect();
    if parts.len() < 3 {
        return raw.to_string();
    }

    let body = parts[1];
    for tag in language_tags {
        if let Some(rest) = body.strip_prefix(tag) {
            return rest.trim().to_string();
        }
    }
    body.trim().to_string()
}

/// Re-indents valid JSON canonically; invalid text passes through unchanged.
pub fn format_json(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "**Optimized System Prompt:** \n```markdown\nYou are helpful.\n```\n**Data Requirements:**\n| Field | Type |\n|---|---|\n| Name | VARCHAR |\n**Structured Output JSON:**\n```json\n{\"name\":\"string\"}\n```";

    #[test]
    fn well_formed_reply_yields_all_three_sections() {
        let result = extract_sections(FULL_REPLY);

        assert_eq!(result.optimized_prompt, "You are helpful.");
        assert!(result.data_requirements.contains("| Name | VARCHAR |"));
        assert_eq!(result.json_schema, "{\n  \"name\": \"string\"\n}");
    }

    #[test]
    fn missing_data_requirements_header_leaves_only_that_field_empty() {
        let reply = "**Optimized System Prompt:**\n```markdown\nBe concise.\n```\n**Structured Output JSON:**\n```json\n{\"id\": 1}\n```";
        let result = extract_sections(reply);

        assert_eq!(result.optimized_prompt, "Be concise.");
        assert!(result.data_requirements.is_empty());
        assert_eq!(result.json_schema, "{\n  \"id\": 1\n}");
    }

    #[test]
    fn header_as_last_fragment_yields_empty_field() {
        let result = extract_sections("Some preamble **Structured Output JSON:");
        assert!(result.json_schema.is_empty());
        assert!(result.optimized_prompt.is_empty());
    }

    #[test]
    fn no_headers_yields_all_empty() {
        let result = extract_sections("The model ignored the format entirely.");
        assert!(result.optimized_prompt.is_empty());
        assert!(result.data_requirements.is_empty());
        assert!(result.json_schema.is_empty());
    }

    #[test]
    fn unfenced_prompt_content_is_used_as_is() {
        let reply = "**Optimized System Prompt:**\nYou are a travel agent.\n**Data Requirements:**\n| A | B |";
        let result = extract_sections(reply);
        assert_eq!(result.optimized_prompt, "You are a travel agent.");
    }

    #[test]
    fn unclosed_fence_falls_back_to_raw_content() {
        let reply = "**Optimized System Prompt:**\n```markdown\nDangling fence\n**Data Requirements:**\n| A | B |";
        let result = extract_sections(reply);
        assert_eq!(result.optimized_prompt, "```markdown\nDangling fence");
    }

    #[test]
    fn md_language_tag_is_stripped() {
        let reply = "**Optimized System Prompt:**\n```md\nShort form tag.\n```\ntrailing";
        let result = extract_sections(reply);
        assert_eq!(result.optimized_prompt, "Short form tag.");
    }

    #[test]
    fn untagged_fence_body_is_taken_directly() {
        let reply = "**Structured Output JSON:**\n```\nnot json at all\n```";
        let result = extract_sections(reply);
        assert_eq!(result.json_schema, "not json at all");
    }

    #[test]
    fn invalid_json_passes_through_unchanged() {
        let reply = "**Structured Output JSON:**\n```json\n{broken: ,}\n```";
        let result = extract_sections(reply);
        assert_eq!(result.json_schema, "{broken: ,}");
    }

    #[test]
    fn json_formatting_is_idempotent() {
        let once = format_json("{\"b\":2,\"a\":{\"c\":[1,2]}}");
        let twice = format_json(&once);
        assert_eq!(once, twice);
    }
}

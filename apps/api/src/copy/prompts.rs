// LLM prompt constants for copy generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for ad copy — enforces JSON-only output.
pub const COPY_SYSTEM: &str = "You are a senior beauty copywriter writing paid social ads. \
    You write for one specific customer persona at a time. \
    You MUST respond with valid JSON only — a JSON array of copy objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Copy generation prompt template.
/// Replace: {brand_voice}, {zone_instruction}, {persona_context}, {product},
///          {angle}, {format_context}, {count}
pub const COPY_PROMPT_TEMPLATE: &str = r#"{brand_voice}

{zone_instruction}

PERSONA (write only for this person):
{persona_context}

PRODUCT: {product}
ANGLE: {angle}

AD FORMAT:
{format_context}

Write {count} distinct ad copy variants. Return a JSON ARRAY:
[
  {
    "headline": "Two minutes. Zero fuss.",
    "body": "One balm for lips and cheeks, so the school run doesn't wait on your routine.",
    "cta": "Shop the balm"
  }
]

HARD RULES:
1. Use the persona's own language where it fits; never use words from their avoid list
2. Each variant must take a different hook on the same angle
3. Return exactly {count} objects"#;

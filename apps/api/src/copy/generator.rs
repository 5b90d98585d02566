//! Copy generation — builds a persona-grounded prompt, calls the LLM and turns
//! the drafts into briefs.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::copy::models::{AdFormat, Brief, CopyDraft, GenerateCopyRequest};
use crate::copy::prompts::{COPY_PROMPT_TEMPLATE, COPY_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, BRAND_VOICE_INSTRUCTION, ZONE_LIMIT_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};
use crate::personas::ParsedPersona;

const DEFAULT_VARIANTS: usize = 3;
const MAX_VARIANTS: usize = 10;
/// Per-list cap on persona details included in the prompt.
const CONTEXT_ITEMS: usize = 5;

pub fn variant_count(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_VARIANTS).clamp(1, MAX_VARIANTS)
}

/// Runs one generation round for `persona`.
pub async fn generate_briefs(
    llm: &LlmClient,
    persona: &ParsedPersona,
    request: &GenerateCopyRequest,
) -> Result<Vec<Brief>, AppError> {
    let count = variant_count(request.count);
    let prompt = build_copy_prompt(persona, request, count);

    info!(
        "Generating {} copy variants for persona {} ({})",
        count, persona.id, request.product
    );

    let drafts: Vec<CopyDraft> = llm.call_json(&prompt, COPY_SYSTEM).await?;
    let briefs = drafts_to_briefs(persona, request, drafts, count);

    if briefs.is_empty() {
        return Err(AppError::Llm(LlmError::EmptyContent));
    }
    Ok(briefs)
}

/// Fills the copy template. Pure; the persona's language lists, fears,
/// desires and matching messaging-angle hooks become prompt context.
pub fn build_copy_prompt(
    persona: &ParsedPersona,
    request: &GenerateCopyRequest,
    count: usize,
) -> String {
    let format_context = request
        .format
        .as_ref()
        .map(format_context)
        .unwrap_or_else(|| "Unconstrained (headline, body, cta).".to_string());

    let persona_context = persona_context(persona, &request.angle);
    let count = count.to_string();

    fill_template(
        COPY_PROMPT_TEMPLATE,
        &[
            ("brand_voice", BRAND_VOICE_INSTRUCTION),
            ("zone_instruction", ZONE_LIMIT_INSTRUCTION),
            ("persona_context", persona_context.as_str()),
            ("product", request.product.trim()),
            ("angle", request.angle.trim()),
            ("format_context", format_context.as_str()),
            ("count", count.as_str()),
        ],
    )
}

fn persona_context(persona: &ParsedPersona, angle: &str) -> String {
    let mut lines = vec![format!("Name: {}", persona.name)];

    if !persona.percentage.is_empty() {
        lines.push(format!("Share of customers: {}", persona.percentage));
    }
    if !persona.identity_snapshot.is_empty() {
        lines.push(format!("Snapshot: {}", persona.identity_snapshot));
    }

    let lists: [(&str, &[String]); 5] = [
        ("Desires", &persona.desires),
        ("Fears", &persona.fears),
        ("Purchase triggers", &persona.purchase_triggers),
        ("Words that resonate", &persona.language_resonates),
        ("Words to avoid", &persona.language_avoid),
    ];
    for (label, items) in lists {
        if !items.is_empty() {
            lines.push(format!("{label}: {}", join_limited(items)));
        }
    }

    if !persona.voc_quotes.is_empty() {
        lines.push("In their own words:".to_string());
        lines.extend(
            persona
                .voc_quotes
                .iter()
                .take(CONTEXT_ITEMS)
                .map(|q| format!("  \"{q}\"")),
        );
    }

    if let Some(matching) = persona
        .messaging_angles
        .iter()
        .find(|a| a.theme.eq_ignore_ascii_case(angle.trim()))
    {
        if !matching.hooks.is_empty() {
            lines.push(format!(
                "Proven hooks for this angle: {}",
                join_limited(&matching.hooks)
            ));
        }
    }

    lines.join("\n")
}

fn join_limited(items: &[String]) -> String {
    items
        .iter()
        .take(CONTEXT_ITEMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_context(format: &AdFormat) -> String {
    let mut lines = vec![format!("Format: {}", format.name)];
    for zone in &format.zones {
        let mut line = format!("- {}", zone.name);
        if let Some(max) = zone.max_chars {
            line.push_str(&format!(" (max {max} chars)"));
        }
        if let Some(guidance) = zone.guidance.as_deref().filter(|g| !g.trim().is_empty()) {
            line.push_str(&format!(": {}", guidance.trim()));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Names of the zones whose character limit `draft` exceeds.
pub fn zone_violations(format: &AdFormat, draft: &CopyDraft) -> Vec<String> {
    format
        .zones
        .iter()
        .filter_map(|zone| {
            let max = zone.max_chars?;
            let text = draft.zone_text(&zone.name)?;
            (text.chars().count() > max).then(|| zone.name.clone())
        })
        .collect()
}

/// Drops blank drafts, keeps at most `count`, and stamps each as a brief.
/// Over-limit drafts are kept and logged; the designer trims them.
pub fn drafts_to_briefs(
    persona: &ParsedPersona,
    request: &GenerateCopyRequest,
    drafts: Vec<CopyDraft>,
    count: usize,
) -> Vec<Brief> {
    let created_at = Utc::now();

    drafts
        .into_iter()
        .filter(|d| !d.is_blank())
        .take(count)
        .map(|draft| {
            if let Some(format) = &request.format {
                let over = zone_violations(format, &draft);
                if !over.is_empty() {
                    warn!(
                        "Copy draft exceeds zone limits {:?} for format '{}': {:?}",
                        over,
                        format.name,
                        draft.headline.chars().take(60).collect::<String>()
                    );
                }
            }

            Brief {
                id: Uuid::new_v4(),
                persona_id: persona.id.clone(),
                persona_name: persona.name.clone(),
                product: request.product.trim().to_string(),
                angle: request.angle.trim().to_string(),
                format_name: request.format.as_ref().map(|f| f.name.clone()),
                headline: draft.headline.trim().to_string(),
                body: draft.body.trim().to_string(),
                cta: draft.cta.trim().to_string(),
                created_at,
            }
        })
        .collect()
}

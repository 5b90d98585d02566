//! Persona Assembler — turns one persona training document into a `ParsedPersona`.
//!
//! Every field is extracted independently from the same text, so a malformed
//! section only ever empties its own field.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::personas::fields::{
    block_quotes, bullet_list, labeled_bold, numbered_list, strip_bold, strip_quotes, table_map,
    table_rows,
};
use crate::personas::models::{
    CopyExamples, MessagingAngle, Objection, ParsedPersona, ProductAffinity,
};
use crate::personas::sections::{
    extract_lead, extract_section, first_heading, split_subsections,
};

static PERCENTAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~?\d+%").unwrap());
static ANGLE_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());

const PERCENTAGE_LABEL: &str = "Percentage of Customer Base";
const VOC_SECTION: &str = "Voice of Customer";
const GOLD_SECTION: &str = "Gold Nugget Quotes";

/// Bounds applied when collecting voice-of-customer quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Quotes taken from the "Voice of Customer" section.
    pub voc_primary_limit: usize,
    /// Quotes taken from the "Gold Nugget Quotes" section.
    pub voc_gold_limit: usize,
    /// Quotes longer than this (in chars) are discarded.
    pub voc_max_chars: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            voc_primary_limit: 5,
            voc_gold_limit: 10,
            voc_max_chars: 200,
        }
    }
}

/// Pure and total: always returns a fully-shaped record.
pub fn parse_persona(document: &str, filename: &str, opts: &ParseOptions) -> ParsedPersona {
    let section = |heading: &str, level: usize| extract_section(document, heading, level);
    let prose = |heading: &str, level: usize| extract_lead(document, heading, level);

    ParsedPersona {
        id: persona_id(filename),
        name: strip_bold(&first_heading(document, 1)),
        percentage: extract_percentage(document),
        identity_snapshot: prose("Identity Snapshot", 2),
        demographics: table_map(&section("Demographics", 2)),
        core_identity_traits: bullet_list(&section("Core Identity Traits", 3)),
        values: numbered_list(&section("Values", 3)),
        worldview: prose("Worldview", 3),
        fears: bullet_list(&section("Fears", 3)),
        desires: bullet_list(&section("Desires", 3)),
        frustrations: bullet_list(&section("Frustrations", 3)),
        guilty_pleasures: bullet_list(&section("Guilty Pleasures", 3)),
        jobs_functional: numbered_list(&section("Functional Jobs", 3)),
        jobs_emotional: numbered_list(&section("Emotional Jobs", 3)),
        jobs_social: numbered_list(&section("Social Jobs", 3)),
        purchase_triggers: bullet_list(&section("Purchase Triggers", 3)),
        purchase_objections: table_rows(&section("Purchase Objections", 3))
            .into_iter()
            .map(|(objection, response)| Objection {
                objection,
                response,
            })
            .collect(),
        day_in_life: prose("A Day in the Life", 2),
        messaging_angles: messaging_angles(&section("Messaging Angles", 2)),
        language_resonates: bullet_list(&section("Language That Resonates", 3)),
        language_avoid: bullet_list(&section("Language to Avoid", 3)),
        voc_quotes: voc_quotes(&section(VOC_SECTION, 2), &section(GOLD_SECTION, 2), opts),
        product_affinities: table_rows(&section("Product Affinities", 2))
            .into_iter()
            .map(|(product, reason)| ProductAffinity { product, reason })
            .collect(),
        copy_examples: copy_examples(&section("Copy Examples", 2)),
    }
}

/// File stem, e.g. `creative-entrepreneur.md` → `creative-entrepreneur`.
fn persona_id(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

fn extract_percentage(document: &str) -> String {
    let value = labeled_bold(document, PERCENTAGE_LABEL);
    PERCENTAGE_RE
        .find(&value)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn messaging_angles(section: &str) -> Vec<MessagingAngle> {
    split_subsections(section, 3)
        .into_iter()
        .filter_map(|(heading, body)| {
            let caps = ANGLE_HEADING_RE.captures(&heading)?;
            Some(MessagingAngle {
                theme: strip_bold(&caps[1]),
                hooks: bullet_list(&body)
                    .iter()
                    .map(|hook| strip_quotes(hook))
                    .filter(|hook| !hook.is_empty())
                    .collect(),
            })
        })
        .collect()
}

/// First `voc_primary_limit` quotes of the primary section followed by the
/// first `voc_gold_limit` of the gold section, minus over-long quotes and
/// exact duplicates.
fn voc_quotes(primary: &str, gold: &str, opts: &ParseOptions) -> Vec<String> {
    let mut seen = HashSet::new();

    block_quotes(primary)
        .into_iter()
        .take(opts.voc_primary_limit)
        .chain(block_quotes(gold).into_iter().take(opts.voc_gold_limit))
        .filter(|quote| quote.chars().count() <= opts.voc_max_chars)
        .filter(|quote| seen.insert(quote.clone()))
        .collect()
}

fn copy_examples(section: &str) -> CopyExamples {
    let hook_section = extract_section(section, "Ad Hook", 3);
    let ad_hook = block_quotes(&hook_section)
        .into_iter()
        .next()
        .unwrap_or_else(|| {
            hook_section
                .lines()
                .filter_map(|line| line.trim().strip_prefix('>'))
                .map(strip_quotes)
                .find(|line| !line.is_empty())
                .unwrap_or_default()
        });

    CopyExamples {
        ad_hook,
        email_subjects: bullet_list(&extract_section(section, "Email Subject Lines", 3))
            .iter()
            .map(|s| strip_quotes(s))
            .collect(),
        ctas: bullet_list(&extract_section(section, "CTAs", 3))
            .iter()
            .map(|s| strip_quotes(s))
            .collect(),
    }
}

//! Keyword-driven prompt interpreter.
//!
//! A prompt is trimmed, lower-cased and run through a fixed, ordered table of
//! rules. The first rule that recognises the text decides the resulting view;
//! later rules are never consulted. Text no rule recognises falls through to
//! a reset of the whole view.

use std::fmt;

use tracing::debug;

use crate::models::{Campaign, FilterCriteria, FilterPatch, Metric, StatusFilter};
use crate::queries::campaigns::{apply_filters, CampaignQuery};

const CTR_TERMS: &[&str] = &["ctr", "click through rate", "click-through rate"];
const RANK_TERMS: &[&str] = &["top", "best", "highest"];
const PAUSED_TERMS: &[&str] = &["paused", "inactive"];
const ACTIVE_TERMS: &[&str] = &["active", "running"];

// ---------------------------------------------------------------------------
// PromptIntent
// ---------------------------------------------------------------------------

/// What a prompt was recognised as asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptIntent {
    /// Whole dataset ranked by CTR, leader highlighted.
    TopByCtr,
    /// Status filter merged into the current criteria.
    FilterStatus(StatusFilter),
    /// Whole dataset ranked by a metric, leader highlighted.
    BestBy(Metric),
    /// A single campaign whose name contains the prompt.
    NameMatch { id: String, name: String },
    /// Whole dataset ranked by a metric, nothing highlighted.
    SortBy(Metric),
    /// Nothing recognised: criteria back to defaults, full dataset.
    Reset,
}

impl fmt::Display for PromptIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptIntent::TopByCtr => write!(f, "Top campaigns by CTR"),
            PromptIntent::FilterStatus(status) => {
                write!(f, "Showing {} campaigns", status.as_str().to_lowercase())
            }
            PromptIntent::BestBy(metric) => write!(f, "Best performing by {}", metric),
            PromptIntent::NameMatch { name, .. } => write!(f, "Found campaign \"{}\"", name),
            PromptIntent::SortBy(metric) => write!(f, "All campaigns sorted by {}", metric),
            PromptIntent::Reset => write!(f, "Prompt not recognised; filters reset"),
        }
    }
}

// ---------------------------------------------------------------------------
// PromptOutcome
// ---------------------------------------------------------------------------

/// The view a prompt produces.
#[derive(Debug, Clone)]
pub struct PromptOutcome<'a> {
    pub intent: PromptIntent,
    pub campaigns: Vec<&'a Campaign>,
    pub highlighted: Option<String>,
    /// Replacement criteria, when the prompt changes them.
    pub criteria: Option<FilterCriteria>,
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

type Matcher = fn(&str, &[Campaign]) -> Option<PromptIntent>;

struct Rule {
    name: &'static str,
    matcher: Matcher,
}

/// Evaluated top to bottom; the first match wins.
const RULES: [Rule; 8] = [
    Rule { name: "top-by-ctr", matcher: match_top_by_ctr },
    Rule { name: "paused-status", matcher: match_paused },
    Rule { name: "active-status", matcher: match_active },
    Rule { name: "best-performing", matcher: match_best_performing },
    Rule { name: "name-match", matcher: match_name },
    Rule { name: "sort-by-conversions", matcher: match_sort_by_conversions },
    Rule { name: "sort-by-clicks", matcher: match_sort_by_clicks },
    Rule { name: "reset", matcher: match_reset },
];

/// Names of the interpreter rules in precedence order.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|r| r.name).collect()
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

fn match_top_by_ctr(prompt: &str, _: &[Campaign]) -> Option<PromptIntent> {
    (contains_any(prompt, CTR_TERMS) && contains_any(prompt, RANK_TERMS)).then_some(PromptIntent::TopByCtr)
}

// "inactive" contains "active", so this must run before `match_active`.
fn match_paused(prompt: &str, _: &[Campaign]) -> Option<PromptIntent> {
    contains_any(prompt, PAUSED_TERMS).then_some(PromptIntent::FilterStatus(StatusFilter::Paused))
}

fn match_active(prompt: &str, _: &[Campaign]) -> Option<PromptIntent> {
    contains_any(prompt, ACTIVE_TERMS).then_some(PromptIntent::FilterStatus(StatusFilter::Active))
}

fn match_best_performing(prompt: &str, _: &[Campaign]) -> Option<PromptIntent> {
    if !contains_any(prompt, RANK_TERMS) {
        return None;
    }
    let metric = if prompt.contains("conversion") {
        Metric::Conversions
    } else if prompt.contains("click") {
        Metric::Clicks
    } else if prompt.contains("impression") {
        Metric::Impressions
    } else {
        Metric::Conversions
    };
    Some(PromptIntent::BestBy(metric))
}

fn match_name(prompt: &str, campaigns: &[Campaign]) -> Option<PromptIntent> {
    if prompt.is_empty() {
        return None;
    }
    CampaignQuery::new(campaigns)
        .find_by_name(prompt)
        .map(|c| PromptIntent::NameMatch {
            id: c.id.clone(),
            name: c.name.clone(),
        })
}

fn match_sort_by_conversions(prompt: &str, _: &[Campaign]) -> Option<PromptIntent> {
    (prompt.contains("conversion") && !contains_any(prompt, RANK_TERMS))
        .then_some(PromptIntent::SortBy(Metric::Conversions))
}

fn match_sort_by_clicks(prompt: &str, _: &[Campaign]) -> Option<PromptIntent> {
    (prompt.contains("click") && !contains_any(prompt, RANK_TERMS)).then_some(PromptIntent::SortBy(Metric::Clicks))
}

fn match_reset(_: &str, _: &[Campaign]) -> Option<PromptIntent> {
    Some(PromptIntent::Reset)
}

// ---------------------------------------------------------------------------
// Interpreter
// ---------------------------------------------------------------------------

pub fn normalize(prompt: &str) -> String {
    prompt.trim().to_lowercase()
}

/// Recognise a prompt without building the resulting view.
pub fn classify(prompt: &str, campaigns: &[Campaign]) -> PromptIntent {
    let normalized = normalize(prompt);
    for rule in &RULES {
        if let Some(intent) = (rule.matcher)(&normalized, campaigns) {
            debug!(rule = rule.name, prompt = %normalized, "prompt rule matched");
            return intent;
        }
    }
    PromptIntent::Reset
}

/// Interpret `prompt` against `campaigns`.
///
/// `current` is the criteria in force before the prompt; status prompts merge
/// into it rather than starting from defaults.
pub fn interpret_prompt<'a>(prompt: &str, campaigns: &'a [Campaign], current: &FilterCriteria) -> PromptOutcome<'a> {
    let intent = classify(prompt, campaigns);
    build_outcome(intent, &normalize(prompt), campaigns, current)
}

fn build_outcome<'a>(
    intent: PromptIntent,
    prompt: &str,
    campaigns: &'a [Campaign],
    current: &FilterCriteria,
) -> PromptOutcome<'a> {
    let query = CampaignQuery::new(campaigns);

    let (view, highlighted, criteria) = match &intent {
        PromptIntent::TopByCtr => {
            let ranked = query.ranked_by(Metric::Ctr);
            let top = ranked.first().map(|c| c.id.clone());
            (ranked, top, None)
        }
        PromptIntent::FilterStatus(status) => {
            let next = current.merge(&FilterPatch::new().status(*status));
            (apply_filters(campaigns, &next), None, Some(next))
        }
        PromptIntent::BestBy(metric) => {
            let ranked = query.ranked_by(*metric);
            let top = ranked.first().map(|c| c.id.clone());
            (ranked, top, None)
        }
        // Ids are not guaranteed unique, so the view comes from the same
        // name search the rule ran rather than an id lookup.
        PromptIntent::NameMatch { .. } => {
            let matched = query.find_by_name(prompt);
            (matched.into_iter().collect(), matched.map(|c| c.id.clone()), None)
        }
        PromptIntent::SortBy(metric) => (query.ranked_by(*metric), None, None),
        PromptIntent::Reset => (query.all(), None, Some(FilterCriteria::default())),
    };

    PromptOutcome {
        intent,
        campaigns: view,
        highlighted,
        criteria,
    }
}

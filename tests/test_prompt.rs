//! Prompt interpreter tests: rule precedence and the views each rule builds.

mod common;

use common::{campaign, fixture_campaigns, ids};
use marketiq::queries::prompt::{classify, interpret_prompt, normalize, rule_names};
use marketiq::queries::apply_filters;
use marketiq::{FilterCriteria, FilterPatch, Metric, PromptIntent, StatusFilter};

fn defaults() -> FilterCriteria {
    FilterCriteria::default()
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

#[test]
fn rules_are_evaluated_in_documented_order() {
    assert_eq!(
        rule_names(),
        vec![
            "top-by-ctr",
            "paused-status",
            "active-status",
            "best-performing",
            "name-match",
            "sort-by-conversions",
            "sort-by-clicks",
            "reset",
        ]
    );
}

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Show TOP Campaigns \n"), "show top campaigns");
}

// ---------------------------------------------------------------------------
// Rule 1: top by CTR
// ---------------------------------------------------------------------------

#[test]
fn top_by_ctr_sorts_full_dataset_and_highlights_leader() {
    let campaigns = fixture_campaigns();
    let out = interpret_prompt("show top campaigns by ctr", &campaigns, &defaults());

    assert_eq!(out.intent, PromptIntent::TopByCtr);
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["4", "1", "3", "2"]);
    assert_eq!(out.highlighted.as_deref(), Some("4"));
    assert!(out.criteria.is_none());
}

#[test]
fn ctr_synonyms_are_recognised() {
    let campaigns = fixture_campaigns();
    for prompt in [
        "highest click through rate",
        "best click-through rate please",
        "Top CTR",
    ] {
        assert_eq!(classify(prompt, &campaigns), PromptIntent::TopByCtr, "prompt: {}", prompt);
    }
}

#[test]
fn ctr_without_ranking_word_is_not_rule_one() {
    let campaigns = fixture_campaigns();
    assert_eq!(classify("what is the ctr", &campaigns), PromptIntent::Reset);
}

#[test]
fn ctr_rule_wins_over_best_performing_metrics() {
    let campaigns = fixture_campaigns();
    assert_eq!(
        classify("top ctr and conversions", &campaigns),
        PromptIntent::TopByCtr
    );
}

#[test]
fn ctr_rule_wins_over_status_words() {
    let campaigns = fixture_campaigns();
    assert_eq!(
        classify("best ctr among paused campaigns", &campaigns),
        PromptIntent::TopByCtr
    );
}

#[test]
fn ctr_rule_keeps_current_criteria_even_when_view_ignores_it() {
    let campaigns = fixture_campaigns();
    let current = defaults().merge(&FilterPatch::new().status(StatusFilter::Active));
    let out = interpret_prompt("top ctr", &campaigns, &current);

    // Ranks the full dataset, paused campaigns included.
    assert_eq!(out.campaigns.len(), 4);
    assert!(out.criteria.is_none());
}

#[test]
fn ctr_rule_on_empty_dataset_highlights_nothing() {
    let out = interpret_prompt("top ctr", &[], &defaults());
    assert_eq!(out.intent, PromptIntent::TopByCtr);
    assert!(out.campaigns.is_empty());
    assert!(out.highlighted.is_none());
}

// ---------------------------------------------------------------------------
// Rules 2 and 3: status filters
// ---------------------------------------------------------------------------

#[test]
fn paused_prompt_filters_to_paused() {
    let campaigns = fixture_campaigns();
    let out = interpret_prompt("list paused campaigns", &campaigns, &defaults());

    assert_eq!(out.intent, PromptIntent::FilterStatus(StatusFilter::Paused));
    let expected_criteria = defaults().merge(&FilterPatch::new().status(StatusFilter::Paused));
    assert_eq!(out.criteria.as_ref(), Some(&expected_criteria));
    assert_eq!(
        ids(out.campaigns.iter().copied()),
        ids(apply_filters(&campaigns, &expected_criteria))
    );
    assert!(out.highlighted.is_none());
}

#[test]
fn inactive_means_paused_not_active() {
    let campaigns = fixture_campaigns();
    assert_eq!(
        classify("show inactive campaigns", &campaigns),
        PromptIntent::FilterStatus(StatusFilter::Paused)
    );
}

#[test]
fn active_and_running_filter_to_active() {
    let campaigns = fixture_campaigns();
    for prompt in ["active campaigns", "what is running right now"] {
        let out = interpret_prompt(prompt, &campaigns, &defaults());
        assert_eq!(out.intent, PromptIntent::FilterStatus(StatusFilter::Active));
        assert_eq!(ids(out.campaigns.iter().copied()), vec!["1", "3"]);
    }
}

#[test]
fn status_prompt_merges_into_current_criteria() {
    let campaigns = fixture_campaigns();
    let current = defaults().merge(&FilterPatch::new().search_query("summer"));
    let out = interpret_prompt("paused", &campaigns, &current);

    let criteria = out.criteria.unwrap();
    assert_eq!(criteria.status, StatusFilter::Paused);
    assert_eq!(criteria.search_query, "summer");
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["4"]);
}

#[test]
fn status_rules_win_over_best_performing() {
    let campaigns = fixture_campaigns();
    assert_eq!(
        classify("best active campaign", &campaigns),
        PromptIntent::FilterStatus(StatusFilter::Active)
    );
}

#[test]
fn status_rules_win_over_name_match() {
    let mut campaigns = fixture_campaigns();
    campaigns.push(campaign("5", "Active Lifestyle"));
    assert_eq!(
        classify("active lifestyle", &campaigns),
        PromptIntent::FilterStatus(StatusFilter::Active)
    );
}

// ---------------------------------------------------------------------------
// Rule 4: best performing
// ---------------------------------------------------------------------------

#[test]
fn best_performing_defaults_to_conversions() {
    let campaigns = fixture_campaigns();
    let out = interpret_prompt("best performing campaign", &campaigns, &defaults());

    assert_eq!(out.intent, PromptIntent::BestBy(Metric::Conversions));
    // 3 and 4 tie on conversions and keep dataset order.
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["2", "3", "4", "1"]);
    assert_eq!(out.highlighted.as_deref(), Some("2"));
    assert!(out.criteria.is_none());
}

#[test]
fn best_performing_three_campaign_example() {
    let mut a = campaign("a", "Alpha");
    a.conversions = 10;
    let mut b = campaign("b", "Beta");
    b.conversions = 30;
    let mut c = campaign("c", "Gamma");
    c.conversions = 20;
    let campaigns = vec![a, b, c];

    let out = interpret_prompt("best performing campaign", &campaigns, &defaults());
    let conversions: Vec<u64> = out.campaigns.iter().map(|c| c.conversions).collect();
    assert_eq!(conversions, vec![30, 20, 10]);
    assert_eq!(out.highlighted.as_deref(), Some("b"));
}

#[test]
fn best_performing_metric_keywords() {
    let campaigns = fixture_campaigns();

    let out = interpret_prompt("top clicks", &campaigns, &defaults());
    assert_eq!(out.intent, PromptIntent::BestBy(Metric::Clicks));
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["3", "2", "1", "4"]);
    assert_eq!(out.highlighted.as_deref(), Some("3"));

    let out = interpret_prompt("Display campaigns with highest impressions", &campaigns, &defaults());
    assert_eq!(out.intent, PromptIntent::BestBy(Metric::Impressions));
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["2", "3", "1", "4"]);
    assert_eq!(out.highlighted.as_deref(), Some("2"));
}

#[test]
fn conversion_keyword_beats_click_and_impression() {
    let campaigns = fixture_campaigns();
    assert_eq!(
        classify("highest conversions and clicks and impressions", &campaigns),
        PromptIntent::BestBy(Metric::Conversions)
    );
    assert_eq!(
        classify("highest clicks and impressions", &campaigns),
        PromptIntent::BestBy(Metric::Clicks)
    );
}

#[test]
fn best_performing_wins_over_name_match() {
    let mut campaigns = fixture_campaigns();
    campaigns.push(campaign("5", "Top Sellers"));
    assert_eq!(
        classify("top sellers", &campaigns),
        PromptIntent::BestBy(Metric::Conversions)
    );
}

// ---------------------------------------------------------------------------
// Rule 5: name match
// ---------------------------------------------------------------------------

#[test]
fn exact_name_in_any_case_selects_single_campaign() {
    let campaigns = fixture_campaigns();
    let out = interpret_prompt("WINTER CLEARANCE", &campaigns, &defaults());

    assert_eq!(
        out.intent,
        PromptIntent::NameMatch {
            id: "2".to_string(),
            name: "Winter Clearance".to_string()
        }
    );
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["2"]);
    assert_eq!(out.highlighted.as_deref(), Some("2"));
    assert!(out.criteria.is_none());
}

#[test]
fn partial_name_matches_first_campaign_in_dataset_order() {
    let campaigns = fixture_campaigns();
    let out = interpret_prompt("  summer ", &campaigns, &defaults());
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["1"]);
    assert_eq!(out.highlighted.as_deref(), Some("1"));
}

#[test]
fn name_match_wins_over_metric_sorts() {
    let mut campaigns = fixture_campaigns();
    campaigns.push(campaign("5", "Click Champions"));
    let out = interpret_prompt("click champ", &campaigns, &defaults());
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["5"]);
}

#[test]
fn name_match_view_shows_matched_campaign_when_ids_repeat() {
    let campaigns = vec![campaign("1", "Alpha"), campaign("1", "Beta")];
    let out = interpret_prompt("beta", &campaigns, &defaults());

    assert_eq!(
        out.intent,
        PromptIntent::NameMatch {
            id: "1".to_string(),
            name: "Beta".to_string()
        }
    );
    let names: Vec<&str> = out.campaigns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Beta"]);
    assert_eq!(out.highlighted.as_deref(), Some("1"));
}

// ---------------------------------------------------------------------------
// Rules 6 and 7: metric sorts
// ---------------------------------------------------------------------------

#[test]
fn conversion_prompt_sorts_without_highlight() {
    let campaigns = fixture_campaigns();
    let current = defaults().merge(&FilterPatch::new().status(StatusFilter::Active));
    let out = interpret_prompt("sort by conversions", &campaigns, &current);

    assert_eq!(out.intent, PromptIntent::SortBy(Metric::Conversions));
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["2", "3", "4", "1"]);
    assert!(out.highlighted.is_none());
    assert!(out.criteria.is_none());
}

#[test]
fn click_prompt_sorts_without_highlight() {
    let campaigns = fixture_campaigns();
    let out = interpret_prompt("Find campaigns with most clicks", &campaigns, &defaults());

    assert_eq!(out.intent, PromptIntent::SortBy(Metric::Clicks));
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["3", "2", "1", "4"]);
    assert!(out.highlighted.is_none());
}

// ---------------------------------------------------------------------------
// Rule 8: fallback
// ---------------------------------------------------------------------------

#[test]
fn unrecognised_prompt_resets_everything() {
    let campaigns = fixture_campaigns();
    let current = defaults()
        .merge(&FilterPatch::new().status(StatusFilter::Paused).search_query("winter"));
    let out = interpret_prompt("asdkjasdk", &campaigns, &current);

    assert_eq!(out.intent, PromptIntent::Reset);
    assert_eq!(ids(out.campaigns.iter().copied()), vec!["1", "2", "3", "4"]);
    assert!(out.highlighted.is_none());
    assert_eq!(out.criteria, Some(FilterCriteria::default()));
}

#[test]
fn blank_prompt_falls_through_to_reset() {
    let campaigns = fixture_campaigns();
    assert_eq!(classify("", &campaigns), PromptIntent::Reset);
    assert_eq!(classify("   \t", &campaigns), PromptIntent::Reset);
}

#[test]
fn every_prompt_on_empty_dataset_is_total() {
    for prompt in ["top ctr", "paused", "active", "best", "anything", "conversions", "clicks", ""] {
        let out = interpret_prompt(prompt, &[], &defaults());
        assert!(out.campaigns.is_empty(), "prompt: {}", prompt);
        assert!(out.highlighted.is_none(), "prompt: {}", prompt);
    }
}

#[test]
fn intent_descriptions_are_readable() {
    assert_eq!(PromptIntent::TopByCtr.to_string(), "Top campaigns by CTR");
    assert_eq!(
        PromptIntent::FilterStatus(StatusFilter::Paused).to_string(),
        "Showing paused campaigns"
    );
    assert_eq!(
        PromptIntent::BestBy(Metric::Clicks).to_string(),
        "Best performing by clicks"
    );
}

//! Destination suggestion
//!
//! Fallback chain: places-API autosuggest, then the knowledge base (interest
//! keywords matched against categories, destination lists interleaved
//! round-robin), then the text model, then the static fallback list. Whatever
//! wins, the output is normalized to exactly `count` case-distinct names.

use std::future::ready;

use tracing::instrument;

use crate::fetch::{Fetched, ModelClient, PlacesClient};
use crate::knowledge;
use crate::parse;
use crate::planner::prompts;
use crate::resolve::{self, Origin, Strategy};

/// Suggest exactly `count` destinations for a free-text interest,
/// comma-joined.
#[instrument(skip(places, model))]
pub async fn suggest(
    places: &PlacesClient,
    model: &ModelClient,
    interest: &str,
    count: usize,
) -> String {
    let prompt = prompts::destinations(interest, count);

    let resolved = resolve::resolve(
        vec![
            Strategy::new(
                Origin::Live,
                places.suggest_places(interest, count),
                |names: &Vec<String>| !names.is_empty(),
            ),
            Strategy::new(
                Origin::KnowledgeBase,
                ready(Fetched::from(from_knowledge(interest, count))),
                move |names: &Vec<String>| names.len() >= count.saturating_sub(1),
            ),
            Strategy::new(
                Origin::Generated,
                async move {
                    model
                        .complete(&prompt)
                        .await
                        .map(|text| parse::split_candidates(&text))
                },
                |names: &Vec<String>| !names.is_empty(),
            ),
        ],
        || {
            knowledge::FALLBACK_DESTINATIONS
                .iter()
                .take(count)
                .map(|s| s.to_string())
                .collect()
        },
    )
    .await;

    resolve::fit_count(resolved.value, knowledge::FALLBACK_DESTINATIONS, count).join(", ")
}

/// Knowledge-base lookup: match every category whose singular or plural form
/// occurs in the interest text, rank by first occurrence, interleave their
/// destination lists round-robin until `count` unique names, and pad from the
/// fallback list. `None` when no category matches.
pub fn from_knowledge(interest: &str, count: usize) -> Option<Vec<String>> {
    let lists = matched_category_lists(interest);
    if lists.is_empty() {
        return None;
    }

    let longest = lists.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut merged: Vec<String> = Vec::new();
    'merge: for i in 0..longest {
        for list in &lists {
            if let Some(name) = list.get(i) {
                if !merged.iter().any(|m| m.eq_ignore_ascii_case(name)) {
                    merged.push((*name).to_string());
                    if merged.len() == count {
                        break 'merge;
                    }
                }
            }
        }
    }

    resolve::pad_unique(&mut merged, knowledge::FALLBACK_DESTINATIONS, count);
    Some(merged)
}

/// Destination lists of the categories appearing in the interest text,
/// ordered by where each keyword first occurs.
fn matched_category_lists(interest: &str) -> Vec<&'static [&'static str]> {
    let interest = interest.to_lowercase();
    let mut found: Vec<(usize, &'static [&'static str])> = Vec::new();

    for (category, list) in knowledge::CATEGORY_DESTINATIONS {
        let position = knowledge::category_forms(category)
            .iter()
            .filter_map(|form| interest.find(form.as_str()))
            .min();
        if let Some(position) = position {
            found.push((position, list));
        }
    }

    found.sort_by_key(|&(position, _)| position);
    found.into_iter().map(|(_, list)| list).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ModelConfig, PlacesConfig};

    fn keyless() -> (PlacesClient, ModelClient) {
        (
            PlacesClient::new(&PlacesConfig::default()).unwrap(),
            ModelClient::new(&ModelConfig::default()).unwrap(),
        )
    }

    #[test]
    fn test_single_category_match() {
        let out = from_knowledge("mountains", 5).unwrap();
        assert_eq!(out, vec!["Nepal", "Peru", "Switzerland", "Bhutan", "Canada"]);
    }

    #[test]
    fn test_singular_form_matches_plural_category() {
        let out = from_knowledge("a mountain trek", 5).unwrap();
        assert_eq!(out[0], "Nepal");
    }

    #[test]
    fn test_interleave_order_follows_text_position() {
        // "mountains" occurs before "beaches", so lists alternate starting
        // with the mountains list
        let out = from_knowledge("mountains and beaches", 5).unwrap();
        assert_eq!(out, vec!["Nepal", "Maldives", "Peru", "Bali", "Switzerland"]);

        let reversed = from_knowledge("beaches and mountains", 5).unwrap();
        assert_eq!(reversed, vec!["Maldives", "Nepal", "Bali", "Peru", "Hawaii"]);
    }

    #[test]
    fn test_no_category_match() {
        assert!(from_knowledge("spelunking", 5).is_none());
    }

    #[test]
    fn test_short_merge_padded_from_fallback_list() {
        let out = from_knowledge("culture", 6).unwrap();
        // culture list has 5 entries; the sixth comes from the fallback pool,
        // skipping names already present
        assert_eq!(out.len(), 6);
        assert_eq!(out[..5], ["Japan", "Italy", "Morocco", "India", "Turkey"]);
        assert_eq!(out[5], "Peru");
    }

    #[tokio::test]
    async fn test_suggest_with_all_sources_down() {
        let (places, model) = keyless();
        let out = suggest(&places, &model, "mountains", 5).await;
        assert_eq!(out, "Nepal, Peru, Switzerland, Bhutan, Canada");
    }

    #[tokio::test]
    async fn test_suggest_unmatched_interest_uses_static_default() {
        let (places, model) = keyless();
        let out = suggest(&places, &model, "xyzzy", 5).await;
        assert_eq!(out, "Japan, Peru, Canada, Nepal, Morocco");
    }

    #[tokio::test]
    async fn test_suggest_always_exactly_count_distinct() {
        let (places, model) = keyless();
        for interest in ["mountains", "beaches and culture", "nothing known"] {
            let out = suggest(&places, &model, interest, 5).await;
            let names: Vec<&str> = out.split(", ").collect();
            assert_eq!(names.len(), 5, "interest {interest:?}");
            let mut lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            assert_eq!(lowered.len(), 5, "duplicates for {interest:?}");
        }
    }

    #[tokio::test]
    async fn test_suggest_respects_configured_count() {
        let (places, model) = keyless();
        let out = suggest(&places, &model, "mountains", 3).await;
        assert_eq!(out, "Nepal, Peru, Switzerland");
    }
}

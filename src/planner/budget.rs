//! Budget estimation
//!
//! Primary path asks the text model for a number and extracts the first digit
//! run; the fallback is the deterministic formula
//! `base_cost(destination) x days x style_multiplier(style)`. The disclaimer
//! wording tells the caller which path produced the figure, and the raw model
//! text rides along when the model answered.

use tracing::{debug, instrument};

use crate::fetch::{Fetched, ModelClient};
use crate::knowledge;
use crate::parse;
use crate::planner::prompts;
use crate::resolve::{self, Origin, Strategy};

/// Disclaimer attached to model-generated estimates
pub const AI_DISCLAIMER: &str =
    "This estimate was generated by an AI model. Actual prices may vary.";

/// Disclaimer attached to formula-calculated estimates
pub const FALLBACK_DISCLAIMER: &str =
    "This is an estimated calculation based on typical costs. Actual prices may vary.";

/// A budget answer: the figure, a human-readable sentence, the raw model
/// text when the model produced the figure, and the source disclaimer.
#[derive(Debug, Clone)]
pub struct BudgetEstimate {
    pub amount: u64,
    pub message: String,
    pub llm_raw: Option<String>,
    pub disclaimer: String,
}

struct Figure {
    amount: u64,
    raw: Option<String>,
}

/// Deterministic estimate in INR: per-day base cost times days times the
/// travel-style multiplier, truncated to an integer.
pub fn formula_amount(destination: &str, days: u32, style: &str) -> u64 {
    let base = knowledge::base_cost(destination) as f64;
    (base * f64::from(days) * knowledge::style_multiplier(style)) as u64
}

/// Estimate a trip budget, preferring the model and degrading to the formula.
#[instrument(skip(model))]
pub async fn estimate(
    model: &ModelClient,
    destination: &str,
    days: u32,
    style: &str,
) -> BudgetEstimate {
    let prompt = prompts::budget(destination, days, style);

    let resolved = resolve::resolve(
        vec![Strategy::new(
            Origin::Generated,
            async move {
                match model.complete(&prompt).await {
                    Fetched::Ok(text) => match parse::first_amount(&text) {
                        Some(amount) => Fetched::Ok(Figure {
                            amount,
                            raw: Some(text),
                        }),
                        None => {
                            debug!("Model answer carried no digit run, disqualifying");
                            Fetched::Unavailable
                        }
                    },
                    Fetched::Unavailable => Fetched::Unavailable,
                }
            },
            // a budget is always a positive integer
            |figure: &Figure| figure.amount > 0,
        )],
        || Figure {
            amount: formula_amount(destination, days, style),
            raw: None,
        },
    )
    .await;

    let Figure { amount, raw } = resolved.value;
    let disclaimer = match resolved.origin {
        Origin::Generated => AI_DISCLAIMER,
        _ => FALLBACK_DISCLAIMER,
    };

    BudgetEstimate {
        amount,
        message: format!(
            "Estimated budget for your {days}-day {style} trip to {destination} is \u{20b9}{amount}"
        ),
        llm_raw: raw,
        disclaimer: disclaimer.to_string(),
    }
}

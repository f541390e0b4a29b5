use crate::infra::demo_personas;
use clap::Args;
use nestegg::error::AppError;
use nestegg::matching::{InvestorProfile, RecommendationEngine, RecommendationOutcome};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Path to an investor profile JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Emit the raw JSON outcome instead of the text rendering
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit raw JSON outcomes instead of the text rendering
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.profile)?;
    let profile: InvestorProfile = serde_json::from_str(&raw)
        .map_err(|err| AppError::InvalidProfile(err.to_string()))?;

    let engine = RecommendationEngine::standard();
    let outcome = engine.recommend(&profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_outcome(&outcome);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = RecommendationEngine::standard();

    for (label, profile) in demo_personas() {
        println!("== {label} ==");
        let outcome = engine.recommend(&profile);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            render_outcome(&outcome);
        }
        println!();
    }

    Ok(())
}

fn render_outcome(outcome: &RecommendationOutcome) {
    let account = &outcome.account_type;
    println!("Recommended account: {}", account.category.label());
    println!("  Why: {}", account.rationale);
    println!("  Tax benefit: {}", account.tax_benefit);
    println!("  Best for: {}", account.best_for);
    if let Some(warning) = &account.warning {
        println!("  Heads up: {warning}");
    }

    println!("Top brokerage matches:");
    for (rank, result) in outcome.matches.iter().enumerate() {
        println!(
            "  {}. {} ({}% match)",
            rank + 1,
            result.name,
            result.match_percent
        );
        for reason in &result.reasons {
            println!("     + {reason}");
        }
        for warning in &result.warnings {
            println!("     ! {warning}");
        }
    }
}

use std::path::PathBuf;

use clap::Args;
use strategic_value::config::AppConfig;
use strategic_value::decision::{
    CriteriaWeights, FactorBreakdown, ScenarioCsvImporter, ScenarioInput, ScoringConfig,
};
use strategic_value::error::AppError;

use crate::infra::decision_service;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Projected cost in currency units
    #[arg(long)]
    pub(crate) cost: f64,
    /// Projected delivery time in months
    #[arg(long)]
    pub(crate) time_to_implement: f64,
    /// Strategic importance score between 0 and 1
    #[arg(long)]
    pub(crate) strategic_importance: f64,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with cost, time_to_implement, and strategic_importance columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the weight-sensitivity portion of the demo
    #[arg(long)]
    pub(crate) skip_weight_update: bool,
}

pub(crate) fn run_svi_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = decision_service(config.scoring.scoring_config());

    let input = ScenarioInput {
        cost: args.cost,
        time_to_implement: args.time_to_implement,
        strategic_importance: args.strategic_importance,
    };
    let result = service.score(&input)?;

    println!("Scenario inputs");
    println!("- cost: {}", input.cost);
    println!("- time to implement: {} months", input.time_to_implement);
    println!("- strategic importance: {}", input.strategic_importance);

    println!("\nFactor breakdown");
    render_factors(&result.factors);

    println!("\nStrategic Value Index: {:.3}", result.svi);

    Ok(())
}

pub(crate) fn run_svi_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = decision_service(config.scoring.scoring_config());

    let inputs = ScenarioCsvImporter::from_path(&args.csv)?;
    if inputs.is_empty() {
        println!("No scenarios found in {}", args.csv.display());
        return Ok(());
    }

    let results = service.score_batch(&inputs)?;

    println!(
        "Scored {} scenario(s) from {}",
        results.len(),
        args.csv.display()
    );
    for (index, (input, result)) in inputs.iter().zip(&results).enumerate() {
        println!(
            "- row {}: cost {} | {} months | importance {} -> svi {:.3}",
            index + 1,
            input.cost,
            input.time_to_implement,
            input.strategic_importance,
            result.svi
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = decision_service(ScoringConfig::default());

    println!("Strategic decision demo");

    println!("\nSeeded scenario portfolio");
    for scenario in service.scenarios() {
        println!(
            "- #{} {} | cost {} | {} months | importance {} | recorded svi {:.2}",
            scenario.id,
            scenario.name,
            scenario.cost,
            scenario.time_to_implement,
            scenario.strategic_importance,
            scenario.svi
        );
    }

    let weights = service.weights();
    println!("\nCurrent criteria weights");
    println!("- strategic importance: {:.2}", weights.strategic_importance);
    println!("- cost: {:.2}", weights.cost);
    println!("- time to implement: {:.2}", weights.time_to_implement);

    println!("\nPortfolio rescored with current weights");
    for scenario in service.scenarios() {
        let result = service.score(&scenario.input())?;
        println!("- {}: svi {:.3}", scenario.name, result.svi);
    }

    let reference = service.scenario(1)?;
    let result = service.score(&reference.input())?;
    println!("\nFactor breakdown for {}", reference.name);
    render_factors(&result.factors);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("  Response payload:\n{}", json),
        Err(err) => println!("  Response payload unavailable: {}", err),
    }

    if args.skip_weight_update {
        return Ok(());
    }

    let updated = service.update_weights(CriteriaWeights {
        strategic_importance: 0.4,
        cost: 0.4,
        time_to_implement: 0.2,
    })?;
    println!(
        "\nWeights updated to {:.2}/{:.2}/{:.2} (importance/cost/time)",
        updated.strategic_importance, updated.cost, updated.time_to_implement
    );

    println!("Portfolio under the adjusted weights");
    for scenario in service.scenarios() {
        let result = service.score(&scenario.input())?;
        println!("- {}: svi {:.3}", scenario.name, result.svi);
    }

    Ok(())
}

fn render_factors(factors: &FactorBreakdown) {
    println!(
        "- strategic importance: weight {:.3} x value {:.3}",
        factors.strategic_importance.weight, factors.strategic_importance.value
    );
    println!(
        "- cost: weight {:.3} x value {:.3}",
        factors.cost.weight, factors.cost.value
    );
    println!(
        "- time to implement: weight {:.3} x value {:.3}",
        factors.time_to_implement.weight, factors.time_to_implement.value
    );
}

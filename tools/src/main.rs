//! scenario-runner: headless consumer for the ShelfSense pricing core.
//!
//! Usage:
//!   scenario-runner --category tools_home --month 4 --price 29.99 --units 1000 --change -15
//!   scenario-runner --category baby --price 12.49 --units 5000 --sweep
//!   scenario-runner --demo 10 --seed 42
//!   scenario-runner --ipc-mode

use anyhow::Result;
use shelfsense_core::{
    demo::DemoDataProvider, optimal_discount_capped, project_impact, sweep_revenue_curve,
    Category, ImpactProjection, Month, PricingConfig, PromotionScenario, ResolvedElasticity,
    SweepRange,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Project {
        scenario: ScenarioRequest,
    },
    Sweep {
        scenario: ScenarioRequest,
        range: Option<SweepRange>,
    },
    OptimalDiscount {
        category: Option<String>,
        subcategory: Option<String>,
        month: Option<u8>,
        elasticity: Option<f64>,
        cap: Option<f64>,
    },
    Demo {
        count: usize,
        seed: u64,
    },
    Quit,
}

/// One scenario as a UI would submit it: lookup keys plus the numeric
/// inputs, with an optional explicit elasticity override.
#[derive(serde::Deserialize)]
struct ScenarioRequest {
    category: Option<String>,
    subcategory: Option<String>,
    month: Option<u8>,
    base_price: f64,
    base_units: f64,
    price_pct_change: f64,
    elasticity: Option<f64>,
}

#[derive(serde::Serialize)]
struct ProjectResponse {
    projection: ImpactProjection,
    resolution: Option<ResolvedElasticity>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let sweep_mode = args.iter().any(|a| a == "--sweep");
    let demo_count = parse_arg::<usize>(&args, "--demo", 0);
    let seed = parse_arg(&args, "--seed", 42u64);

    let config = match str_arg(&args, "--data-dir") {
        Some(data_dir) => PricingConfig::load(data_dir)?,
        None => PricingConfig::builtin(),
    };

    if ipc_mode {
        return run_ipc_loop(&config);
    }

    if demo_count > 0 {
        return run_demo(&config, demo_count, seed);
    }

    let request = ScenarioRequest {
        category: str_arg(&args, "--category").map(str::to_string),
        subcategory: str_arg(&args, "--subcategory").map(str::to_string),
        month: args
            .windows(2)
            .find(|w| w[0] == "--month")
            .and_then(|w| w[1].parse().ok()),
        base_price: parse_arg(&args, "--price", 0.0),
        base_units: parse_arg(&args, "--units", 0.0),
        price_pct_change: parse_arg(&args, "--change", 0.0),
        elasticity: args
            .windows(2)
            .find(|w| w[0] == "--elasticity")
            .and_then(|w| w[1].parse().ok()),
    };
    let cap = parse_arg(&args, "--cap", config.discount_cap);

    println!(
        "ShelfSense scenario-runner — {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!();

    let (scenario, elasticity, resolution) = build_scenario(&config, &request)?;

    if sweep_mode {
        print_sweep(&scenario, elasticity, &config.sweep)?;
    } else {
        print_projection(&scenario, elasticity, resolution.as_ref(), cap)?;
    }

    Ok(())
}

// ── Scenario assembly ──────────────────────────────────────────────

/// Turn a request into a core scenario plus its coefficient: explicit
/// elasticity wins, otherwise the catalog resolves the lookup keys.
fn build_scenario(
    config: &PricingConfig,
    request: &ScenarioRequest,
) -> Result<(PromotionScenario, f64, Option<ResolvedElasticity>)> {
    let mut scenario = PromotionScenario::new(
        request.base_price,
        request.base_units,
        request.price_pct_change,
    );

    let category = match &request.category {
        Some(name) => Some(Category::from_str(name)?),
        None => None,
    };
    if let Some(c) = category {
        scenario = scenario.with_category(c);
    }
    if let Some(sub) = &request.subcategory {
        scenario = scenario.with_subcategory(sub.clone());
    }
    let month = match request.month {
        Some(m) => Some(Month::new(m)?),
        None => None,
    };
    if let Some(m) = month {
        scenario = scenario.with_month(m);
    }

    if let Some(elasticity) = request.elasticity {
        return Ok((scenario, elasticity, None));
    }

    let category = category.ok_or_else(|| {
        anyhow::anyhow!("either --elasticity or --category is required")
    })?;
    let resolved =
        config
            .catalog
            .resolve_traced(category, request.subcategory.as_deref(), month)?;
    Ok((scenario, resolved.value, Some(resolved)))
}

// ── Plain-text output ──────────────────────────────────────────────

fn print_projection(
    scenario: &PromotionScenario,
    elasticity: f64,
    resolution: Option<&ResolvedElasticity>,
    cap: f64,
) -> Result<()> {
    let projection = project_impact(scenario, elasticity)?;

    println!("=== PROJECTION ===");
    if let Some(category) = scenario.category {
        let sub = scenario.subcategory.as_deref().unwrap_or("all");
        let month = scenario
            .month
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| "any month".to_string());
        println!("  segment:      {} / {sub} ({month})", category.label());
    }
    match resolution {
        Some(r) => println!("  elasticity:   {:.2} ({})", elasticity, r.level.describe()),
        None => println!("  elasticity:   {elasticity:.2} (explicit)"),
    }
    println!(
        "  price:        ${:.2} -> ${:.2} ({:+.1}%)",
        scenario.base_price, projection.new_price, scenario.price_pct_change
    );
    println!(
        "  units:        {:.0} -> {:.0}",
        scenario.base_units, projection.projected_units
    );
    println!(
        "  revenue:      ${:.2} -> ${:.2}",
        projection.baseline_revenue, projection.projected_revenue
    );
    match projection.revenue_delta_pct {
        Some(pct) => println!(
            "  delta:        ${:+.2} ({pct:+.1}%)",
            projection.revenue_delta
        ),
        None => println!("  delta:        ${:+.2}", projection.revenue_delta),
    }

    println!();
    println!("=== RECOMMENDATION ===");
    let rec = optimal_discount_capped(elasticity, cap)?;
    println!(
        "  optimal discount: {:.0}% (cap {:.0}%)",
        rec.optimal_discount_pct, rec.cap
    );
    Ok(())
}

fn print_sweep(
    scenario: &PromotionScenario,
    elasticity: f64,
    range: &SweepRange,
) -> Result<()> {
    let curve = sweep_revenue_curve(scenario, elasticity, range)?;
    let best_pct = curve.revenue_optimal_point().map(|p| p.price_pct_change);

    println!("=== REVENUE SWEEP (elasticity {elasticity:.2}) ===");
    println!("  change |    price |    units |     revenue |       delta");
    for point in &curve.points {
        let marker = if Some(point.price_pct_change) == best_pct {
            " *"
        } else {
            ""
        };
        println!(
            "  {:+5.0}% | {:8.2} | {:8.0} | {:11.2} | {:+11.2}{marker}",
            point.price_pct_change,
            point.new_price,
            point.projected_units,
            point.projected_revenue,
            point.revenue_delta,
        );
    }
    println!("  (* = revenue-optimal swept point)");
    Ok(())
}

fn run_demo(config: &PricingConfig, count: usize, seed: u64) -> Result<()> {
    let mut provider = DemoDataProvider::new(seed);

    println!("=== DEMO BATCH (seed {seed}, {count} scenarios) ===");
    for scenario in provider.scenarios(count) {
        let category = scenario
            .category
            .expect("demo scenarios always carry a category");
        let resolved = config.catalog.resolve_traced(
            category,
            scenario.subcategory.as_deref(),
            scenario.month,
        )?;
        let projection = project_impact(&scenario, resolved.value)?;
        println!(
            "  {:11} {:+5.0}% @ ${:8.2} x {:6.0} -> revenue {:11.2} ({:+9.2})",
            category.key(),
            scenario.price_pct_change,
            scenario.base_price,
            scenario.base_units,
            projection.projected_revenue,
            projection.revenue_delta,
        );
    }
    Ok(())
}

// ── IPC mode ───────────────────────────────────────────────────────

/// Newline-delimited JSON commands on stdin, one JSON response per
/// line on stdout. Bad input answers with an error object and keeps
/// the loop alive; only `quit` or EOF ends it.
fn run_ipc_loop(config: &PricingConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            other => {
                let response = match handle_ipc(config, other) {
                    Ok(value) => value,
                    Err(e) => serde_json::json!({ "error": e.to_string() }),
                };
                writeln!(stdout, "{response}")?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn handle_ipc(config: &PricingConfig, cmd: IpcCommand) -> Result<serde_json::Value> {
    match cmd {
        IpcCommand::Quit => unreachable!("quit is handled by the loop"),
        IpcCommand::Project { scenario } => {
            let (scenario, elasticity, resolution) = build_scenario(config, &scenario)?;
            let projection = project_impact(&scenario, elasticity)?;
            Ok(serde_json::to_value(ProjectResponse {
                projection,
                resolution,
            })?)
        }
        IpcCommand::Sweep { scenario, range } => {
            let (scenario, elasticity, _) = build_scenario(config, &scenario)?;
            let range = range.unwrap_or(config.sweep);
            let curve = sweep_revenue_curve(&scenario, elasticity, &range)?;
            Ok(serde_json::to_value(curve)?)
        }
        IpcCommand::OptimalDiscount {
            category,
            subcategory,
            month,
            elasticity,
            cap,
        } => {
            let elasticity = match elasticity {
                Some(e) => e,
                None => {
                    let category = Category::from_str(category.as_deref().ok_or_else(
                        || anyhow::anyhow!("either elasticity or category is required"),
                    )?)?;
                    let month = match month {
                        Some(m) => Some(Month::new(m)?),
                        None => None,
                    };
                    config.catalog.resolve(category, subcategory.as_deref(), month)?
                }
            };
            let rec = optimal_discount_capped(elasticity, cap.unwrap_or(config.discount_cap))?;
            Ok(serde_json::to_value(rec)?)
        }
        IpcCommand::Demo { count, seed } => {
            let mut provider = DemoDataProvider::new(seed);
            let scenarios = provider.scenarios(count);
            Ok(serde_json::to_value(scenarios)?)
        }
    }
}

// ── Argument helpers ───────────────────────────────────────────────

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;
use route_planner::config::{OutputFormat, PlannerConfig};
use route_planner::io::{read_problem, RouteProblem, RouteReport};
use route_planner::{plan_route, Dijkstra};

fn load_problem(config: &PlannerConfig) -> anyhow::Result<RouteProblem> {
    let problem = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open {}", path.display()))?;
            read_problem(BufReader::new(file))?
        }
        None => read_problem(io::stdin().lock())?,
    };
    Ok(problem)
}

fn main() -> anyhow::Result<()> {
    let config = PlannerConfig::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter()),
    )
    .init();

    let problem = load_problem(&config)?;
    let outcome = plan_route(
        &Dijkstra::new(),
        &problem.graph,
        &problem.source,
        &problem.target,
    );

    let report = RouteReport::new(
        problem.node_count,
        problem.edge_count,
        &problem.source,
        &problem.target,
        &outcome,
    );

    match config.format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

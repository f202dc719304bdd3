use clap::Parser;
use keiro::prelude::*;
use std::fs;
use std::process::ExitCode;

/// Inspect and validate a stored automation definition.
///
/// Reads the `{name, nodes, edges, targetAudience?}` JSON the API stores for
/// a journey or workflow, re-checks the structural invariants the editor
/// maintains, and runs the same pre-save validation the builder pages run.
#[derive(Parser)]
#[command(name = "keiro-cli", version, about)]
struct Cli {
    /// Path to the automation JSON file
    automation: String,

    /// Re-encode the automation as prettified JSON after validation
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let raw = fs::read_to_string(&cli.automation)?;
    let payload = decode_automation(&raw)?;
    let graph = payload.clone().into_graph()?;

    let actions = graph
        .nodes()
        .iter()
        .filter(|n| n.kind == NodeKind::Action)
        .count();
    let conditions = graph
        .nodes()
        .iter()
        .filter(|n| n.kind == NodeKind::Condition)
        .count();

    println!("Automation '{}'", payload.name);
    println!(
        "  nodes: {} ({} action(s), {} condition(s))",
        graph.nodes().len(),
        actions,
        conditions
    );
    println!("  edges: {}", graph.edges().len());

    match validate(&graph) {
        Ok(()) => println!("  validation: ok"),
        Err(blockers) => {
            println!("  validation: {} blocking issue(s)", blockers.len());
            for blocker in &blockers {
                println!("    - {}", blocker);
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(ExitCode::SUCCESS)
}

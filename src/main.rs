//! echo-plugins - plugin inspector
//!
//! Loads the built-in plugins the way the host does and prints the
//! resulting agents.

use anyhow::{Context, Result};
use clap::Parser;
use echo_plugins::config::Config;
use echo_plugins::plugins::{ActiveAgent, AgentSet};
use echo_plugins::EchoError;
use tracing::info;

mod cli;

use cli::{Args, Command};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.debug);

    info!("Starting echo-plugins v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    // Load failures are already logged by the loader
    let (registry, _report) = echo_plugins::load_builtin(&config);
    let agents = AgentSet::assemble(&registry);

    match args.command.unwrap_or(Command::List) {
        Command::List => print_list(&agents, args.json)?,
        Command::Show { name } => {
            let agent = agents
                .get(&name)
                .ok_or(EchoError::UnknownPlugin(name))?;
            print_agent(agent, args.json)?;
        }
    }

    Ok(())
}

/// Print every active agent
fn print_list(agents: &AgentSet, json: bool) -> Result<()> {
    if json {
        let summaries: Vec<_> = agents.agents().iter().map(ActiveAgent::summary).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for agent in agents.agents() {
        println!(
            "{:<16} v{:<8} {} tool(s)  {}",
            agent.name,
            agent.version,
            agent.tools.len(),
            agent.description
        );
    }
    for violation in agents.excluded() {
        println!("excluded: {}", violation);
    }

    Ok(())
}

/// Print one agent's prompt and tools
fn print_agent(agent: &ActiveAgent, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&agent.summary())?);
        return Ok(());
    }

    println!("{} v{}", agent.name, agent.version);
    println!();
    println!("System prompt:");
    println!("  {}", agent.system_prompt);
    println!();

    if agent.is_prompt_only() {
        println!("No tools (system prompt only)");
        return Ok(());
    }

    println!("Tools:");
    for def in agent.tool_definitions() {
        println!("  {} - {}", def.name, def.description);
        for param in &def.parameters {
            let required = if param.required { "required" } else { "optional" };
            println!(
                "      {} ({}, {}): {}",
                param.name, param.param_type, required, param.description
            );
        }
    }

    Ok(())
}

/// Initialize the logging/tracing subsystem
fn init_logging(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

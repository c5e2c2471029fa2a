//! CLI entrypoint for Colloquy
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use colloquy_application::{
    Agent, AgentRegistry, ChatParams, RunChatInput, RunChatUseCase, RunProbeInput,
    RunProbeUseCase,
};
use colloquy_domain::SelectionStrategy;
use colloquy_infrastructure::{
    ChatClient, ChatCompletionAgent, ConfigLoader, LlmSpeakerDecider, StrategyChoice,
};
use colloquy_presentation::{Cli, ConsoleFormatter, ConsoleObserver, OutputFormat};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration, then apply CLI overrides
    let mut config = ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!(e))?;

    if let Some(strategy) = &cli.strategy {
        config.chat.strategy = strategy.clone();
    }
    if let Some(sequence) = &cli.sequence {
        config.chat.sequence = sequence.split(',').map(|s| s.trim().to_string()).collect();
    }
    if let Some(max_turns) = cli.max_turns {
        config.chat.max_turns = max_turns;
    }
    if let Some(secs) = cli.timeout {
        config.chat.turn_timeout_secs = secs;
    }

    let message = match cli.message {
        Some(m) => m,
        None => bail!("An opening message is required."),
    };

    // === Dependency Injection ===
    // Create the shared chat-completions client
    let api_key = config.provider.api_key()?;
    let client = ChatClient::new(&config.provider.base_url, api_key, &config.provider.model)
        .with_temperature(config.provider.temperature);

    // Build the configured participants
    let agents: Vec<Arc<dyn Agent>> = config
        .participants
        .iter()
        .map(|p| {
            Arc::new(ChatCompletionAgent::new(
                &p.name,
                &p.instructions,
                client.clone(),
            )) as Arc<dyn Agent>
        })
        .collect();
    let registry = AgentRegistry::new(agents)?;

    info!(participants = registry.len(), model = %config.provider.model, "registry ready");

    let params = ChatParams::default()
        .with_max_turns(config.chat.max_turns)
        .with_turn_timeout(match config.chat.turn_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        });

    // Probe mode: one agent, one reply
    if let Some(agent) = cli.probe {
        let probe = RunProbeUseCase::new(registry);
        let transcript = probe
            .execute(RunProbeInput {
                agent,
                message,
                params,
            })
            .await?;
        println!("{}", ConsoleFormatter::format(&transcript));
        return Ok(());
    }

    let (choice, warning) = config.chat.parse_strategy();
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let selection = match choice {
        StrategyChoice::RoundRobin => SelectionStrategy::RoundRobin,
        StrategyChoice::Sequence => {
            SelectionStrategy::fixed_sequence(config.chat.sequence.clone(), registry.roster())?
        }
        StrategyChoice::LeadDirected => {
            SelectionStrategy::LeadDirected(Arc::new(LlmSpeakerDecider::new(client.clone())))
        }
    };

    // Create use case and run
    let use_case = RunChatUseCase::new(registry);
    let input = RunChatInput::new(message, selection).with_params(params);

    let transcript = if cli.quiet {
        use_case.execute(input).await?
    } else {
        use_case.execute_with_observer(input, &ConsoleObserver).await?
    };

    match cli.output {
        OutputFormat::None => {}
        OutputFormat::Full => println!("{}", ConsoleFormatter::format(&transcript)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&transcript)),
    }

    Ok(())
}

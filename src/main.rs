use anyhow::{Context, Result};
use clap::Parser;
use qualified_games::cli::{Cli, OutputFormat};
use qualified_games::{find_qualified_games, loader};
use tracing_subscriber::EnvFilter;

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders game ids as one per line (text) or a JSON array.
fn render_games(game_ids: &[u64], format: OutputFormat) -> Result<String> {
    let rendered: String = match format {
        OutputFormat::Text => game_ids
            .iter()
            .map(|game_id| format!("{}\n", game_id))
            .collect(),
        OutputFormat::Json => serde_json::to_string(game_ids)?,
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let cutoff = cli.validated_cutoff()?;
    let records = loader::read_shot_records(&cli.input)
        .with_context(|| format!("loading shot records from {}", cli.input.display()))?;

    let game_ids = find_qualified_games(&records, cutoff, cli.player_count);
    let rendered = render_games(&game_ids, cli.format)?;
    match cli.format {
        OutputFormat::Text => print!("{}", rendered),
        OutputFormat::Json => println!("{}", rendered),
    }
    Ok(())
}

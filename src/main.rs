mod cli;

use reelscan::{config, walk};
use reelscan_parser::{ScanState, Scanner};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelscan=trace,reelscan_parser=trace".to_string()
        } else {
            "reelscan=info,reelscan_parser=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            name,
            parent,
            directory,
            json,
        } => parse_name(&name, &parent, directory, cli.config.as_deref(), json),
        Commands::Scan { path, json } => scan_path(&path, cli.config.as_deref(), json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("reelscan {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_name(
    name: &str,
    parent: &str,
    directory: bool,
    config_path: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let scanner = Scanner::new(&config.scanner);
    let state = scanner.scan(name, parent, directory);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_state(&state);
    }
    if state.is_unresolved() {
        anyhow::bail!("no usable title or year in {name:?}");
    }
    Ok(())
}

fn scan_path(
    path: &std::path::Path,
    config_path: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let scanner = Scanner::new(&config.scanner);
    let (records, summary) = walk::scan_tree(&scanner, path, &config.scan)?;

    for record in &records {
        if json {
            println!("{}", serde_json::to_string(&record.state)?);
        } else {
            println!("{}  {}", summarize(&record.state), record.path.display());
        }
    }
    tracing::info!(
        files = summary.files_seen,
        scanned = summary.scanned,
        skipped = summary.skipped,
        unresolved = summary.unresolved,
        errors = summary.errors,
        "scan complete"
    );
    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;
    // Building the library compiles every keyword table; malformed entries
    // are reported as warnings here rather than at scan time.
    let _ = Scanner::new(&config.scanner);
    println!("Configuration OK");
    Ok(())
}

fn summarize(state: &ScanState) -> String {
    let mut out = state.title.clone();
    if state.year != -1 {
        out.push_str(&format!(" ({})", state.year));
    }
    if state.season != -1 {
        out.push_str(&format!(" [S{:02}", state.season));
        for episode in &state.episodes {
            out.push_str(&format!("E{episode:02}"));
        }
        out.push(']');
    }
    if state.part != -1 {
        out.push_str(&format!(" pt{}", state.part));
    }
    out
}

fn print_state(state: &ScanState) {
    println!("title:         {}", state.title);
    println!("clean title:   {}", state.clean_title);
    if state.year != -1 {
        println!("year:          {}", state.year);
    }
    if state.season != -1 {
        println!("season:        {}", state.season);
    }
    if !state.episodes.is_empty() {
        let episodes: Vec<String> = state.episodes.iter().map(|e| e.to_string()).collect();
        println!("episodes:      {}", episodes.join(", "));
    }
    if !state.episode_title.is_empty() {
        println!("episode title: {}", state.episode_title);
    }
    if state.part != -1 {
        println!("part:          {}", state.part);
    }
    if !state.part_title.is_empty() {
        println!("part title:    {}", state.part_title);
    }
    if state.is_extra {
        println!("extra:         yes");
    }
    if !state.movie_version.is_empty() {
        println!("version:       {}", state.movie_version);
    }
    if !state.container.is_empty() {
        println!("container:     {}", state.container);
    }
    if !state.video_source.is_empty() {
        println!("source:        {}", state.video_source);
    }
    if !state.video_codec.is_empty() {
        println!("video codec:   {}", state.video_codec);
    }
    if !state.audio_codec.is_empty() {
        println!("audio codec:   {}", state.audio_codec);
    }
    if !state.hd_resolution.is_empty() {
        println!("resolution:    {}", state.hd_resolution);
    }
    if state.fps != -1 {
        println!("fps:           {}", state.fps);
    }
    if !state.languages.is_empty() {
        println!("languages:     {}", state.languages.join(", "));
    }
    for (source, id) in &state.id_map {
        println!("id:            {source} = {id}");
    }
    for (set, order) in &state.set_map {
        match order {
            Some(order) => println!("set:           {set} (#{order})"),
            None => println!("set:           {set}"),
        }
    }
    println!(
        "kind:          {}",
        if state.is_movie() { "movie" } else { "series" }
    );
}

mod ai;
mod cli;
mod config;
mod docs;
mod error;
mod linear;
mod orchestrator;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use linear::DateRange;
use orchestrator::Orchestrator;
use render::Renderer;
use std::future::Future;
use std::io::{self, Write};
use std::process::{Command as ProcessCommand, Stdio};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Validate CLI arguments
    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle subcommands
    if let Some(command) = &cli.command {
        return handle_command(command);
    }

    // Load or create config
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load_or_create_default()?
    };

    // Verify API keys are available (from env or config)
    for check in [config.linear_api_key(), config.gemini_api_key()] {
        if let Err(e) = check {
            eprintln!("Error: {}", e);
            eprintln!(
                "\nAdd the key to your config file at: {}",
                Config::default_config_path()?.display()
            );
            std::process::exit(1);
        }
    }

    run_recap(config, &cli).await
}

async fn run_recap(config: Config, cli: &Cli) -> Result<()> {
    println!("perf-recap v{}", env!("CARGO_PKG_VERSION"));
    println!("AI-powered performance review summarizer\n");

    let mut orchestrator = Orchestrator::new(config)?;

    // Resolve the review period
    let range = resolve_range(cli, orchestrator.config().default_timespan_days)?;

    println!("{}", "=".repeat(60));
    println!("Period: {} to {}", range.start, range.end);
    println!("{}\n", "=".repeat(60));

    // Fetch issues; a failure here is shown in place of the results and
    // the rest of the run stays usable
    let fetch_result = with_spinner(
        spinner("Fetching Linear issues..."),
        orchestrator.fetch_issues(&range),
    )
    .await;

    match fetch_result {
        Ok(_) => print_issues(&orchestrator),
        Err(e) => {
            tracing::error!(error = %e, "Linear fetch failed");
            println!("Error: {}\n", e);
        }
    }

    // Collect performance docs from flags, then interactively
    if !cli.docs.is_empty() {
        let added = orchestrator.add_documents(&cli.docs)?;
        println!("Added {} performance doc(s)", added);
    }

    if !cli.is_non_interactive() {
        collect_docs_interactively(&mut orchestrator)?;
    }

    print_documents(&orchestrator);

    // Generate the recap
    let recap = match with_spinner(
        spinner("Generating summary with Gemini..."),
        orchestrator.generate_recap(),
    )
    .await
    {
        Ok(recap) => recap,
        Err(e) => {
            tracing::error!(error = %e, "recap generation failed");
            eprintln!("Failed to generate summary: {}", e);
            std::process::exit(1);
        }
    };

    let output_text = if cli.html {
        Renderer::new()?.to_html(&recap.markdown)
    } else {
        recap.markdown.clone()
    };

    println!("\n{}\n", "=".repeat(60));
    println!("{}", output_text);
    println!("\n{}", "=".repeat(60));
    println!(
        "Generated at: {}",
        recap.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    if let Some(ref path) = cli.output {
        std::fs::write(path, &output_text)?;
        println!("✓ Saved to: {}", path.display());
    }

    if cli.copy {
        match copy_to_clipboard(&recap.markdown) {
            Ok(()) => println!("✓ Copied to clipboard"),
            Err(e) => eprintln!("Could not copy to clipboard: {}", e),
        }
    }

    Ok(())
}

fn handle_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Init { force } => {
            let config_path = Config::default_config_path()?;

            if config_path.exists() && !force {
                eprintln!("Config file already exists at: {}", config_path.display());
                eprintln!("Use --force to overwrite");
                std::process::exit(1);
            }

            Config::create_default()?;
            println!("✓ Created config file at: {}", config_path.display());
            println!("\nAdd your API keys, or set the {} and {} environment variables.",
                config::LINEAR_KEY_ENV,
                config::GEMINI_KEY_ENV);
        }
        Commands::Config => {
            let config = Config::load_or_create_default()?;
            let toml_str = toml::to_string_pretty(&config)?;
            println!("Current configuration:\n");
            println!("{}", toml_str);
        }
    }
    Ok(())
}

/// Resolve the review period from flags, or prompt with a default
/// window ending today
fn resolve_range(cli: &Cli, default_days: u32) -> Result<DateRange> {
    if let (Some(since), Some(until)) = (&cli.since, &cli.until) {
        return DateRange::parse(since, until);
    }

    if let Some(days) = cli.days {
        return Ok(DateRange::days_back(days));
    }

    if cli.is_non_interactive() {
        return Ok(DateRange::days_back(default_days));
    }

    let default_range = DateRange::days_back(default_days);
    let since = prompt_with_default("Start date", &default_range.start.to_string())?;
    let until = prompt_with_default("End date", &default_range.end.to_string())?;
    DateRange::parse(&since, &until)
}

fn print_issues(orchestrator: &Orchestrator) {
    let issues = orchestrator.issues();

    if issues.is_empty() {
        println!("No completed issues found for this period.\n");
        return;
    }

    println!("Completed issues ({}):", issues.len());
    for issue in issues {
        let project = issue.project_name().unwrap_or("No project");
        let completed = issue
            .completed_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let labels = issue.label_names();
        let label_suffix = if labels.is_empty() {
            String::new()
        } else {
            format!(" · {}", labels.join(", "))
        };
        println!("  [{}] {}", issue.identifier, issue.title);
        println!("      {} · {}{}", project, completed, label_suffix);
        println!("      {}", issue.url);
    }
    println!();
}

fn print_documents(orchestrator: &Orchestrator) {
    let docs = orchestrator.documents();
    if docs.is_empty() {
        return;
    }

    println!("Performance docs ({}):", docs.len());
    for (idx, doc) in docs.iter().enumerate() {
        println!("  {}. {}", idx, doc.name);
    }
    println!();
}

/// Prompt for doc paths to add and indices to remove until the user
/// is done
fn collect_docs_interactively(orchestrator: &mut Orchestrator) -> Result<()> {
    loop {
        let input = prompt_with_default("Add performance docs (paths, Enter to continue)", "")?;
        if input.is_empty() {
            break;
        }

        let paths: Vec<std::path::PathBuf> =
            input.split_whitespace().map(Into::into).collect();
        match orchestrator.add_documents(&paths) {
            Ok(added) => println!("Added {} doc(s)", added),
            Err(e) => eprintln!("Could not read docs: {}", e),
        }
    }

    while !orchestrator.documents().is_empty() {
        print_documents(orchestrator);
        let input = prompt_with_default("Remove doc by index (Enter to keep all)", "")?;
        if input.is_empty() {
            break;
        }
        match input.parse::<usize>() {
            Ok(idx) => match orchestrator.remove_document(idx) {
                Some(doc) => println!("Removed {}", doc.name),
                None => eprintln!("No doc at index {}", idx),
            },
            Err(_) => eprintln!("Not an index: {}", input),
        }
    }

    Ok(())
}

/// Build a spinner with a contextual message
fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Run a future under a spinner, clearing it on both outcome paths
async fn with_spinner<F, T>(pb: ProgressBar, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let result = fut.await;
    pb.finish_and_clear();
    result
}

/// Prompt user with a default value (press Enter to accept default)
fn prompt_with_default(prompt: &str, default: &str) -> Result<String> {
    if default.is_empty() {
        print!("{}: ", prompt);
    } else {
        print!("{} [{}]: ", prompt, default);
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Copy text to the system clipboard via the platform clipboard tool
fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates: &[(&str, &[&str])] = if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
        ]
    };

    for (program, args) in candidates {
        let spawned = ProcessCommand::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(_) => continue,
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            return Ok(());
        }
    }

    Err(error::PerfRecapError::Clipboard(
        "no clipboard tool found (tried pbcopy/wl-copy/xclip)".to_string(),
    ))
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "perf_recap=warn",
        1 => "perf_recap=info",
        2 => "perf_recap=debug",
        _ => "perf_recap=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

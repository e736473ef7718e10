use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use presence_audit::inventory::AuditLevel;
use presence_audit::scoring::ScoringConfig;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an inventory file and print the report (default if no subcommand)
    Audit {
        /// Path to the inventory YAML file
        #[arg(default_value = "inventory.yaml")]
        inventory: PathBuf,

        /// Print the raw scoring result as JSON instead of the text report
        #[arg(long)]
        json: bool,

        /// Audit level (quick, standard, deep-dive, recruitment-ready);
        /// overrides the inventory file and config
        #[arg(long)]
        level: Option<String>,

        /// Recommendation selection seed; overrides the config
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Create an inventory file interactively
    Init {
        /// Where to write the inventory (defaults to ./inventory.yaml)
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "presence-audit")]
#[command(about = "Social media presence audit for student-athletes", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/presence-audit/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Audit {
        inventory: PathBuf::from("inventory.yaml"),
        json: false,
        level: None,
        seed: None,
    });
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match presence_audit::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let mut scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = presence_audit::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match command {
        Commands::Audit {
            inventory,
            json,
            level,
            seed,
        } => {
            if let Some(seed) = seed {
                scoring.seed = Some(seed);
            }
            run_audit(&inventory, json, level, &config, &scoring, cli.verbose, start_time);
        }
        Commands::Init { path } => {
            if let Err(e) = presence_audit::config::run_init_wizard(path) {
                eprintln!("Init failed: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_audit(
    inventory_path: &PathBuf,
    json: bool,
    level_flag: Option<String>,
    config: &presence_audit::config::Config,
    scoring: &ScoringConfig,
    verbose: bool,
    start_time: Instant,
) {
    let file = match presence_audit::inventory::load_inventory(inventory_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Inventory error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if verbose {
        eprintln!(
            "Loaded {} platform(s), {} handle(s) from {}",
            file.handles.active_platform_count(),
            file.handles.total_handle_count(),
            inventory_path.display()
        );
        for (platform, _) in file.handles.active_platforms() {
            if !platform.is_known() {
                eprintln!(
                    "Note: unknown platform '{}' scores with the default weight",
                    platform
                );
            }
        }
    }

    // Level precedence: CLI flag > inventory file > config > standard
    let level = resolve_level(level_flag.as_deref(), &file, config);

    if verbose {
        eprintln!("Audit level: {}", level);
    }

    let result = match presence_audit::scoring::score(&file.handles, scoring, level) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Audit error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if json {
        match presence_audit::output::format_json(&result) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let ctx = presence_audit::output::ReportContext {
            athlete: file.athlete.as_deref(),
            level,
            generated_on: chrono::Local::now().date_naive(),
        };
        let use_colors = presence_audit::output::should_use_colors();
        println!("{}", presence_audit::output::format_report(&result, &ctx, use_colors));
    }

    if verbose {
        eprintln!();
        eprintln!("Audited in {:?}", start_time.elapsed());
    }
}

/// Resolve the audit level from the flag, the inventory file, or the
/// config, in that order. Unknown values are invalid input.
fn resolve_level(
    flag: Option<&str>,
    file: &presence_audit::inventory::InventoryFile,
    config: &presence_audit::config::Config,
) -> AuditLevel {
    let parse_or_exit = |s: &str| -> AuditLevel {
        match s.parse() {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Audit error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    };

    if let Some(s) = flag {
        return parse_or_exit(s);
    }
    match file.level() {
        Ok(Some(level)) => return level,
        Ok(None) => {}
        Err(e) => {
            eprintln!("Audit error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
    if let Some(s) = &config.level {
        return parse_or_exit(s);
    }
    AuditLevel::default()
}

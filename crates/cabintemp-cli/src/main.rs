use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cabintemp-cli", version, about = "CabinTemp CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Comfort settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Classify a cabin temperature against the comfort target
    Check {
        /// Cabin temperature, degrees C
        cabin: f64,
        /// Comfort target override, degrees C (defaults to the saved setting)
        #[arg(long)]
        comfort: Option<i32>,
    },
    /// Drive the advisory engine against scripted telemetry
    Demo(commands::demo::DemoArgs),
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Config { action } => commands::config::run(action),
        Commands::Check { cabin, comfort } => commands::check::run(cabin, comfort),
        Commands::Demo(args) => commands::demo::run(args),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "cabintemp-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyquest", version, about = "StudyQuest CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile, level and streak overview
    Status,
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Daily and weekly quests
    Quest {
        #[command(subcommand)]
        action: commands::quest::QuestAction,
    },
    /// Custom rewards
    Reward {
        #[command(subcommand)]
        action: commands::reward::RewardAction,
    },
    /// Theme store
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Study session log
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Re-evaluate the day streak
    Streak,
    /// Toggle focus mode
    FocusMode {
        state: commands::profile::Toggle,
    },
    /// Pomodoro cadence
    Pomodoro {
        #[command(subcommand)]
        action: commands::pomodoro::PomodoroAction,
    },
    /// Study timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    let config = studyquest_core::Config::load_or_default();
    init_tracing(&config.logging.filter);

    let result = match cli.command {
        Commands::Status => commands::profile::status(&config),
        Commands::Task { action } => commands::task::run(&config, action),
        Commands::Quest { action } => commands::quest::run(&config, action),
        Commands::Reward { action } => commands::reward::run(&config, action),
        Commands::Theme { action } => commands::theme::run(&config, action),
        Commands::Session { action } => commands::session::run(&config, action),
        Commands::Streak => commands::profile::streak(&config),
        Commands::FocusMode { state } => commands::profile::focus_mode(&config, state),
        Commands::Pomodoro { action } => commands::pomodoro::run(&config, action),
        Commands::Timer { action } => commands::timer::run(&config, action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

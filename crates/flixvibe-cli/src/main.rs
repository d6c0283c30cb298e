use clap::{ArgAction, Parser, Subcommand};
use commands::AppContext;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "flixvibe")]
#[command(about = "FlixVibe - Browse the catalog and keep track of what you want to watch")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every catalog listing.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Genre to show, or "all"
    #[arg(long, short = 'g')]
    pub genre: Option<String>,

    /// Only movies or only series
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Sort order: popularity, rating, year, title, date-added
    #[arg(long, short = 's')]
    pub sort: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    #[command(long_about = "Without a query, shows the most popular titles and your recent searches. With --query, shows the filtered results without recording the search.")]
    Browse {
        /// Free-text filter on title and description
        #[arg(long)]
        query: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Number of suggestions to show while browsing
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search the catalog and record the query in your search history
    Search {
        /// Text to look for in titles and descriptions
        query: String,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Manage your watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: Option<WatchlistCommands>,
    },
    /// Manage My List
    #[command(name = "mylist")]
    MyList {
        #[command(subcommand)]
        cmd: Option<MyListCommands>,
    },
    /// Show or clear recent searches
    History {
        #[command(subcommand)]
        cmd: Option<HistoryCommands>,
    },
    /// Show notifications and track which ones you've read
    Notifications {
        #[command(subcommand)]
        cmd: Option<NotificationCommands>,
    },
    /// View and edit your profile and settings
    Profile {
        #[command(subcommand)]
        cmd: Option<ProfileCommands>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum WatchlistCommands {
    /// List saved titles
    List,
    /// Add a title, or remove it if already saved
    Toggle { id: u32 },
    /// Remove every saved title
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum MyListCommands {
    /// List saved titles, newest first by default
    List {
        /// Free-text filter on title and description
        #[arg(long)]
        query: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Add a title, or remove it if already saved
    Toggle { id: u32 },
    /// Remove a title
    Remove { id: u32 },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Show recent searches, most recent first
    List,
    /// Forget all recent searches
    Clear,
}

#[derive(Subcommand)]
pub enum NotificationCommands {
    /// Show notifications with their read state
    Show,
    /// Mark a notification as read
    Read { id: u32 },
    /// Mark a notification as unread
    Unread { id: u32 },
    /// Mark every notification as read
    ReadAll,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show profile details
    Show,
    /// Edit profile fields (prompts for any field not given)
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Set the avatar image
    Avatar { uri: String },
    /// Show settings
    Settings,
    /// Turn a setting on or off
    #[command(long_about = "Turn a setting on or off. Settings: emailNotifications, pushNotifications, autoplay, highQuality, parentalControls, subtitles.")]
    Set {
        flag: String,
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Set the interface language (en, es, fr, de)
    Language { code: String },
    /// Set the data usage mode (auto, wifi, low)
    DataUsage { mode: String },
    /// Delete your profile, settings and watchlist
    DeleteAccount {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let output = output::Output::new(cli.output, cli.quiet);

    // Config commands must work even when the config file is broken
    if let Commands::Config { cmd } = cli.command {
        logging::init_logging(cli.verbose, cli.quiet, "info", None)
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
        return commands::config::run_config(cmd.unwrap_or(ConfigCommands::Show), cli.config, &output);
    }

    let ctx = match AppContext::load(cli.config) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(format!("{}", e));
            std::process::exit(1);
        }
    };

    logging::init_logging(
        cli.verbose,
        cli.quiet,
        &ctx.config.logging.level,
        ctx.config.logging.file.as_deref(),
    )
    .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let result = match cli.command {
        Commands::Browse { query, filters, limit } => commands::browse::run_browse(&ctx, query, filters, limit, &output),
        Commands::Search { query, filters } => commands::browse::run_search(&ctx, &query, filters, &output),
        Commands::Watchlist { cmd } => {
            commands::watchlist::run_watchlist(&ctx, cmd.unwrap_or(WatchlistCommands::List), &output)
        }
        Commands::MyList { cmd } => {
            let cmd = cmd.unwrap_or(MyListCommands::List {
                query: None,
                filters: FilterArgs::default(),
            });
            commands::mylist::run_mylist(&ctx, cmd, &output)
        }
        Commands::History { cmd } => commands::history::run_history(&ctx, cmd.unwrap_or(HistoryCommands::List), &output),
        Commands::Notifications { cmd } => {
            commands::notifications::run_notifications(&ctx, cmd.unwrap_or(NotificationCommands::Show), &output)
        }
        Commands::Profile { cmd } => commands::profile::run_profile(&ctx, cmd.unwrap_or(ProfileCommands::Show), &output),
        Commands::Config { .. } => Ok(()),
    };

    if let Err(e) = result {
        output.error(format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Showcase — command-line client for the student project-showcase platform.
#[derive(Debug, Parser)]
#[command(name = "showcase", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session locally.
    Login {
        /// Use the admin login entry point.
        #[arg(long)]
        admin: bool,
        /// Account email (prompted when omitted).
        #[arg(long)]
        email: Option<String>,
    },
    /// Clear the stored session.
    Logout,
    /// Show the currently logged-in identity.
    Whoami {
        /// Output as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Create a new account.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Account email.
        #[arg(long)]
        email: String,
        /// Class / cohort label (e.g. "2026").
        #[arg(long)]
        class: Option<String>,
    },
    /// View and edit your own profile.
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Browse and manage portfolio projects.
    #[command(subcommand)]
    Projects(ProjectsCommand),
    /// Site-wide alerts.
    #[command(subcommand)]
    Alerts(AlertsCommand),
    /// Administrator commands (require the moderator role).
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Fetch and show your profile from the server.
    Show {
        /// Output as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Update profile attributes.
    Update {
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New class / cohort label.
        #[arg(long)]
        class: Option<String>,
    },
    /// Upload a profile picture.
    Picture {
        /// Image file to upload.
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List all projects.
    List {
        /// Output as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show one project in full.
    Show {
        /// Project ID.
        id: String,
    },
    /// Submit a new project.
    Submit {
        /// Project title.
        #[arg(long)]
        title: String,
        /// One-line summary.
        #[arg(long)]
        summary: Option<String>,
        /// Longer description.
        #[arg(long)]
        description: Option<String>,
        /// Link to a demo video.
        #[arg(long)]
        video_url: Option<String>,
        /// Technology used (repeatable).
        #[arg(long = "tech")]
        tech_stack: Vec<String>,
        /// Team member as "name" or "name:role" (repeatable).
        #[arg(long = "member")]
        team: Vec<String>,
        /// Image file to upload (repeatable).
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Update an existing project (only the given fields change).
    Update {
        /// Project ID.
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New one-line summary.
        #[arg(long)]
        summary: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New demo video link.
        #[arg(long)]
        video_url: Option<String>,
        /// Replacement tech list (repeatable; replaces the whole list).
        #[arg(long = "tech")]
        tech_stack: Vec<String>,
    },
    /// Delete a project.
    Delete {
        /// Project ID.
        id: String,
    },
    /// Rate a project.
    Rate {
        /// Project ID.
        id: String,
        /// Score from 1 to 5.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        score: u8,
    },
    /// Comment on a project.
    Comment {
        /// Project ID.
        id: String,
        /// Comment text.
        #[arg(long)]
        text: String,
    },
    /// List a project's comments.
    Comments {
        /// Project ID.
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List active alerts.
    List,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List all registered users.
    Users,
    /// Delete a user account.
    DeleteUser {
        /// User ID.
        id: String,
    },
    /// Publish a site-wide alert.
    AlertCreate {
        /// Alert title.
        #[arg(long)]
        title: String,
        /// Alert body text.
        #[arg(long)]
        message: Option<String>,
        /// Image file to attach.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Take down an alert.
    AlertDelete {
        /// Alert ID.
        id: String,
    },
    /// Remove a comment (moderation).
    CommentDelete {
        /// Comment ID.
        id: String,
    },
    /// Show platform counters.
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `SHOWCASE_CONFIG`
/// (or `config.toml` by default). Returns the parsed config and the
/// path that was used; a missing file resolves to defaults.
pub fn load_config() -> anyhow::Result<(sc_domain::Config, String)> {
    let config_path =
        std::env::var("SHOWCASE_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let config = if std::path::Path::new(&config_path).exists() {
        let raw = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        sc_domain::Config::default()
    };

    Ok((config, config_path))
}

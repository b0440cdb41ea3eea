mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    AdminCommand, AlertsCommand, Cli, Command, ConfigCommand, ProfileCommand, ProjectsCommand,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_cli_tracing();

    match cli.command {
        Command::Login { admin, email } => {
            let state = load_state()?;
            commands::auth::login(&state, admin, email).await
        }
        Command::Logout => {
            let state = load_state()?;
            commands::auth::logout(&state)
        }
        Command::Whoami { json } => {
            let state = load_state()?;
            commands::auth::whoami(&state, json)
        }
        Command::Register { name, email, class } => {
            let state = load_state()?;
            commands::auth::register(&state, name, email, class).await
        }
        Command::Profile(cmd) => {
            let state = load_state()?;
            match cmd {
                ProfileCommand::Show { json } => commands::profile::show(&state, json).await,
                ProfileCommand::Update { name, class } => {
                    commands::profile::update(&state, name, class).await
                }
                ProfileCommand::Picture { file } => {
                    commands::profile::picture(&state, file).await
                }
            }
        }
        Command::Projects(cmd) => {
            let state = load_state()?;
            match cmd {
                ProjectsCommand::List { json } => commands::projects::list(&state, json).await,
                ProjectsCommand::Show { id } => commands::projects::show(&state, id).await,
                ProjectsCommand::Submit {
                    title,
                    summary,
                    description,
                    video_url,
                    tech_stack,
                    team,
                    images,
                } => {
                    commands::projects::submit(
                        &state,
                        title,
                        summary,
                        description,
                        video_url,
                        tech_stack,
                        team,
                        images,
                    )
                    .await
                }
                ProjectsCommand::Update {
                    id,
                    title,
                    summary,
                    description,
                    video_url,
                    tech_stack,
                } => {
                    commands::projects::update(
                        &state,
                        id,
                        title,
                        summary,
                        description,
                        video_url,
                        tech_stack,
                    )
                    .await
                }
                ProjectsCommand::Delete { id } => commands::projects::delete(&state, id).await,
                ProjectsCommand::Rate { id, score } => {
                    commands::projects::rate(&state, id, score).await
                }
                ProjectsCommand::Comment { id, text } => {
                    commands::projects::comment(&state, id, text).await
                }
                ProjectsCommand::Comments { id } => {
                    commands::projects::comments(&state, id).await
                }
            }
        }
        Command::Alerts(AlertsCommand::List) => {
            let state = load_state()?;
            commands::alerts::list(&state).await
        }
        Command::Admin(cmd) => {
            let state = load_state()?;
            match cmd {
                AdminCommand::Users => commands::admin::users(&state).await,
                AdminCommand::DeleteUser { id } => commands::admin::delete_user(&state, id).await,
                AdminCommand::AlertCreate {
                    title,
                    message,
                    image,
                } => commands::admin::alert_create(&state, title, message, image).await,
                AdminCommand::AlertDelete { id } => commands::admin::alert_delete(&state, id).await,
                AdminCommand::CommentDelete { id } => {
                    commands::admin::comment_delete(&state, id).await
                }
                AdminCommand::Stats => commands::admin::stats(&state).await,
            }
        }
        Command::Config(ConfigCommand::Validate) => {
            let (config, config_path) = cli::load_config()?;
            let valid = commands::config::validate(&config, &config_path);
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Config(ConfigCommand::Show) => {
            let (config, _config_path) = cli::load_config()?;
            commands::config::show(&config);
            Ok(())
        }
        Command::Version => {
            println!("showcase {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load the config and build the shared command state.
fn load_state() -> anyhow::Result<commands::AppState> {
    let (config, _config_path) = cli::load_config()?;
    commands::build_state(config)
}

/// Initialize compact stderr-only tracing for CLI one-shot commands.
///
/// Defaults to `warn` level so diagnostic output does not pollute stdout.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

//! `showcase profile ...` — the caller's own profile.

use std::path::PathBuf;

use sc_api::{ProfileUpdate, ShowcaseApi};
use sc_domain::Identity;
use sc_session::{LoginEntry, RouteGuard};

use super::{ensure_access, AppState};

fn user_guard() -> RouteGuard {
    RouteGuard::authenticated(LoginEntry::User)
}

/// Fetch the profile from the server (unlike `whoami`, which reads the
/// locally stored identity).
pub async fn show(state: &AppState, json: bool) -> anyhow::Result<()> {
    ensure_access(user_guard(), &state.sessions)?;
    let identity = state.client.me().await?;
    print_identity(&identity, json)
}

/// Update name and/or class.
pub async fn update(
    state: &AppState,
    name: Option<String>,
    class: Option<String>,
) -> anyhow::Result<()> {
    ensure_access(user_guard(), &state.sessions)?;
    if name.is_none() && class.is_none() {
        anyhow::bail!("nothing to update — pass --name and/or --class");
    }
    let identity = state.client.update_profile(ProfileUpdate { name, class }).await?;
    println!("Profile updated");
    print_identity(&identity, false)
}

/// Upload a new profile picture.
pub async fn picture(state: &AppState, file: PathBuf) -> anyhow::Result<()> {
    ensure_access(user_guard(), &state.sessions)?;
    let identity = state.client.upload_picture(&file).await?;
    match identity.picture {
        Some(ref reference) => println!("Picture uploaded: {reference}"),
        None => println!("Picture uploaded"),
    }
    Ok(())
}

fn print_identity(identity: &Identity, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(identity)?);
    } else {
        println!("{} <{}>", identity.name, identity.email);
        println!("role:  {}", identity.role);
        if let Some(ref class) = identity.class {
            println!("class: {class}");
        }
        if let Some(ref picture) = identity.picture {
            println!("picture: {picture}");
        }
    }
    Ok(())
}

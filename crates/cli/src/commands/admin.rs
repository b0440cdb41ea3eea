//! `showcase admin ...` — dashboard commands, moderator role required.

use std::path::PathBuf;

use sc_api::{NewAlert, ShowcaseApi};
use sc_domain::Role;
use sc_session::{LoginEntry, RouteGuard};

use super::{ensure_access, AppState};

fn admin_guard() -> RouteGuard {
    RouteGuard::role(LoginEntry::Admin, Role::Moderator)
}

pub async fn users(state: &AppState) -> anyhow::Result<()> {
    ensure_access(admin_guard(), &state.sessions)?;
    let users = state.client.list_users().await?;
    for user in &users {
        let projects = user
            .project_count
            .map(|n| format!("{n} project(s)"))
            .unwrap_or_default();
        println!("{}  {} <{}>  {}  {}", user.id, user.name, user.email, user.role, projects);
    }
    Ok(())
}

pub async fn delete_user(state: &AppState, id: String) -> anyhow::Result<()> {
    ensure_access(admin_guard(), &state.sessions)?;
    state.client.delete_user(&id).await?;
    println!("Deleted user {id}");
    Ok(())
}

pub async fn alert_create(
    state: &AppState,
    title: String,
    message: Option<String>,
    image: Option<PathBuf>,
) -> anyhow::Result<()> {
    ensure_access(admin_guard(), &state.sessions)?;
    let alert = state
        .client
        .create_alert(NewAlert { title, message }, image.as_deref())
        .await?;
    println!("Published alert {}", alert.id);
    Ok(())
}

pub async fn alert_delete(state: &AppState, id: String) -> anyhow::Result<()> {
    ensure_access(admin_guard(), &state.sessions)?;
    state.client.delete_alert(&id).await?;
    println!("Deleted alert {id}");
    Ok(())
}

pub async fn comment_delete(state: &AppState, id: String) -> anyhow::Result<()> {
    ensure_access(admin_guard(), &state.sessions)?;
    state.client.delete_comment(&id).await?;
    println!("Deleted comment {id}");
    Ok(())
}

pub async fn stats(state: &AppState) -> anyhow::Result<()> {
    ensure_access(admin_guard(), &state.sessions)?;
    let stats = state.client.stats().await?;
    println!("users:    {}", stats.users);
    println!("projects: {}", stats.projects);
    println!("comments: {}", stats.comments);
    println!("ratings:  {}", stats.ratings);
    Ok(())
}

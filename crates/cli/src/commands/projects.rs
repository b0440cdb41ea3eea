//! `showcase projects ...` — browse and manage portfolio projects.

use std::path::PathBuf;

use sc_api::{
    NewComment, NewProject, Project, ProjectUpdate, RatingRequest, ShowcaseApi, TeamMember,
};
use sc_session::{LoginEntry, RouteGuard};

use super::{ensure_access, AppState};

/// List all projects.
pub async fn list(state: &AppState, json: bool) -> anyhow::Result<()> {
    let projects = state.client.list_projects().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }
    if projects.is_empty() {
        println!("no projects yet");
        return Ok(());
    }
    for project in &projects {
        let rating = project
            .average_rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".into());
        println!("{}  {}  [{}]", project.id, project.title, rating);
    }
    Ok(())
}

/// Show one project in full.
pub async fn show(state: &AppState, id: String) -> anyhow::Result<()> {
    let project = state.client.get_project(&id).await?;
    print_project(&project);
    Ok(())
}

/// Submit a new project with optional images.
pub async fn submit(
    state: &AppState,
    title: String,
    summary: Option<String>,
    description: Option<String>,
    video_url: Option<String>,
    tech_stack: Vec<String>,
    team: Vec<String>,
    images: Vec<PathBuf>,
) -> anyhow::Result<()> {
    ensure_access(
        RouteGuard::authenticated(LoginEntry::User),
        &state.sessions,
    )?;

    let team = team.iter().map(|raw| parse_member(raw)).collect();
    let new = NewProject {
        title,
        summary,
        description,
        video_url,
        tech_stack,
        team,
    };

    let image_refs: Vec<&std::path::Path> = images.iter().map(|p| p.as_path()).collect();
    let project = state.client.create_project(new, &image_refs).await?;
    println!("Submitted project {}", project.id);
    Ok(())
}

/// Update an existing project. Only the provided fields change.
pub async fn update(
    state: &AppState,
    id: String,
    title: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    video_url: Option<String>,
    tech_stack: Vec<String>,
) -> anyhow::Result<()> {
    ensure_access(
        RouteGuard::authenticated(LoginEntry::User),
        &state.sessions,
    )?;

    let update = ProjectUpdate {
        title,
        summary,
        description,
        video_url,
        tech_stack: if tech_stack.is_empty() {
            None
        } else {
            Some(tech_stack)
        },
        team: None,
    };
    let project = state.client.update_project(&id, update).await?;
    println!("Updated project {}", project.id);
    Ok(())
}

/// Delete a project.
pub async fn delete(state: &AppState, id: String) -> anyhow::Result<()> {
    ensure_access(
        RouteGuard::authenticated(LoginEntry::User),
        &state.sessions,
    )?;
    state.client.delete_project(&id).await?;
    println!("Deleted project {id}");
    Ok(())
}

/// Rate a project 1-5.
pub async fn rate(state: &AppState, id: String, score: u8) -> anyhow::Result<()> {
    ensure_access(
        RouteGuard::authenticated(LoginEntry::User),
        &state.sessions,
    )?;
    let project = state.client.rate_project(&id, RatingRequest { score }).await?;
    let average = project
        .average_rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "-".into());
    println!("Rated {} — average now {}", project.title, average);
    Ok(())
}

/// Post a comment on a project.
pub async fn comment(state: &AppState, id: String, text: String) -> anyhow::Result<()> {
    ensure_access(
        RouteGuard::authenticated(LoginEntry::User),
        &state.sessions,
    )?;
    let posted = state.client.post_comment(&id, NewComment { text }).await?;
    println!("Comment {} posted", posted.id);
    Ok(())
}

/// List a project's comments.
pub async fn comments(state: &AppState, id: String) -> anyhow::Result<()> {
    let comments = state.client.list_comments(&id).await?;
    if comments.is_empty() {
        println!("no comments yet");
        return Ok(());
    }
    for comment in &comments {
        let author = comment.author_name.as_deref().unwrap_or("anonymous");
        println!("{}: {}", author, comment.text);
    }
    Ok(())
}

/// Parse a `--member` value: `"name"` or `"name:role"`.
fn parse_member(raw: &str) -> TeamMember {
    match raw.split_once(':') {
        Some((name, role)) => TeamMember {
            name: name.trim().to_owned(),
            role: Some(role.trim().to_owned()),
        },
        None => TeamMember {
            name: raw.trim().to_owned(),
            role: None,
        },
    }
}

fn print_project(project: &Project) {
    println!("{} — {}", project.id, project.title);
    if let Some(ref summary) = project.summary {
        println!("{summary}");
    }
    if let Some(ref description) = project.description {
        println!("\n{description}");
    }
    if !project.tech_stack.is_empty() {
        println!("\ntech: {}", project.tech_stack.join(", "));
    }
    if !project.team.is_empty() {
        let members: Vec<String> = project
            .team
            .iter()
            .map(|m| match m.role {
                Some(ref role) => format!("{} ({role})", m.name),
                None => m.name.clone(),
            })
            .collect();
        println!("team: {}", members.join(", "));
    }
    if let Some(ref video) = project.video_url {
        println!("video: {video}");
    }
    if let Some(average) = project.average_rating {
        println!(
            "rating: {average:.1} ({} votes)",
            project.ratings_count.unwrap_or(0)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_with_role_splits_on_colon() {
        let member = parse_member("Siri Holm: firmware");
        assert_eq!(member.name, "Siri Holm");
        assert_eq!(member.role.as_deref(), Some("firmware"));
    }

    #[test]
    fn member_without_role_keeps_full_name() {
        let member = parse_member("Nils Ek");
        assert_eq!(member.name, "Nils Ek");
        assert!(member.role.is_none());
    }
}

//! `showcase login` / `logout` / `whoami` / `register`.

use sc_api::{LoginRequest, RegisterRequest, ShowcaseApi};

use super::{prompt_line, AppState};

/// Authenticate at the user or admin entry point and store the session.
pub async fn login(state: &AppState, admin: bool, email: Option<String>) -> anyhow::Result<()> {
    let email = match email {
        Some(e) => e,
        None => prompt_line("Email: ")?,
    };
    let password = rpassword::prompt_password_stdout("Password: ")?;

    let req = LoginRequest { email, password };
    let resp = if admin {
        state.client.admin_login(req).await?
    } else {
        state.client.login(req).await?
    };

    let (identity, token) = resp.into_session()?;
    println!("Logged in as {} <{}> ({})", identity.name, identity.email, identity.role);
    state.sessions.login(identity, token);
    Ok(())
}

/// Clear the stored session. Safe to run when already logged out.
pub fn logout(state: &AppState) -> anyhow::Result<()> {
    state.sessions.logout();
    println!("Logged out");
    Ok(())
}

/// Print the current identity, or report the logged-out state.
pub fn whoami(state: &AppState, json: bool) -> anyhow::Result<()> {
    match state.sessions.current() {
        Some(session) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.identity)?);
            } else {
                let identity = &session.identity;
                println!("{} <{}>", identity.name, identity.email);
                println!("role:  {}", identity.role);
                if let Some(ref class) = identity.class {
                    println!("class: {class}");
                }
            }
        }
        None => println!("not logged in"),
    }
    Ok(())
}

/// Create a new account. Does not log in; run `showcase login` after.
pub async fn register(
    state: &AppState,
    name: String,
    email: String,
    class: Option<String>,
) -> anyhow::Result<()> {
    let password = rpassword::prompt_password_stdout("Password: ")?;
    let confirm = rpassword::prompt_password_stdout("Confirm password: ")?;
    if password != confirm {
        anyhow::bail!("passwords do not match");
    }

    state
        .client
        .register(RegisterRequest {
            name,
            email: email.clone(),
            password,
            class,
        })
        .await?;
    println!("Account created for {email} — run `showcase login` to sign in");
    Ok(())
}

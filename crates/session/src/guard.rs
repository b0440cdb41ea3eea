//! Route guard — the decision taken before entering a protected area.
//!
//! One parameterized guard serves both the user and the admin area,
//! replacing the SPA's two near-identical guards that each read storage
//! on their own. The guard never touches storage directly: it consults
//! the live [`SessionStore`], so a logout anywhere (explicit or forced
//! by a 401) flips the next decision.

use sc_domain::trace::TraceEvent;
use sc_domain::Role;

use crate::store::SessionStore;

/// The two distinct login entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEntry {
    User,
    Admin,
}

impl LoginEntry {
    fn as_str(&self) -> &'static str {
        match self {
            LoginEntry::User => "user",
            LoginEntry::Admin => "admin",
        }
    }
}

/// What a guarded area demands of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any logged-in identity.
    Authenticated,
    /// A specific role, matched exactly.
    Role(Role),
}

impl RoleRequirement {
    fn satisfied_by(&self, role: Role) -> bool {
        match self {
            RoleRequirement::Authenticated => true,
            RoleRequirement::Role(required) => role == *required,
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render / run the guarded area.
    Allow,
    /// Not logged in: redirect to the given login entry point.
    RedirectLogin(LoginEntry),
    /// Logged in but wrongly roled: redirect to the neutral home route.
    RedirectHome,
}

impl GuardDecision {
    fn as_str(&self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::RedirectLogin(LoginEntry::User) => "redirect_user_login",
            GuardDecision::RedirectLogin(LoginEntry::Admin) => "redirect_admin_login",
            GuardDecision::RedirectHome => "redirect_home",
        }
    }
}

/// A guard protecting one area of the application.
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    entry: LoginEntry,
    requirement: RoleRequirement,
}

impl RouteGuard {
    /// Guard requiring any logged-in identity, redirecting to `entry`
    /// when there is none.
    pub fn authenticated(entry: LoginEntry) -> Self {
        Self {
            entry,
            requirement: RoleRequirement::Authenticated,
        }
    }

    /// Guard requiring a specific role.
    pub fn role(entry: LoginEntry, role: Role) -> Self {
        Self {
            entry,
            requirement: RoleRequirement::Role(role),
        }
    }

    /// Evaluate against the live session state.
    ///
    /// Consults the store on every call — never a cached snapshot — so
    /// the check is re-evaluated whenever the session changes.
    pub fn evaluate(&self, sessions: &SessionStore) -> GuardDecision {
        let decision = match sessions.current() {
            None => GuardDecision::RedirectLogin(self.entry),
            Some(session) if !self.requirement.satisfied_by(session.identity.role) => {
                GuardDecision::RedirectHome
            }
            Some(_) => GuardDecision::Allow,
        };

        TraceEvent::GuardEvaluated {
            area: self.entry.as_str().into(),
            outcome: decision.as_str().into(),
        }
        .emit();

        decision
    }
}

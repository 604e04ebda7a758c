//! Access guard - turns a resolved session into an access decision.
//!
//! The pure core is [`decide`]. [`AccessGuard`] wires it to a
//! [`SessionResolver`] and a [`GuardConfig`] so page handlers get either the
//! session or a [`Redirect`] to perform.

use crate::config::GuardConfig;
use crate::session::{ADMIN_ROLE, SessionDescriptor, SessionResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    Allow,
    RedirectSignIn,
    RedirectHome,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Redirect target for a denied decision, `None` for `Allow`.
    pub fn location<'a>(&self, config: &'a GuardConfig) -> Option<&'a str> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::RedirectSignIn => Some(config.sign_in_path.as_str()),
            AccessDecision::RedirectHome => Some(config.home_path.as_str()),
        }
    }
}

/// Decides whether `session` may enter an area.
///
/// - `required_role == None`: any session is allowed, no session goes to sign-in.
/// - `required_role == Some(role)`: a session holding `role` is allowed;
///   a missing session or any other role goes home.
pub fn decide(session: Option<&SessionDescriptor>, required_role: Option<&str>) -> AccessDecision {
    match (session, required_role) {
        (None, None) => AccessDecision::RedirectSignIn,
        (Some(_), None) => AccessDecision::Allow,
        (Some(s), Some(role)) if s.has_role(role) => AccessDecision::Allow,
        (_, Some(_)) => AccessDecision::RedirectHome,
    }
}

/// Any authenticated user; missing session goes to sign-in.
pub fn require_auth(session: Option<&SessionDescriptor>) -> AccessDecision {
    decide(session, None)
}

/// Authentication first (missing session goes to sign-in), then the admin
/// role (any other role goes home).
pub fn require_admin(session: Option<&SessionDescriptor>) -> AccessDecision {
    match require_auth(session) {
        AccessDecision::Allow => decide(session, Some(ADMIN_ROLE)),
        denied => denied,
    }
}

/// Admin panel layout gate. Unlike [`require_admin`], a missing session goes
/// home rather than to sign-in.
pub fn admin_area(session: Option<&SessionDescriptor>) -> AccessDecision {
    decide(session, Some(ADMIN_ROLE))
}

/// Sign-in and sign-up pages send already authenticated users home.
pub fn redirect_if_authenticated(session: Option<&SessionDescriptor>) -> AccessDecision {
    match session {
        Some(_) => AccessDecision::RedirectHome,
        None => AccessDecision::Allow,
    }
}

/// Navigation the boundary layer must perform for a denied request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub decision: AccessDecision,
    pub location: String,
}

/// Resolves sessions and applies the named policies.
#[derive(Debug, Clone)]
pub struct AccessGuard<R> {
    resolver: R,
    config: GuardConfig,
}

impl<R: SessionResolver> AccessGuard<R> {
    pub fn new(resolver: R, config: GuardConfig) -> Self {
        Self { resolver, config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn session(&self, ctx: &R::Context) -> Option<SessionDescriptor> {
        self.resolver.resolve(ctx)
    }

    pub fn require_auth(&self, ctx: &R::Context) -> Result<SessionDescriptor, Redirect> {
        self.enforce("require_auth", ctx, require_auth)
    }

    pub fn require_admin(&self, ctx: &R::Context) -> Result<SessionDescriptor, Redirect> {
        self.enforce("require_admin", ctx, require_admin)
    }

    pub fn admin_area(&self, ctx: &R::Context) -> Result<SessionDescriptor, Redirect> {
        self.enforce("admin_area", ctx, admin_area)
    }

    /// Sign-in and sign-up pages: authenticated callers go to `home_path`.
    pub fn redirect_if_authenticated(&self, ctx: &R::Context) -> Result<(), Redirect> {
        self.redirect_if_authenticated_to(ctx, &self.config.home_path)
    }

    /// Like [`AccessGuard::redirect_if_authenticated`], sending authenticated
    /// callers to `redirect_to` instead of the configured home path.
    pub fn redirect_if_authenticated_to(
        &self,
        ctx: &R::Context,
        redirect_to: &str,
    ) -> Result<(), Redirect> {
        let session = self.session(ctx);
        match redirect_if_authenticated(session.as_ref()) {
            AccessDecision::Allow => Ok(()),
            decision => Err(self.deny("redirect_if_authenticated", decision, redirect_to)),
        }
    }

    fn enforce(
        &self,
        policy: &str,
        ctx: &R::Context,
        policy_fn: fn(Option<&SessionDescriptor>) -> AccessDecision,
    ) -> Result<SessionDescriptor, Redirect> {
        let session = self.session(ctx);
        let decision = policy_fn(session.as_ref());
        match (decision, session) {
            (AccessDecision::Allow, Some(session)) => Ok(session),
            (AccessDecision::RedirectHome, _) => {
                Err(self.deny(policy, decision, &self.config.home_path))
            }
            (decision, _) => {
                debug_assert_eq!(decision, AccessDecision::RedirectSignIn);
                Err(self.deny(policy, AccessDecision::RedirectSignIn, &self.config.sign_in_path))
            }
        }
    }

    fn deny(&self, _policy: &str, decision: AccessDecision, location: &str) -> Redirect {
        let redirect = Redirect {
            decision,
            location: location.to_string(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            policy = _policy,
            decision = ?redirect.decision,
            location = %redirect.location,
            "access denied"
        );

        redirect
    }
}

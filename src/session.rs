//! Session descriptors and the resolver seam.

use thiserror::Error;

/// Role granting access to the admin panel.
pub const ADMIN_ROLE: &str = "admin";

/// Identity of the current caller, as resolved by the host application.
///
/// `role` is free-form text; only equality with [`ADMIN_ROLE`] matters here.
/// The profile fields are optional and only feed the display helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescriptor {
    pub user_id: String,
    pub role: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub permissions: Vec<String>,
}

impl SessionDescriptor {
    pub fn new(user_id: impl Into<String>, role: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            name: None,
            email: None,
            permissions: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Email when present, otherwise the user id.
    fn contact(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.user_id)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

/// Produces a session from request context.
///
/// Implementations own cookie/token parsing and storage lookups. An expired,
/// corrupt or unknown token must be reported as `None`, the same as no
/// session at all.
pub trait SessionResolver {
    type Context: ?Sized;

    fn resolve(&self, ctx: &Self::Context) -> Option<SessionDescriptor>;
}

impl<R: SessionResolver + ?Sized> SessionResolver for &R {
    type Context = R::Context;

    fn resolve(&self, ctx: &Self::Context) -> Option<SessionDescriptor> {
        (**self).resolve(ctx)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GuardError {
    #[error("User not authenticated")]
    NotAuthenticated,
}

pub fn is_authenticated(session: Option<&SessionDescriptor>) -> bool {
    session.is_some()
}

pub fn has_role(session: Option<&SessionDescriptor>, role: &str) -> bool {
    session.is_some_and(|s| s.has_role(role))
}

/// Whether the caller owns the resource created by `resource_user_id`.
pub fn is_resource_owner(session: Option<&SessionDescriptor>, resource_user_id: &str) -> bool {
    session.is_some_and(|s| s.user_id == resource_user_id)
}

/// True when a session exists and holds every permission in `permissions`.
/// An empty list only requires a session.
pub fn has_permissions(session: Option<&SessionDescriptor>, permissions: &[&str]) -> bool {
    session.is_some_and(|s| permissions.iter().all(|p| s.has_permission(p)))
}

/// Name shown in navigation: the user's name, else the local part of the email.
pub fn format_user_name(session: &SessionDescriptor) -> String {
    match session.display_name() {
        Some(name) => name.to_string(),
        None => session
            .contact()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Up to two upper-cased avatar letters.
///
/// First letter of each word of the name, else the first two characters of
/// the email.
pub fn user_initials(session: &SessionDescriptor) -> String {
    match session.display_name() {
        Some(name) => name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
            .chars()
            .take(2)
            .collect(),
        None => session
            .contact()
            .chars()
            .take(2)
            .collect::<String>()
            .to_uppercase(),
    }
}

/// Returns the caller's user id.
///
/// # Errors
///
/// `GuardError::NotAuthenticated` when there is no session or its user id is empty.
pub fn require_user_id(session: Option<&SessionDescriptor>) -> Result<&str, GuardError> {
    match session {
        Some(s) if !s.user_id.is_empty() => Ok(s.user_id.as_str()),
        _ => Err(GuardError::NotAuthenticated),
    }
}

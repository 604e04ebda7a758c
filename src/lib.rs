//! Authentication core for the Cakranesia platform
//!
//! Two independent, stateless pieces:
//!
//! - a password strength evaluator, cheap enough to run on every keystroke
//!   of the sign-up and reset-password forms;
//! - an access guard that turns a resolved session into allow / redirect
//!   decisions for authenticated and admin-only pages.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `CAKRANESIA_SIGN_IN_PATH`: Redirect target for unauthenticated callers
//!   (default: `/auth/sign-in`)
//! - `CAKRANESIA_HOME_PATH`: Redirect target for callers lacking a role
//!   (default: `/`)
//!
//! # Example
//!
//! ```rust
//! use cakranesia_auth::{evaluate, decide, AccessDecision, SessionDescriptor, StrengthLabel};
//!
//! let assessment = evaluate("Tr0ub4dor&3XyZ");
//! assert_eq!(assessment.score.value(), 6);
//! assert_eq!(assessment.label, StrengthLabel::Good);
//!
//! let admin = SessionDescriptor::new("u-1", Some("admin".to_string()));
//! assert_eq!(decide(Some(&admin), Some("admin")), AccessDecision::Allow);
//! assert_eq!(decide(None, None), AccessDecision::RedirectSignIn);
//! ```

// Internal modules
mod config;
mod evaluator;
mod guard;
mod sections;
mod session;
mod types;

// Public API
pub use config::{ConfigError, GuardConfig};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use guard::{
    AccessDecision, AccessGuard, Redirect, admin_area, decide, redirect_if_authenticated,
    require_admin, require_auth,
};
pub use session::{
    ADMIN_ROLE, GuardError, SessionDescriptor, SessionResolver, format_user_name, has_permissions,
    has_role, is_authenticated, is_resource_owner, require_user_id, user_initials,
};
pub use types::{Feedback, StrengthAssessment, StrengthLabel, StrengthScore, StrengthTone};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};

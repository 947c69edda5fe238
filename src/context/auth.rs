// ABOUTME: Authentication context holding the bearer token for backend calls
// ABOUTME: Cheap to clone; shared between the REST store and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

/// Authentication context for calls to the training backend
///
/// An anonymous context sends no `Authorization` header; the backend then
/// answers 401, which surfaces as `AuthInvalid`.
#[derive(Clone, Default)]
pub struct AuthContext {
    access_token: Option<Arc<str>>,
}

impl AuthContext {
    /// Context carrying a bearer token
    #[must_use]
    pub fn with_token(token: impl Into<Arc<str>>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }

    /// Context without credentials
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { access_token: None }
    }

    /// Bearer token, if any
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Whether a token is present
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

// Tokens must never reach logs
impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let context = AuthContext::with_token("secret-token");
        let rendered = format!("{context:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("authenticated: true"));
    }
}

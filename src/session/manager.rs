// ABOUTME: Session state machine with bounded token revalidation and fail-closed bootstrap
// ABOUTME: Owns login/logout transitions and keeps in-memory and durable state consistent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::constants::session::{
    KEY_LAST_VALIDATION, KEY_TOKEN, KEY_USER, REVALIDATION_INTERVAL_MS,
};
use crate::errors::{AuthError, ClientResult};
use crate::models::User;
use crate::session::store::SessionStore;

/// Remote token validation port
///
/// The production implementation calls `POST /api/auth/validate` with a
/// bearer header; tests substitute counting or failing mocks. Any non-2xx
/// response and any transport failure both surface as an error: the caller
/// treats them identically (fail-closed).
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Check whether the token is still accepted by the backend
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the token is rejected or the endpoint
    /// is unreachable
    async fn validate(&self, token: &str) -> Result<(), AuthError>;
}

/// Lifecycle phase of the session machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial hydration from durable storage has not finished
    Bootstrapping,
    /// A stored token is being checked against the validation endpoint
    Validating,
    /// No active session
    Anonymous,
    /// A token and user are present
    Authenticated,
}

/// Caller-visible session snapshot for route guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    /// Whether a token is currently held
    pub is_authenticated: bool,
    /// True only while the initial bootstrap (including validation) runs
    pub is_loading: bool,
    /// Current user identity, if authenticated
    pub user: Option<User>,
}

#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    token: Option<String>,
    user: Option<User>,
}

/// Single source of truth for the client's authentication state
///
/// The machine starts in `Bootstrapping`, settles into `Anonymous` or
/// `Authenticated`, and cycles between those two for the lifetime of the
/// application instance. Token and user are always set and cleared together;
/// a partially present session is unrepresentable.
pub struct SessionManager {
    state: Mutex<SessionState>,
    store: Arc<dyn SessionStore>,
    validator: Arc<dyn TokenValidator>,
    on_logout: Option<Box<dyn Fn() + Send + Sync>>,
}

impl SessionManager {
    /// Create a session manager over a storage backend and a validator
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, validator: Arc<dyn TokenValidator>) -> Self {
        Self {
            state: Mutex::new(SessionState {
                phase: SessionPhase::Bootstrapping,
                token: None,
                user: None,
            }),
            store,
            validator,
            on_logout: None,
        }
    }

    /// Register a hook invoked after every logout transition
    ///
    /// UI collaborators use this to redirect to their login surface.
    #[must_use]
    pub fn with_logout_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_logout = Some(Box::new(hook));
        self
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hydrate the session from durable storage, once per application load
    ///
    /// A stored token validated within the last 30 minutes is trusted
    /// without a remote call; otherwise the validation endpoint decides.
    /// Validation failures and network errors alike force a logout before
    /// the `Anonymous` state becomes observable. Callers gate their UI on
    /// [`SessionStatus::is_loading`] while this runs.
    pub async fn bootstrap(&self) -> SessionStatus {
        let stored = self.read_stored_session();

        let Some((token, user, last_validated_ms)) = stored else {
            debug!("no stored session found, starting anonymous");
            // Partial or corrupt leftovers are removed so the next load starts clean
            for key in [KEY_TOKEN, KEY_USER, KEY_LAST_VALIDATION] {
                if let Err(err) = self.store.remove(key) {
                    warn!("failed to clear session key {key}: {err}");
                }
            }
            self.state().phase = SessionPhase::Anonymous;
            return self.status();
        };

        let now_ms = Utc::now().timestamp_millis();
        let needs_validation =
            last_validated_ms.map_or(true, |last| now_ms - last > REVALIDATION_INTERVAL_MS);

        if !needs_validation {
            debug!("stored token validated recently, skipping remote check");
            self.become_authenticated(token, user);
            return self.status();
        }

        self.state().phase = SessionPhase::Validating;
        match self.validator.validate(&token).await {
            Ok(()) => {
                if let Err(err) = self
                    .store
                    .put(KEY_LAST_VALIDATION, &now_ms.to_string())
                {
                    warn!("failed to persist validation timestamp: {err}");
                }
                info!("stored token revalidated");
                self.become_authenticated(token, user);
            }
            Err(err) => {
                // Fail closed: an unreachable validator is treated the same
                // as an explicit rejection
                info!("stored token rejected during bootstrap: {err}");
                self.logout();
            }
        }
        self.status()
    }

    /// Establish a session after a successful credential submission
    ///
    /// In-memory and durable state are written together under one lock, so
    /// no caller can observe the token without the user or vice versa.
    /// Idempotent when called again with the same arguments.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session cannot be persisted; in-memory
    /// state is left untouched in that case.
    pub fn login(&self, token: impl Into<String>, user: User) -> ClientResult<()> {
        let token = token.into();
        let mut state = self.state();

        self.store.put(KEY_TOKEN, &token)?;
        let user_json = serde_json::to_string(&user)
            .map_err(|e| crate::errors::ClientError::storage(format!("serialize user: {e}")))?;
        self.store.put(KEY_USER, &user_json)?;
        self.store
            .put(KEY_LAST_VALIDATION, &Utc::now().timestamp_millis().to_string())?;

        info!(email = %user.email, "session established");
        state.token = Some(token);
        state.user = Some(user);
        state.phase = SessionPhase::Authenticated;
        Ok(())
    }

    /// Clear the session, in memory and in durable storage
    ///
    /// Always succeeds, even with no active session or a degraded storage
    /// backend; all three durable keys are cleared together, never partially.
    pub fn logout(&self) {
        {
            let mut state = self.state();
            state.token = None;
            state.user = None;
            state.phase = SessionPhase::Anonymous;

            for key in [KEY_TOKEN, KEY_USER, KEY_LAST_VALIDATION] {
                if let Err(err) = self.store.remove(key) {
                    warn!("failed to clear session key {key}: {err}");
                }
            }
        }
        debug!("session cleared");
        if let Some(hook) = &self.on_logout {
            hook();
        }
    }

    /// Current caller-visible session snapshot
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        let state = self.state();
        SessionStatus {
            is_authenticated: state.token.is_some(),
            is_loading: matches!(
                state.phase,
                SessionPhase::Bootstrapping | SessionPhase::Validating
            ),
            user: state.user.clone(),
        }
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state().phase
    }

    /// Bearer token for authenticated API requests, if any
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state().token.clone()
    }

    fn become_authenticated(&self, token: String, user: User) {
        let mut state = self.state();
        state.token = Some(token);
        state.user = Some(user);
        state.phase = SessionPhase::Authenticated;
    }

    /// Read the stored session, treating partial or corrupt entries as absent
    fn read_stored_session(&self) -> Option<(String, User, Option<i64>)> {
        let token = match self.store.get(KEY_TOKEN) {
            Ok(value) => value,
            Err(err) => {
                warn!("session store unreadable, starting anonymous: {err}");
                return None;
            }
        }?;
        let user_json = self.store.get(KEY_USER).ok().flatten()?;
        let user: User = match serde_json::from_str(&user_json) {
            Ok(user) => user,
            Err(err) => {
                warn!("stored user is corrupt, discarding session: {err}");
                return None;
            }
        };
        let last_validated_ms = self
            .store
            .get(KEY_LAST_VALIDATION)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse::<i64>().ok());
        Some((token, user, last_validated_ms))
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

//! # Session manager, the single source of truth for "who is logged in"
//!
//! [`SessionManager`] is constructed once by the composition root and shared
//! by cloning. It owns:
//!
//! - an [`AuthBackend`] (the real [`ApiClient`] in the app, a fake in tests),
//! - the [`SharedTokenStore`] holding the persisted token pair,
//! - a `tokio::sync::watch` channel carrying the current [`AuthState`].
//!
//! ## Lifecycle
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`restore_session`](SessionManager::restore_session) | Runs once. Stored token → profile fetch under a deadline. Any failure clears the tokens. Always ends with `loading = false`. |
//! | [`login`](SessionManager::login) | Backend login; on success persists both tokens and sets the user. Errors are returned untouched. |
//! | [`register`](SessionManager::register) | Account creation; signs the new user in exactly like `login`. |
//! | [`logout`](SessionManager::logout) | Clears tokens and user locally. Idempotent. |
//! | [`invalidate`](SessionManager::invalidate) | Same clearing as logout, reports whether someone was actually signed out. |
//!
//! Every login, logout and invalidation bumps an epoch counter. A restore that
//! finishes after one of those leaves the user untouched, so a slow profile
//! check can neither resurrect a signed-out session nor clobber a fresh login.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use api::{
    with_timeout, ApiClient, ApiError, AuthResponse, LoginCredentials, RegisterData, SessionEvent,
    User,
};
use store::{SharedTokenStore, TokenStore};
use tokio::sync::{broadcast, watch};

use crate::backend::AuthBackend;
use crate::state::AuthState;

struct Inner<B> {
    backend: B,
    tokens: SharedTokenStore,
    state: watch::Sender<AuthState>,
    restore_timeout: Duration,
    restore_started: AtomicBool,
    epoch: AtomicU64,
}

/// Shared handle to the session. Clones observe and mutate the same state.
pub struct SessionManager<B> {
    inner: Arc<Inner<B>>,
}

impl<B> Clone for SessionManager<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B> PartialEq for SessionManager<B> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<B> std::fmt::Debug for SessionManager<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionManager<ApiClient> {
    /// Build a session on top of the app's API client, sharing its token store
    /// and restore deadline.
    pub fn from_client(client: ApiClient) -> Self {
        let tokens = client.tokens().clone();
        let restore_timeout = client.config().restore_timeout();
        Self::new(client, tokens, restore_timeout)
    }
}

impl<B: AuthBackend> SessionManager<B> {
    pub fn new(backend: B, tokens: SharedTokenStore, restore_timeout: Duration) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            inner: Arc::new(Inner {
                backend,
                tokens,
                state,
                restore_timeout,
                restore_started: AtomicBool::new(false),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }

    /// Exchange the persisted token for the user's profile.
    ///
    /// Only the first call does any work; later calls return the current state.
    pub async fn restore_session(&self) -> AuthState {
        if self.inner.restore_started.swap(true, Ordering::SeqCst) {
            tracing::debug!("Session restore already ran");
            return self.state();
        }

        let epoch = self.inner.epoch.load(Ordering::SeqCst);
        let user = match self.inner.tokens.access_token() {
            None => {
                tracing::debug!("No stored session");
                None
            }
            Some(_) => {
                let profile = self.inner.backend.profile();
                match with_timeout(self.inner.restore_timeout, profile).await {
                    Ok(Ok(user)) => {
                        tracing::info!("Restored session for {}", user.email);
                        Some(user)
                    }
                    Ok(Err(e)) => {
                        tracing::warn!("Stored session could not be restored: {}", e);
                        self.discard_tokens(epoch);
                        None
                    }
                    Err(e) => {
                        tracing::warn!("Session restore gave up: {}", e);
                        self.discard_tokens(epoch);
                        None
                    }
                }
            }
        };

        let current = self.inner.epoch.load(Ordering::SeqCst) == epoch;
        self.inner.state.send_modify(|state| {
            if current {
                state.user = user;
            }
            state.loading = false;
        });
        self.state()
    }

    /// Sign in. On failure the backend's error is returned as-is and nothing
    /// is persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let credentials = LoginCredentials::new(email, password);
        let response = self.inner.backend.login(&credentials).await?;
        Ok(self.establish(response))
    }

    /// Create an account and sign it in. Same failure contract as [`login`](Self::login).
    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        let response = self.inner.backend.register(data).await?;
        Ok(self.establish(response))
    }

    fn establish(&self, response: AuthResponse) -> User {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.tokens.save_session(&response.session());
        let user = response.user;
        self.inner.state.send_modify(|state| {
            state.user = Some(user.clone());
        });

        tracing::info!("Signed in as {}", user.email);
        user
    }

    /// Sign out locally. No backend call is made.
    pub fn logout(&self) {
        if self.clear() {
            tracing::info!("Signed out");
        }
    }

    /// Drop a session the backend no longer accepts.
    ///
    /// Returns `true` only when this call moved the state from signed in to
    /// signed out, so callers can redirect exactly once.
    pub fn invalidate(&self) -> bool {
        let signed_out = self.clear();
        if signed_out {
            tracing::warn!("Session invalidated by the backend");
        }
        signed_out
    }

    pub fn handle_event(&self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Invalidated => self.invalidate(),
        }
    }

    /// Consume events until one signs the user out (`true`) or the channel
    /// closes (`false`).
    pub async fn wait_for_invalidation(
        &self,
        events: &mut broadcast::Receiver<SessionEvent>,
    ) -> bool {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if self.handle_event(event) {
                        return true;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!("Missed {} session events", missed);
                    if self.invalidate() {
                        return true;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }

    fn clear(&self) -> bool {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.tokens.clear_session();
        self.inner
            .state
            .send_if_modified(|state| state.user.take().is_some())
    }

    fn discard_tokens(&self, epoch: u64) {
        if self.inner.epoch.load(Ordering::SeqCst) == epoch {
            self.inner.tokens.clear_session();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use api::{SessionEvents, UserRole};
    use store::{MemoryStore, Session, TokenStore, REFRESH_TOKEN_KEY, TOKEN_KEY};

    enum Profile {
        Ok(User),
        Fail(ApiError),
        Hang,
    }

    struct FakeBackend {
        profile: Profile,
        account: User,
        profile_calls: AtomicUsize,
    }

    impl FakeBackend {
        fn new(profile: Profile) -> Self {
            Self {
                profile,
                account: user(UserRole::Supervisor),
                profile_calls: AtomicUsize::new(0),
            }
        }

        fn profile_calls(&self) -> usize {
            self.profile_calls.load(Ordering::SeqCst)
        }
    }

    impl AuthBackend for FakeBackend {
        async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
            if credentials.email == self.account.email && credentials.password == "secret" {
                Ok(AuthResponse {
                    user: self.account.clone(),
                    token: "fresh-access".into(),
                    refresh_token: "fresh-refresh".into(),
                })
            } else {
                Err(ApiError::Unauthorized {
                    message: "Invalid credentials".into(),
                })
            }
        }

        async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
            if data.email == self.account.email {
                return Err(ApiError::Rejected {
                    message: "Email already registered".into(),
                });
            }
            Ok(AuthResponse {
                user: User {
                    id: "u-new".into(),
                    email: data.email.clone(),
                    name: data.name.clone(),
                    role: Some(data.role),
                    ..self.account.clone()
                },
                token: "new-access".into(),
                refresh_token: "new-refresh".into(),
            })
        }

        async fn profile(&self) -> Result<User, ApiError> {
            self.profile_calls.fetch_add(1, Ordering::SeqCst);
            match &self.profile {
                Profile::Ok(user) => Ok(user.clone()),
                Profile::Fail(e) => Err(e.clone()),
                Profile::Hang => std::future::pending().await,
            }
        }
    }

    fn user(role: UserRole) -> User {
        User {
            id: "u-1".into(),
            email: "ana@site.test".into(),
            name: "Ana".into(),
            phone: None,
            role: Some(role),
            organization_id: Some("org-1".into()),
            face_image_url: None,
            is_2fa_enabled: false,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn manager(profile: Profile, tokens: &MemoryStore) -> SessionManager<FakeBackend> {
        SessionManager::new(
            FakeBackend::new(profile),
            Arc::new(tokens.clone()),
            Duration::from_millis(50),
        )
    }

    fn stored(tokens: &MemoryStore) {
        tokens.save_session(&Session::new("stored-access", "stored-refresh"));
    }

    #[test]
    fn test_starts_loading() {
        let session = manager(Profile::Hang, &MemoryStore::new());
        assert_eq!(session.state(), AuthState::default());
        assert!(session.is_loading());
    }

    #[tokio::test]
    async fn test_restore_without_tokens() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Ok(user(UserRole::Admin)), &tokens);

        let state = session.restore_session().await;

        assert_eq!(state.user, None);
        assert!(!state.loading);
        assert_eq!(session.backend().profile_calls(), 0);
    }

    #[tokio::test]
    async fn test_restore_with_valid_token() {
        let tokens = MemoryStore::new();
        stored(&tokens);
        let session = manager(Profile::Ok(user(UserRole::Admin)), &tokens);

        let state = session.restore_session().await;

        assert_eq!(state.role(), Some(UserRole::Admin));
        assert!(!state.loading);
        assert_eq!(tokens.access_token().as_deref(), Some("stored-access"));
    }

    #[tokio::test]
    async fn test_failed_restore_clears_tokens() {
        let tokens = MemoryStore::new();
        stored(&tokens);
        let session = manager(
            Profile::Fail(ApiError::Network("connection refused".into())),
            &tokens,
        );

        let state = session.restore_session().await;

        assert_eq!(state.user, None);
        assert!(!state.loading);
        assert!(tokens.get(TOKEN_KEY).is_none());
        assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_unresponsive_backend_does_not_hang_restore() {
        let tokens = MemoryStore::new();
        stored(&tokens);
        let session = manager(Profile::Hang, &tokens);

        let state = session.restore_session().await;

        assert_eq!(state.user, None);
        assert!(!state.loading);
        assert!(tokens.is_empty());
    }

    #[tokio::test]
    async fn test_restore_runs_once() {
        let tokens = MemoryStore::new();
        stored(&tokens);
        let session = manager(Profile::Ok(user(UserRole::Client)), &tokens);
        let mut rx = session.subscribe();

        session.restore_session().await;
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().loading);

        session.restore_session().await;
        assert_eq!(session.backend().profile_calls(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_login_persists_tokens_and_user() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Hang, &tokens);

        let user = session.login("ana@site.test", "secret").await.unwrap();

        assert_eq!(user.role, Some(UserRole::Supervisor));
        assert_eq!(session.current_user(), Some(user));
        assert_eq!(
            tokens.load_session(),
            Some(Session::new("fresh-access", "fresh-refresh"))
        );
    }

    #[tokio::test]
    async fn test_failed_login_propagates_error() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Hang, &tokens);

        let err = session.login("ana@site.test", "wrong").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: "Invalid credentials".into()
            }
        );
        assert_eq!(session.current_user(), None);
        assert!(tokens.is_empty());
    }

    fn registration(email: &str) -> RegisterData {
        RegisterData {
            email: email.into(),
            password: "hunter22".into(),
            name: "Bo".into(),
            phone: None,
            role: UserRole::Client,
            organization_id: Some("org-1".into()),
        }
    }

    #[tokio::test]
    async fn test_register_signs_in_new_user() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Hang, &tokens);
        let mut rx = session.subscribe();

        let user = session.register(&registration("bo@site.test")).await.unwrap();

        assert_eq!(user.email, "bo@site.test");
        assert_eq!(user.role, Some(UserRole::Client));
        assert_eq!(session.current_user(), Some(user));
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            tokens.load_session(),
            Some(Session::new("new-access", "new-refresh"))
        );
    }

    #[tokio::test]
    async fn test_rejected_registration_persists_nothing() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Hang, &tokens);

        let err = session
            .register(&registration("ana@site.test"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Rejected {
                message: "Email already registered".into()
            }
        );
        assert_eq!(session.current_user(), None);
        assert!(tokens.is_empty());
    }

    #[tokio::test]
    async fn test_login_during_slow_restore_wins() {
        let tokens = MemoryStore::new();
        stored(&tokens);
        let session = manager(Profile::Hang, &tokens);

        let (state, login) = tokio::join!(
            session.restore_session(),
            session.login("ana@site.test", "secret")
        );

        assert!(login.is_ok());
        assert!(!state.loading);
        assert_eq!(state.role(), Some(UserRole::Supervisor));
        assert_eq!(tokens.access_token().as_deref(), Some("fresh-access"));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Hang, &tokens);
        session.login("ana@site.test", "secret").await.unwrap();

        session.logout();
        assert_eq!(session.current_user(), None);
        assert!(tokens.is_empty());

        let mut rx = session.subscribe();
        session.logout();
        assert_eq!(session.current_user(), None);
        assert!(tokens.is_empty());
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_invalidation_signs_out_exactly_once() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Hang, &tokens);
        session.login("ana@site.test", "secret").await.unwrap();

        assert!(session.handle_event(SessionEvent::Invalidated));
        assert!(!session.handle_event(SessionEvent::Invalidated));
        assert_eq!(session.current_user(), None);
        assert!(tokens.is_empty());
    }

    #[tokio::test]
    async fn test_wait_for_invalidation() {
        let tokens = MemoryStore::new();
        let session = manager(Profile::Hang, &tokens);
        session.login("ana@site.test", "secret").await.unwrap();

        let events = SessionEvents::new();
        let mut rx = events.subscribe();
        events.notify(SessionEvent::Invalidated);
        events.notify(SessionEvent::Invalidated);

        assert!(session.wait_for_invalidation(&mut rx).await);

        // The duplicate is absorbed, then the closed channel ends the wait
        drop(events);
        assert!(!session.wait_for_invalidation(&mut rx).await);
        assert_eq!(session.current_user(), None);
    }

    #[tokio::test]
    async fn test_invalidation_during_restore_still_finishes_loading() {
        let tokens = MemoryStore::new();
        stored(&tokens);
        let session = manager(Profile::Hang, &tokens);

        let invalidate = async {
            session.invalidate();
        };
        let (state, _) = tokio::join!(session.restore_session(), invalidate);

        assert!(!state.loading);
        assert_eq!(state.user, None);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let session = manager(Profile::Hang, &MemoryStore::new());
        let other = session.clone();
        assert_eq!(session, other);

        let separate = manager(Profile::Hang, &MemoryStore::new());
        assert_ne!(session, separate);
    }
}

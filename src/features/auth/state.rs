//! Auth session state and context for the frontend. The provider reconciles
//! the session once on mount (cache first, then the identity API) and exposes
//! derived signals for guards and routes. Only non-sensitive profile metadata
//! is held in memory; the credential session itself stays in cookies.

use crate::features::auth::{
    cache::BrowserStore,
    client::RemoteIdentity,
    notice::FlashNotice,
    session,
    types::{SessionState, User},
};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos. The state signal is the single
/// writer-owned container; everything else is derived from it.
pub struct AuthContext {
    pub state: RwSignal<SessionState>,
    pub user: Signal<User>,
    pub is_authenticated: Signal<bool>,
    pub is_loading: Signal<bool>,
}

impl AuthContext {
    fn new(state: RwSignal<SessionState>) -> Self {
        let user = Signal::derive(move || state.with(|s| s.user.clone()));
        let is_authenticated = Signal::derive(move || state.with(|s| s.is_authenticated));
        let is_loading = Signal::derive(move || state.with(|s| s.is_loading));
        Self {
            state,
            user,
            is_authenticated,
            is_loading,
        }
    }

    /// Installs a resolved user, typically after a credential flow.
    pub fn establish(self, user: User) {
        self.state.update(|s| {
            s.user = user;
            s.is_authenticated = true;
        });
    }

    /// Drops the in-memory session, typically on sign-out.
    pub fn clear(self) {
        self.state.update(|s| {
            s.user = User::default();
            s.is_authenticated = false;
        });
    }

    /// Reconciles authentication state: cache first, then the identity API.
    /// Returns whether an authenticated user was established. The loading flag
    /// is lowered on every exit path, and no error escapes.
    pub async fn reconcile(self) -> bool {
        self.state.update(|s| s.is_loading = true);
        let resolved = session::resolve_session(&RemoteIdentity, &BrowserStore).await;
        let established = resolved.is_some();
        self.state.update(|s| apply_outcome(s, resolved));
        established
    }
}

/// Applies a reconciliation outcome to the state. Always lowers the loading
/// flag, and `is_authenticated` holds exactly when the user id is non-empty.
fn apply_outcome(state: &mut SessionState, resolved: Option<User>) {
    match resolved {
        Some(user) => {
            state.is_authenticated = !user.id.is_empty();
            state.user = user;
        }
        None => {
            state.user = User::default();
            state.is_authenticated = false;
        }
    }
    state.is_loading = false;
}

/// Provides auth context and reconciles the session once on mount. The state
/// starts in the loading phase so guards never act on the pre-reconciliation
/// default.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(SessionState {
        is_loading: true,
        ..SessionState::default()
    });
    let auth = AuthContext::new(state);
    provide_context(auth);
    provide_context(FlashNotice::new());

    spawn_local(async move {
        auth.reconcile().await;
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(SessionState::default())))
}

//! Session manager: the only owner of authentication state.
//!
//! Memory, the credential store and the default `Authorization` header are
//! kept in step here. Every mutation ends with observers being told about
//! the new snapshot, which is how the route guard re-evaluates.

use std::str;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, info, warn};

use vt_core::ports::{RequestAuthPort, SecureStorageError, SecureStoragePort};
use vt_core::session::{TOKEN_KEY, USER_ID_KEY};
use vt_core::{AccessToken, Session, UserId};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("sign-in requires both a token and a user id")]
    InvalidCredentialsInput,

    #[error("credential store failure: {0}")]
    Persistence(#[source] SecureStorageError),
}

/// Receives the session snapshot after each mutation.
///
/// 会话变更观察者。
pub trait SessionObserver: Send + Sync {
    fn session_changed(&self, session: &Session);
}

pub struct SessionManager {
    store: Arc<dyn SecureStoragePort>,
    request_auth: Arc<dyn RequestAuthPort>,
    state: Mutex<Session>,
    observers: RwLock<Vec<Arc<dyn SessionObserver>>>,
}

impl SessionManager {
    /// Starts signed out; call [`restore`](Self::restore) to pick up a
    /// persisted session.
    pub fn new(store: Arc<dyn SecureStoragePort>, request_auth: Arc<dyn RequestAuthPort>) -> Self {
        Self {
            store,
            request_auth,
            state: Mutex::new(Session::anonymous()),
            observers: RwLock::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Current snapshot.
    pub fn session(&self) -> Session {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rebuilds the session from the credential store.
    ///
    /// Never fails: unreadable or partial state is logged and treated as
    /// signed out.
    pub fn restore(&self) -> Session {
        let restored = match self.read_persisted() {
            Ok(Some((token, user_id))) => {
                info!(user_id = %user_id, "Restored persisted session");
                Session::authenticated(token, user_id)
            }
            Ok(None) => {
                debug!("No persisted session");
                Session::anonymous()
            }
            Err(err) => {
                warn!(error = %err, "Failed to read persisted session, starting signed out");
                Session::anonymous()
            }
        };

        self.apply(restored)
    }

    /// Persists the credential pair, then activates it.
    ///
    /// Either both keys are written or neither is; on failure memory and the
    /// request header are left as they were.
    pub fn sign_in(
        &self,
        token: AccessToken,
        user_id: Option<UserId>,
    ) -> Result<Session, SessionError> {
        let user_id = match user_id {
            Some(id) if !token.is_empty() => id,
            _ => return Err(SessionError::InvalidCredentialsInput),
        };

        let previous_token = self
            .store
            .get(TOKEN_KEY)
            .map_err(SessionError::Persistence)?;

        self.store
            .set(TOKEN_KEY, token.as_str().as_bytes())
            .map_err(SessionError::Persistence)?;

        if let Err(err) = self
            .store
            .set(USER_ID_KEY, user_id.to_string().as_bytes())
        {
            self.roll_back_token(previous_token);
            return Err(SessionError::Persistence(err));
        }

        info!(user_id = %user_id, "Signed in");
        Ok(self.apply(Session::authenticated(token, user_id)))
    }

    /// Clears memory, header and both persisted keys.
    ///
    /// Both removals are attempted. The in-memory session ends signed out
    /// even when the store fails; the first store failure is returned.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        let token_result = self.erase(TOKEN_KEY);
        let user_result = self.erase(USER_ID_KEY);

        self.apply(Session::anonymous());
        info!("Signed out");

        token_result.and(user_result).map_err(SessionError::Persistence)
    }

    fn read_persisted(&self) -> Result<Option<(AccessToken, UserId)>, SecureStorageError> {
        let Some(token) = self.read_value(TOKEN_KEY)? else {
            return Ok(None);
        };
        let Some(raw_user_id) = self.read_value(USER_ID_KEY)? else {
            warn!("Persisted token has no user id, ignoring it");
            return Ok(None);
        };

        let user_id = raw_user_id.parse::<UserId>().map_err(|e| {
            SecureStorageError::Corrupt(format!("stored user id is not an integer: {e}"))
        })?;

        Ok(Some((AccessToken::new(token), user_id)))
    }

    /// Empty values count as absent.
    fn read_value(&self, key: &str) -> Result<Option<String>, SecureStorageError> {
        let Some(bytes) = self.store.get(key)? else {
            return Ok(None);
        };
        let value = str::from_utf8(&bytes)
            .map_err(|e| SecureStorageError::Corrupt(format!("{key} is not UTF-8: {e}")))?
            .trim()
            .to_string();

        Ok((!value.is_empty()).then_some(value))
    }

    /// Puts back the token that was stored before a failed sign-in, so the
    /// store keeps the pair that memory still holds.
    fn roll_back_token(&self, previous: Option<Vec<u8>>) {
        let result = match &previous {
            Some(bytes) => self.store.set(TOKEN_KEY, bytes),
            None => self.store.delete(TOKEN_KEY),
        };
        if let Err(err) = result {
            warn!(error = %err, "Failed to roll back token after partial sign-in");
            self.tombstone(TOKEN_KEY);
        }
    }

    fn erase(&self, key: &str) -> Result<(), SecureStorageError> {
        match self.store.delete(key) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(key, error = %err, "Failed to delete credential");
                self.tombstone(key);
                Err(err)
            }
        }
    }

    /// Overwrites a key that could not be deleted with an empty value,
    /// which `restore` reads as absent.
    fn tombstone(&self, key: &str) {
        if let Err(err) = self.store.set(key, b"") {
            warn!(key, error = %err, "Failed to blank credential");
        }
    }

    /// Swaps the in-memory session and the request header under one lock,
    /// then notifies observers outside it.
    fn apply(&self, next: Session) -> Session {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            match next.token() {
                Some(token) => self.request_auth.set_bearer(token),
                None => self.request_auth.clear_bearer(),
            }
            *state = next.clone();
        }

        let observers = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer.session_changed(&next);
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{HeaderSpy, MemoryStore, MockSecureStorage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingObserver {
        calls: AtomicUsize,
    }

    impl SessionObserver for CountingObserver {
        fn session_changed(&self, _session: &Session) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn manager(store: &Arc<MemoryStore>, header: &Arc<HeaderSpy>) -> SessionManager {
        SessionManager::new(store.clone(), header.clone())
    }

    #[test]
    fn sign_in_persists_pair_and_sets_header() {
        let store = Arc::new(MemoryStore::default());
        let header = Arc::new(HeaderSpy::default());
        let manager = manager(&store, &header);

        let session = manager
            .sign_in(AccessToken::new("abc"), Some(UserId::new(42)))
            .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(store.value(TOKEN_KEY), Some(b"abc".to_vec()));
        assert_eq!(store.value(USER_ID_KEY), Some(b"42".to_vec()));
        assert_eq!(header.bearer().as_deref(), Some("abc"));
    }

    #[test]
    fn restore_in_fresh_manager_roundtrips() {
        let store = Arc::new(MemoryStore::default());
        let header = Arc::new(HeaderSpy::default());
        manager(&store, &header)
            .sign_in(AccessToken::new("abc"), Some(UserId::new(42)))
            .unwrap();

        let fresh_header = Arc::new(HeaderSpy::default());
        let restored = manager(&store, &fresh_header).restore();

        assert_eq!(restored.token().map(AccessToken::as_str), Some("abc"));
        assert_eq!(restored.user_id(), Some(UserId::new(42)));
        assert!(fresh_header.has_bearer());
    }

    #[test]
    fn sign_in_rejects_incomplete_input() {
        let store = Arc::new(MemoryStore::default());
        let header = Arc::new(HeaderSpy::default());
        let manager = manager(&store, &header);

        assert!(matches!(
            manager.sign_in(AccessToken::new(""), Some(UserId::new(1))),
            Err(SessionError::InvalidCredentialsInput)
        ));
        assert!(matches!(
            manager.sign_in(AccessToken::new("abc"), None),
            Err(SessionError::InvalidCredentialsInput)
        ));
        assert!(store.value(TOKEN_KEY).is_none());
    }

    #[test]
    fn failed_second_write_rolls_back_token() {
        let store = Arc::new(MemoryStore::default());
        *store.fail_set_for.lock().unwrap() = Some(USER_ID_KEY.to_string());
        let header = Arc::new(HeaderSpy::default());
        let manager = manager(&store, &header);

        let result = manager.sign_in(AccessToken::new("abc"), Some(UserId::new(7)));

        assert!(matches!(result, Err(SessionError::Persistence(_))));
        assert!(store.value(TOKEN_KEY).is_none());
        assert!(!manager.session().is_authenticated());
        assert!(!header.has_bearer());
    }

    #[test]
    fn failed_second_write_restores_previous_pair() {
        let store = Arc::new(MemoryStore::default());
        let header = Arc::new(HeaderSpy::default());
        let manager = manager(&store, &header);
        manager
            .sign_in(AccessToken::new("old"), Some(UserId::new(1)))
            .unwrap();

        *store.fail_set_for.lock().unwrap() = Some(USER_ID_KEY.to_string());
        let result = manager.sign_in(AccessToken::new("new"), Some(UserId::new(2)));

        assert!(matches!(result, Err(SessionError::Persistence(_))));
        assert_eq!(store.value(TOKEN_KEY), Some(b"old".to_vec()));
        assert_eq!(store.value(USER_ID_KEY), Some(b"1".to_vec()));
        assert_eq!(manager.session().user_id(), Some(UserId::new(1)));
        assert_eq!(header.bearer().as_deref(), Some("old"));

        *store.fail_set_for.lock().unwrap() = None;
        let fresh = SessionManager::new(store.clone(), Arc::new(HeaderSpy::default()));
        let restored = fresh.restore();
        assert_eq!(restored.token().map(AccessToken::as_str), Some("old"));
        assert_eq!(restored.user_id(), Some(UserId::new(1)));
    }

    #[test]
    fn restore_swallows_read_failure() {
        let mut store = MockSecureStorage::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(SecureStorageError::Unavailable("keychain locked".into())));
        store.expect_set().never();
        store.expect_delete().never();

        let header = Arc::new(HeaderSpy::default());
        header.set_bearer(&AccessToken::new("stale"));
        let manager = SessionManager::new(Arc::new(store), header.clone());
        let observer = Arc::new(CountingObserver::default());
        manager.subscribe(observer.clone());

        let restored = manager.restore();

        assert!(!restored.is_authenticated());
        assert!(!manager.session().is_authenticated());
        assert!(!header.has_bearer());
        assert_eq!(observer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn restore_treats_partial_or_empty_state_as_signed_out() {
        let store = Arc::new(MemoryStore::default());
        store.set(TOKEN_KEY, b"abc").unwrap();
        let header = Arc::new(HeaderSpy::default());
        assert!(!manager(&store, &header).restore().is_authenticated());

        store.set(USER_ID_KEY, b"").unwrap();
        assert!(!manager(&store, &header).restore().is_authenticated());

        store.set(USER_ID_KEY, b"not-a-number").unwrap();
        assert!(!manager(&store, &header).restore().is_authenticated());
        assert!(!header.has_bearer());
    }

    #[test]
    fn sign_out_clears_everything_even_when_delete_fails() {
        let store = Arc::new(MemoryStore::default());
        let header = Arc::new(HeaderSpy::default());
        let manager = manager(&store, &header);
        manager
            .sign_in(AccessToken::new("abc"), Some(UserId::new(42)))
            .unwrap();

        store.fail_delete.store(true, Ordering::SeqCst);
        let result = manager.sign_out();

        assert!(matches!(result, Err(SessionError::Persistence(_))));
        assert!(!manager.session().is_authenticated());
        assert!(!header.has_bearer());

        let fresh_header = Arc::new(HeaderSpy::default());
        let fresh = SessionManager::new(store.clone(), fresh_header);
        assert!(!fresh.restore().is_authenticated());
    }

    #[test]
    fn observers_see_every_mutation() {
        let store = Arc::new(MemoryStore::default());
        let header = Arc::new(HeaderSpy::default());
        let manager = manager(&store, &header);
        let observer = Arc::new(CountingObserver::default());
        manager.subscribe(observer.clone());

        manager.restore();
        manager
            .sign_in(AccessToken::new("abc"), Some(UserId::new(1)))
            .unwrap();
        manager.sign_out().unwrap();

        assert_eq!(observer.calls.load(Ordering::SeqCst), 3);
    }
}

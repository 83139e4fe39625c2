//! Port fakes shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vt_core::diet::DietRecord;
use vt_core::intake::DietProfile;
use vt_core::ports::{
    AccountCredentials, ApiError, LoginResponse, NavigatorPort, NutritionApiPort,
    RequestAuthPort, SecureStorageError, SecureStoragePort,
};
use vt_core::prediction::PredictionPayload;
use vt_core::{AccessToken, Location, Route, UserId};

use crate::{RouteGuardCoordinator, SessionManager};

#[derive(Default)]
pub(crate) struct MemoryStore {
    values: Mutex<HashMap<String, Vec<u8>>>,
    pub(crate) fail_set_for: Mutex<Option<String>>,
    pub(crate) fail_delete: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl SecureStoragePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        if self.fail_set_for.lock().unwrap().as_deref() == Some(key) {
            return Err(SecureStorageError::Other("disk full".into()));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(SecureStorageError::PermissionDenied("locked".into()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

mockall::mock! {
    pub(crate) SecureStorage {}

    impl SecureStoragePort for SecureStorage {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError>;
        fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError>;
        fn delete(&self, key: &str) -> Result<(), SecureStorageError>;
    }
}

#[derive(Default)]
pub(crate) struct HeaderSpy {
    bearer: Mutex<Option<String>>,
}

impl HeaderSpy {
    pub(crate) fn bearer(&self) -> Option<String> {
        self.bearer.lock().unwrap().clone()
    }
}

impl RequestAuthPort for HeaderSpy {
    fn set_bearer(&self, token: &AccessToken) {
        *self.bearer.lock().unwrap() = Some(token.as_str().to_string());
    }

    fn clear_bearer(&self) {
        *self.bearer.lock().unwrap() = None;
    }

    fn has_bearer(&self) -> bool {
        self.bearer.lock().unwrap().is_some()
    }
}

pub(crate) struct StackNavigator {
    stack: Mutex<Vec<Location>>,
}

impl StackNavigator {
    pub(crate) fn at(route: Route) -> Self {
        Self {
            stack: Mutex::new(vec![Location::new(route)]),
        }
    }
}

impl NavigatorPort for StackNavigator {
    fn current(&self) -> Location {
        self.stack.lock().unwrap().last().cloned().unwrap()
    }

    fn push(&self, location: Location) {
        self.stack.lock().unwrap().push(location);
    }

    fn replace(&self, location: Location) {
        let mut stack = self.stack.lock().unwrap();
        stack.pop();
        stack.push(location);
    }
}

/// Session manager and guard wired together, starting on the login screen.
pub(crate) struct Harness {
    pub(crate) store: Arc<MemoryStore>,
    pub(crate) header: Arc<HeaderSpy>,
    pub(crate) api: Arc<ScriptedApi>,
    pub(crate) session: Arc<SessionManager>,
    pub(crate) router: Arc<RouteGuardCoordinator>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let header = Arc::new(HeaderSpy::default());
        let session = Arc::new(SessionManager::new(store.clone(), header.clone()));
        let router = Arc::new(RouteGuardCoordinator::new(Arc::new(StackNavigator::at(
            Route::Login,
        ))));
        session.subscribe(router.clone());
        Self {
            store,
            header,
            api: Arc::new(ScriptedApi::default()),
            session,
            router,
        }
    }

    pub(crate) fn signed_in(self) -> Self {
        self.session
            .sign_in(AccessToken::new("token-1"), Some(UserId::new(42)))
            .unwrap();
        self
    }
}

pub(crate) struct ScriptedApi {
    calls: Mutex<Vec<&'static str>>,
    failures: Mutex<HashMap<&'static str, (u16, Option<String>)>>,
    login: Mutex<LoginResponse>,
    prediction: Mutex<String>,
    records: Mutex<Vec<DietRecord>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            login: Mutex::new(LoginResponse {
                access_token: Some("token-1".into()),
                user_id: Some(UserId::new(42)),
                ..LoginResponse::default()
            }),
            prediction: Mutex::new("predicted_diet: Balanced".into()),
            records: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedApi {
    pub(crate) fn fail(&self, method: &'static str, status: u16, detail: Option<&str>) {
        self.failures
            .lock()
            .unwrap()
            .insert(method, (status, detail.map(str::to_string)));
    }

    pub(crate) fn set_login(&self, response: LoginResponse) {
        *self.login.lock().unwrap() = response;
    }

    pub(crate) fn set_records(&self, records: Vec<DietRecord>) {
        *self.records.lock().unwrap() = records;
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(method);
        match self.failures.lock().unwrap().get(method) {
            Some((status, detail)) => Err(ApiError::Rejected {
                status: *status,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NutritionApiPort for ScriptedApi {
    async fn register(&self, _credentials: &AccountCredentials) -> Result<(), ApiError> {
        self.record("register")
    }

    async fn login(&self, _credentials: &AccountCredentials) -> Result<LoginResponse, ApiError> {
        self.record("login")?;
        Ok(self.login.lock().unwrap().clone())
    }

    async fn submit_diet_profile(&self, _profile: &DietProfile) -> Result<(), ApiError> {
        self.record("submit_diet_profile")
    }

    async fn train_model(&self) -> Result<(), ApiError> {
        self.record("train_model")
    }

    async fn predict_food(&self, _user_id: UserId) -> Result<PredictionPayload, ApiError> {
        self.record("predict_food")?;
        Ok(PredictionPayload {
            predicted_diet: self.prediction.lock().unwrap().clone(),
        })
    }

    async fn list_diet_records(&self) -> Result<Vec<DietRecord>, ApiError> {
        self.record("list_diet_records")?;
        Ok(self.records.lock().unwrap().clone())
    }
}

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use vt_core::config::AppConfig;
use vt_core::diet::{DietRecord, DietRecordList};
use vt_core::intake::DietProfile;
use vt_core::ports::{
    AccountCredentials, ApiError, LoginResponse, NutritionApiPort, RequestAuthPort,
};
use vt_core::prediction::PredictionPayload;
use vt_core::{AccessToken, UserId};

use super::error_body::extract_detail;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("invalid API base URL {url:?}")]
    InvalidBaseUrl { url: String },

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct PredictRequest {
    user_id: UserId,
}

/// HTTP client for the nutrition service.
///
/// Also owns the default `Authorization` header: the session manager sets it
/// through [`RequestAuthPort`] and every later request carries it.
pub struct HttpNutritionApi {
    client: Client,
    base_url: String,
    bearer: RwLock<Option<AccessToken>>,
}

impl HttpNutritionApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiClientError::InvalidBaseUrl { url: base_url });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vitality/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            bearer: RwLock::new(None),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiClientError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.bearer.read().unwrap_or_else(PoisonError::into_inner);
        match bearer.as_ref() {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, token.bearer_header()),
            None => request,
        }
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!(path, status = status.as_u16(), "Response received");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        warn!(path, status = status.as_u16(), detail = ?detail, "Request rejected");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(path, request).await?;
        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty(&self, path: &str, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(path, request).await.map(|_| ())
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[async_trait]
impl NutritionApiPort for HttpNutritionApi {
    async fn register(&self, credentials: &AccountCredentials) -> Result<(), ApiError> {
        self.send_empty("/register", self.post("/register").json(credentials))
            .await
    }

    async fn login(&self, credentials: &AccountCredentials) -> Result<LoginResponse, ApiError> {
        self.send_json("/login", self.post("/login").json(credentials))
            .await
    }

    async fn submit_diet_profile(&self, profile: &DietProfile) -> Result<(), ApiError> {
        self.send_empty("/diet", self.post("/diet").json(profile))
            .await
    }

    async fn train_model(&self) -> Result<(), ApiError> {
        self.send_empty("/train_model", self.post("/train_model"))
            .await
    }

    async fn predict_food(&self, user_id: UserId) -> Result<PredictionPayload, ApiError> {
        let body = PredictRequest { user_id };
        self.send_json("/predict_food", self.post("/predict_food").json(&body))
            .await
    }

    async fn list_diet_records(&self) -> Result<Vec<DietRecord>, ApiError> {
        let list: DietRecordList = self
            .send_json("/diet", self.client.get(self.url("/diet")))
            .await?;
        Ok(list.diet_data)
    }
}

impl RequestAuthPort for HttpNutritionApi {
    fn set_bearer(&self, token: &AccessToken) {
        *self.bearer.write().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
    }

    fn clear_bearer(&self) {
        *self.bearer.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn has_bearer(&self) -> bool {
        self.bearer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

//! REST client for the backend auth API.
//!
//! Every call follows one contract: build a JSON request, attach
//! `Authorization: Bearer <access>` when the token store holds a session,
//! submit once through the [`Transport`], and resolve the reply into an
//! [`ApiResponse`] envelope.
//!
//! ERROR HANDLING
//! ==============
//! Server payload shapes are classified here, once, into [`ApiOutcome`].
//! Pages never inspect raw error JSON; they call [`ApiResponse::into_result`]
//! and present the returned message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{FetchTransport, HttpReply, HttpRequest, Method, Transport};
use super::types::{AuthPayload, LoginRequest, ProfileUpdate, RegisterRequest, User};
use crate::config::AppConfig;
use crate::state::token_store::TokenStore;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

pub const LOGIN_ENDPOINT: &str = "/auth/login/";
pub const REGISTER_ENDPOINT: &str = "/auth/register/";
pub const PROFILE_UPDATE_ENDPOINT: &str = "/auth/profile/update/";

/// Status reported when no response reached the client.
pub const NETWORK_FAILURE_STATUS: u16 = 0;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Field errors are reported in this order before any other field.
const PRIORITY_FIELDS: [&str; 2] = ["mobile_number", "password"];

/// Result of one API call, resolved at the client boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// Server answered 2xx with the expected payload.
    Success(T),
    /// Server rejected individual fields; messages keyed by field name.
    FieldErrors(BTreeMap<String, Vec<String>>),
    /// Server rejected the request as a whole.
    GeneralError(String),
    /// No parseable response (transport failure, timeout, or non-JSON body).
    NetworkError(String),
}

/// Uniform response envelope: one outcome plus the HTTP status (`0` when the
/// request never completed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub outcome: ApiOutcome<T>,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn network_error(message: impl Into<String>) -> Self {
        Self { outcome: ApiOutcome::NetworkError(message.into()), status: NETWORK_FAILURE_STATUS }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ApiOutcome::Success(_))
    }

    /// Unwrap the success payload or produce the user-facing failure message.
    ///
    /// `fallback` is shown when the server reported field errors without any
    /// message text.
    ///
    /// # Errors
    ///
    /// Returns the message to surface for every non-success outcome.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        match self.outcome {
            ApiOutcome::Success(data) => Ok(data),
            ApiOutcome::FieldErrors(fields) => Err(first_field_error(&fields).unwrap_or_else(|| fallback.to_owned())),
            ApiOutcome::GeneralError(message) => Err(format!("Error: {message}")),
            ApiOutcome::NetworkError(_) => Err(NETWORK_ERROR_MESSAGE.to_owned()),
        }
    }
}

/// Client wired to `fetch` and `localStorage`; provided as context by the app.
pub type BrowserApiClient = ApiClient<FetchTransport, BrowserStorage>;

/// REST client bound to one base URL, transport, and token source.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    config: AppConfig,
    transport: T,
    tokens: TokenStore<S>,
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub fn new(config: &AppConfig, transport: T, tokens: TokenStore<S>) -> Self {
        Self { config: config.clone(), transport, tokens }
    }

    /// `POST /auth/login/`.
    pub async fn login_user(&self, credentials: &LoginRequest) -> ApiResponse<AuthPayload> {
        self.request(Method::Post, LOGIN_ENDPOINT, Some(credentials)).await
    }

    /// `POST /auth/register/`.
    pub async fn register_user(&self, data: &RegisterRequest) -> ApiResponse<AuthPayload> {
        self.request(Method::Post, REGISTER_ENDPOINT, Some(data)).await
    }

    /// `PATCH /auth/profile/update/`; success carries the updated user record.
    pub async fn update_user_profile(&self, update: &ProfileUpdate) -> ApiResponse<User> {
        self.request(Method::Patch, PROFILE_UPDATE_ENDPOINT, Some(update)).await
    }

    /// Issue one JSON request and classify the reply.
    pub async fn request<B, R>(&self, method: Method, endpoint: &str, body: Option<&B>) -> ApiResponse<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = match self.build_request(method, endpoint, body) {
            Ok(request) => request,
            Err(e) => return ApiResponse::network_error(format!("failed to encode request body: {e}")),
        };

        let response = match self.transport.send(request).await {
            Ok(reply) => classify_reply(reply),
            Err(e) => ApiResponse::network_error(e.to_string()),
        };
        if !response.is_success() {
            log::warn!("{} {endpoint} failed with status {}", method.as_str(), response.status);
        }
        response
    }

    fn build_request<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<HttpRequest, serde_json::Error>
    where
        B: Serialize + ?Sized,
    {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        match self.tokens.get_tokens() {
            Ok(Some(tokens)) => headers.push(("Authorization".to_owned(), bearer_header(&tokens.access))),
            Ok(None) => {}
            Err(e) => log::warn!("could not read session tokens: {e}"),
        }

        Ok(HttpRequest {
            method,
            url: self.config.endpoint_url(endpoint),
            headers,
            body: body.map(|b| serde_json::to_string(b)).transpose()?,
            timeout: self.config.api_timeout,
        })
    }
}

fn bearer_header(access: &str) -> String {
    format!("Bearer {access}")
}

/// Turn a raw reply into an envelope. Non-JSON bodies are treated as "no
/// response could be parsed".
pub(crate) fn classify_reply<R: DeserializeOwned>(reply: HttpReply) -> ApiResponse<R> {
    let Ok(body) = serde_json::from_str::<Value>(&reply.body) else {
        return ApiResponse::network_error(format!("unparseable response body (status {})", reply.status));
    };

    if (200..300).contains(&reply.status) {
        return match serde_json::from_value::<R>(body) {
            Ok(data) => ApiResponse { outcome: ApiOutcome::Success(data), status: reply.status },
            Err(e) => ApiResponse::network_error(format!("unexpected response shape: {e}")),
        };
    }

    ApiResponse { outcome: classify_error_body(&body, reply.status), status: reply.status }
}

fn classify_error_body<T>(body: &Value, status: u16) -> ApiOutcome<T> {
    let generic = || ApiOutcome::GeneralError(format!("Request failed with status {status}"));
    let Some(map) = body.as_object() else {
        return generic();
    };

    let fields: BTreeMap<String, Vec<String>> = map
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "non_field_errors" | "detail"))
        .filter_map(|(key, value)| messages_of(value).map(|messages| (key.clone(), messages)))
        .collect();

    // Messages on the priority fields win over request-wide errors.
    let has_priority_message =
        PRIORITY_FIELDS.iter().any(|name| fields.get(*name).is_some_and(|messages| !messages.is_empty()));
    if has_priority_message {
        return ApiOutcome::FieldErrors(fields);
    }
    if let Some(first) = map.get("non_field_errors").and_then(messages_of).and_then(|m| m.into_iter().next()) {
        return ApiOutcome::GeneralError(first);
    }
    if let Some(detail) = map.get("detail").and_then(Value::as_str) {
        return ApiOutcome::GeneralError(detail.to_owned());
    }
    if fields.is_empty() { generic() } else { ApiOutcome::FieldErrors(fields) }
}

/// Accept a single string or an array of strings.
fn messages_of(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(s) => Some(vec![s.clone()]),
        Value::Array(items) => {
            let messages: Vec<String> = items.iter().filter_map(Value::as_str).map(str::to_owned).collect();
            (!messages.is_empty() || items.is_empty()).then_some(messages)
        }
        _ => None,
    }
}

fn first_field_error(fields: &BTreeMap<String, Vec<String>>) -> Option<String> {
    let priority = PRIORITY_FIELDS.iter().filter_map(|name| fields.get_key_value(*name));
    let rest = fields.iter().filter(|(name, _)| !PRIORITY_FIELDS.contains(&name.as_str()));
    priority
        .chain(rest)
        .find_map(|(name, messages)| messages.first().map(|message| format!("{} error: {message}", humanize_field(name))))
}

/// `mobile_number` -> `Mobile number`.
pub(crate) fn humanize_field(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

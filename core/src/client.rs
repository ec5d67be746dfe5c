//! The Cachet client and its request executor.
//!
//! # Design
//! `CachetClient` holds the host's configuration source, the transport, and
//! optional URL/token overrides — no other state, so a client can be shared
//! freely across callers. Every resource operation funnels through
//! `execute`, which resolves configuration, builds one `HttpRequest`, hands
//! it to the transport, and normalizes the response into
//! `Result<Value, Error>`. Configuration and validation failures return
//! before the transport is ever invoked.

use log::{debug, error};
use serde_json::Value;

use crate::args::Params;
use crate::config::{first_match, ConfigSource, API_TOKEN_KEYS, API_URL_KEYS};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Path prefix of the Cachet v1 API, joined between the base URL and every
/// endpoint path.
const API_PREFIX: &str = "/api/v1/";

/// Header carrying the API token on authenticated calls.
const TOKEN_HEADER: &str = "X-Cachet-Token";

/// Client for a Cachet status page.
///
/// Construction never fails; configuration is resolved per call so a
/// misconfigured host gets a failure result from the operation it actually
/// invokes, not at startup.
#[derive(Debug, Clone)]
pub struct CachetClient<C, T> {
    config: C,
    transport: T,
    api_url: Option<String>,
    api_token: Option<String>,
}

impl<C: ConfigSource, T: Transport> CachetClient<C, T> {
    pub fn new(config: C, transport: T) -> Self {
        Self {
            config,
            transport,
            api_url: None,
            api_token: None,
        }
    }

    /// Override the base API URL, taking precedence over configuration.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Override the API token, taking precedence over configuration.
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    fn resolve_api_url(&self) -> Result<String, Error> {
        if let Some(url) = &self.api_url {
            return Ok(url.clone());
        }
        first_match(&self.config, &API_URL_KEYS).ok_or_else(|| {
            error!("no Cachet API URL found in overrides or configuration");
            Error::MissingApiUrl
        })
    }

    fn resolve_api_token(&self) -> Result<String, Error> {
        if let Some(token) = &self.api_token {
            return Ok(token.clone());
        }
        first_match(&self.config, &API_TOKEN_KEYS).ok_or_else(|| {
            error!("no Cachet API token found in overrides or configuration");
            Error::MissingApiToken
        })
    }

    /// Execute one API call and normalize the response.
    ///
    /// `endpoint` is the path below `/api/v1/`. GET and DELETE send `args`
    /// as query parameters; POST and PUT send them as a JSON body. When
    /// `auth` is set the resolved token is attached as `X-Cachet-Token`
    /// unless `extra_headers` already carries that header.
    pub(crate) fn execute(
        &self,
        endpoint: &str,
        method: HttpMethod,
        args: Option<Params>,
        auth: bool,
        extra_headers: &[(String, String)],
    ) -> Result<Value, Error> {
        let api_url = self.resolve_api_url()?;
        let token = if auth {
            Some(self.resolve_api_token()?)
        } else {
            None
        };

        let url = format!("{}{API_PREFIX}{endpoint}", api_url.trim_end_matches('/'));

        let mut headers: Vec<(String, String)> = extra_headers.to_vec();
        if let Some(token) = token {
            let already_set = headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(TOKEN_HEADER));
            if !already_set {
                headers.push((TOKEN_HEADER.to_string(), token));
            }
        }

        let (query, body) = match method {
            HttpMethod::Get | HttpMethod::Delete => {
                (args.map(query_pairs).unwrap_or_default(), None)
            }
            HttpMethod::Post | HttpMethod::Put => {
                let body = args.map(|args| Value::Object(args).to_string());
                if body.is_some() {
                    headers.push(("content-type".to_string(), "application/json".to_string()));
                }
                (Vec::new(), body)
            }
        };

        let request = HttpRequest {
            method,
            url,
            query,
            headers,
            body,
        };

        let response = self
            .transport
            .send(&request)
            .map_err(|e| Error::Transport(e.0))?;

        interpret_response(&request, response)
    }
}

/// Flatten builder output into query pairs. Nulls are dropped — Cachet
/// treats an absent parameter and a null one the same way.
fn query_pairs(args: Params) -> Vec<(String, String)> {
    args.into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| match value {
            Value::String(s) => (name, s),
            other => (name, other.to_string()),
        })
        .collect()
}

/// Translate a raw HTTP response into the uniform operation result.
///
/// 200 surfaces the body's `data` field (or the whole document) unless an
/// `error` field is present; 204 is an unconditional empty success; any
/// other status is a failure, with the service's `error` message when one
/// decodes and a generic status error otherwise.
fn interpret_response(request: &HttpRequest, response: HttpResponse) -> Result<Value, Error> {
    match response.status {
        200 => {
            let decoded: Value = serde_json::from_str(&response.body)
                .map_err(|e| Error::Deserialization(e.to_string()))?;
            if let Some(message) = decoded.get("error") {
                return Err(Error::Api(error_text(message)));
            }
            Ok(decoded.get("data").cloned().unwrap_or(decoded))
        }
        204 => Ok(Value::Null),
        status => {
            if let Ok(decoded) = serde_json::from_str::<Value>(&response.body) {
                if let Some(message) = decoded.get("error") {
                    return Err(Error::Api(error_text(message)));
                }
            }
            debug!(
                "unexpected status {status} from {} {} (query {:?}, body {:?}): {}",
                request.method, request.url, request.query, request.body, response.body
            );
            Err(Error::UnexpectedStatus(status))
        }
    }
}

/// The `error` field is usually a string but nothing guarantees it.
fn error_text(message: &Value) -> String {
    match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

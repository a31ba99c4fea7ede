//! Scripted test double for the `ApiClient` contract.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use restrepo_core::api::{ApiClient, ApiError, CacheOptions, Result};

/// A recorded call against the scripted client.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get { url: String, cache: CacheOptions },
    Post { url: String, body: Value },
    Put { url: String, body: Value },
    Delete { url: String },
    RaiseExpireEvents { events: Vec<String> },
}

/// Scripted `ApiClient`: every call is recorded, responses are programmed
/// per URL. Unprogrammed GETs answer `NotFound`; unprogrammed writes
/// succeed.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<HashMap<String, Result<Value>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programs a successful response for `url`.
    pub fn respond(&self, url: impl Into<String>, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Ok(value));
    }

    /// Programs a failure for `url`, whatever the verb.
    pub fn fail(&self, url: impl Into<String>, error: ApiError) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Err(error));
    }

    /// Returns every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn programmed_failure(&self, url: &str) -> Option<ApiError> {
        match self.responses.lock().unwrap().get(url) {
            Some(Err(error)) => Some(error.clone()),
            _ => None,
        }
    }
}

#[async_trait]
impl ApiClient for ScriptedApi {
    async fn get(&self, url: &str, cache: CacheOptions) -> Result<Value> {
        self.record(Call::Get {
            url: url.to_string(),
            cache,
        });
        match self.responses.lock().unwrap().get(url) {
            Some(result) => result.clone(),
            None => Err(ApiError::NotFound {
                url: url.to_string(),
            }),
        }
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Option<Value>> {
        self.record(Call::Post {
            url: url.to_string(),
            body: body.clone(),
        });
        match self.programmed_failure(url) {
            Some(error) => Err(error),
            None => Ok(None),
        }
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Option<Value>> {
        self.record(Call::Put {
            url: url.to_string(),
            body: body.clone(),
        });
        match self.programmed_failure(url) {
            Some(error) => Err(error),
            None => Ok(None),
        }
    }

    async fn delete(&self, url: &str) -> Result<()> {
        self.record(Call::Delete {
            url: url.to_string(),
        });
        match self.programmed_failure(url) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn raise_expire_events(&self, events: &[String]) {
        self.record(Call::RaiseExpireEvents {
            events: events.to_vec(),
        });
    }
}

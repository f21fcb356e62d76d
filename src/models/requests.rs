//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use crate::cache::MAX_NAME_LENGTH;
use crate::error::{CacheError, Result};

// == Action ==
/// State change kinds accepted by POST /api/1/change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Register a name
    Create,
}

impl FromStr for Action {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create" => Ok(Action::Create),
            other => Err(CacheError::UnsupportedAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => f.write_str("create"),
        }
    }
}

/// Request body for POST /api/1/change
///
/// Only a JSON object decodes. Keys match case-insensitively and the last
/// occurrence of a repeated key wins; `null` leaves a field unset. Missing
/// fields decode as empty strings and are rejected by [`validate`].
///
/// [`validate`]: StateChangeRequest::validate
#[derive(Debug, Clone, Default)]
pub struct StateChangeRequest {
    /// Requested action, only "create" is accepted
    pub action: String,
    /// The name to register
    pub name: String,
}

impl<'de> Deserialize<'de> for StateChangeRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StateChangeVisitor)
    }
}

struct StateChangeVisitor;

impl<'de> Visitor<'de> for StateChangeVisitor {
    type Value = StateChangeRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with \"action\" and \"name\" fields")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut req = StateChangeRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("action") {
                &mut req.action
            } else if key.eq_ignore_ascii_case("name") {
                &mut req.name
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }

        Ok(req)
    }
}

impl StateChangeRequest {
    /// Decodes a request from raw body bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| CacheError::Decode(e.to_string()))
    }

    /// Parses the action field.
    pub fn action(&self) -> Result<Action> {
        self.action.parse()
    }

    /// Checks the action first, then the name.
    ///
    /// Returns the parsed action when the request may be applied.
    pub fn validate(&self) -> Result<Action> {
        let action = self.action()?;

        if self.name.is_empty() {
            return Err(CacheError::InvalidName("name cannot be empty".to_string()));
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(CacheError::InvalidName(format!(
                "name exceeds maximum length of {} bytes",
                MAX_NAME_LENGTH
            )));
        }

        Ok(action)
    }
}

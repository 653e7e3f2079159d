use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// A single record returned by the management API.
///
/// Content types, entries, assets, locales, webhooks and editor interfaces
/// all share this shape: a JSON object with a `sys` block holding metadata.
/// Everything else is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wraps a JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }

    /// Wraps a JSON value, failing when it is not an object.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(Error::NotAnObject)
        }
    }

    /// The `sys.id` of the record.
    pub fn id(&self) -> Option<&str> {
        self.get_str("/sys/id")
    }

    /// The `sys.type` of the record (e.g. "ContentType", "Entry").
    pub fn sys_type(&self) -> Option<&str> {
        self.get_str("/sys/type")
    }

    /// The `sys.version` of the record.
    pub fn version(&self) -> Option<u64> {
        self.pointer("/sys/version").and_then(Value::as_u64)
    }

    /// The `sys.createdAt` timestamp, when present and valid RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.get_str("/sys/createdAt")
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Extract a string value using a JSON pointer (e.g. "/sys/id").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(Value::as_str)
    }

    /// Resolve a JSON pointer against the record. `""` is the whole record.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    /// Borrow the record as a JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into a JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for Record {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

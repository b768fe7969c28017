/// User domain types
use crate::error::{RequiredField, Result, RosterError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keys a create payload is matched against
const PAYLOAD_FIELDS: [&str; 5] = ["email", "firstname", "lastname", "age", "password"];

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique key
    pub email: String,

    /// Given name
    pub firstname: String,

    /// Family name
    pub lastname: String,

    /// Age in years
    pub age: i64,

    /// Server-assigned password
    pub password: String,
}

/// Create payload as sent by callers
///
/// Missing and `null` fields decode to their empty value so that validation,
/// not the decoder, reports which field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewUser {
    /// Unique key
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,

    /// Given name
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,

    /// Family name
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,

    /// Age in years
    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,

    /// Accepted for shape compatibility, never stored
    pub password: Option<String>,
}

impl NewUser {
    /// Decode a create payload from a request body
    ///
    /// The body must be a JSON object; a literal `null` decodes to an empty
    /// payload. Keys match field names case-insensitively with exact matches
    /// taking priority, and a repeated key keeps its last value.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(|_| RosterError::InvalidJson)?;

        let fields = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            _ => return Err(RosterError::InvalidJson),
        };

        Self::deserialize(Value::Object(fold_keys(fields))).map_err(|_| RosterError::InvalidJson)
    }

    /// Check required fields in order, reporting the first one missing
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(RosterError::MissingField(RequiredField::Email));
        }

        if self.firstname.is_empty() {
            return Err(RosterError::MissingField(RequiredField::Firstname));
        }

        if self.lastname.is_empty() {
            return Err(RosterError::MissingField(RequiredField::Lastname));
        }

        if self.age == 0 {
            return Err(RosterError::MissingField(RequiredField::Age));
        }

        Ok(())
    }

    /// Build the stored record, discarding any caller-supplied password
    pub fn into_record(self, password: String) -> UserRecord {
        UserRecord {
            email: self.email,
            firstname: self.firstname,
            lastname: self.lastname,
            age: self.age,
            password,
        }
    }
}

/// Rename keys to the payload field they match, dropping unknown keys
fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let mut exact = Map::new();
    let mut folded = Map::new();

    for (key, value) in fields {
        if PAYLOAD_FIELDS.contains(&key.as_str()) {
            exact.insert(key, value);
        } else if let Some(name) = PAYLOAD_FIELDS
            .iter()
            .find(|name| name.eq_ignore_ascii_case(&key))
        {
            folded.insert((*name).to_string(), value);
        }
    }

    folded.extend(exact);
    folded
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

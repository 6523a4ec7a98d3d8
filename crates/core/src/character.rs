//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in `NotFound` errors.
pub const ENTITY: &str = "Character";

/// Message returned when a path id is not an integer.
pub const INVALID_ID: &str = "Invalid ID";

/// Message returned when a request body cannot be decoded.
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Payload keys understood by [`CharacterInput`].
const FIELDS: [&str; 4] = ["id", "name", "alias", "superpower"];

/// A character record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub alias: String,
    pub superpower: String,
}

/// DTO for creating or replacing a character.
///
/// Every field is optional; missing or `null` strings become empty. A
/// client-supplied `id` must still decode as an integer but is never used:
/// the store assigns ids on create and the path decides them on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterInput {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub superpower: Option<String>,
}

impl CharacterInput {
    /// Decode a request body.
    ///
    /// Only the first JSON value in the body is read; anything after it is
    /// ignored. That value must be an object, and a bare `null` decodes to
    /// an empty input. Arrays and scalars are rejected even though serde
    /// would map a sequence onto the struct fields.
    ///
    /// Keys match fields exactly first, then ASCII case-insensitively, so
    /// `{"Name": "Thor"}` fills `name`.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidArgument(INVALID_PAYLOAD.to_string());
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .ok_or_else(invalid)?
            .map_err(|_| invalid())?;
        match first {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                serde_json::from_value(Value::Object(fold_keys(&map))).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }

    /// Build the stored record, with `id` taking precedence over the payload.
    pub fn into_character(self, id: DbId) -> Character {
        Character {
            id,
            name: self.name.unwrap_or_default(),
            alias: self.alias.unwrap_or_default(),
            superpower: self.superpower.unwrap_or_default(),
        }
    }
}

/// Rename payload keys to their field names, dropping keys that match none.
///
/// An exact key wins over any case-folded spelling of the same field.
fn fold_keys(map: &Map<String, Value>) -> Map<String, Value> {
    FIELDS
        .iter()
        .filter_map(|field| {
            map.get(*field)
                .or_else(|| {
                    map.iter()
                        .find(|(key, _)| key.eq_ignore_ascii_case(field))
                        .map(|(_, value)| value)
                })
                .map(|value| ((*field).to_string(), value.clone()))
        })
        .collect()
}

/// Parse a path segment as a character id.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::InvalidArgument(INVALID_ID.to_string()))
}

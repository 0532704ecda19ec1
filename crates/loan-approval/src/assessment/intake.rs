use serde_json::Value;

use super::domain::{ApplicationProfile, REQUIRED_FIELDS};

/// Rejections raised before a payload reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("request body is not readable JSON")]
    UnreadableBody { details: String },
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid application profile")]
    InvalidField {
        #[source]
        source: serde_json::Error,
    },
}

/// First required key that is absent or `null`, in canonical field order.
pub fn first_missing_field(payload: &Value) -> Option<&'static str> {
    let object = payload.as_object()?;
    REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|field| object.get(*field).map_or(true, Value::is_null))
}

/// Convert a raw JSON body into a complete profile.
///
/// Presence is checked first so callers get a field name rather than a deserializer message
/// when something is left out.
pub fn profile_from_json(payload: Value) -> Result<ApplicationProfile, IntakeError> {
    if !payload.is_object() {
        return Err(IntakeError::NotAnObject);
    }

    if let Some(field) = first_missing_field(&payload) {
        return Err(IntakeError::MissingField(field));
    }

    serde_json::from_value(payload).map_err(|source| IntakeError::InvalidField { source })
}

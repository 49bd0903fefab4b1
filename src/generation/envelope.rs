//! Discriminated success/failure envelope returned across the generation boundary.
//!
//! Serialized as `{"success":true,"data":...}` or `{"success":false,"error":"..."}`.

use crate::content::ContentKind;
use crate::error::{GenerationError, EMPTY_PROMPT_MESSAGE};
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure(String),
}

impl<T> Envelope<T> {
    pub fn from_result(kind: ContentKind, result: Result<T, GenerationError>) -> Self {
        match result {
            Ok(data) => Envelope::Success(data),
            Err(err) => Envelope::Failure(failure_message(kind, &err)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success(data) => Some(data),
            Envelope::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Envelope::Success(data) => Ok(data),
            Envelope::Failure(error) => Err(error),
        }
    }
}

/// User-facing message for a failed generation.
pub fn failure_message(kind: ContentKind, err: &GenerationError) -> String {
    match err {
        GenerationError::EmptyPrompt => EMPTY_PROMPT_MESSAGE.to_string(),
        _ => format!(
            "Failed to generate {}. Please try again later. Cause: {}",
            kind.noun(),
            err.cause()
        ),
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Envelope::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Envelope::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr<T> {
            success: bool,
            data: Option<T>,
            error: Option<String>,
        }

        let repr = Repr::<T>::deserialize(deserializer)?;
        match (repr.success, repr.data, repr.error) {
            (true, Some(data), _) => Ok(Envelope::Success(data)),
            (false, _, Some(error)) => Ok(Envelope::Failure(error)),
            (true, None, _) => Err(D::Error::custom("successful envelope without data")),
            (false, _, None) => Err(D::Error::custom("failed envelope without error")),
        }
    }
}

//! Route segment encoding for state carried in the URL (CBOR, then URL-safe
//! base64), used for the course browsing filters.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use dioxus::logger::tracing;
use serde::{Deserialize, Serialize};


/// Route segments need `Display`, `FromStr` and `Default`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

pub fn encode_url_state<T: Serialize>(value: &T) -> Option<String> {
    let mut cbor = Vec::new();
    match ciborium::into_writer(value, &mut cbor) {
        Ok(()) => Some(URL_SAFE.encode(cbor)),
        Err(e) => {
            tracing::warn!("Failed to encode url state: {e}");
            None
        }
    }
}

pub fn decode_url_state<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, StateParseError> {
    let cbor = URL_SAFE
        .decode(segment.as_bytes())
        .map_err(StateParseError::DecodeError)?;
    ciborium::from_reader(std::io::Cursor::new(cbor)).map_err(StateParseError::CiboriumError)
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(segment) = encode_url_state(&self.0) {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_url_state(s).map(UrlParam)
    }
}

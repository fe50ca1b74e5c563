//! Response body parsing keyed on `Content-Type`.

// crates.io
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{_prelude::*, error::CodecError, transport::HttpResponse};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Parsed response body.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
	/// Body of a response whose `Content-Type` mentions `application/json`.
	Json(Value),
	/// Body of any other response, decoded as UTF-8.
	Text(String),
}
impl ResponseBody {
	/// Parses a response body: JSON when the `Content-Type` contains `application/json`, text
	/// otherwise.
	pub fn parse(response: &HttpResponse) -> Result<Self, CodecError> {
		if response.content_type().contains(JSON_MEDIA_TYPE) {
			serde_json::from_slice(&response.body)
				.map(Self::Json)
				.map_err(CodecError::MalformedJson)
		} else {
			Ok(Self::Text(response.text()))
		}
	}

	/// Returns the JSON value, if the body is JSON.
	pub fn as_json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			Self::Text(_) => None,
		}
	}

	/// Returns the text, if the body is text.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Json(_) => None,
			Self::Text(text) => Some(text),
		}
	}

	/// Deserializes a JSON body into `T`, reporting the JSON path of the first mismatch.
	pub fn deserialize<T>(self) -> Result<T, CodecError>
	where
		T: DeserializeOwned,
	{
		match self {
			Self::Json(value) => Ok(serde_path_to_error::deserialize(value)?),
			Self::Text(_) => Err(CodecError::NotJson),
		}
	}
}
impl From<Value> for ResponseBody {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}
impl From<String> for ResponseBody {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}
impl From<&str> for ResponseBody {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

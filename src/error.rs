// Copyright 2023 Dmitry Tantsur <dtantsur@protonmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error and Result implementations.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::common::Message;

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The underlying HTTP layer failed (network, TLS, DNS, timeout).
    TransportError,

    /// Authentication failure.
    ///
    /// Maps to HTTP 401.
    AuthenticationFailed,

    /// Access denied.
    ///
    /// Maps to HTTP 403.
    AccessDenied,

    /// Requested resource was not found.
    ///
    /// Maps to HTTP 404 and 410.
    ResourceNotFound,

    /// The request was based on a stale ETag.
    ///
    /// Maps to HTTP 412 and 428. Refresh the resource and retry.
    PreconditionFailed,

    /// Invalid value passed to one of parameters.
    InvalidInput,

    /// The resource does not expose the requested operation.
    Unsupported,

    /// Any other HTTP error status.
    ProtocolError,

    /// Response received from the server is malformed.
    InvalidResponse,
}

/// Error body returned by a Redfish service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedfishError {
    /// A string indicating a specific MessageId from a message registry.
    #[serde(default)]
    pub code: String,
    /// A human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Detailed messages.
    #[serde(default, rename = "@Message.ExtendedInfo")]
    pub extended_info: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct ErrorRoot {
    error: RedfishError,
}

/// Error from a Redfish call.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    status: Option<StatusCode>,
    message: Option<String>,
    body: Option<RedfishError>,
}

/// Result of a Redfish call.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Create a new error of the provided kind.
    #[inline]
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            status: None,
            message: Some(message.into()),
            body: None,
        }
    }

    /// Create an error from an HTTP status and the response body.
    pub(crate) fn from_status(status: StatusCode, uri: &str, body: &[u8]) -> Error {
        let kind = match status {
            StatusCode::UNAUTHORIZED => ErrorKind::AuthenticationFailed,
            StatusCode::FORBIDDEN => ErrorKind::AccessDenied,
            StatusCode::NOT_FOUND | StatusCode::GONE => ErrorKind::ResourceNotFound,
            StatusCode::PRECONDITION_FAILED | StatusCode::PRECONDITION_REQUIRED => {
                ErrorKind::PreconditionFailed
            }
            _ => ErrorKind::ProtocolError,
        };

        let body = serde_json::from_slice::<ErrorRoot>(body)
            .ok()
            .map(|root| root.error);
        let message = match body {
            Some(ref err) if !err.message.is_empty() => {
                format!("{} returned {}: {}", uri, status, err.message)
            }
            _ => format!("{} returned {}", uri, status),
        };

        Error {
            kind,
            status: Some(status),
            message: Some(message),
            body,
        }
    }

    /// Error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code (if available).
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Error body returned by the service (if any).
    #[inline]
    pub fn redfish_error(&self) -> Option<&RedfishError> {
        self.body.as_ref()
    }

    /// Whether the error means that the requested resource does not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::ResourceNotFound
    }

    /// Prefix the message with more context.
    pub(crate) fn with_context<S: fmt::Display>(mut self, context: S) -> Error {
        self.message = Some(match self.message {
            Some(msg) => format!("{}: {}", context, msg),
            None => context.to_string(),
        });
        self
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::TransportError => "Error when accessing the server",
            ErrorKind::AuthenticationFailed => "Failed to authenticate",
            ErrorKind::AccessDenied => "Access to the resource is denied",
            ErrorKind::ResourceNotFound => "Requested resource was not found",
            ErrorKind::PreconditionFailed => "Resource has changed or was not refreshed",
            ErrorKind::InvalidInput => "Input value(s) are invalid or missing",
            ErrorKind::Unsupported => "Operation is not supported by the resource",
            ErrorKind::ProtocolError => "Request was rejected by the server",
            ErrorKind::InvalidResponse => "Received invalid response",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(ref msg) = self.message {
            write!(f, ": {}", msg)?;
        }

        if let Some(ref body) = self.body {
            for info in &body.extended_info {
                if !info.message.is_empty() {
                    write!(f, "; {}", info.message)?;
                }
            }
        }

        Ok(())
    }
}

impl ::std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Error {
        let kind = if value.is_decode() {
            ErrorKind::InvalidResponse
        } else if value.is_builder() {
            ErrorKind::InvalidInput
        } else {
            ErrorKind::TransportError
        };

        Error {
            kind,
            status: value.status(),
            message: Some(value.to_string()),
            body: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Error {
        Error::new(ErrorKind::InvalidResponse, value.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Error {
        Error::new(ErrorKind::InvalidInput, value.to_string())
    }
}

//! What a handler tells the rendering layer to do.

use std::fmt;

use crate::resource::ResourceRef;

/// A refusal, as the requester sees it.
///
/// Bodies are fixed strings. Nothing from the request is ever echoed back, so
/// the response cannot be used to probe which keys exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// 400
    BadRequest,
    /// 404
    NotFound,
    /// 403
    Forbidden,
}

impl Rejection {
    /// HTTP status code.
    pub fn status(self) -> u16 {
        match self {
            Rejection::BadRequest => 400,
            Rejection::NotFound => 404,
            Rejection::Forbidden => 403,
        }
    }

    /// Plain-text body.
    pub fn body(self) -> &'static str {
        match self {
            Rejection::BadRequest => "Bad Request",
            Rejection::NotFound => "Not Found",
            Rejection::Forbidden => "Forbidden",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status(), self.body())
    }
}

/// Instruction for the rendering or file-delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Render a full-page template
    Template(ResourceRef),
    /// Render a partial
    Partial(ResourceRef),
    /// Send a file as an attachment
    SendFile(ResourceRef),
    /// Refuse the request
    Reject(Rejection),
}

impl Response {
    /// HTTP status code the response should carry.
    pub fn status(&self) -> u16 {
        match self {
            Response::Reject(rejection) => rejection.status(),
            _ => 200,
        }
    }

    /// Returns the resource to deliver, if the request was accepted.
    pub fn resource(&self) -> Option<&ResourceRef> {
        match self {
            Response::Template(r) | Response::Partial(r) | Response::SendFile(r) => Some(r),
            Response::Reject(_) => None,
        }
    }
}

mod body;
pub mod code;
mod constants;

pub use body::ErrorBody;
pub use code::{ErrorCode, LookupError};
pub use constants::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use serde_json::json;

/// A rejected request: the status, the registry code and a message for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error<'a> {
    status: StatusCode,
    code: ErrorCode,
    message: &'a str,
}

pub type Result<T = ()> = std::result::Result<T, Error<'static>>;

impl<'a> Error<'a> {
    #[inline]
    const fn new(status: StatusCode, code: ErrorCode, message: &'a str) -> Error<'a> {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "code": self.code().id(),
                "error": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error<'_> {
    #[inline]
    fn into_response(self) -> Response {
        tracing::debug!(
            code = self.code.id(),
            name = self.code.name(),
            status = self.status.as_u16(),
            "rejecting request: {}",
            self.message
        );

        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:ident, $msg:literal) => {
        pub const $name: $crate::error::Error<'static> = $crate::error::Error::new(
            ::axum::http::StatusCode::$status,
            $crate::error::ErrorCode::$code,
            $msg,
        );
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;

#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::TestResponse;
pub use assert_json_diff::assert_json_eq;
pub use bokbytar_errors::{
    error::{self, ErrorBody, LookupError},
    ErrorCode,
};
pub use http::StatusCode;
pub use serde_json::{json, Value};

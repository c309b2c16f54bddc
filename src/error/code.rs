//! The registry of error codes shared between the service and its clients.
//!
//! Every code is a stable integer. Clients branch on the integer, so a
//! published id keeps its meaning forever: new conditions are appended with
//! the next unused id and retired ids are listed in [`ErrorCode::RETIRED`]
//! instead of being handed out again.

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Failure of a reverse lookup into the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown error code {0}")]
    UnknownCode(i64),
    #[error("unknown error name {0:?}")]
    UnknownName(String),
}

macro_rules! error_codes {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $id:literal => $name:literal, $description:literal;
        )+
    ) => {
        /// A failure reason reported to clients.
        ///
        /// Serializes as the bare integer id.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr,
        )]
        #[repr(u16)]
        pub enum ErrorCode {
            $(
                $(#[$meta])*
                $variant = $id,
            )+
        }

        impl ErrorCode {
            /// Every registered code, ordered by id.
            pub const ALL: &'static [ErrorCode] = &[$(Self::$variant),+];

            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// The condition that triggers this code.
            #[inline]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }

            pub fn from_id(id: i64) -> Result<Self, LookupError> {
                match id {
                    $($id => Ok(Self::$variant),)+
                    _ => Err(LookupError::UnknownCode(id)),
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = LookupError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(LookupError::UnknownName(s.to_owned())),
                }
            }
        }
    };
}

error_codes! {
    /// The password has too low guessing entropy.
    BadPassword = 1 => "BAD_PASSWORD", "password has too low guessing entropy";
    /// Another account already registered the email address.
    UnavailableEmail = 2 => "UNAVAILABLE_EMAIL", "email address is already registered";
    InvalidEmail = 3 => "INVALID_EMAIL", "email address is invalid";
    /// The group to join doesn't exist.
    NonExistingGroup = 4 => "NON_EXISTING_GROUP", "group does not exist";
    /// Joining a group requires membership of its parent group.
    NotMemberOfParentGroup = 5 => "NOT_MEMBER_OF_PARENT_GROUP", "user is not a member of the parent group";
    AlreadyMemberOfGroup = 6 => "ALREADY_MEMBER_OF_GROUP", "user is already a member of the group";
    /// Leaving a group the user never joined.
    NotMemberOfGroup = 7 => "NOT_MEMBER_OF_GROUP", "user is not a member of the group";
    /// Leaving a group while still a member of one of its child groups.
    MemberOfChildGroup = 8 => "MEMBER_OF_CHILD_GROUP", "cannot leave group while still a member of a child group";
    TitleTooShort = 9 => "TITLE_TOO_SHORT", "post title is too short";
    ContentTooShort = 10 => "CONTENT_TOO_SHORT", "post content is too short";
    /// The message being responded to doesn't exist.
    ResponseToNothing = 11 => "RESPONSE_TO_NOTHING", "responded message does not exist";
}

impl ErrorCode {
    /// Ids that were once published and must never be reused.
    pub const RETIRED: &'static [u16] = &[];

    /// The integer sent over the wire.
    #[inline]
    pub const fn id(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = LookupError;

    #[inline]
    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Self::from_id(i64::from(id))
    }
}

impl TryFrom<i64> for ErrorCode {
    type Error = LookupError;

    #[inline]
    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

/// Symbolic name of a registered id, for logs and diagnostics.
pub fn lookup(id: i64) -> Result<&'static str, LookupError> {
    ErrorCode::from_id(id).map(ErrorCode::name)
}

use super::{const_error, Error, ErrorCode};

const_error!(BAD_PASSWORD, BAD_REQUEST, BadPassword, "password is too easy to guess");
const_error!(
    UNAVAILABLE_EMAIL,
    CONFLICT,
    UnavailableEmail,
    "email address is already registered"
);
const_error!(INVALID_EMAIL, BAD_REQUEST, InvalidEmail, "invalid email address");
const_error!(
    NON_EXISTING_GROUP,
    NOT_FOUND,
    NonExistingGroup,
    "group does not exist"
);
const_error!(
    NOT_MEMBER_OF_PARENT_GROUP,
    FORBIDDEN,
    NotMemberOfParentGroup,
    "user must be a member of the parent group"
);
const_error!(
    ALREADY_MEMBER_OF_GROUP,
    CONFLICT,
    AlreadyMemberOfGroup,
    "already member of the group"
);
const_error!(
    NOT_MEMBER_OF_GROUP,
    FORBIDDEN,
    NotMemberOfGroup,
    "user is not a member of the group"
);
const_error!(
    MEMBER_OF_CHILD_GROUP,
    CONFLICT,
    MemberOfChildGroup,
    "user must leave the child groups first"
);
const_error!(TITLE_TOO_SHORT, BAD_REQUEST, TitleTooShort, "title is too short");
const_error!(
    CONTENT_TOO_SHORT,
    BAD_REQUEST,
    ContentTooShort,
    "content is too short"
);
const_error!(
    RESPONSE_TO_NOTHING,
    NOT_FOUND,
    ResponseToNothing,
    "message does not exist"
);

impl From<ErrorCode> for Error<'static> {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::BadPassword => BAD_PASSWORD,
            ErrorCode::UnavailableEmail => UNAVAILABLE_EMAIL,
            ErrorCode::InvalidEmail => INVALID_EMAIL,
            ErrorCode::NonExistingGroup => NON_EXISTING_GROUP,
            ErrorCode::NotMemberOfParentGroup => NOT_MEMBER_OF_PARENT_GROUP,
            ErrorCode::AlreadyMemberOfGroup => ALREADY_MEMBER_OF_GROUP,
            ErrorCode::NotMemberOfGroup => NOT_MEMBER_OF_GROUP,
            ErrorCode::MemberOfChildGroup => MEMBER_OF_CHILD_GROUP,
            ErrorCode::TitleTooShort => TITLE_TOO_SHORT,
            ErrorCode::ContentTooShort => CONTENT_TOO_SHORT,
            ErrorCode::ResponseToNothing => RESPONSE_TO_NOTHING,
        }
    }
}

mod insights;
mod users;

pub use insights::Insight;
pub use users::{
    ApiKeyResponse, ApiUser, ApiUserResponse, MfaStatus, Otp, SamlUser, User, UserDetails,
    UserList, ACCESS_LEVELS,
};

pub(crate) use users::{ConsoleAccessPayload, SuccessFlag, UserIdPayload, UserIdTextPayload};

#![forbid(unsafe_code)]

mod client;
mod client_defaults;
mod error;
mod insights;
mod models;
mod users;

#[cfg(test)]
mod test_support;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Error};
pub use insights::InsightsClient;
pub use models::{
    ApiKeyResponse, ApiUser, ApiUserResponse, Insight, MfaStatus, Otp, SamlUser, User,
    UserDetails, UserList, ACCESS_LEVELS,
};
pub use users::UsersClient;

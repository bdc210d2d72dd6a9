use serde::{Deserialize, Serialize};

/// Access levels accepted by the user-create endpoint.
pub const ACCESS_LEVELS: [&str; 4] = [
    "BASIC_USER",
    "ORGANIZATION_ADMIN",
    "DOMAIN_VIEWER",
    "DOMAIN_ADMIN",
];

/// Payload for creating a password-authenticated console user.
///
/// `access_level` must be one of [`ACCESS_LEVELS`]. An empty
/// `confirm_password` is filled in from `password` before the request is
/// sent; the struct passed by the caller is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub access_level: String,
    pub two_factor_required: bool,
}

/// Payload for creating an API-only user (no console login).
///
/// `authentication_type` is forced to `"internal"` when the request is
/// built, whatever the caller set it to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub authentication_type: String,
}

/// Payload for creating a SAML-federated user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamlUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub access_level: String,
    pub authentication_type: String,
    pub authentication_server_id: i32,
}

/// Response from creating an API-only user.
///
/// `api_key` is a secret and this response is the only place the server
/// ever reveals it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiUserResponse {
    #[serde(rename = "user_id")]
    pub id: i64,
    #[serde(rename = "organization_id")]
    pub org_id: i64,
    pub username: String,
    pub name: String,
    pub api_key: String,
}

/// Fresh API key returned when converting a console user to API-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiKeyResponse {
    #[serde(rename = "user_id")]
    pub id: String,
    pub api_key: String,
}

/// Canonical server-side user record returned by reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserDetails {
    pub username: String,
    #[serde(rename = "user_id")]
    pub id: i64,
    #[serde(rename = "create_date")]
    pub created: String,
    pub name: String,
    #[serde(rename = "email_address")]
    pub email: String,
    pub resource_id: String,
    pub two_factor_enabled: bool,
    pub two_factor_required: bool,
    #[serde(
        rename = "consecutive_failed_login_attempts",
        skip_serializing_if = "Option::is_none"
    )]
    pub failed_login_attempts: Option<i64>,
    #[serde(rename = "last_login_time", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<bool>,
    pub navigation_blacklist: Vec<String>,
    pub require_pw_reset: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_access_denied: Option<bool>,
    #[serde(
        rename = "active_api_key_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_api_key: Option<bool>,
    #[serde(rename = "organization_name")]
    pub org: String,
    #[serde(rename = "organization_id")]
    pub org_id: i64,
    pub domain_admin: bool,
    pub domain_viewer: bool,
    #[serde(rename = "organization_admin")]
    pub org_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_plugin_exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_resources: Option<i64>,
    #[serde(rename = "temporary_pw", skip_serializing_if = "Option::is_none")]
    pub temp_password: Option<String>,
    #[serde(rename = "temp_pw_expiration", skip_serializing_if = "Option::is_none")]
    pub temp_password_expiration: Option<String>,
}

/// Listing of users plus the server-reported total.
///
/// `total_count` comes from the server and is not guaranteed to equal
/// `users.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserList {
    pub users: Vec<UserDetails>,
    #[serde(rename = "total_count")]
    pub count: i64,
}

/// Two-factor authentication state for a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MfaStatus {
    pub enabled: bool,
    pub required: bool,
}

/// One-time-password secret issued when enabling two-factor auth.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Otp {
    #[serde(rename = "otp_secret")]
    pub secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct UserIdPayload {
    pub user_id: i32,
}

// Some endpoints want the numeric user id serialized as a string.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct UserIdTextPayload {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct ConsoleAccessPayload {
    pub user_id: String,
    pub console_access_denied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub(crate) struct SuccessFlag {
    pub success: bool,
}

use crate::client::Client;
use crate::error::Error;
use crate::models::{
    ApiKeyResponse, ApiUser, ApiUserResponse, ConsoleAccessPayload, MfaStatus, Otp, SamlUser,
    SuccessFlag, User, UserDetails, UserIdPayload, UserIdTextPayload, UserList, ACCESS_LEVELS,
};
use log::warn;

/// Operations on user accounts.
///
/// A non-owning view over a shared [`Client`]; obtain one with
/// [`Client::users`]. Holds no state of its own, so every call is an
/// independent request.
pub struct UsersClient<'a> {
    pub(crate) client: &'a Client,
}

impl UsersClient<'_> {
    /// List all users.
    pub fn list(&self) -> Result<UserList, Error> {
        let resp = self.client.get(&["v2", "public", "users", "list"])?;
        self.client.expect_ok_json(resp)
    }

    /// Create a password-authenticated console user.
    ///
    /// Name, username, email and access level must be non-empty and the
    /// access level must be one of [`ACCESS_LEVELS`]; either failure is
    /// reported before any request is made. An empty `confirm_password` is
    /// filled in from `password` in the outgoing payload.
    pub fn create(&self, user: &User) -> Result<UserDetails, Error> {
        if user.access_level.is_empty()
            || user.name.is_empty()
            || user.username.is_empty()
            || user.email.is_empty()
        {
            return Err(Error::Validation(
                "user's name, username, email and access_level must be set".to_string(),
            ));
        }
        if !ACCESS_LEVELS.contains(&user.access_level.as_str()) {
            return Err(Error::Validation(format!(
                "access_level must be one of: {}",
                ACCESS_LEVELS.join(", ")
            )));
        }

        let mut payload = user.clone();
        if payload.confirm_password.is_empty() {
            payload.confirm_password = payload.password.clone();
        }

        let resp = self
            .client
            .post_json(&["v2", "public", "user", "create"], &payload)?;
        self.client.expect_ok_json(resp)
    }

    /// Create an API-only user and return its freshly issued API key.
    ///
    /// The key in the response is a secret and is never revealed again.
    /// `authentication_type` is forced to `"internal"` regardless of the
    /// caller-supplied value.
    pub fn create_api_user(&self, api_user: &ApiUser) -> Result<ApiUserResponse, Error> {
        if api_user.username.is_empty() || api_user.email.is_empty() || api_user.name.is_empty() {
            return Err(Error::Validation(
                "user's name, username and email must be set".to_string(),
            ));
        }

        let mut payload = api_user.clone();
        payload.authentication_type = "internal".to_string();

        let resp = self.client.post_json(
            &["v2", "public", "user", "create_api_only_user"],
            &payload,
        )?;
        self.client.expect_ok_json(resp)
    }

    /// Create a SAML-federated user.
    pub fn create_saml_user(&self, saml_user: &SamlUser) -> Result<UserDetails, Error> {
        if saml_user.username.is_empty() || saml_user.email.is_empty() || saml_user.name.is_empty()
        {
            return Err(Error::Validation(
                "user's name, username and email must be set".to_string(),
            ));
        }

        let resp = self
            .client
            .post_json(&["v2", "public", "user", "create"], saml_user)?;
        self.client.expect_ok_json(resp)
    }

    /// Details for the caller's own authenticated identity.
    pub fn current_user_info(&self) -> Result<UserDetails, Error> {
        let resp = self.client.get(&["v2", "public", "user", "info"])?;
        self.client.expect_ok_json(resp)
    }

    /// Two-factor authentication state for a user.
    pub fn mfa_status(&self, user_id: i32) -> Result<MfaStatus, Error> {
        let resp = self.client.post_json(
            &["v2", "public", "user", "tfa_state"],
            &UserIdPayload { user_id },
        )?;
        self.client.expect_ok_json(resp)
    }

    /// Enable two-factor authentication for the current user, returning the
    /// OTP secret to enroll with.
    pub fn enable_mfa_current_user(&self) -> Result<Otp, Error> {
        let resp = self
            .client
            .post_empty(&["v2", "public", "user", "tfa_enable"])?;
        self.client.expect_ok_json(resp)
    }

    /// Disable two-factor authentication for a user.
    ///
    /// The server acknowledges with `{"success": bool}`; anything other than
    /// `true` is reported as [`Error::Failure`] even though the HTTP call
    /// succeeded.
    pub fn disable_mfa(&self, user_id: i32) -> Result<(), Error> {
        let resp = self.client.post_json(
            &["v2", "public", "user", "tfa_disable"],
            &UserIdPayload { user_id },
        )?;
        let flag: SuccessFlag = self.client.expect_ok_json(resp)?;
        if flag.success {
            Ok(())
        } else {
            Err(Error::Failure(
                "server declined to disable two-factor authentication".to_string(),
            ))
        }
    }

    /// Convert an existing console user to an API-only user, returning a
    /// fresh API key. The user id goes over the wire as a string.
    pub fn convert_to_api_only(&self, user_id: i64) -> Result<ApiKeyResponse, Error> {
        let resp = self.client.post_json(
            &["v2", "public", "user", "update_to_api_only_user"],
            &UserIdTextPayload {
                user_id: user_id.to_string(),
            },
        )?;
        self.client.expect_ok_json(resp)
    }

    /// Toggle whether interactive console login is denied for a user.
    pub fn set_console_access(&self, user_id: i64, denied: bool) -> Result<(), Error> {
        let resp = self.client.post_json(
            &["v2", "public", "user", "update_console_access"],
            &ConsoleAccessPayload {
                user_id: user_id.to_string(),
                console_access_denied: denied,
            },
        )?;
        self.client.expect_ok_empty(resp)
    }

    /// Revoke all API keys for a user.
    pub fn deactivate_api_keys(&self, user_id: i64) -> Result<(), Error> {
        let resp = self.client.post_json(
            &["v2", "public", "apikey", "deactivate"],
            &UserIdTextPayload {
                user_id: user_id.to_string(),
            },
        )?;
        self.client.expect_ok_empty(resp)
    }

    /// Delete a user by its opaque resource id, e.g. `"divvyuser:7"`.
    pub fn delete(&self, resource_id: &str) -> Result<(), Error> {
        let resp = self
            .client
            .delete(&["v2", "prototype", "user", resource_id, "delete"])?;
        self.client.expect_ok_empty(resp)
    }

    /// Delete a user by username.
    ///
    /// The supplied name is lowercased once and compared verbatim against
    /// each stored username; this is a linear scan over one full listing.
    /// The first match is deleted.
    pub fn delete_by_username(&self, username: &str) -> Result<(), Error> {
        let needle = username.to_lowercase();
        let listing = self.list()?;

        let mut matches = listing
            .users
            .iter()
            .filter(|user| user.username == needle);
        let found = matches
            .next()
            .ok_or_else(|| Error::NotFound(format!("no user with username {username}")))?;
        if matches.next().is_some() {
            warn!("multiple users match username {needle}, deleting the first");
        }

        self.delete(&found.resource_id)
    }

    /// Look up a user by exact username. Re-fetches the full listing and
    /// scans it on every call.
    pub fn get_user_by_username(&self, username: &str) -> Result<UserDetails, Error> {
        let listing = self.list()?;
        listing
            .users
            .into_iter()
            .find(|user| user.username == username)
            .ok_or_else(|| Error::NotFound(format!("no user with username {username}")))
    }

    /// Look up a user by numeric id. Re-fetches the full listing and scans
    /// it on every call.
    pub fn get_user_by_id(&self, user_id: i64) -> Result<UserDetails, Error> {
        let listing = self.list()?;
        listing
            .users
            .into_iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| Error::NotFound(format!("no user with user_id {user_id}")))
    }
}

use crate::client_defaults::DEFAULT_TIMEOUT;
use crate::error::{ApiError, Error};
use crate::insights::InsightsClient;
use crate::users::UsersClient;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::{Certificate, StatusCode};
use std::time::Duration;
use url::Url;

/// Builder for [`Client`].
pub struct ClientBuilder {
    base_url: Url,
    timeout: Duration,
    disable_redirect: bool,
    ca_certs: Vec<Certificate>,
    accept_invalid_certs: bool,
    auth: Option<AuthProvider>,
}

impl ClientBuilder {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: DEFAULT_TIMEOUT,
            disable_redirect: false,
            ca_certs: Vec::new(),
            accept_invalid_certs: false,
            auth: None,
        })
    }

    /// Authenticate every request with the platform `Api-Key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.auth = Some(AuthProvider::ApiKey(key.into()));
        self
    }

    /// Authenticate with an arbitrary static header, for deployments fronted
    /// by a proxy that injects its own credential.
    pub fn auth_header(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.auth = Some(AuthProvider::StaticHeader {
            header: header.into(),
            value: value.into(),
        });
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn disable_redirect(mut self, disable: bool) -> Self {
        self.disable_redirect = disable;
        self
    }

    /// Trust an extra root certificate, for self-hosted installations with a
    /// private CA.
    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Skip TLS certificate verification. Only for lab installations.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let mut builder = HttpClient::builder().timeout(self.timeout);
        if self.disable_redirect {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;
        Ok(Client {
            base_url: self.base_url,
            http,
            auth: self.auth,
        })
    }
}

enum AuthProvider {
    ApiKey(String),
    StaticHeader { header: String, value: String },
}

/// Shared transport for the InsightCloudSec REST API.
///
/// Owns the HTTP connection pool, the base URL, and the credential; the
/// resource clients returned by [`Client::insights`] and [`Client::users`]
/// are borrowed views over it. A `Client` is internally immutable and safe
/// to share across threads.
pub struct Client {
    base_url: Url,
    http: HttpClient,
    auth: Option<AuthProvider>,
}

impl Client {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ClientBuilder, Error> {
        ClientBuilder::new(base_url)
    }

    /// Operations on insights (security findings/rules).
    pub fn insights(&self) -> InsightsClient<'_> {
        InsightsClient { client: self }
    }

    /// Operations on user accounts.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient { client: self }
    }

    pub(crate) fn get(&self, segments: &[&str]) -> Result<Response, Error> {
        let url = self.build_url(segments)?;
        let req = self.apply_auth(self.http.get(url));
        Ok(req.send()?)
    }

    pub(crate) fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Response, Error> {
        let url = self.build_url(segments)?;
        let req = self.apply_auth(self.http.post(url).json(body));
        Ok(req.send()?)
    }

    pub(crate) fn post_empty(&self, segments: &[&str]) -> Result<Response, Error> {
        let url = self.build_url(segments)?;
        let req = self.apply_auth(self.http.post(url));
        Ok(req.send()?)
    }

    pub(crate) fn delete(&self, segments: &[&str]) -> Result<Response, Error> {
        let url = self.build_url(segments)?;
        let req = self.apply_auth(self.http.delete(url));
        Ok(req.send()?)
    }

    pub(crate) fn expect_ok_json<T: serde::de::DeserializeOwned>(
        &self,
        resp: Response,
    ) -> Result<T, Error> {
        if resp.status() == StatusCode::OK {
            let body = resp.bytes()?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            self.parse_error(resp)
        }
    }

    pub(crate) fn expect_ok_empty(&self, resp: Response) -> Result<(), Error> {
        if resp.status() == StatusCode::OK {
            Ok(())
        } else {
            self.parse_error(resp)
        }
    }

    fn parse_error<T>(&self, resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.bytes()?;
        let mut err = serde_json::from_slice::<ApiError>(&body).unwrap_or_else(|_| ApiError {
            error_code: status.as_u16() as i32,
            error_message: String::from_utf8_lossy(&body).to_string(),
            error_type: None,
        });
        if err.error_code == 0 {
            err.error_code = status.as_u16() as i32;
        }
        if err.error_message.is_empty() {
            err.error_message = String::from_utf8_lossy(&body).to_string();
        }
        Err(Error::Api(err))
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut path_segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?;
            for segment in segments {
                path_segments.push(segment);
            }
        }
        Ok(url)
    }

    fn apply_auth(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(ref auth) = self.auth {
            match auth {
                AuthProvider::ApiKey(key) => {
                    req = req.header("Api-Key", key);
                }
                AuthProvider::StaticHeader { header, value } => {
                    req = req.header(header, value);
                }
            }
        }
        req
    }
}

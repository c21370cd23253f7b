//! Construction and wiring of the authentication components.
//!
//! One [`AuthService`] is built at startup and shared. It owns the only
//! [`TokenManager`], so the interceptor and the Login boundary always agree
//! on the signing key.

use std::sync::Arc;

use chrono::Duration;
use tracing::info;

use stack_core::config::AuthConfig;
use stack_core::config::auth::DEFAULT_TOKEN_TTL_SECONDS;
use stack_core::error::AppError;
use stack_core::traits::CredentialStore;

use crate::interceptor::{Interceptor, MethodSkipSet};
use crate::jwt::{DEFAULT_ISSUER, TokenManager};
use crate::login::LoginService;
use crate::password::PasswordHasher;
use crate::user::{Credential, LayeredCredentialStore, UserStore};

/// Fully-qualified name of the Login method. Always skip-listed.
pub const LOGIN_METHOD: &str = "/stack.v1.AuthService/Login";

/// The assembled authentication subsystem.
#[derive(Debug, Clone)]
pub struct AuthService {
    tokens: Arc<TokenManager>,
    users: Arc<UserStore>,
    hasher: PasswordHasher,
    login: LoginService,
    interceptor: Interceptor,
}

impl AuthService {
    /// Starts building a service with default settings.
    pub fn builder() -> AuthServiceBuilder {
        AuthServiceBuilder::default()
    }

    /// Builds a service from the `[auth]` configuration section.
    ///
    /// A bootstrap admin is created only when `admin_password` is set.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.token_ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "token_ttl_seconds out of range: {}",
                    config.token_ttl_seconds
                ))
            })?;

        let mut builder = Self::builder()
            .ttl(ttl)
            .issuer(&config.issuer)
            .hasher(PasswordHasher::from_config(&config.password)?);

        for method in &config.skip_methods {
            builder = builder.skip(method);
        }

        if let Some(password) = &config.admin_password {
            builder = builder.user(&config.admin_username, password);
        }

        builder.build()
    }

    /// The per-call interceptor.
    pub fn interceptor(&self) -> &Interceptor {
        &self.interceptor
    }

    /// The Login boundary.
    pub fn login_service(&self) -> &LoginService {
        &self.login
    }

    /// The token manager shared by Login and the interceptor.
    pub fn tokens(&self) -> &Arc<TokenManager> {
        &self.tokens
    }

    /// The in-memory bootstrap user store.
    pub fn users(&self) -> &Arc<UserStore> {
        &self.users
    }

    /// The password hasher used for stored credentials.
    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Convenience for [`LoginService::login`].
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        self.login.login(username, password).await
    }
}

/// Builder for [`AuthService`].
pub struct AuthServiceBuilder {
    ttl: Duration,
    issuer: String,
    hasher: PasswordHasher,
    store: Option<Arc<dyn CredentialStore>>,
    users: Vec<(String, String)>,
    skip: Vec<String>,
}

impl Default for AuthServiceBuilder {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS as i64),
            issuer: DEFAULT_ISSUER.to_string(),
            hasher: PasswordHasher::default(),
            store: None,
            users: Vec::new(),
            skip: Vec::new(),
        }
    }
}

impl AuthServiceBuilder {
    /// Sets the token lifetime. Defaults to five minutes.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the token issuer. Defaults to `"stackd"`.
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Sets the password hasher.
    pub fn hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Resolves Login through `store` first, then through bootstrap users.
    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Adds a bootstrap administrator to the in-memory store.
    pub fn user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((username.into(), password.into()));
        self
    }

    /// Exempts a fully-qualified method from authorization.
    pub fn skip(mut self, method: impl Into<String>) -> Self {
        self.skip.push(method.into());
        self
    }

    /// Draws the signing key, hashes bootstrap passwords, and wires the
    /// components together.
    pub fn build(self) -> Result<AuthService, AppError> {
        let tokens = Arc::new(TokenManager::new(self.ttl, self.issuer)?);

        let users = Arc::new(UserStore::new());
        for (username, password) in &self.users {
            users.save(Credential::new(username.as_str(), password, true, &self.hasher)?)?;
            info!(username = %username, "Bootstrap user registered");
        }

        let store: Arc<dyn CredentialStore> = match self.store {
            Some(external) => Arc::new(LayeredCredentialStore::new(vec![
                external,
                Arc::clone(&users) as Arc<dyn CredentialStore>,
            ])),
            None => Arc::clone(&users) as Arc<dyn CredentialStore>,
        };

        let login = LoginService::new(store, self.hasher.clone(), Arc::clone(&tokens))?;

        let skip: MethodSkipSet = self
            .skip
            .into_iter()
            .chain(std::iter::once(LOGIN_METHOD.to_string()))
            .collect();
        let interceptor = Interceptor::new(Arc::clone(&tokens), skip);

        Ok(AuthService {
            tokens,
            users,
            hasher: self.hasher,
            login,
            interceptor,
        })
    }
}

/// User service - fetch and create over a user store
use crate::{
    error::Result,
    event::{Message, ProxyRequest, ProxyResponse},
    services::PasswordSource,
};
use async_trait::async_trait;
use http::StatusCode;
use roster_core::{NewUser, RosterError, UserRecord, UserStore};

const CREATED_MESSAGE: &str = "Create user successfully";

/// Operations the dispatcher can route to
///
/// Client errors come back as `Ok` 400 envelopes. `Err` means the
/// invocation itself failed and no envelope exists.
#[async_trait]
pub trait UserHandler: Send + Sync {
    /// GET - look up a user by the `email` query parameter
    async fn get_user(&self, request: &ProxyRequest) -> Result<ProxyResponse>;

    /// POST - validate the body and create a user
    async fn create_user(&self, request: &ProxyRequest) -> Result<ProxyResponse>;

    /// PUT - always fails
    async fn just_return_err(&self, request: &ProxyRequest) -> Result<ProxyResponse>;

    /// Any other method
    async fn method_not_allowed(&self) -> Result<ProxyResponse>;
}

#[derive(Debug)]
pub struct UserService<S> {
    store: S,
    password: PasswordSource,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S, password: PasswordSource) -> Self {
        Self { store, password }
    }

    /// Find a user by email
    pub async fn find_user(&self, email: &str) -> roster_core::Result<UserRecord> {
        if email.is_empty() {
            return Err(RosterError::MissingField(roster_core::RequiredField::Email));
        }

        self.store
            .get_user(email)
            .await?
            .ok_or(RosterError::NotFound)
    }

    /// Validate a create body and store the user with the generated password
    pub async fn register_user(&self, body: &str) -> roster_core::Result<UserRecord> {
        let new_user = NewUser::from_json(body)?;
        new_user.validate()?;

        if self.store.get_user(&new_user.email).await?.is_some() {
            return Err(RosterError::AlreadyExists(new_user.email));
        }

        let user = new_user.into_record(self.password.resolve());
        self.store.insert_user(user.clone()).await?;

        tracing::info!("Created user {}", user.email);
        Ok(user)
    }
}

#[async_trait]
impl<S: UserStore> UserHandler for UserService<S> {
    async fn get_user(&self, request: &ProxyRequest) -> Result<ProxyResponse> {
        let email = request.query_param("email");
        tracing::debug!("Fetching user, email={:?}", email);

        match self.find_user(email).await {
            Ok(user) => ProxyResponse::json(StatusCode::OK, &user),
            Err(e) => client_error(e),
        }
    }

    async fn create_user(&self, request: &ProxyRequest) -> Result<ProxyResponse> {
        tracing::debug!("Creating user from {} byte body", request.body.len());

        match self.register_user(&request.body).await {
            Ok(_) => ProxyResponse::json(StatusCode::OK, &Message::message(CREATED_MESSAGE)),
            Err(e) => client_error(e),
        }
    }

    async fn just_return_err(&self, _request: &ProxyRequest) -> Result<ProxyResponse> {
        tracing::warn!("Received PUT, returning error");
        Err(RosterError::Unhandled.into())
    }

    async fn method_not_allowed(&self) -> Result<ProxyResponse> {
        ProxyResponse::json(
            StatusCode::BAD_REQUEST,
            &Message::message(RosterError::MethodNotAllowed.to_string()),
        )
    }
}

/// 400 envelope for client errors; anything else fails the invocation
fn client_error(err: RosterError) -> Result<ProxyResponse> {
    if err.is_client_error() {
        tracing::debug!("Rejected request: {}", err);
        ProxyResponse::json(StatusCode::BAD_REQUEST, &Message::error(err.to_string()))
    } else {
        Err(err.into())
    }
}

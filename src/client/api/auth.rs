use reqwest::Method;

use crate::{
    client::session::{RequestBody, RequestOptions, SessionClient},
    error::Error,
    model::{
        api::OkDto,
        user::{CredentialsDto, LoginDto, MeDto},
    },
};

/// Retrieve the logged in user
pub async fn fetch_me(client: &SessionClient) -> Result<MeDto, Error> {
    client.get("/api/me").await
}

pub async fn login(client: &SessionClient, email: &str, password: &str) -> Result<LoginDto, Error> {
    client
        .post("/api/auth/login", &CredentialsDto { email, password })
        .await
}

/// Create an account; the backend sends a verification email
pub async fn register_account(
    client: &SessionClient,
    email: &str,
    password: &str,
) -> Result<OkDto, Error> {
    client
        .post("/api/auth/register", &CredentialsDto { email, password })
        .await
}

/// End the session; an expired session is not refreshed just to log it out
pub async fn logout(client: &SessionClient) -> Result<OkDto, Error> {
    client
        .request(
            Method::POST,
            "/api/auth/logout",
            RequestBody::Empty,
            RequestOptions::skip_refresh(),
        )
        .await?
        .json()
}

pub async fn verify_email(client: &SessionClient, token: &str) -> Result<OkDto, Error> {
    client
        .get(&format!(
            "/api/auth/verify-email?token={}",
            urlencoding::encode(token)
        ))
        .await
}

use reqwest::Method;
use serde_json::Value;
use shared::protocol::{AuthResponse, LoginRequest, RegisterRequest, ResetPasswordRequest, SuccessResponse};

use crate::client::CrmClient;
use crate::error::{ClientError, ClientResult};

pub struct AuthApi<'a> {
    client: &'a CrmClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a CrmClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: RegisterRequest) -> ClientResult<AuthResponse> {
        let builder = self.client.request(Method::POST, "/api/auth/register")?.json(&request);
        let response: AuthResponse = self.client.send(builder).await?;
        self.store(&response);
        Ok(response)
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let builder = self.client.request(Method::POST, "/api/auth/login")?.json(&request);
        let response: AuthResponse = self.client.send(builder).await?;
        self.store(&response);
        Ok(response)
    }

    /// Clears the local session even when the server call fails.
    pub async fn logout(&self) {
        if self.is_logged_in() {
            let result = match self.client.request(Method::POST, "/api/auth/logout") {
                Ok(builder) => self.client.send::<SuccessResponse>(builder).await.map(|_| ()),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                tracing::debug!(error = %err, "Server logout failed, clearing session anyway");
            }
        }
        self.client.update_session(|s| {
            s.token = None;
            s.role = None;
        });
    }

    pub async fn me(&self) -> ClientResult<Value> {
        if !self.is_logged_in() {
            return Err(ClientError::NotAuthenticated);
        }
        let user: Value = self
            .client
            .send(self.client.request(Method::GET, "/api/auth/me")?)
            .await?;
        self.store_role(&user);
        Ok(user)
    }

    pub async fn update_me(&self, patch: Value) -> ClientResult<Value> {
        if !self.is_logged_in() {
            return Err(ClientError::NotAuthenticated);
        }
        let builder = self.client.request(Method::PUT, "/api/auth/me")?.json(&patch);
        self.client.send(builder).await
    }

    pub async fn reset_password(&self, email: &str, new_password: &str) -> ClientResult<SuccessResponse> {
        let request = ResetPasswordRequest {
            email: email.to_string(),
            new_password: new_password.to_string(),
        };
        let builder = self
            .client
            .request(Method::POST, "/api/auth/reset-password")?
            .json(&request);
        self.client.send(builder).await
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.session().token.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.client.session().token
    }

    /// Adopts a token obtained elsewhere. The role is unknown until `me`.
    pub fn set_token(&self, token: Option<String>) {
        self.client.update_session(|s| {
            s.token = token;
            s.role = None;
        });
    }

    pub fn role(&self) -> Option<String> {
        self.client.session().role
    }

    fn store(&self, response: &AuthResponse) {
        let token = response.token.clone();
        let role = role_of(&response.user);
        self.client.update_session(|s| {
            s.token = Some(token);
            s.role = role;
        });
    }

    fn store_role(&self, user: &Value) {
        let role = role_of(user);
        self.client.update_session(|s| s.role = role);
    }
}

fn role_of(user: &Value) -> Option<String> {
    user.get("role").and_then(Value::as_str).map(str::to_string)
}

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use shared::protocol::{
    GenerateEmailRequest, GenerateNoticeRequest, GeneratePromptRequest, GenerateTextRequest,
    GeneratedEmail, GeneratedText, ListParams, RenderedDocument, SearchHit, SearchParams,
    SendEmailRequest, SendEmailResponse, SmtpTestRequest, SuccessResponse, UpdateOrgRoleRequest,
    UploadResponse,
};

use crate::client::CrmClient;
use crate::error::ClientResult;

async fn post_json<B: Serialize + ?Sized, T: serde::de::DeserializeOwned>(
    client: &CrmClient,
    path: &str,
    body: &B,
) -> ClientResult<T> {
    client.send(client.request(Method::POST, path)?.json(body)).await
}

macro_rules! api_handle {
    ($name:ident) => {
        pub struct $name<'a> {
            client: &'a CrmClient,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a CrmClient) -> Self {
                Self { client }
            }
        }
    };
}

api_handle!(AiApi);
api_handle!(EmailApi);
api_handle!(SearchApi);
api_handle!(FilesApi);
api_handle!(OrganizationsApi);
api_handle!(UsersApi);
api_handle!(SmtpApi);
api_handle!(DocumentsApi);

impl AiApi<'_> {
    pub async fn generate_email(&self, request: &GenerateEmailRequest) -> ClientResult<GeneratedEmail> {
        post_json(self.client, "/api/ai/generate-email", request).await
    }

    pub async fn generate_text(&self, request: &GenerateTextRequest) -> ClientResult<GeneratedText> {
        post_json(self.client, "/api/ai/generate-text", request).await
    }

    pub async fn generate_notice(&self, request: &GenerateNoticeRequest) -> ClientResult<GeneratedText> {
        post_json(self.client, "/api/ai/generate-notice", request).await
    }

    pub async fn generate_protocol(&self, request: &GeneratePromptRequest) -> ClientResult<GeneratedText> {
        post_json(self.client, "/api/ai/generate-protocol", request).await
    }

    pub async fn generate_invitation(
        &self,
        request: &GeneratePromptRequest,
    ) -> ClientResult<GeneratedText> {
        post_json(self.client, "/api/ai/generate-invitation", request).await
    }
}

impl EmailApi<'_> {
    pub async fn send_bulk(&self, request: &SendEmailRequest) -> ClientResult<SendEmailResponse> {
        post_json(self.client, "/api/email/send-invitation", request).await
    }
}

impl SearchApi<'_> {
    pub async fn global(&self, query: &str, organization: &str) -> ClientResult<Vec<SearchHit>> {
        let params = SearchParams {
            q: query.to_string(),
            organization: Some(organization.to_string()),
        };
        let builder = self.client.request(Method::GET, "/api/search")?.query(&params);
        self.client.send(builder).await
    }
}

impl FilesApi<'_> {
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> ClientResult<UploadResponse> {
        let mut part = Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(content_type) = content_type {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("file", part);
        let builder = self
            .client
            .request(Method::POST, "/api/files/upload")?
            .multipart(form);
        self.client.send(builder).await
    }
}

impl OrganizationsApi<'_> {
    pub async fn members(&self, organization: &str) -> ClientResult<Vec<Value>> {
        let path = format!("/api/organizations/{organization}/members");
        self.client.send(self.client.request(Method::GET, &path)?).await
    }
}

impl UsersApi<'_> {
    pub async fn list(&self, params: &ListParams) -> ClientResult<Vec<Value>> {
        let builder = self.client.request(Method::GET, "/api/users")?.query(params);
        self.client.send(builder).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Value> {
        let path = format!("/api/users/{id}");
        self.client.send(self.client.request(Method::GET, &path)?).await
    }

    pub async fn update(&self, id: &str, patch: &Value) -> ClientResult<Value> {
        let path = format!("/api/users/{id}");
        self.client
            .send(self.client.request(Method::PUT, &path)?.json(patch))
            .await
    }

    pub async fn update_role(&self, id: &str, org_role: &str) -> ClientResult<Value> {
        let path = format!("/api/users/{id}/role");
        let request = UpdateOrgRoleRequest {
            org_role: org_role.to_string(),
        };
        self.client
            .send(self.client.request(Method::PUT, &path)?.json(&request))
            .await
    }
}

impl SmtpApi<'_> {
    pub async fn test(&self, organization: &str, test_email: &str) -> ClientResult<SuccessResponse> {
        let request = SmtpTestRequest {
            organization: organization.to_string(),
            test_email: test_email.to_string(),
        };
        post_json(self.client, "/api/smtp/test", &request).await
    }
}

impl DocumentsApi<'_> {
    pub async fn invitation(&self, data: &Map<String, Value>) -> ClientResult<RenderedDocument> {
        post_json(self.client, "/api/pdf/generate-invitation", data).await
    }

    pub async fn protocol(&self, data: &Map<String, Value>) -> ClientResult<RenderedDocument> {
        post_json(self.client, "/api/pdf/generate-protocol", data).await
    }
}

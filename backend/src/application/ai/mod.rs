// Text generation through the configured language model

pub mod prompts;

use serde_json::Value;
use shared::protocol::{
    GenerateEmailRequest, GenerateNoticeRequest, GeneratePromptRequest, GenerateTextRequest,
    GeneratedEmail, GeneratedText,
};

use crate::application::ports::TextGenerator;
use crate::error::{AppError, AppResult};

fn require(generator: Option<&dyn TextGenerator>) -> AppResult<&dyn TextGenerator> {
    generator.ok_or_else(|| AppError::NotConfigured("LLM_API_KEY".into()))
}

fn text(content: String) -> GeneratedText {
    GeneratedText {
        content,
        success: true,
    }
}

pub async fn generate_email(
    generator: Option<&dyn TextGenerator>,
    request: GenerateEmailRequest,
) -> AppResult<GeneratedEmail> {
    let generator = require(generator)?;
    let organization = request
        .organization_name
        .as_deref()
        .unwrap_or(prompts::DEFAULT_ORGANIZATION_NAME);
    let mut prompt = format!("Erstelle eine E-Mail zum Thema: {}", request.topic);
    if let Some(template) = request.template_type.as_deref().filter(|t| !t.is_empty()) {
        prompt.push_str(&format!("\nArt der E-Mail: {template}"));
    }
    let reply = generator.complete(&prompts::email(organization), &prompt).await?;
    let (subject, body) = parse_email_reply(&reply);
    Ok(GeneratedEmail {
        subject,
        body,
        success: true,
    })
}

pub async fn generate_text(
    generator: Option<&dyn TextGenerator>,
    request: GenerateTextRequest,
) -> AppResult<GeneratedText> {
    let generator = require(generator)?;
    let system = match request.system_message.as_deref().filter(|s| !s.is_empty()) {
        Some(custom) => custom,
        None => prompts::for_task(request.task_type.as_deref()),
    };
    Ok(text(generator.complete(system, &request.prompt).await?))
}

/// Levy and organization data, when given, are appended as JSON context.
pub async fn generate_notice(
    generator: Option<&dyn TextGenerator>,
    request: GenerateNoticeRequest,
) -> AppResult<GeneratedText> {
    let generator = require(generator)?;
    let mut prompt = request.prompt;
    append_json(&mut prompt, "Abrechnungsdaten", request.levy_data.as_ref());
    append_json(&mut prompt, "Organisationsdaten", request.organization_data.as_ref());
    Ok(text(generator.complete(prompts::NOTICE, &prompt).await?))
}

pub async fn generate_protocol(
    generator: Option<&dyn TextGenerator>,
    request: GeneratePromptRequest,
) -> AppResult<GeneratedText> {
    let generator = require(generator)?;
    let prompt = with_context(request);
    Ok(text(generator.complete(prompts::PROTOCOL, &prompt).await?))
}

pub async fn generate_invitation(
    generator: Option<&dyn TextGenerator>,
    request: GeneratePromptRequest,
) -> AppResult<GeneratedText> {
    let generator = require(generator)?;
    let prompt = with_context(request);
    Ok(text(generator.complete(prompts::INVITATION, &prompt).await?))
}

fn with_context(request: GeneratePromptRequest) -> String {
    match request.context.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(context) => format!("{}\n\nKontext:\n{context}", request.prompt),
        None => request.prompt,
    }
}

fn append_json(prompt: &mut String, label: &str, data: Option<&Value>) {
    if let Some(data) = data.filter(|d| !d.is_null()) {
        let rendered = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        prompt.push_str(&format!("\n\n{label}:\n{rendered}"));
    }
}

/// Extracts subject and body from a model reply. Accepts a JSON object,
/// optionally inside a fenced code block; otherwise looks for a
/// `Betreff:` line and takes everything after it as the body.
pub fn parse_email_reply(reply: &str) -> (String, String) {
    let trimmed = reply.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let unfenced = unfenced.strip_suffix("```").unwrap_or(unfenced).trim();

    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(unfenced) {
        let field = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        return (field("subject"), field("body"));
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if line.to_lowercase().starts_with("betreff:") {
            let subject = line.get("betreff:".len()..).unwrap_or_default().trim().to_string();
            let body = lines[i + 1..].join("\n").trim().to_string();
            return (subject, body);
        }
    }
    (String::new(), reply.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::text_generator::MockTextGenerator;

    #[test]
    fn parses_fenced_json() {
        let reply = "```json\n{\"subject\": \"Sommerfest\", \"body\": \"Liebe Mitglieder\"}\n```";
        assert_eq!(
            parse_email_reply(reply),
            ("Sommerfest".to_string(), "Liebe Mitglieder".to_string())
        );
    }

    #[test]
    fn falls_back_to_betreff_line() {
        let reply = "Betreff: Einladung zum Stammtisch\n\nHallo zusammen,\nwir treffen uns.";
        let (subject, body) = parse_email_reply(reply);
        assert_eq!(subject, "Einladung zum Stammtisch");
        assert_eq!(body, "Hallo zusammen,\nwir treffen uns.");
    }

    #[test]
    fn unstructured_reply_becomes_body() {
        let (subject, body) = parse_email_reply("Nur Text");
        assert!(subject.is_empty());
        assert_eq!(body, "Nur Text");
    }

    #[tokio::test]
    async fn missing_generator_is_not_configured() {
        let err = generate_text(
            None,
            GenerateTextRequest {
                prompt: "Hallo".into(),
                system_message: None,
                task_type: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "LLM_API_KEY not configured");
    }

    #[tokio::test]
    async fn task_type_selects_system_message() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_complete()
            .withf(|system, prompt| system == prompts::MOTION && prompt == "Antrag Radweg")
            .returning(|_, _| Ok("Antragstext".into()));
        let generated = generate_text(
            Some(&generator as &dyn TextGenerator),
            GenerateTextRequest {
                prompt: "Antrag Radweg".into(),
                system_message: None,
                task_type: Some("motion".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(generated.content, "Antragstext");
        assert!(generated.success);
    }

    #[tokio::test]
    async fn notice_prompt_includes_levy_data() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_complete()
            .withf(|system, prompt| system == prompts::NOTICE && prompt.contains("Abrechnungsdaten"))
            .returning(|_, _| Ok("Bescheid".into()));
        generate_notice(
            Some(&generator as &dyn TextGenerator),
            GenerateNoticeRequest {
                prompt: "Bescheid für Max".into(),
                levy_data: Some(serde_json::json!({ "levy_amount": 90.0 })),
                organization_data: None,
            },
        )
        .await
        .unwrap();
    }
}

// Printable HTML for invitations and protocols

use chrono::NaiveDate;
use serde_json::{Map, Value};
use shared::protocol::RenderedDocument;

type Data = Map<String, Value>;

/// Minimal HTML escaping for text interpolated into element content and
/// attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn raw_field(data: &Data, key: &str, default: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

fn field(data: &Data, key: &str, default: &str) -> String {
    escape_html(&raw_field(data, key, default))
}

fn file_name(prefix: &str, title: &str) -> String {
    format!("{prefix}_{}.pdf", title.replace(' ', "_"))
}

pub fn render_invitation(data: &Data, today: NaiveDate) -> RenderedDocument {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 40px;">
    <div style="text-align: right; margin-bottom: 30px;">
        <p>{organization}</p>
        <p>{address}</p>
        <p>{date_today}</p>
    </div>
    <h1 style="font-size: 18px; margin-bottom: 20px;">Einladung zur {title}</h1>
    <p><strong>Datum:</strong> {date}</p>
    <p><strong>Ort:</strong> {location}</p>
    <h2 style="font-size: 14px; margin-top: 20px;">Tagesordnung:</h2>
    <pre style="white-space: pre-wrap;">{agenda}</pre>
    <div style="margin-top: 30px; white-space: pre-wrap;">{text}</div>
    <div style="margin-top: 40px;">
        <p>Mit freundlichen Grüßen</p>
        <p>{sender}</p>
    </div>
</div>"#,
        organization = field(data, "organization_name", "Organisation"),
        address = field(data, "organization_address", ""),
        date_today = today.format("%d.%m.%Y"),
        title = field(data, "title", "Fraktionssitzung"),
        date = field(data, "date", ""),
        location = field(data, "location", ""),
        agenda = field(data, "agenda", ""),
        text = field(data, "invitation_text", ""),
        sender = field(data, "sender_name", ""),
    );

    RenderedDocument {
        html,
        title: raw_field(data, "title", "Einladung"),
        filename: file_name("Einladung", &raw_field(data, "title", "Sitzung")),
    }
}

pub fn render_protocol(data: &Data) -> RenderedDocument {
    let attendees = match data.get("attendees") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(escape_html)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) => escape_html(s),
        _ => String::new(),
    };
    let cell = r#"style="padding: 8px; border: 1px solid #ddd;""#;

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 40px;">
    <h1 style="font-size: 20px; text-align: center; margin-bottom: 30px;">PROTOKOLL</h1>
    <h2 style="font-size: 16px;">{title}</h2>
    <table style="width: 100%; margin: 20px 0; border-collapse: collapse;">
        <tr><td {cell}><strong>Datum:</strong></td><td {cell}>{date}</td></tr>
        <tr><td {cell}><strong>Ort:</strong></td><td {cell}>{location}</td></tr>
        <tr><td {cell}><strong>Anwesend:</strong></td><td {cell}>{attendees}</td></tr>
    </table>
    <h3 style="font-size: 14px;">Tagesordnung:</h3>
    <pre style="white-space: pre-wrap; background: #f5f5f5; padding: 15px;">{agenda}</pre>
    <h3 style="font-size: 14px; margin-top: 20px;">Protokoll:</h3>
    <div style="white-space: pre-wrap;">{protocol}</div>
    <div style="margin-top: 50px; display: flex; justify-content: space-between;">
        <div style="width: 45%;"><p>_________________________</p><p>Protokollführer/in</p></div>
        <div style="width: 45%;"><p>_________________________</p><p>Sitzungsleiter/in</p></div>
    </div>
</div>"#,
        title = field(data, "title", "Fraktionssitzung"),
        date = field(data, "date", ""),
        location = field(data, "location", ""),
        agenda = field(data, "agenda", ""),
        protocol = field(data, "protocol", ""),
    );

    RenderedDocument {
        html,
        title: raw_field(data, "title", "Protokoll"),
        filename: file_name("Protokoll", &raw_field(data, "title", "Sitzung")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::into_fields;
    use serde_json::json;

    #[test]
    fn invitation_uses_title_and_today() {
        let data = into_fields(json!({
            "title": "Fraktionssitzung März",
            "date": "2024-03-12",
            "location": "Rathaus, Raum 101",
            "agenda": "TOP 1: Begrüßung"
        }));
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let doc = render_invitation(&data, today);
        assert_eq!(doc.filename, "Einladung_Fraktionssitzung_März.pdf");
        assert_eq!(doc.title, "Fraktionssitzung März");
        assert!(doc.html.contains("01.03.2024"));
        assert!(doc.html.contains("Rathaus, Raum 101"));
        assert!(doc.html.contains(">Organisation<"));
    }

    #[test]
    fn values_are_escaped() {
        let data = into_fields(json!({ "title": "<script>alert(1)</script>" }));
        let doc = render_protocol(&data);
        assert!(!doc.html.contains("<script>"));
        assert!(doc.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn protocol_lists_attendees_and_defaults() {
        let data = into_fields(json!({ "attendees": ["Max Mustermann", "Anna Schmidt"] }));
        let doc = render_protocol(&data);
        assert!(doc.html.contains("Max Mustermann, Anna Schmidt"));
        assert_eq!(doc.title, "Protokoll");
        assert_eq!(doc.filename, "Protokoll_Sitzung.pdf");
    }
}

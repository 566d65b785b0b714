// Demo data for trying out the application

pub mod demo;
pub mod full_demo;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::application::ports::DocumentRepository;
use crate::domain::Document;
use crate::error::AppResult;

pub const DEMO_PASSWORD: &str = "demo123";

const GERMAN_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

/// Counts reported after seeding the full demo organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub organization: String,
    pub display_name: String,
    pub members_created: usize,
    pub donors_created: usize,
    pub mandate_levies_created: usize,
    pub incomes_created: usize,
    pub expenses_created: usize,
    pub meetings_created: usize,
    pub tasks_created: usize,
    pub campaigns_created: usize,
    pub documents_created: usize,
    pub login_email: String,
    pub login_password: String,
}

/// "Januar 2026"
pub fn month_label(date: DateTime<Utc>) -> String {
    format!("{} {}", GERMAN_MONTHS[date.month0() as usize], date.year())
}

pub fn days_from(now: DateTime<Utc>, days: i64) -> String {
    (now + Duration::days(days)).to_rfc3339()
}

/// Inserts each object with `organization` and `created_date` added.
/// Returns the stored documents in input order.
pub async fn insert_all<R: DocumentRepository + ?Sized>(
    repo: &R,
    collection: &str,
    organization: &str,
    created: &str,
    items: Vec<Value>,
) -> AppResult<Vec<Document>> {
    let mut stored = Vec::with_capacity(items.len());
    for item in items {
        let mut fields = match item {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.insert("organization".into(), Value::String(organization.into()));
        fields
            .entry("created_date")
            .or_insert_with(|| Value::String(created.into()));
        let document = Document::new(fields);
        repo.insert(collection, &document).await?;
        stored.push(document);
    }
    Ok(stored)
}

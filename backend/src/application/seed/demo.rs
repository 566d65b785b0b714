use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use shared::collections::{EXPENSES, INCOMES, ORGANIZATIONS, USERS};

use crate::application::auth::PasswordHasher;
use crate::application::into_fields;
use crate::application::ports::{DocumentRepository, Filter};
use crate::application::seed::{days_from, insert_all, DEMO_PASSWORD};
use crate::domain::entities::user::PASSWORD_HASH_FIELD;
use crate::domain::Document;
use crate::error::AppResult;

pub const DEMO_ORG: &str = "demo-org";
pub const DEMO_EMAIL: &str = "demo@kommunalcrm.de";

fn fraction_incomes(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({"title": "Fraktionszuwendung Q1/2026", "category": "zuwendung_stadt", "amount": 12500.00, "date": days_from(now, -60), "reference": "BV-2026-001", "notes": "Quartalszuwendung Stadt"}),
        json!({"title": "Fraktionszuwendung Q4/2025", "category": "zuwendung_stadt", "amount": 12500.00, "date": days_from(now, -150), "reference": "BV-2025-004", "notes": "Quartalszuwendung Stadt"}),
        json!({"title": "Kreiszuwendung 2025", "category": "zuwendung_kreis", "amount": 3500.00, "date": days_from(now, -120), "reference": "KT-2025-FZ", "notes": "Jährliche Kreiszuwendung"}),
        json!({"title": "Fraktionszuwendung Q3/2025", "category": "zuwendung_stadt", "amount": 12500.00, "date": days_from(now, -240), "reference": "BV-2025-003", "notes": "Quartalszuwendung Stadt"}),
    ]
}

fn fraction_expenses(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({"title": "Gehalt Fraktionsgeschäftsführer Januar", "category": "personal", "amount": 3800.00, "date": days_from(now, -30), "reference": "GH-2026-01", "notes": "Monatl. Gehalt inkl. AG-Anteile"}),
        json!({"title": "Gehalt Fraktionsgeschäftsführer Dezember", "category": "personal", "amount": 3800.00, "date": days_from(now, -60), "reference": "GH-2025-12", "notes": "Monatl. Gehalt inkl. AG-Anteile"}),
        json!({"title": "Miete Fraktionsbüro Februar", "category": "miete", "amount": 650.00, "date": days_from(now, -15), "reference": "MI-2026-02", "notes": "Inkl. Nebenkosten"}),
        json!({"title": "Miete Fraktionsbüro Januar", "category": "miete", "amount": 650.00, "date": days_from(now, -45), "reference": "MI-2026-01", "notes": "Inkl. Nebenkosten"}),
        json!({"title": "Miete Fraktionsbüro Dezember", "category": "miete", "amount": 650.00, "date": days_from(now, -75), "reference": "MI-2025-12", "notes": "Inkl. Nebenkosten"}),
        json!({"title": "Telefonkosten Q1", "category": "verwaltung", "amount": 185.00, "date": days_from(now, -20), "reference": "TEL-2026-Q1", "notes": "Festnetz + Mobilfunk"}),
        json!({"title": "Porto & Versand", "category": "verwaltung", "amount": 45.50, "date": days_from(now, -10), "reference": "PO-2026-02", "notes": "Einladungen MV"}),
        json!({"title": "Druckkosten Flyer", "category": "verwaltung", "amount": 380.00, "date": days_from(now, -35), "reference": "DR-2026-001", "notes": "500 Flyer Bürgerinfo"}),
        json!({"title": "Bürobedarf", "category": "bueromaterial", "amount": 125.00, "date": days_from(now, -25), "reference": "BM-2026-01", "notes": "Papier, Toner, Stifte"}),
        json!({"title": "IT-Wartung", "category": "verwaltung", "amount": 95.00, "date": days_from(now, -50), "reference": "IT-2026-01", "notes": "Monatliche Pauschale"}),
    ]
}

fn with_type(items: Vec<Value>, kind: &str) -> Vec<Value> {
    items
        .into_iter()
        .map(|mut item| {
            item["type"] = Value::String(kind.into());
            item
        })
        .collect()
}

/// Creates the demo login, its organization and the fraction finances.
/// Each part is skipped when already present, so repeated calls are safe.
pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    passwords: &PasswordHasher,
) -> AppResult<()> {
    let now = Utc::now();
    let created = now.to_rfc3339();

    if repo.find_one(USERS.name, &Filter::new().eq("email", DEMO_EMAIL)).await?.is_none() {
        let mut user = into_fields(json!({
            "email": DEMO_EMAIL,
            "full_name": "Max Mustermann",
            "city": "Musterstadt",
            "organization": DEMO_ORG,
            "org_type": "fraktion",
            "role": "admin",
            "created_date": created,
        }));
        user.insert(
            PASSWORD_HASH_FIELD.into(),
            Value::String(passwords.hash(DEMO_PASSWORD).await?),
        );
        repo.insert(USERS.name, &Document::new(user)).await?;
    }

    if repo.find_one(ORGANIZATIONS.name, &Filter::new().eq("name", DEMO_ORG)).await?.is_none() {
        let organization = into_fields(json!({
            "name": DEMO_ORG,
            "display_name": "SPD Fraktion Musterstadt",
            "type": "fraktion",
            "city": "Musterstadt",
            "state": "Bayern",
            "created_date": created,
        }));
        repo.insert(ORGANIZATIONS.name, &Document::new(organization)).await?;
    }

    let fraction = Filter::new().eq("organization", DEMO_ORG).eq("type", "fraction");
    if repo.count(INCOMES.name, &fraction).await? == 0 {
        insert_all(repo, INCOMES.name, DEMO_ORG, &created, with_type(fraction_incomes(now), "fraction")).await?;
        insert_all(repo, EXPENSES.name, DEMO_ORG, &created, with_type(fraction_expenses(now), "fraction")).await?;
    }

    tracing::info!(organization = DEMO_ORG, "Demo data seeded");
    Ok(())
}

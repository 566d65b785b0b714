use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde_json::{json, Value};
use shared::collections::{
    CAMPAIGNS, COMMUNICATIONS, CONTACTS, DOCUMENTS, EXPENSES, FRACTION_MEETINGS, INCOMES,
    LEVY_RULES, MANDATE_LEVIES, MEETINGS, MEMBER_GROUPS, MOTIONS, ORGANIZATIONS, TASKS, USERS,
};

use crate::application::auth::PasswordHasher;
use crate::application::into_fields;
use crate::application::ports::{DocumentRepository, Filter};
use crate::application::seed::{days_from, insert_all, month_label, SeedSummary, DEMO_PASSWORD};
use crate::domain::accounting::{default_levy_rate, levy_amount, round_cents, split_gross};
use crate::domain::entities::user::PASSWORD_HASH_FIELD;
use crate::domain::Document;
use crate::error::AppResult;

pub const DEMO_ORG: &str = "demo-verband";
pub const DEMO_DISPLAY_NAME: &str = "SPD Ortsverband Neustadt";
pub const DEMO_EMAIL: &str = "demo-verband@kommunalcrm.de";

/// Collections wiped for the demo organization before reseeding.
const RESET_COLLECTIONS: [&str; 13] = [
    CONTACTS.name,
    MEMBER_GROUPS.name,
    MANDATE_LEVIES.name,
    LEVY_RULES.name,
    INCOMES.name,
    EXPENSES.name,
    MEETINGS.name,
    MOTIONS.name,
    TASKS.name,
    CAMPAIGNS.name,
    COMMUNICATIONS.name,
    DOCUMENTS.name,
    FRACTION_MEETINGS.name,
];

const LEVY_MONTHS: i64 = 12;

struct Member {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    role: Option<&'static str>,
    groups: &'static [&'static str],
    fee_paid: bool,
    member_since: &'static str,
    member_number: &'static str,
    mandate: Option<(&'static str, f64)>,
}

const GROUPS: [(&str, &str, &str); 6] = [
    ("Vorstand", "Vorstandsmitglieder des Ortsvereins", "#dc2626"),
    ("Mandatsträger", "Gewählte Vertreter in Rat und Kreistag", "#2563eb"),
    ("Aktive Mitglieder", "Regelmäßig aktive Parteimitglieder", "#16a34a"),
    ("Jusos", "Jungsozialist*innen unter 35", "#ea580c"),
    ("AG 60+", "Arbeitsgemeinschaft der Senior*innen", "#7c3aed"),
    ("Ehrenmitglieder", "Ehrenmitglieder des Ortsvereins", "#ca8a04"),
];

const MEMBERS: [Member; 14] = [
    Member { first_name: "Maria", last_name: "Schmidt", email: "m.schmidt@spd-neustadt.de", role: Some("Vorsitzende"), groups: &["Vorstand", "Aktive Mitglieder"], fee_paid: true, member_since: "2010-03-15", member_number: "M-001", mandate: None },
    Member { first_name: "Thomas", last_name: "Müller", email: "t.mueller@spd-neustadt.de", role: Some("Stellv. Vorsitzender"), groups: &["Vorstand", "Mandatsträger"], fee_paid: true, member_since: "2005-01-10", member_number: "M-002", mandate: None },
    Member { first_name: "Sabine", last_name: "Weber", email: "s.weber@spd-neustadt.de", role: Some("Kassierer*in"), groups: &["Vorstand"], fee_paid: true, member_since: "2012-09-01", member_number: "M-003", mandate: None },
    Member { first_name: "Klaus", last_name: "Fischer", email: "k.fischer@spd-neustadt.de", role: Some("Schriftführer"), groups: &["Vorstand", "AG 60+"], fee_paid: true, member_since: "1998-04-20", member_number: "M-004", mandate: None },
    Member { first_name: "Andrea", last_name: "Becker", email: "a.becker@rat-neustadt.de", role: Some("Fraktionsvorsitzende"), groups: &["Mandatsträger", "Aktive Mitglieder"], fee_paid: true, member_since: "2002-06-15", member_number: "M-005", mandate: Some(("Ratsmitglied", 1850.0)) },
    Member { first_name: "Michael", last_name: "Hoffmann", email: "m.hoffmann@rat-neustadt.de", role: None, groups: &["Mandatsträger"], fee_paid: true, member_since: "2008-11-20", member_number: "M-006", mandate: Some(("Kreistagsmitglied", 2200.0)) },
    Member { first_name: "Petra", last_name: "Schneider", email: "p.schneider@rat-neustadt.de", role: None, groups: &["Mandatsträger", "Aktive Mitglieder"], fee_paid: true, member_since: "2015-03-01", member_number: "M-007", mandate: Some(("Ratsmitglied", 1850.0)) },
    Member { first_name: "Hans", last_name: "Meyer", email: "h.meyer@rat-neustadt.de", role: None, groups: &["Mandatsträger", "AG 60+"], fee_paid: true, member_since: "1995-08-10", member_number: "M-008", mandate: Some(("Bürgermeister", 6500.0)) },
    Member { first_name: "Lisa", last_name: "Wagner", email: "l.wagner@jusos-neustadt.de", role: Some("Juso-Vorsitzende"), groups: &["Jusos", "Aktive Mitglieder"], fee_paid: true, member_since: "2020-01-15", member_number: "M-009", mandate: None },
    Member { first_name: "Sophie", last_name: "Braun", email: "s.braun@email.de", role: None, groups: &["Jusos"], fee_paid: false, member_since: "2023-03-20", member_number: "M-011", mandate: None },
    Member { first_name: "Gerhard", last_name: "Richter", email: "g.richter@email.de", role: Some("AG 60+ Sprecher"), groups: &["AG 60+"], fee_paid: true, member_since: "1985-02-28", member_number: "M-012", mandate: None },
    Member { first_name: "Werner", last_name: "Schulz", email: "w.schulz@email.de", role: None, groups: &["AG 60+", "Ehrenmitglieder"], fee_paid: true, member_since: "1975-11-01", member_number: "M-014", mandate: None },
    Member { first_name: "Martina", last_name: "Neumann", email: "m.neumann@email.de", role: None, groups: &["Aktive Mitglieder"], fee_paid: false, member_since: "2022-08-01", member_number: "M-017", mandate: None },
    Member { first_name: "Dieter", last_name: "Lang", email: "d.lang@email.de", role: None, groups: &[], fee_paid: false, member_since: "2019-02-14", member_number: "M-020", mandate: None },
];

fn donors() -> Vec<Value> {
    vec![
        json!({"first_name": "Heinrich", "last_name": "Großmann", "email": "h.grossmann@firma.de", "company": "Großmann GmbH", "donation_total": 5000.00, "last_donation": "2025-12-01"}),
        json!({"first_name": "Erika", "last_name": "Spendefroh", "email": "e.spendefroh@email.de", "donation_total": 2500.00, "last_donation": "2025-11-15"}),
        json!({"first_name": "Gewerkschaft", "last_name": "ver.di Bezirk", "email": "bezirk@verdi.de", "company": "ver.di", "donation_total": 3000.00, "last_donation": "2025-10-20"}),
    ]
    .into_iter()
    .map(|mut d| {
        d["status"] = json!("aktiv");
        d["type"] = json!("spender");
        d
    })
    .collect()
}

fn levy_rules() -> Vec<Value> {
    [
        ("Standard-Mandatsabgabe", "Ratsmitglied", 50.0),
        ("Kreistag-Abgabe", "Kreistagsmitglied", 75.0),
        ("Bürgermeister-Abgabe", "Bürgermeister", 500.0),
    ]
    .into_iter()
    .map(|(name, mandate, min_amount)| {
        let rate = default_levy_rate(mandate);
        json!({
            "name": name,
            "description": format!("{rate}% der Aufwandsentschädigung"),
            "percentage": rate,
            "mandate_type": mandate,
            "min_amount": min_amount,
            "active": true,
        })
    })
    .collect()
}

fn mandate_levies(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<Value> {
    let mut levies = Vec::new();
    for offset in 0..LEVY_MONTHS {
        let date = now - Duration::days(30 * offset);
        for member in MEMBERS.iter() {
            let Some((mandate, income)) = member.mandate else { continue };
            let rate = default_levy_rate(mandate);
            let paid = rng.gen_bool(0.85);
            levies.push(json!({
                "contact_name": format!("{} {}", member.first_name, member.last_name),
                "member_number": member.member_number,
                "mandate_type": mandate.to_lowercase().replace(' ', ""),
                "mandate_body": if mandate == "Kreistagsmitglied" { "Kreis Neustadt" } else { "Stadt Neustadt" },
                "period_month": date.format("%Y-%m").to_string(),
                "gross_income": income,
                "levy_rate": rate,
                "deductions": 0,
                "final_levy": levy_amount(income, rate, 0.0, 0.0),
                "status": if paid { "bezahlt" } else { "offen" },
                "payment_date": paid.then(|| date.format("%Y-%m-%d").to_string()),
                "created_date": date.to_rfc3339(),
            }));
        }
    }
    levies
}

fn incomes(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<Value> {
    let mut items = Vec::new();
    for offset in 0..LEVY_MONTHS {
        let date = now - Duration::days(30 * offset);
        let label = month_label(date);
        let period = date.format("%Y%m");
        items.push(json!({
            "title": format!("Mitgliedsbeiträge {label}"),
            "category": "Mitgliedsbeiträge",
            "account_number": "4100",
            "amount": round_cents(rng.gen_range(800.0..1200.0)),
            "date": date.to_rfc3339(),
            "payer": "Sammelüberweisung Mitglieder",
            "reference": format!("MB-{period}"),
            "tax_rate": 0,
        }));
        items.push(json!({
            "title": format!("Mandatsträgerabgaben {label}"),
            "category": "Mandatsträgerabgaben",
            "account_number": "4120",
            "amount": round_cents(rng.gen_range(2500.0..3500.0)),
            "date": date.to_rfc3339(),
            "payer": "Mandatsträger",
            "reference": format!("MTA-{period}"),
            "tax_rate": 0,
        }));
    }
    items.extend([
        json!({"title": "Spende Heinrich Großmann", "category": "Spenden juristische Personen", "account_number": "4111", "amount": 5000.00, "date": days_from(now, -45), "payer": "Großmann GmbH", "reference": "SP-2025-001", "tax_rate": 0}),
        json!({"title": "Spende Erika Spendefroh", "category": "Spenden natürliche Personen", "account_number": "4110", "amount": 2500.00, "date": days_from(now, -60), "payer": "Erika Spendefroh", "reference": "SP-2025-002", "tax_rate": 0}),
        json!({"title": "Spende ver.di Bezirk", "category": "Spenden juristische Personen", "account_number": "4111", "amount": 3000.00, "date": days_from(now, -90), "payer": "ver.di Bezirk", "reference": "SP-2025-003", "tax_rate": 0}),
        json!({"title": "Erlös Sommerfest 2025", "category": "Veranstaltungserlöse", "account_number": "4130", "amount": 1850.00, "date": days_from(now, -180), "payer": "Barzahlung", "reference": "VER-2025-001", "tax_rate": 0}),
        json!({"title": "Staatlicher Zuschuss Q4", "category": "Staatliche Zuschüsse", "account_number": "4140", "amount": 8500.00, "date": days_from(now, -30), "payer": "Land NRW", "reference": "STZ-2025-Q4", "tax_rate": 0}),
    ]);
    for item in &mut items {
        item["status"] = json!("gebucht");
    }
    items
}

fn expenses(now: DateTime<Utc>) -> Vec<Value> {
    let rows: [(&str, &str, &str, f64, f64, i64, &str, &str); 10] = [
        ("Miete Geschäftsstelle Januar", "Raumkosten", "6310", 450.00, 19.0, -30, "Hausverwaltung Neustadt", "M-2025-01"),
        ("Miete Geschäftsstelle Dezember", "Raumkosten", "6310", 450.00, 19.0, -60, "Hausverwaltung Neustadt", "M-2024-12"),
        ("Druck Wahlkampfflyer", "Werbekosten", "6600", 1250.00, 19.0, -45, "Druckerei Schmidt", "DR-2025-001"),
        ("Catering Mitgliederversammlung", "Veranstaltungskosten", "6820", 385.00, 7.0, -20, "Partyservice Lecker", "CA-2025-001"),
        ("Büromaterial", "Bürobedarf", "6815", 125.50, 19.0, -15, "Büro-Fuchs GmbH", "BM-2025-001"),
        ("Website Hosting Jahresgebühr", "EDV-Kosten", "6580", 180.00, 19.0, -10, "Webhosting24", "WEB-2025"),
        ("Telefonkosten Dezember", "Kommunikationskosten", "6805", 45.90, 19.0, -35, "Telekom", "TEL-2024-12"),
        ("Fahrtkosten Delegiertenkonferenz", "Reisekosten", "6670", 312.50, 19.0, -50, "Deutsche Bahn", "FK-2025-001"),
        ("Veranstaltungstechnik Sommerfest", "Veranstaltungskosten", "6820", 580.00, 19.0, -180, "Event-Technik Müller", "VT-2025-001"),
        ("Versicherung Vereinshaftpflicht", "Versicherungen", "6400", 285.00, 0.0, -100, "Allianz Versicherung", "VERS-2025"),
    ];
    rows.into_iter()
        .map(|(title, category, account, amount, tax_rate, days, vendor, reference)| {
            let (net_amount, tax_amount) = split_gross(amount, tax_rate);
            json!({
                "title": title,
                "category": category,
                "account_number": account,
                "amount": amount,
                "net_amount": net_amount,
                "tax_amount": tax_amount,
                "tax_rate": tax_rate,
                "date": days_from(now, days),
                "vendor": vendor,
                "reference": reference,
                "status": "bezahlt",
            })
        })
        .collect()
}

fn meetings(now: DateTime<Utc>) -> Vec<Value> {
    [
        ("Vorstandssitzung", 7, 2, "Geschäftsstelle", "vorstand", "Monatliche Vorstandssitzung"),
        ("Mitgliederversammlung", 30, 3, "Bürgerhaus Neustadt", "mitgliederversammlung", "Ordentliche Jahreshauptversammlung mit Vorstandswahlen"),
        ("AG 60+ Treffen", 14, 2, "Seniorentreff", "arbeitsgruppe", "Monatliches Treffen der AG 60+"),
        ("Juso-Plenum", 10, 2, "Jugendhaus", "arbeitsgruppe", "Offenes Plenum der Jusos"),
        ("Wahlkampfplanung", 21, 3, "Geschäftsstelle", "sonstiges", "Strategieplanung für Kommunalwahl 2026"),
    ]
    .into_iter()
    .map(|(title, days, hours, location, kind, description)| {
        let start = now + Duration::days(days);
        json!({
            "title": title,
            "date": start.to_rfc3339(),
            "end_date": (start + Duration::hours(hours)).to_rfc3339(),
            "location": location,
            "type": kind,
            "status": "geplant",
            "description": description,
        })
    })
    .collect()
}

fn tasks(now: DateTime<Utc>) -> Vec<Value> {
    [
        ("Jahresabschluss vorbereiten", "Alle Belege für Steuerberater zusammenstellen", "in_bearbeitung", "hoch", 14, "Sabine Weber"),
        ("Mitgliedsbeiträge einziehen", "Mahnungen für ausstehende Beiträge versenden", "offen", "mittel", 7, "Sabine Weber"),
        ("Einladung MV versenden", "Einladungen zur Mitgliederversammlung per Post und E-Mail", "offen", "hoch", 5, "Klaus Fischer"),
        ("Wahlkampfmaterial bestellen", "Flyer, Plakate und Kugelschreiber für Kommunalwahl", "offen", "mittel", 30, "Maria Schmidt"),
        ("Homepage aktualisieren", "Termine und Pressemitteilungen aktualisieren", "in_bearbeitung", "niedrig", 3, "Lisa Wagner"),
        ("Raumreservierung Sommerfest", "Stadtpark für Sommerfest 2026 reservieren", "erledigt", "mittel", -10, "Thomas Müller"),
    ]
    .into_iter()
    .map(|(title, description, status, priority, due, assignee)| {
        json!({
            "title": title,
            "description": description,
            "status": status,
            "priority": priority,
            "due_date": days_from(now, due),
            "assigned_to": assignee,
        })
    })
    .collect()
}

fn campaigns(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({"name": "Kommunalwahl 2026", "description": "Wahlkampagne für die Kommunalwahl im September 2026", "start_date": days_from(now, 60), "end_date": days_from(now, 240), "budget": 15000.00, "status": "planung"}),
        json!({"name": "Sommerfest 2026", "description": "Jährliches Sommerfest des Ortsvereins", "start_date": days_from(now, 150), "end_date": days_from(now, 151), "budget": 2500.00, "status": "planung"}),
        json!({"name": "Mitgliederwerbung Q1", "description": "Kampagne zur Gewinnung neuer Mitglieder", "start_date": days_from(now, 0), "end_date": days_from(now, 90), "budget": 1000.00, "status": "aktiv"}),
    ]
}

fn documents() -> Vec<Value> {
    vec![
        json!({"title": "Satzung SPD Ortsverband Neustadt", "type": "satzung", "content": "Satzung des SPD Ortsvereins Neustadt, beschlossen auf der MV am 15.03.2020"}),
        json!({"title": "Geschäftsordnung Vorstand", "type": "geschaeftsordnung", "content": "Geschäftsordnung für die Arbeit des Vorstands"}),
        json!({"title": "Protokoll MV 2024", "type": "protokoll", "content": "Protokoll der Mitgliederversammlung vom 18.11.2024"}),
        json!({"title": "Haushaltsplan 2025", "type": "finanzen", "content": "Beschlossener Haushaltsplan für das Jahr 2025"}),
        json!({"title": "Datenschutzkonzept", "type": "datenschutz", "content": "Datenschutzkonzept gemäß DSGVO"}),
    ]
}

async fn reset<R: DocumentRepository + ?Sized>(repo: &R) -> AppResult<()> {
    let owned = Filter::new().eq("organization", DEMO_ORG);
    let mut removed = 0;
    for collection in RESET_COLLECTIONS {
        removed += repo.delete_matching(collection, &owned).await?;
    }
    removed += repo.delete_matching(USERS.name, &owned).await?;
    removed += repo
        .delete_matching(ORGANIZATIONS.name, &Filter::new().eq("name", DEMO_ORG))
        .await?;
    tracing::debug!(removed, "Previous demo data removed");
    Ok(())
}

/// Replaces all data of the demo association with a fresh, realistic data
/// set: members and groups, donors, levy rules and twelve months of
/// levies, bookkeeping, meetings, tasks, campaigns and documents.
pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    passwords: &PasswordHasher,
    rng: &mut (impl Rng + Send),
) -> AppResult<SeedSummary> {
    let now = Utc::now();
    let created = now.to_rfc3339();
    reset(repo).await?;

    let mut user = into_fields(json!({
        "email": DEMO_EMAIL,
        "full_name": "Maria Schmidt",
        "city": "Neustadt",
        "organization": DEMO_ORG,
        "org_type": "verband",
        "role": "admin",
        "created_date": created,
    }));
    user.insert(
        PASSWORD_HASH_FIELD.into(),
        Value::String(passwords.hash(DEMO_PASSWORD).await?),
    );
    repo.insert(USERS.name, &Document::new(user)).await?;

    let organization = into_fields(json!({
        "name": DEMO_ORG,
        "display_name": DEMO_DISPLAY_NAME,
        "type": "verband",
        "city": "Neustadt",
        "state": "Nordrhein-Westfalen",
        "address": "Rathausplatz 1, 12345 Neustadt",
        "phone": "02345 / 123456",
        "email": "info@spd-neustadt.de",
        "website": "www.spd-neustadt.de",
        "founded_year": 1969,
        "bank_name": "Sparkasse Neustadt",
        "iban": "DE89 3704 0044 0532 0130 00",
        "bic": "COBADEFFXXX",
        "tax_number": "123/456/78901",
        "created_date": created,
    }));
    repo.insert(ORGANIZATIONS.name, &Document::new(organization)).await?;

    let member_items = MEMBERS
        .iter()
        .map(|m| {
            let mut item = json!({
                "first_name": m.first_name,
                "last_name": m.last_name,
                "email": m.email,
                "role": m.role,
                "fee_paid": m.fee_paid,
                "member_since": m.member_since,
                "member_number": m.member_number,
                "status": "aktiv",
                "type": "mitglied",
            });
            if let Some((mandate, income)) = m.mandate {
                item["mandate"] = json!(mandate);
                item["mandate_income"] = json!(income);
            }
            item
        })
        .collect();
    let members = insert_all(repo, CONTACTS.name, DEMO_ORG, &created, member_items).await?;

    let groups = GROUPS
        .iter()
        .map(|(name, description, color)| {
            let member_ids: Vec<String> = MEMBERS
                .iter()
                .zip(&members)
                .filter(|(m, _)| m.groups.contains(name))
                .map(|(_, doc)| doc.id.to_string())
                .collect();
            json!({ "name": name, "description": description, "color": color, "member_ids": member_ids })
        })
        .collect();
    insert_all(repo, MEMBER_GROUPS.name, DEMO_ORG, &created, groups).await?;

    let donors = insert_all(repo, CONTACTS.name, DEMO_ORG, &created, donors()).await?;
    insert_all(repo, LEVY_RULES.name, DEMO_ORG, &created, levy_rules()).await?;
    let levies = insert_all(repo, MANDATE_LEVIES.name, DEMO_ORG, &created, mandate_levies(now, rng)).await?;
    let incomes = insert_all(repo, INCOMES.name, DEMO_ORG, &created, incomes(now, rng)).await?;
    let expenses = insert_all(repo, EXPENSES.name, DEMO_ORG, &created, expenses(now)).await?;
    let meetings = insert_all(repo, MEETINGS.name, DEMO_ORG, &created, meetings(now)).await?;
    let tasks = insert_all(repo, TASKS.name, DEMO_ORG, &created, tasks(now)).await?;
    let campaigns = insert_all(repo, CAMPAIGNS.name, DEMO_ORG, &created, campaigns(now)).await?;
    let documents = insert_all(repo, DOCUMENTS.name, DEMO_ORG, &created, documents()).await?;

    let summary = SeedSummary {
        organization: DEMO_ORG.into(),
        display_name: DEMO_DISPLAY_NAME.into(),
        members_created: members.len(),
        donors_created: donors.len(),
        mandate_levies_created: levies.len(),
        incomes_created: incomes.len(),
        expenses_created: expenses.len(),
        meetings_created: meetings.len(),
        tasks_created: tasks.len(),
        campaigns_created: campaigns.len(),
        documents_created: documents.len(),
        login_email: DEMO_EMAIL.into(),
        login_password: DEMO_PASSWORD.into(),
    };
    tracing::info!(organization = DEMO_ORG, members = summary.members_created, "Full demo seeded");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn levies_follow_mandate_rates() {
        let mut rng = StdRng::seed_from_u64(7);
        let levies = mandate_levies(Utc::now(), &mut rng);
        assert_eq!(levies.len(), 4 * LEVY_MONTHS as usize);
        let mayor = levies
            .iter()
            .find(|l| l["mandate_type"] == "bürgermeister")
            .unwrap();
        assert_eq!(mayor["levy_rate"], 15.0);
        assert_eq!(mayor["final_levy"], 975.0);
        let paid_without_date = levies
            .iter()
            .any(|l| l["status"] == "bezahlt" && l["payment_date"].is_null());
        assert!(!paid_without_date);
    }

    #[test]
    fn expenses_split_vat() {
        let rent = &expenses(Utc::now())[0];
        assert_eq!(rent["net_amount"], 378.15);
        assert_eq!(rent["tax_amount"], 71.85);
    }

    #[tokio::test]
    async fn reseeds_and_reports_counts() {
        let mut repo = MockDocumentRepository::new();
        repo.expect_delete_matching().times(15).returning(|_, _| Ok(0));
        repo.expect_insert().returning(|_, _| Ok(()));
        let mut rng = StdRng::seed_from_u64(1);

        let summary = execute(&repo, &PasswordHasher::new(4), &mut rng).await.unwrap();
        assert_eq!(summary.organization, "demo-verband");
        assert_eq!(summary.members_created, MEMBERS.len());
        assert_eq!(summary.donors_created, 3);
        assert_eq!(summary.mandate_levies_created, 48);
        assert_eq!(summary.incomes_created, 29);
        assert_eq!(summary.expenses_created, 10);
        assert_eq!(summary.login_password, "demo123");
    }
}

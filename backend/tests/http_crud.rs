mod common;

use axum::http::{Method, StatusCode};
use common::{app, get, post, put, register, send};
use serde_json::json;

#[tokio::test]
async fn health_reports_healthy() {
    let app = app().await;
    let (status, body) = get(&app, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn contact_crud_lifecycle() {
    let app = app().await;

    let (status, created) = post(
        &app,
        "/api/contacts",
        None,
        json!({
            "id": "client-chosen",
            "first_name": "Anna",
            "last_name": "Schmidt",
            "organization": "demo-org"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert_ne!(id, "client-chosen");
    assert!(created["created_date"].is_string());
    assert!(created["updated_date"].is_string());

    let (status, fetched) = get(&app, &format!("/api/contacts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["first_name"], "Anna");

    let (status, updated) = put(
        &app,
        &format!("/api/contacts/{id}"),
        None,
        json!({ "phone": "0151 1234567", "created_date": "1999-01-01T00:00:00Z" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["phone"], "0151 1234567");
    assert_eq!(updated["last_name"], "Schmidt");
    assert_eq!(updated["created_date"], created["created_date"]);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/contacts/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = get(&app, &format!("/api/contacts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Contact not found");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/contacts/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_sorts_and_limits() {
    let app = app().await;
    for (name, org) in [("Zimmer", "demo-org"), ("Albers", "demo-org"), ("Meier", "demo-org"), ("Other", "other-org")] {
        let (status, _) = post(
            &app,
            "/api/contacts",
            None,
            json!({ "last_name": name, "organization": org }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get(&app, "/api/contacts?organization=demo-org&sort=last_name", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["last_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Albers", "Meier", "Zimmer"]);

    let (_, body) = get(&app, "/api/contacts?organization=demo-org&sort=-last_name&limit=1", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["last_name"], "Zimmer");

    let (_, body) = get(&app, "/api/contacts?limit=0", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_by_id_and_name() {
    let app = app().await;
    let (_, org) = post(&app, "/api/organizations", None, json!({ "name": "fraktion-neustadt" })).await;
    post(&app, "/api/organizations", None, json!({ "name": "ov-altstadt" })).await;

    let (_, body) = get(&app, "/api/organizations?name=fraktion-neustadt", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let id = org["id"].as_str().unwrap();
    let (_, body) = get(&app, &format!("/api/organizations?id={id}"), None).await;
    assert_eq!(body[0]["name"], "fraktion-neustadt");

    let (status, body) = get(&app, "/api/organizations?id=not-an-id", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_collection_and_bad_ids_are_not_found() {
    let app = app().await;
    let (status, _) = get(&app, "/api/secrets", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/api/motions/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Motion not found");

    let (status, _) = put(&app, "/api/motions/12345", None, json!({ "title": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let app = app().await;
    let (status, body) = post(&app, "/api/tasks", None, json!(["not", "an", "object"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn viewers_are_read_only() {
    let app = app().await;
    let (viewer, _) = register(&app, "leser@example.org", "Fraktion Neustadt", "viewer").await;
    let (member, _) = register(&app, "mitglied@example.org", "Fraktion Neustadt", "member").await;

    let (status, body) = post(&app, "/api/motions", Some(&viewer), json!({ "title": "Radweg" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["detail"], "Nur Lesezugriff");

    let (status, motion) = post(&app, "/api/motions", Some(&member), json!({ "title": "Radweg" })).await;
    assert_eq!(status, StatusCode::OK);
    let id = motion["id"].as_str().unwrap();

    let (status, _) = put(&app, &format!("/api/motions/{id}"), Some(&viewer), json!({ "status": "x" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, Method::DELETE, &format!("/api/motions/{id}"), Some(&viewer), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get(&app, &format!("/api/motions/{id}"), Some(&viewer)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn users_are_not_a_generic_collection() {
    let app = app().await;
    register(&app, "anna@example.org", "Fraktion Neustadt", "admin").await;

    let (status, _) = post(&app, "/api/users", None, json!({ "email": "x@y.de" })).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, body) = get(&app, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("password_hash").is_none());
    assert_eq!(users[0]["email"], "anna@example.org");
}

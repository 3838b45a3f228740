use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Contact};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn delete(uri: &str) -> Request<String> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

const ADA: &str = r#"{"name":"Ada","email":"ada@example.com","phone":"555-0100"}"#;

// --- list ---

#[tokio::test]
async fn list_contacts_empty() {
    let resp = app().oneshot(get("/contacts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    assert!(contacts.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_contact_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/contacts", ADA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let contact: Contact = body_json(resp).await;
    assert_eq!(contact.name, "Ada");
    assert_eq!(contact.email, "ada@example.com");
    assert_eq!(contact.phone, "555-0100");
    assert!(!contact.id.is_empty());
}

#[tokio::test]
async fn create_contact_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/contacts", r#"{"name":"Ada"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- delete ---

#[tokio::test]
async fn delete_contact_not_found() {
    let resp = app().oneshot(delete("/contacts/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn create_list_delete_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        let body = format!(r#"{{"name":"{name}","email":"","phone":""}}"#);
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/contacts", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Contact = body_json(resp).await;
        ids.push(created.id);
    }

    // list keeps insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/contacts"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);

    // delete echoes the removed contact
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete(&format!("/contacts/{}", ids[1])))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: Contact = body_json(resp).await;
    assert_eq!(removed.id, ids[1]);
    assert_eq!(removed.name, "Second");

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete(&format!("/contacts/{}", ids[1])))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // remaining contacts keep their order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/contacts"))
        .await
        .unwrap();
    let contacts: Vec<Contact> = body_json(resp).await;
    let remaining: Vec<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(remaining, [ids[0].as_str(), ids[2].as_str()]);
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Contacts in insertion order.
pub type Db = Arc<RwLock<Vec<Contact>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/{id}", delete(delete_contact))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_contacts(State(db): State<Db>) -> Json<Vec<Contact>> {
    Json(db.read().await.clone())
}

async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<NewContact>,
) -> (StatusCode, Json<Contact>) {
    let contact = Contact {
        id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        email: input.email,
        phone: input.phone,
    };
    tracing::info!(id = %contact.id, name = %contact.name, "contact created");
    db.write().await.push(contact.clone());
    (StatusCode::CREATED, Json(contact))
}

async fn delete_contact(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, StatusCode> {
    let mut contacts = db.write().await;
    let index = contacts
        .iter()
        .position(|c| c.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let removed = contacts.remove(index);
    tracing::info!(id = %removed.id, "contact deleted");
    Ok(Json(removed))
}

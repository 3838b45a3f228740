//! Stateless HTTP request builder and response parser for the contacts API.
//!
//! # Design
//! `ContactClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Contact, ContactId, NewContact};

/// Base URL of the hosted contacts service.
pub const DEFAULT_BASE_URL: &str = "https://contact-bfw1.onrender.com";

/// Synchronous, stateless client for the contacts API.
#[derive(Debug, Clone)]
pub struct ContactClient {
    base_url: String,
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_contacts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/contacts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_contact(&self, input: &NewContact) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/contacts", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_contact(&self, id: &ContactId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/contacts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Contacts in the order the server sent them.
    pub fn parse_list_contacts(&self, response: HttpResponse) -> Result<Vec<Contact>, ApiError> {
        parse_json(response)
    }

    /// The created contact, carrying its server-assigned identifier.
    pub fn parse_create_contact(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        parse_json(response)
    }

    /// The identifier of the contact the server reports as deleted.
    pub fn parse_delete_contact(&self, response: HttpResponse) -> Result<ContactId, ApiError> {
        let deleted: Contact = parse_json(response)?;
        Ok(deleted.id)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

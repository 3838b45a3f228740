//! View state of the contact book and the flows that mutate it.
//!
//! # Design
//! `ContactBook` is the single owner of the contact list, the add-contact
//! draft, the search query, the current page and the favorites set. Local
//! edits are plain assignments. Remote operations are split in two: starting
//! one returns a `Call` (a `Ticket` plus the `HttpRequest` to execute), and
//! `complete` applies the outcome once the host has it.
//!
//! Every in-flight call is tracked by ticket. `cancel` and `unmount` forget
//! tickets, so a response that arrives for a torn-down book is dropped
//! instead of being written into fresh state.
//!
//! Failures follow a log-and-ignore policy: a failed call is reported at
//! `warn` and leaves the list and the draft exactly as they were.

use std::collections::HashMap;

use crate::client::ContactClient;
use crate::error::ApiError;
use crate::favorites::Favorites;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Contact, ContactId, Draft};
use crate::view::ContactPage;

/// Identifies one in-flight remote call. Never reused within a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A remote call the host must execute and hand back to `ContactBook::complete`.
#[derive(Debug, Clone)]
pub struct Call {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// What `ContactBook::complete` did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The list was replaced with this many contacts.
    Loaded(usize),
    /// The created contact was appended and the draft cleared.
    Added(ContactId),
    /// The contact the server reported as deleted was removed.
    Removed(ContactId),
    /// The call failed; it was logged and nothing changed.
    Failed,
    /// The ticket was cancelled or belongs to an unmounted book.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Load,
    Create,
    Delete(ContactId),
}

#[derive(Debug, Clone)]
pub struct ContactBook {
    client: ContactClient,
    contacts: Vec<Contact>,
    draft: Draft,
    query: String,
    page: usize,
    favorites: Favorites,
    pending: HashMap<Ticket, Pending>,
    next_ticket: u64,
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new(ContactClient::default())
    }
}

impl ContactBook {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client,
            contacts: Vec::new(),
            draft: Draft::default(),
            query: String::new(),
            page: 1,
            favorites: Favorites::new(),
            pending: HashMap::new(),
            next_ticket: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Start a lifetime and return the initial load.
    pub fn mount(&mut self) -> Call {
        tracing::debug!(base_url = self.client.base_url(), "contact book mounted");
        self.refresh()
    }

    /// Drop all state and every in-flight call. Ticket numbering continues so
    /// late responses from before the unmount can never match a new call.
    pub fn unmount(&mut self) {
        tracing::debug!(
            dropped_calls = self.pending.len(),
            contacts = self.contacts.len(),
            "contact book unmounted"
        );
        let next_ticket = self.next_ticket;
        *self = Self {
            next_ticket,
            ..Self::new(self.client.clone())
        };
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &ContactId) -> bool {
        self.favorites.contains(id)
    }

    pub fn pending_calls(&self) -> usize {
        self.pending.len()
    }

    pub fn view(&self) -> ContactPage<'_> {
        ContactPage::build(&self.contacts, &self.query, self.page, &self.favorites)
    }

    // -----------------------------------------------------------------------
    // Local edits
    // -----------------------------------------------------------------------

    /// Replace the search query. The current page is left alone, so a
    /// narrower query can leave the visible slice empty.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::trace!(query = %self.query, page = self.page, "search query updated");
    }

    /// Jump to a 1-indexed page. Not clamped to the filtered range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        tracing::trace!(page, "page selected");
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.draft.phone = phone.into();
    }

    /// Returns whether `id` is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, id: &ContactId) -> bool {
        let now = self.favorites.toggle(id);
        tracing::debug!(id = %id, favorite = now, "favorite toggled");
        now
    }

    // -----------------------------------------------------------------------
    // Remote calls
    // -----------------------------------------------------------------------

    /// Fetch the whole list; a successful load replaces local contacts.
    pub fn refresh(&mut self) -> Call {
        let request = self.client.build_list_contacts();
        self.issue(Pending::Load, request)
    }

    /// Submit the current draft as a new contact. No field is validated.
    ///
    /// Returns `None` if the request could not be built; the failure is
    /// logged and the draft is kept.
    pub fn submit_draft(&mut self) -> Option<Call> {
        let input = self.draft.to_new_contact();
        match self.client.build_create_contact(&input) {
            Ok(request) => Some(self.issue(Pending::Create, request)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to build create request");
                None
            }
        }
    }

    pub fn delete(&mut self, id: &ContactId) -> Call {
        let request = self.client.build_delete_contact(id);
        self.issue(Pending::Delete(id.clone()), request)
    }

    /// Forget an in-flight call; its eventual outcome will be discarded.
    /// Returns `false` if the ticket was not pending.
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        self.pending.remove(&ticket).is_some()
    }

    /// Apply the outcome of a call issued by this book.
    ///
    /// Add and delete outcomes are applied to the list as it is now, so
    /// responses arriving out of order never undo each other.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<HttpResponse, ApiError>) -> Applied {
        let Some(pending) = self.pending.remove(&ticket) else {
            tracing::debug!(ticket = ticket.0, "discarding outcome of cancelled or stale call");
            return Applied::Discarded;
        };

        match pending {
            Pending::Load => match outcome.and_then(|r| self.client.parse_list_contacts(r)) {
                Ok(contacts) => {
                    tracing::debug!(count = contacts.len(), "contacts loaded");
                    self.contacts = contacts;
                    Applied::Loaded(self.contacts.len())
                }
                Err(e) => failed("list contacts", None, &e),
            },
            Pending::Create => match outcome.and_then(|r| self.client.parse_create_contact(r)) {
                Ok(contact) => {
                    let id = contact.id.clone();
                    tracing::debug!(id = %id, "contact added");
                    self.contacts.push(contact);
                    self.draft = Draft::default();
                    Applied::Added(id)
                }
                Err(e) => failed("create contact", None, &e),
            },
            Pending::Delete(requested) => {
                match outcome.and_then(|r| self.client.parse_delete_contact(r)) {
                    Ok(id) => {
                        if id != requested {
                            tracing::debug!(requested = %requested, reported = %id, "server reported a different deleted id");
                        }
                        self.contacts.retain(|c| c.id != id);
                        tracing::debug!(id = %id, "contact removed");
                        Applied::Removed(id)
                    }
                    Err(e) => failed("delete contact", Some(&requested), &e),
                }
            }
        }
    }

    /// Execute `call` on `transport` and apply the outcome.
    pub fn run<T: Transport + ?Sized>(&mut self, transport: &T, call: Call) -> Applied {
        let outcome = transport.execute(call.request);
        self.complete(call.ticket, outcome)
    }

    fn issue(&mut self, pending: Pending, request: HttpRequest) -> Call {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        tracing::debug!(ticket = ticket.0, kind = ?pending, path = %request.path, "remote call issued");
        self.pending.insert(ticket, pending);
        Call { ticket, request }
    }
}

fn failed(operation: &str, id: Option<&ContactId>, error: &ApiError) -> Applied {
    match id {
        Some(id) => tracing::warn!(operation, id = %id, error = %error, "remote call failed"),
        None => tracing::warn!(operation, error = %error, "remote call failed"),
    }
    Applied::Failed
}

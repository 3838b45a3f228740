//! Filtered, paginated projection of the contact list.
//!
//! # Design
//! Everything here is a pure derivation from (contacts, query, page,
//! favorites); nothing is cached between renders. Pages are 1-indexed and
//! never clamped: a page outside the filtered range simply has no rows.

use std::fmt;

use crate::favorites::Favorites;
use crate::types::Contact;

/// Contacts shown per page.
pub const PAGE_SIZE: usize = 5;

pub const FAVORITE_GLYPH: char = '\u{2605}';
pub const NOT_FAVORITE_GLYPH: char = '\u{2606}';

/// Contacts whose name contains `query`, ignoring case. Email and phone are
/// not searched. An empty query matches everything.
pub fn filter_by_name<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&query))
        .collect()
}

/// Number of page buttons for `filtered_len` results.
pub fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// The slice of `items` visible on 1-indexed `page`.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(PAGE_SIZE)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// One visible contact line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub contact: &'a Contact,
    pub favorite: bool,
}

impl Row<'_> {
    pub fn glyph(&self) -> char {
        if self.favorite {
            FAVORITE_GLYPH
        } else {
            NOT_FAVORITE_GLYPH
        }
    }
}

/// One pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// What a renderer draws for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage<'a> {
    pub rows: Vec<Row<'a>>,
    pub buttons: Vec<PageButton>,
    pub total_matches: usize,
}

impl<'a> ContactPage<'a> {
    pub fn build(contacts: &'a [Contact], query: &str, page: usize, favorites: &Favorites) -> Self {
        let filtered = filter_by_name(contacts, query);
        let rows = page_slice(&filtered, page)
            .iter()
            .map(|&contact| Row {
                contact,
                favorite: favorites.contains(&contact.id),
            })
            .collect();
        let buttons = (1..=page_count(filtered.len()))
            .map(|number| PageButton {
                number,
                active: number == page,
            })
            .collect();

        Self {
            rows,
            buttons,
            total_matches: filtered.len(),
        }
    }
}

impl fmt::Display for ContactPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let c = row.contact;
            writeln!(f, "{} {}, {}, {}", row.glyph(), c.name, c.email, c.phone)?;
        }
        let buttons: Vec<String> = self
            .buttons
            .iter()
            .map(|b| {
                if b.active {
                    format!("[{}]", b.number)
                } else {
                    b.number.to_string()
                }
            })
            .collect();
        write!(f, "{}", buttons.join(" "))
    }
}

use std::fmt::Write;

use crate::models::{Contact, ContactPayload};

pub const LOAD_FAILED: &str = "Failed to load contacts";
pub const ADD_FAILED: &str = "Failed to add contact";
pub const DELETE_FAILED: &str = "Failed to delete contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
}

/// Fields of the "Add Contact" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactForm {
    /// The request body for this form. Email is sent as typed, empty included.
    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload::new(&self.name, &self.phone, Some(self.email.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchStarted,
    FetchSucceeded(Vec<Contact>),
    FetchFailed,
    FormEdited(FormField, String),
    SubmitStarted,
    Created(Contact),
    CreateFailed,
    Deleted(i32),
    DeleteFailed,
}

/// Everything the contact list view needs. Mutations patch `items` locally
/// instead of re-fetching the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientState {
    pub items: Vec<Contact>,
    pub loading: bool,
    pub error: Option<&'static str>,
    pub form: ContactForm,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            form: ContactForm::default(),
        }
    }
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::FetchStarted => self.loading = true,
            Event::FetchSucceeded(items) => {
                self.items = items;
                self.loading = false;
            }
            Event::FetchFailed => {
                self.error = Some(LOAD_FAILED);
                self.loading = false;
            }
            Event::FormEdited(field, value) => match field {
                FormField::Name => self.form.name = value,
                FormField::Phone => self.form.phone = value,
                FormField::Email => self.form.email = value,
            },
            Event::SubmitStarted => self.error = None,
            Event::Created(contact) => {
                self.items.push(contact);
                self.form = ContactForm::default();
            }
            Event::CreateFailed => self.error = Some(ADD_FAILED),
            Event::Deleted(id) => self.items.retain(|c| c.id != id),
            Event::DeleteFailed => self.error = Some(DELETE_FAILED),
        }
    }

    #[cfg(test)]
    fn reduce(mut self, event: Event) -> Self {
        self.apply(event);
        self
    }

    /// Plain text view of the list.
    pub fn render(&self) -> String {
        let mut out = String::from("Phonebook Contacts\n");
        if let Some(error) = self.error {
            let _ = writeln!(out, "! {error}");
        }
        if self.loading {
            out.push_str("Loading...\n");
            return out;
        }
        for c in &self.items {
            let _ = write!(out, "[{}] {} - {}", c.id, c.name, c.phone);
            match c.email.as_deref() {
                Some(email) if !email.is_empty() => {
                    let _ = writeln!(out, " ({email})");
                }
                _ => out.push('\n'),
            }
        }
        out
    }
}

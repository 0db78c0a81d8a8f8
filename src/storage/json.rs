use crate::core::{Ticket, now};
use crate::error::{Result, TicketError};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Ticket store backed by a single JSON document
///
/// The whole collection lives in memory. Every mutation rewrites the entire
/// document; there is no locking, so only one process may use a file at a
/// time. If a write fails the in-memory change is kept, and memory and disk
/// disagree until the next successful write.
#[derive(Debug)]
pub struct JsonTicketStore {
    path: PathBuf,
    tickets: Vec<Ticket>,
}

impl JsonTicketStore {
    /// Opens the store, reading the document at `path`
    ///
    /// A missing document is created empty. Unreadable or malformed
    /// documents are logged and treated as empty; opening never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tickets = Self::load_all(&path);
        Self { path, tickets }
    }

    /// Location of the JSON document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Copy of the whole collection in stored order
    #[must_use]
    pub fn get_all_tickets(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    /// Copy of the ticket with the given id
    #[must_use]
    pub fn find_ticket(&self, id: &str) -> Option<Ticket> {
        self.tickets
            .iter()
            .find(|t| t.id.as_deref() == Some(id))
            .cloned()
    }

    /// Validates, assigns an id if needed, appends, and persists
    ///
    /// Returns the ticket as stored.
    pub fn save_ticket(&mut self, mut ticket: Ticket) -> Result<Ticket> {
        validate(&ticket)?;

        match ticket.id.as_deref() {
            Some(id) if !id.is_empty() => {
                if self.find_ticket(id).is_some() {
                    return Err(TicketError::DuplicateId { id: id.to_string() });
                }
            },
            _ => {
                let id = self.next_id();
                debug!(id = %id, "Assigned ticket id");
                ticket.id = Some(id);
            },
        }

        if ticket.created_at.is_none() {
            ticket.created_at = Some(now());
        }
        prepare_comments(&mut ticket);

        self.tickets.push(ticket.clone());
        self.persist()?;

        info!(id = ticket.id_str(), title = %ticket.title, "Created ticket");
        Ok(ticket)
    }

    /// Replaces the stored ticket with the same id, keeping its position
    ///
    /// The stored creation time is kept, and `updated_at` is set to now.
    pub fn update_ticket(&mut self, mut ticket: Ticket) -> Result<Ticket> {
        validate(&ticket)?;
        let id = required_id(&ticket)?.to_string();

        let Some(slot) = self
            .tickets
            .iter_mut()
            .find(|t| t.id.as_deref() == Some(id.as_str()))
        else {
            warn!(id = %id, "Update of unknown ticket");
            return Err(TicketError::TicketNotFound { id });
        };

        ticket.created_at = slot.created_at.or(ticket.created_at);
        // never move backwards, even if the wall clock does
        let floor = slot.updated_at.max(ticket.created_at);
        let stamp = now();
        ticket.updated_at = Some(floor.map_or(stamp, |floor| floor.max(stamp)));
        prepare_comments(&mut ticket);

        slot.clone_from(&ticket);
        self.persist()?;

        info!(id = %id, "Updated ticket");
        Ok(ticket)
    }

    /// Removes the stored ticket with the same id as `ticket`
    pub fn delete_ticket(&mut self, ticket: &Ticket) -> Result<()> {
        let id = required_id(ticket)?;

        let Some(index) = self
            .tickets
            .iter()
            .position(|t| t.id.as_deref() == Some(id))
        else {
            warn!(id = %id, "Delete of unknown ticket");
            return Err(TicketError::TicketNotFound { id: id.to_string() });
        };

        self.tickets.remove(index);
        self.persist()?;

        info!(id = %id, "Deleted ticket");
        Ok(())
    }

    /// One more than the largest numeric id; non-numeric ids count as 0
    fn next_id(&self) -> String {
        let max = self.tickets.iter().map(Ticket::numeric_id).max().unwrap_or(0);
        max.saturating_add(1).to_string()
    }

    fn load_all(path: &Path) -> Vec<Ticket> {
        match Self::read_document(path) {
            Ok(tickets) => {
                info!(path = %path.display(), count = tickets.len(), "Loaded tickets");
                tickets
            },
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Error reading tickets from file, starting with an empty collection"
                );
                Vec::new()
            },
        }
    }

    fn read_document(path: &Path) -> Result<Vec<Ticket>> {
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            File::create(path)?;
            debug!(path = %path.display(), "Created empty ticket file");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Rewrites the whole document
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tickets)?;

        write_replacing(&self.path, json.as_bytes()).map_err(|source| {
            error!(path = %self.path.display(), error = %source, "Error saving tickets");
            TicketError::Persist {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(path = %self.path.display(), count = self.tickets.len(), "Saved tickets");
        Ok(())
    }
}

/// Checks the fields every stored ticket must have
pub fn validate(ticket: &Ticket) -> Result<()> {
    if ticket.title.trim().is_empty() {
        return Err(TicketError::MissingTitle);
    }
    if ticket.status.is_none() {
        return Err(TicketError::MissingStatus);
    }
    if ticket.priority.is_none() {
        return Err(TicketError::MissingPriority);
    }
    Ok(())
}

fn required_id(ticket: &Ticket) -> Result<&str> {
    ticket
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(TicketError::MissingId)
}

/// Binds comments to the ticket and numbers the ones without an id
fn prepare_comments(ticket: &mut Ticket) {
    let mut next = ticket
        .comments
        .iter()
        .map(crate::core::Comment::numeric_id)
        .max()
        .unwrap_or(0);

    for comment in &mut ticket.comments {
        if comment.ticket_id.is_none() {
            comment.ticket_id.clone_from(&ticket.id);
        }
        if comment.id.as_deref().is_none_or(str::is_empty) {
            next = next.saturating_add(1);
            comment.id = Some(next.to_string());
        }
    }
}

/// Writes `bytes` to a sibling temporary file, then renames it over `path`
fn write_replacing(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    let tmp = path.with_file_name(name);

    let mut file = File::create(&tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp, path)
}

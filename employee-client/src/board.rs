//! Employee board controller
//!
//! UI-agnostic state behind the employee table: the fetched list, the search
//! term, the edit form and its modal, paging and user-visible notices. The
//! terminal front-end in [`crate::tui`] only renders this and forwards keys.
//!
//! Every successful mutation is followed by a full refetch of the list, so
//! the positional `employeeId` values always match the server's numbering.

use chrono::{DateTime, Utc};
use shared::models::{BloodGroup, EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use shared::util::{DateParseError, parse_join_date};

use crate::filter;
use crate::{EmailAvailability, EmployeeGateway};

/// Rows per table page
pub const PAGE_SIZE: usize = 4;

/// Question asked before a delete
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Notice raised when a create is refused because the email is taken
pub const EMAIL_TAKEN_NOTICE: &str = "Error adding employee: Email already exists";

/// User-visible message from the last operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Error(s) => s,
        }
    }
}

/// Yes/no confirmation, answered by whatever front-end is driving the board
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Edit form contents
///
/// `id` is set when editing an existing record; `date_of_join` is kept as
/// typed and parsed on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_join: String,
    pub blood_group: Option<BloodGroup>,
}

impl EmployeeDraft {
    pub fn from_record(record: &EmployeeResponse) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            email: record.email.clone(),
            address: record.address.clone(),
            date_of_join: record.date_of_join.clone().unwrap_or_default(),
            blood_group: record.blood_group,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    fn join_date(&self) -> Result<Option<DateTime<Utc>>, DateParseError> {
        let raw = self.date_of_join.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        parse_join_date(raw).map(Some)
    }

    pub fn to_create(&self) -> Result<EmployeeCreate, DateParseError> {
        Ok(EmployeeCreate {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            date_of_join: self.join_date()?,
            blood_group: self.blood_group,
        })
    }

    /// Whole form as a merge patch; an empty date or blood group leaves the
    /// stored value untouched
    pub fn to_update(&self) -> Result<EmployeeUpdate, DateParseError> {
        Ok(EmployeeUpdate {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            address: Some(self.address.clone()),
            date_of_join: self.join_date()?,
            blood_group: self.blood_group,
        })
    }
}

/// Result of [`EmployeeBoard::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
    /// 409 from check-email, create or update
    EmailTaken,
    /// Form could not be turned into a request; the modal stays open
    Invalid(String),
    /// Any other failure, logged
    Failed,
}

/// Result of [`EmployeeBoard::delete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed,
}

pub struct EmployeeBoard<G> {
    gateway: G,
    employees: Vec<EmployeeResponse>,
    search: String,
    draft: EmployeeDraft,
    modal_open: bool,
    page: usize,
    notice: Option<Notice>,
}

impl<G: EmployeeGateway> EmployeeBoard<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            employees: Vec::new(),
            search: String::new(),
            draft: EmployeeDraft::default(),
            modal_open: false,
            page: 0,
            notice: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Initial load
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Refetch the full list; on failure the previous list is kept
    pub async fn refresh(&mut self) {
        match self.gateway.list().await {
            Ok(list) => {
                self.employees = list;
                self.clamp_page();
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching employees");
            }
        }
    }

    /// Everything fetched, unfiltered
    pub fn employees(&self) -> &[EmployeeResponse] {
        &self.employees
    }

    // ========== Search ==========

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Update the search term; the filtered view is recomputed on every call
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 0;
    }

    pub fn filtered(&self) -> Vec<&EmployeeResponse> {
        filter::filter(&self.employees, &self.search)
    }

    // ========== Paging ==========

    pub fn page(&self) -> usize {
        self.page
    }

    /// Always at least one page, even when the view is empty
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Rows of the current page of the filtered view
    pub fn page_rows(&self) -> Vec<&EmployeeResponse> {
        self.filtered()
            .into_iter()
            .skip(self.page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    fn clamp_page(&mut self) {
        self.set_page(self.page);
    }

    // ========== Modal ==========

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EmployeeDraft {
        &mut self.draft
    }

    /// Blank form
    pub fn open_add(&mut self) {
        self.draft = EmployeeDraft::default();
        self.modal_open = true;
    }

    /// Form pre-filled from `record`
    pub fn open_edit(&mut self, record: &EmployeeResponse) {
        self.draft = EmployeeDraft::from_record(record);
        self.modal_open = true;
    }

    pub fn cancel(&mut self) {
        self.close_modal();
    }

    fn close_modal(&mut self) {
        self.modal_open = false;
        self.draft = EmployeeDraft::default();
    }

    // ========== Notices ==========

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // ========== Mutations ==========

    /// Submit the form
    ///
    /// A draft with an id is sent as an update. A new draft is first checked
    /// with check-email and only created when the address is free. The modal
    /// closes and the form resets afterwards whether or not the call
    /// succeeded; only a form that cannot be encoded keeps it open.
    pub async fn save(&mut self) -> SaveOutcome {
        let outcome = match self.draft.id.clone() {
            Some(id) => self.save_update(&id).await,
            None => self.save_create().await,
        };

        if let SaveOutcome::Invalid(msg) = &outcome {
            self.notice = Some(Notice::Error(msg.clone()));
        } else {
            self.close_modal();
        }
        outcome
    }

    async fn save_update(&mut self, id: &str) -> SaveOutcome {
        let patch = match self.draft.to_update() {
            Ok(p) => p,
            Err(e) => return SaveOutcome::Invalid(e.to_string()),
        };

        match self.gateway.update(id, &patch).await {
            Ok(_) => {
                self.refresh().await;
                self.notice = Some(Notice::Info("Employee updated".to_string()));
                SaveOutcome::Updated
            }
            Err(e) if e.is_conflict() => {
                self.notice = Some(Notice::Error(
                    "Error updating employee: Email already exists".to_string(),
                ));
                SaveOutcome::EmailTaken
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Error updating employee");
                SaveOutcome::Failed
            }
        }
    }

    async fn save_create(&mut self) -> SaveOutcome {
        let data = match self.draft.to_create() {
            Ok(d) => d,
            Err(e) => return SaveOutcome::Invalid(e.to_string()),
        };

        let created = match self.gateway.check_email(&data.email).await {
            Ok(EmailAvailability::Available) => self.gateway.create(&data).await,
            Ok(EmailAvailability::Taken) => return self.email_taken(),
            Err(e) => Err(e),
        };

        match created {
            Ok(_) => {
                self.refresh().await;
                self.notice = Some(Notice::Info("Employee added".to_string()));
                SaveOutcome::Created
            }
            // lost the race against a concurrent create; the unique index caught it
            Err(e) if e.is_conflict() => self.email_taken(),
            Err(e) => {
                tracing::error!(error = %e, "Error adding employee");
                SaveOutcome::Failed
            }
        }
    }

    fn email_taken(&mut self) -> SaveOutcome {
        self.notice = Some(Notice::Error(EMAIL_TAKEN_NOTICE.to_string()));
        SaveOutcome::EmailTaken
    }

    /// Delete after confirmation
    pub async fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.refresh().await;
                self.notice = Some(Notice::Info("Employee deleted".to_string()));
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Error deleting employee");
                DeleteOutcome::Failed
            }
        }
    }
}

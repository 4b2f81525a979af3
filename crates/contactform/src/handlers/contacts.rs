//! Contact CRUD and projection handlers.
//!
//! Every handler is a single delegation to the contact repository. The two
//! projection endpoints additionally run the pure field extraction from
//! `contactform_core::contact`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use contactform_core::contact::{project_emails, project_phones, Contact, NewContact};

use crate::{handlers::AppError, state::AppState};

/// Store a new submission (POST /contact).
///
/// Returns 201 with the stored record, id assigned by the store.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<NewContact>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let contact = state.contact_repo.create_contact(&payload).await?;

    tracing::info!(contact_id = contact.id, "Stored contact submission");

    Ok((StatusCode::CREATED, Json(contact)))
}

/// List all stored contacts in storage order (GET /contact).
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state.contact_repo.list_contacts().await?;
    Ok(Json(contacts))
}

/// Get a single contact by ID (GET /contact/{id}).
///
/// A missing id is not an error here: the response is 200 with a `null`
/// body. Existing clients rely on that shape.
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Contact>>, AppError> {
    let contact = state.contact_repo.get_contact(id).await?;
    Ok(Json(contact))
}

/// Delete a contact by ID (DELETE /contact/{id}).
///
/// Responds 204 whether or not the id existed.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.contact_repo.delete_contact(id).await?;

    tracing::info!(contact_id = id, "Deleted contact");

    Ok(StatusCode::NO_CONTENT)
}

/// List the email of every stored contact (GET /contact/emails).
pub async fn list_emails(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let contacts = state.contact_repo.list_contacts().await?;
    Ok(Json(project_emails(&contacts)))
}

/// List the phone of every stored contact (GET /contact/phones).
pub async fn list_phones(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let contacts = state.contact_repo.list_contacts().await?;
    Ok(Json(project_phones(&contacts)))
}

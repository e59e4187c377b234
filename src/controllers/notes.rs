//! Notes REST API — CRUD endpoints over the in-memory store.
//!
//! Every response uses the `{status, message?, data?}` envelope. A missing
//! id maps to 404, an unconfirmed append to 500, and a payload without
//! title/body to 400.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::AppState;

/// Client-supplied note fields for create and update.
#[derive(Debug, Deserialize)]
struct NotePayload {
    title: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    body: Option<String>,
}

impl NotePayload {
    /// Require title and body; tags may be omitted.
    fn validate(&self) -> Result<(&str, &str), HttpResponse> {
        match (self.title.as_deref(), self.body.as_deref()) {
            (Some(title), Some(body)) => Ok((title, body)),
            _ => Err(HttpResponse::BadRequest().json(serde_json::json!({
                "status": "fail",
                "message": "title and body are required"
            }))),
        }
    }
}

/// Add a new note
async fn add_note(data: web::Data<AppState>, payload: web::Json<NotePayload>) -> impl Responder {
    let (title, body) = match payload.validate() {
        Ok(fields) => fields,
        Err(resp) => return resp,
    };

    match data.store.add(title, &payload.tags, body) {
        Ok(note_id) => HttpResponse::Created().json(serde_json::json!({
            "status": "success",
            "message": "Note added successfully",
            "data": { "noteId": note_id }
        })),
        Err(e) => {
            log::error!("Failed to add note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "fail",
                "message": "Note could not be added"
            }))
        }
    }
}

/// List all notes
async fn get_all_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "data": { "notes": data.store.get_all() }
    }))
}

/// Get a single note by id
async fn get_note_by_id(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match data.store.get_by_id(&id) {
        Ok(note) => HttpResponse::Ok().json(serde_json::json!({
            "status": "success",
            "data": { "note": note }
        })),
        Err(_) => HttpResponse::NotFound().json(serde_json::json!({
            "status": "fail",
            "message": "Note not found"
        })),
    }
}

/// Replace a note's title, tags and body
async fn edit_note_by_id(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<NotePayload>,
) -> impl Responder {
    let id = path.into_inner();

    let (title, body) = match payload.validate() {
        Ok(fields) => fields,
        Err(resp) => return resp,
    };

    match data.store.edit_by_id(&id, title, &payload.tags, body) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "success",
            "message": "Note updated successfully"
        })),
        Err(_) => HttpResponse::NotFound().json(serde_json::json!({
            "status": "fail",
            "message": "Failed to update note. Id not found"
        })),
    }
}

/// Delete a note by id
async fn delete_note_by_id(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match data.store.delete_by_id(&id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "success",
            "message": "Note deleted successfully"
        })),
        Err(_) => HttpResponse::NotFound().json(serde_json::json!({
            "status": "fail",
            "message": "Failed to delete note. Id not found"
        })),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .route("", web::post().to(add_note))
            .route("", web::get().to(get_all_notes))
            .route("/{id}", web::get().to(get_note_by_id))
            .route("/{id}", web::put().to(edit_note_by_id))
            .route("/{id}", web::delete().to(delete_note_by_id)),
    );
}

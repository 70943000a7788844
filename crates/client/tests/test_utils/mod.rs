use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use interviewdesk_client::{HttpSchedulerApi, config::ClientConfig};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A request as the fake backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub uri: String,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    fn record(&self, method: &'static str, uri: &Uri, body: Option<Value>) {
        self.requests.lock().unwrap().push(Recorded {
            method,
            uri: uri.to_string(),
            body,
        });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn interviewer_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "maxInterviewsPerWeek": 5,
        "createdAt": "2024-04-01T08:00:00",
        "updatedAt": "2024-04-01T08:00:00"
    })
}

pub fn slot_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "interviewerName": "Ada",
        "interviewerEmail": "ada@example.com",
        "startTime": "2024-05-06T09:00:00",
        "endTime": "2024-05-06T10:00:00",
        "status": status,
        "candidateName": if status == "BOOKED" { json!("Charles") } else { Value::Null },
        "candidateEmail": if status == "BOOKED" { json!("charles@example.com") } else { Value::Null },
        "bookedAt": null
    })
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "code": "RESOURCE_NOT_FOUND",
            "message": message,
            "timestamp": "2024-05-01T10:00:00"
        })),
    )
        .into_response()
}

async fn list_interviewers(State(fake): State<FakeBackend>, uri: Uri) -> Json<Value> {
    fake.record("GET", &uri, None);
    Json(json!([interviewer_json(1, "Ada"), interviewer_json(2, "Alan")]))
}

async fn create_interviewer(
    State(fake): State<FakeBackend>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    fake.record("POST", &uri, Some(body.clone()));
    let mut created = body;
    created["id"] = json!(10);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_interviewer(State(fake): State<FakeBackend>, uri: Uri, Path(id): Path<i64>) -> Response {
    fake.record("GET", &uri, None);
    if id == 1 {
        Json(interviewer_json(1, "Ada")).into_response()
    } else {
        not_found(format!("Interviewer not found with id: {}", id))
    }
}

async fn update_interviewer(
    State(fake): State<FakeBackend>,
    uri: Uri,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    fake.record("PUT", &uri, Some(body.clone()));
    let mut updated = body;
    updated["id"] = json!(id);
    Json(updated)
}

async fn delete_interviewer(State(fake): State<FakeBackend>, uri: Uri) -> StatusCode {
    fake.record("DELETE", &uri, None);
    StatusCode::OK
}

async fn generate_slots(State(fake): State<FakeBackend>, uri: Uri) -> StatusCode {
    fake.record("POST", &uri, None);
    StatusCode::OK
}

async fn interviewer_slots(
    State(fake): State<FakeBackend>,
    uri: Uri,
    Path(id): Path<i64>,
) -> Response {
    fake.record("GET", &uri, None);
    match id {
        99 => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(json!([slot_json(100 + id, "BOOKED"), slot_json(200 + id, "AVAILABLE")]))
            .into_response(),
    }
}

async fn available_slots(State(fake): State<FakeBackend>, uri: Uri) -> Json<Value> {
    fake.record("GET", &uri, None);
    Json(json!({
        "data": [slot_json(5, "AVAILABLE")],
        "nextCursor": "next-page",
        "prevCursor": null,
        "hasNext": true,
        "hasPrev": false,
        "size": 1
    }))
}

async fn book_slot(State(fake): State<FakeBackend>, uri: Uri, Json(body): Json<Value>) -> Response {
    fake.record("POST", &uri, Some(body));
    (
        StatusCode::CONFLICT,
        Json(json!({
            "code": "SLOT_BOOKING_ERROR",
            "message": "Slot is already booked",
            "timestamp": "2024-05-01T10:00:00"
        })),
    )
        .into_response()
}

async fn get_slot(State(fake): State<FakeBackend>, uri: Uri, Path(id): Path<i64>) -> Json<Value> {
    fake.record("GET", &uri, None);
    Json(slot_json(id, "BOOKED"))
}

async fn update_slot(
    State(fake): State<FakeBackend>,
    uri: Uri,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    fake.record("PUT", &uri, Some(body.clone()));
    if id == 5 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": "SLOT_BOOKING_ERROR",
                "message": "Only booked slots can be updated",
                "timestamp": "2024-05-01T10:00:00"
            })),
        )
            .into_response();
    }

    let mut slot = slot_json(id, "BOOKED");
    slot["candidateName"] = body["candidateName"].clone();
    slot["candidateEmail"] = body["candidateEmail"].clone();
    Json(slot).into_response()
}

pub fn notification_json(id: i64, recipient: &str, kind: &str, status: &str) -> Value {
    json!({
        "id": id,
        "recipientEmail": recipient,
        "subject": "Interview Booking Confirmation",
        "content": "Your interview has been booked.",
        "type": kind,
        "status": status,
        "createdAt": "2024-05-01T10:00:00",
        "sentAt": if status == "SENT" { json!("2024-05-01T10:00:05") } else { Value::Null },
        "scheduledFor": "2024-05-01T10:00:00",
        "retryCount": 0,
        "errorMessage": null,
        "interviewSlotId": 42,
        "interviewerId": 1
    })
}

async fn email_notifications(
    State(fake): State<FakeBackend>,
    uri: Uri,
    Path(email): Path<String>,
) -> Json<Value> {
    fake.record("GET", &uri, None);
    Json(json!([
        notification_json(2, &email, "BOOKING_UPDATE", "PENDING"),
        notification_json(1, &email, "BOOKING_CONFIRMATION", "SENT"),
    ]))
}

async fn slot_notifications(
    State(fake): State<FakeBackend>,
    uri: Uri,
    Path(id): Path<i64>,
) -> Json<Value> {
    fake.record("GET", &uri, None);
    match id {
        42 => Json(json!([notification_json(1, "charles@example.com", "BOOKING_CONFIRMATION", "SENT")])),
        _ => Json(json!([])),
    }
}

async fn cancel_slot(State(fake): State<FakeBackend>, uri: Uri) -> StatusCode {
    fake.record("DELETE", &uri, None);
    StatusCode::OK
}

/// Serves the fake backend on an ephemeral port.
pub async fn spawn_backend() -> (FakeBackend, SocketAddr) {
    let fake = FakeBackend::default();

    let app = Router::new()
        .route(
            "/api/v1/interviewers",
            get(list_interviewers).post(create_interviewer),
        )
        .route(
            "/api/v1/interviewers/:id",
            get(get_interviewer)
                .put(update_interviewer)
                .delete(delete_interviewer),
        )
        .route("/api/v1/interviewers/:id/generate-slots", post(generate_slots))
        .route(
            "/api/v1/interview-slots/interviewer/:id",
            get(interviewer_slots),
        )
        .route("/api/v1/interview-slots/available", get(available_slots))
        .route("/api/v1/interview-slots/book", post(book_slot))
        .route("/api/v1/interview-slots/:id", get(get_slot).put(update_slot))
        .route("/api/v1/interview-slots/:id/cancel", delete(cancel_slot))
        .route("/api/v1/notifications/email/:email", get(email_notifications))
        .route("/api/v1/notifications/slot/:id", get(slot_notifications))
        .with_state(fake.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (fake, addr)
}

pub fn api_for(addr: SocketAddr) -> HttpSchedulerApi {
    HttpSchedulerApi::new(&ClientConfig::new(format!("http://{}/", addr))).unwrap()
}

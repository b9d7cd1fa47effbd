// system-tests/tests/helpers/stub_service.rs
// ============================================================================
// Module: DocStream Service Stub
// Description: In-process stub of the DocStream summarization REST API.
// Purpose: Exercise the harness end-to-end without a deployed service.
// Dependencies: axum, serde_json, tokio
// ============================================================================

//! ## Overview
//! In-process stub of the DocStream summarization REST API.
//! The stub serves the four contract endpoints under `/api`, records every
//! received request (method, path, headers, body bytes) for bit-exact
//! assertions, and can be scripted to respond out of contract.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::put;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

/// Scripted response behavior for the stub service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubBehavior {
    /// Respond exactly as the contract expects.
    Faithful,
    /// Echo a mangled identifier in `id` responses.
    WrongId,
    /// Echo a queue confirmation with a mangled patient identifier.
    WrongQueueMessage,
    /// Respond 200 with a non-JSON body.
    NonJsonBody,
    /// Respond 500 with an otherwise contract-conforming JSON body.
    ErrorStatus,
}

/// Recorded request metadata for stub calls.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// HTTP method name.
    pub method: String,
    /// Request path under the `/api` mount.
    pub path: String,
    /// Authorization header value, when present.
    pub authorization: Option<String>,
    /// Content-Type header value, when present.
    pub content_type: Option<String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

/// Shared stub state: scripted behavior plus the capture log.
#[derive(Clone)]
struct StubState {
    /// Scripted response behavior.
    behavior: StubBehavior,
    /// Captured requests in arrival order.
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubState {
    /// Records one received request.
    fn record(&self, method: &str, path: String, headers: &HeaderMap, body: &Bytes) {
        let Ok(mut guard) = self.requests.lock() else {
            return;
        };
        guard.push(CapturedRequest {
            method: method.to_string(),
            path,
            authorization: header_value(headers, "authorization"),
            content_type: header_value(headers, "content-type"),
            body: body.to_vec(),
        });
    }

    /// Builds an identifier response per the scripted behavior.
    fn respond_with_id(&self, id: &str) -> Response {
        match self.behavior {
            StubBehavior::Faithful | StubBehavior::WrongQueueMessage => {
                Json(json!({"id": id, "summary": "processed"})).into_response()
            }
            StubBehavior::WrongId => {
                Json(json!({"id": format!("{id}-mismatch"), "summary": "processed"}))
                    .into_response()
            }
            StubBehavior::NonJsonBody => "summary pending".into_response(),
            StubBehavior::ErrorStatus => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"id": id}))).into_response()
            }
        }
    }

    /// Builds a queue confirmation response per the scripted behavior.
    fn respond_with_queue_confirmation(&self, patient: &str, document: &str) -> Response {
        let confirmed = |patient: &str| {
            json!({
                "name": "Document Queued",
                "value": format!("Added {patient} {document} to the Text Processing Queue."),
            })
        };
        match self.behavior {
            StubBehavior::Faithful | StubBehavior::WrongId => {
                Json(confirmed(patient)).into_response()
            }
            StubBehavior::WrongQueueMessage => {
                Json(confirmed(&format!("{patient}X"))).into_response()
            }
            StubBehavior::NonJsonBody => "queued".into_response(),
            StubBehavior::ErrorStatus => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(confirmed(patient))).into_response()
            }
        }
    }
}

/// Handle for the stub DocStream service.
pub struct StubServiceHandle {
    /// Base URL including the `/api` mount.
    base_url: String,
    /// Graceful shutdown trigger.
    shutdown: Option<oneshot::Sender<()>>,
    /// Server thread handle.
    join: Option<thread::JoinHandle<()>>,
    /// Captured requests in arrival order.
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServiceHandle {
    /// Returns the service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns captured requests in arrival order.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for StubServiceHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns the stub service with the given scripted behavior.
pub fn spawn_stub_service(behavior: StubBehavior) -> Result<StubServiceHandle, String> {
    let listener =
        StdTcpListener::bind("127.0.0.1:0").map_err(|err| format!("stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("stub listener nonblocking failed: {err}"))?;
    let addr = listener.local_addr().map_err(|err| format!("stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}/api");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        behavior,
        requests: Arc::clone(&requests),
    };
    let routes = Router::new()
        .route("/summarizeDoc/doc/:document", get(summarize_doc))
        .route("/summarizePatientDoc/patient/:patient/doc/:document", put(summarize_patient_doc))
        .route("/queuePatientDoc/patient/:patient/doc/:document", put(queue_patient_doc))
        .route("/summarizePatient/patient/:patient", get(summarize_patient));
    let app = Router::new().nest("/api", routes).with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                let _ = error;
                return;
            }
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(error) => {
                    let _ = error;
                    return;
                }
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(StubServiceHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        requests,
    })
}

/// Reads a header value as an owned string.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|value| value.to_str().ok()).map(ToString::to_string)
}

async fn summarize_doc(
    State(state): State<StubState>,
    Path(document): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record("GET", format!("/summarizeDoc/doc/{document}"), &headers, &body);
    state.respond_with_id(&document)
}

async fn summarize_patient_doc(
    State(state): State<StubState>,
    Path((patient, document)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(
        "PUT",
        format!("/summarizePatientDoc/patient/{patient}/doc/{document}"),
        &headers,
        &body,
    );
    state.respond_with_id(&patient)
}

async fn queue_patient_doc(
    State(state): State<StubState>,
    Path((patient, document)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(
        "PUT",
        format!("/queuePatientDoc/patient/{patient}/doc/{document}"),
        &headers,
        &body,
    );
    state.respond_with_queue_confirmation(&patient, &document)
}

async fn summarize_patient(
    State(state): State<StubState>,
    Path(patient): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record("GET", format!("/summarizePatient/patient/{patient}"), &headers, &body);
    state.respond_with_id(&patient)
}

//! In-process fake of the record store REST API, served with `tiny_http`.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use serde_json::{json, Value};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Path prefix the fake API is mounted under
pub const API_PREFIX: &str = "/api/v1";

/// Timestamp stamped on created records
pub const CREATED_AT: &str = "2025-03-04T09:30:00Z";

/// Timestamp stamped on updated records (naive, as some backends send it)
pub const UPDATED_AT: &str = "2025-03-05T10:00:00.250";

/// One request as seen by the server
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

impl Seen {
    /// `"METHOD /path"`, for compact assertions
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    fn is_write(&self) -> bool {
        self.method != "GET"
    }
}

struct Canned {
    status: u16,
    content_type: &'static str,
    body: String,
}

#[derive(Default)]
struct State {
    records: BTreeMap<i64, Value>,
    next_id: i64,
    seen: Vec<Seen>,
    canned: HashMap<(String, String), Canned>,
}

/// A running fake record store. Shuts down on drop.
pub struct FakeRecordStore {
    base_url: String,
    state: Arc<Mutex<State>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FakeRecordStore {
    /// Bind to an ephemeral port and start serving
    pub fn start() -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind fake record store");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("fake record store listens on TCP");

        let state = Arc::new(Mutex::new(State {
            next_id: 1,
            ..State::default()
        }));
        let shutdown = Arc::new(AtomicBool::new(false));

        let thread_state = Arc::clone(&state);
        let thread_shutdown = Arc::clone(&shutdown);
        let handle = std::thread::spawn(move || loop {
            if thread_shutdown.load(Ordering::Relaxed) {
                break;
            }
            match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(request)) => handle_request(&thread_state, request),
                Ok(None) => {}
                Err(_) => break,
            }
        });

        Self {
            base_url: format!("http://{}{}", addr, API_PREFIX),
            state,
            shutdown,
            handle: Some(handle),
        }
    }

    /// API root to hand to the HTTP client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store a record directly, bypassing the API. Returns its id.
    pub fn seed(&self, owner: &str, material: &str, elements: &[&str], temperature: f64) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.records.insert(
            id,
            json!({
                "id": id,
                "owner": owner,
                "material": material,
                "elements": elements,
                "temperature": temperature,
                "x": [10.0, 20.0, 30.0],
                "y": [100.0, 250.0, 80.0],
                "updatedAt": "2025-01-15T08:00:00Z",
            }),
        );
        id
    }

    /// Remove a record behind the client's back
    pub fn forget(&self, id: i64) {
        self.state.lock().unwrap().records.remove(&id);
    }

    /// Current server-side copy of a record
    pub fn record(&self, id: i64) -> Option<Value> {
        self.state.lock().unwrap().records.get(&id).cloned()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().records.len()
    }

    /// Answer `method path` (path relative to the API root) with a fixed response
    pub fn respond_with(
        &self,
        method: &str,
        path: &str,
        status: u16,
        content_type: &'static str,
        body: &str,
    ) {
        self.state.lock().unwrap().canned.insert(
            (method.to_string(), path.to_string()),
            Canned {
                status,
                content_type,
                body: body.to_string(),
            },
        );
    }

    /// Every request received, in order
    pub fn requests(&self) -> Vec<Seen> {
        self.state.lock().unwrap().seen.clone()
    }

    /// `"METHOD /path"` for every request received
    pub fn request_lines(&self) -> Vec<String> {
        self.requests().iter().map(Seen::line).collect()
    }

    /// Requests other than GET
    pub fn writes(&self) -> Vec<Seen> {
        self.requests().into_iter().filter(Seen::is_write).collect()
    }
}

impl Drop for FakeRecordStore {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn handle_request(state: &Mutex<State>, mut request: Request) {
    let method = request.method().as_str().to_string();
    let path = request
        .url()
        .strip_prefix(API_PREFIX)
        .unwrap_or(request.url())
        .to_string();

    let mut raw = String::new();
    let _ = request.as_reader().read_to_string(&mut raw);
    let body = serde_json::from_str::<Value>(&raw).ok();

    let mut state = state.lock().unwrap();
    state.seen.push(Seen {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    let canned = state
        .canned
        .get(&(method.clone(), path.clone()))
        .map(|c| (c.status, c.content_type, c.body.clone()));
    let (status, content_type, text) = match canned {
        Some(canned) => canned,
        None => route(&mut state, &method, &path, body),
    };
    drop(state);

    let header = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes())
        .expect("valid content type header");
    let data = text.into_bytes();
    let length = data.len();
    let response = Response::new(
        StatusCode(status),
        vec![header],
        Cursor::new(data),
        Some(length),
        None,
    );
    let _ = request.respond(response);
}

fn route(
    state: &mut State,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (u16, &'static str, String) {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let id = segments.get(1).and_then(|s| s.parse::<i64>().ok());

    match (method, segments.as_slice(), id) {
        ("GET", ["records"], _) => {
            let all: Vec<&Value> = state.records.values().collect();
            ok(200, json!(all))
        }
        ("GET", ["records", _, "exists"], Some(id)) => {
            ok(200, json!(state.records.contains_key(&id)))
        }
        ("POST", ["records"], _) => {
            let Some(Value::Object(mut record)) = body else {
                return not_json(422, "Body must be a JSON object");
            };
            let id = state.next_id;
            state.next_id += 1;
            record.insert("id".into(), json!(id));
            record.insert("updatedAt".into(), json!(CREATED_AT));
            let record = Value::Object(record);
            state.records.insert(id, record.clone());
            ok(201, record)
        }
        ("PUT", ["records", _], Some(id)) => {
            if !state.records.contains_key(&id) {
                return ok(404, json!({ "detail": "Record not found" }));
            }
            let Some(Value::Object(mut record)) = body else {
                return not_json(422, "Body must be a JSON object");
            };
            record.insert("id".into(), json!(id));
            record.insert("updatedAt".into(), json!(UPDATED_AT));
            let record = Value::Object(record);
            state.records.insert(id, record.clone());
            ok(200, record)
        }
        ("DELETE", ["records", _], Some(id)) => match state.records.remove(&id) {
            Some(_) => (204, "text/plain", String::new()),
            None => ok(404, json!({ "detail": "Record not found" })),
        },
        _ => not_json(404, "Not Found"),
    }
}

fn ok(status: u16, value: Value) -> (u16, &'static str, String) {
    (status, "application/json", value.to_string())
}

fn not_json(status: u16, text: &str) -> (u16, &'static str, String) {
    (status, "text/plain", text.to_string())
}

//! Test doubles and backend mocks shared by the integration tests
//!
//! `FakeNavigator` and `FakeSurface` stand in for the injected page
//! capabilities; `TestPage` wires them to a `PageContext` whose API
//! client points at a wiremock server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rollbook::client::{Config, Navigator, Notice, PageContext, PageSurface};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records navigations instead of performing them
pub struct FakeNavigator {
    path: String,
    query: HashMap<String, String>,
    visited: Mutex<Vec<String>>,
}

impl FakeNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: HashMap::new(),
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_string(), value.to_string());
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    pub fn last_visit(&self) -> Option<String> {
        self.visited.lock().unwrap().last().cloned()
    }
}

impl Navigator for FakeNavigator {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }

    fn go(&self, url: &str) {
        self.visited.lock().unwrap().push(url.to_string());
    }
}

/// In-memory page: fields, fragment slots, notices, confirmation prompt
pub struct FakeSurface {
    fields: Mutex<HashMap<String, String>>,
    fragments: Mutex<HashMap<String, String>>,
    texts: Mutex<HashMap<String, String>>,
    notices: Mutex<Vec<Notice>>,
    confirmations: Mutex<Vec<String>>,
    confirm_answer: AtomicBool,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            fields: Mutex::new(HashMap::new()),
            fragments: Mutex::new(HashMap::new()),
            texts: Mutex::new(HashMap::new()),
            notices: Mutex::new(Vec::new()),
            confirmations: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(true),
        }
    }

    pub fn set_field(&self, id: &str, value: &str) {
        self.fields
            .lock()
            .unwrap()
            .insert(id.to_string(), value.to_string());
    }

    pub fn field(&self, id: &str) -> Option<String> {
        self.fields.lock().unwrap().get(id).cloned()
    }

    pub fn fragment(&self, id: &str) -> Option<String> {
        self.fragments.lock().unwrap().get(id).cloned()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.lock().unwrap().get(id).cloned()
    }

    /// The banner currently on screen (the last one shown)
    pub fn current_notice(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn answer_confirmations_with(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }
}

impl PageSurface for FakeSurface {
    fn field_value(&self, id: &str) -> Option<String> {
        self.field(id)
    }

    fn set_field_value(&self, id: &str, value: &str) {
        self.set_field(id, value);
    }

    fn set_fragment(&self, id: &str, html: &str) {
        self.fragments
            .lock()
            .unwrap()
            .insert(id.to_string(), html.to_string());
    }

    fn set_text(&self, id: &str, text: &str) {
        self.texts
            .lock()
            .unwrap()
            .insert(id.to_string(), text.to_string());
    }

    fn show_notice(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.confirm_answer.load(Ordering::SeqCst)
    }
}

/// A page under test: mock backend plus context with fake capabilities
pub struct TestPage {
    pub server: MockServer,
    pub nav: Arc<FakeNavigator>,
    pub surface: Arc<FakeSurface>,
    pub ctx: PageContext,
}

impl TestPage {
    pub async fn at(page_path: &str) -> Self {
        Self::with_navigator(FakeNavigator::at(page_path)).await
    }

    pub async fn with_navigator(nav: FakeNavigator) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let config = Config::builder().server_url(server.uri()).build().unwrap();
        let nav = Arc::new(nav);
        let surface = Arc::new(FakeSurface::new());
        let ctx = PageContext::new(
            config,
            Arc::clone(&nav) as Arc<dyn Navigator>,
            Arc::clone(&surface) as Arc<dyn PageSurface>,
        )
        .expect("client builds");
        Self {
            server,
            nav,
            surface,
            ctx,
        }
    }

    /// A context pointed at a port nothing listens on, for transport
    /// failures. The mock server is still constructed but never used.
    pub async fn unreachable(page_path: &str) -> Self {
        let mut page = Self::at(page_path).await;
        let config = Config::builder()
            .server_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let nav = Arc::clone(&page.nav);
        let surface = Arc::clone(&page.surface);
        page.ctx = PageContext::new(
            config,
            nav as Arc<dyn Navigator>,
            surface as Arc<dyn PageSurface>,
        )
        .expect("client builds");
        page
    }

    /// Mount `GET /api/auth/check` answering as an authenticated user
    pub async fn mock_authenticated(&self) {
        Mock::given(method("GET"))
            .and(path("/api/auth/check"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "authenticated": true,
                "username": "ada",
                "fullName": "Ada Lovelace",
                "role": "user",
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount `GET /api/auth/check` answering 401 with the anonymous body
    pub async fn mock_anonymous(&self) {
        Mock::given(method("GET"))
            .and(path("/api/auth/check"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "authenticated": false,
                "error": "Not authenticated",
            })))
            .mount(&self.server)
            .await;
    }

    /// Requests the backend actually received, as (method, path) pairs
    pub async fn requests(&self) -> Vec<(String, String)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| (r.method.to_string(), r.url.path().to_string()))
            .collect()
    }
}

/// Log to the test output when RUST_LOG asks for it
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A student record body in the backend's shape
pub fn student_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "course": "Computer Science",
        "phone": "555-0100",
        "address": "1 Campus Way",
        "enrollmentDate": "2024-09-01T08:30:00Z",
    })
}

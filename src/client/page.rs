//! Page Capabilities
//!
//! The client never touches a real browser. Each handler receives a
//! [`PageContext`] carrying two injected capabilities: a [`Navigator`]
//! (current location and redirects) and a [`PageSurface`] (named form
//! fields, fragment slots, confirmation prompt, notice host). Tests plug
//! in fakes; an embedding shell plugs in the real thing.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;

use crate::client::config::Config;
use crate::client::notify::Notice;
use crate::client::ApiClient;
use crate::shared::ApiError;

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    StudentList,
    UpdateStudent(i64),
}

impl Route {
    /// Page URL for navigation, including the deployment context path
    pub fn href(self, config: &Config) -> String {
        match self {
            Route::Login => config.page_path("login.html"),
            Route::Register => config.page_path("register.html"),
            Route::Dashboard => config.page_path("index.html"),
            Route::StudentList => config.page_path("view-students.html"),
            Route::UpdateStudent(id) => {
                format!("{}?id={}", config.page_path("update-student.html"), id)
            }
        }
    }
}

/// Where the visitor is and how to send them elsewhere
pub trait Navigator: Send + Sync {
    /// Current page path, e.g. `/student-management/view-students.html`
    fn path(&self) -> String;

    /// Value of a query-string parameter on the current URL
    fn query_param(&self, name: &str) -> Option<String>;

    /// Navigate to the given URL, unloading the current page
    fn go(&self, url: &str);
}

/// The visible page: named elements the script binds to.
///
/// Elements are looked up by id. A missing element yields `None` from
/// [`field_value`](PageSurface::field_value) and turns the setters into
/// no-ops; whether a required field was actually filled in is the
/// validators' concern, not the surface's.
pub trait PageSurface: Send + Sync {
    /// Current value of a form field, `None` when the element is absent
    fn field_value(&self, id: &str) -> Option<String>;

    /// Set a form field's value
    fn set_field_value(&self, id: &str, value: &str);

    /// Replace an element's inner HTML
    fn set_fragment(&self, id: &str, html: &str);

    /// Replace an element's text content
    fn set_text(&self, id: &str, text: &str);

    /// Show a banner, removing any banner currently visible
    fn show_notice(&self, notice: &Notice);

    /// Modal yes/no prompt gating destructive actions
    fn confirm(&self, message: &str) -> bool;
}

/// Handles to operations still in flight for the current page.
///
/// Navigation abandons everything tracked here, the way a browser unload
/// discards pending timers and fetches.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    handles: Arc<Mutex<Vec<AbortHandle>>>,
}

impl InFlight {
    pub fn track(&self, handle: AbortHandle) {
        let mut handles = self.handles.lock().expect("in-flight registry poisoned");
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Abort every tracked operation
    pub fn abandon_all(&self) {
        let mut handles = self.handles.lock().expect("in-flight registry poisoned");
        for handle in handles.drain(..) {
            handle.abort();
        }
    }

    pub fn pending(&self) -> usize {
        let handles = self.handles.lock().expect("in-flight registry poisoned");
        handles.iter().filter(|h| !h.is_finished()).count()
    }
}

/// Everything a page handler needs: configuration, the API client, and
/// the injected page capabilities.
pub struct PageContext {
    pub config: Config,
    pub api: ApiClient,
    nav: Arc<dyn Navigator>,
    surface: Arc<dyn PageSurface>,
    in_flight: InFlight,
}

impl PageContext {
    pub fn new(
        config: Config,
        nav: Arc<dyn Navigator>,
        surface: Arc<dyn PageSurface>,
    ) -> Result<Self, ApiError> {
        let api = ApiClient::new(config.clone())?;
        Ok(Self {
            config,
            api,
            nav,
            surface,
            in_flight: InFlight::default(),
        })
    }

    pub fn surface(&self) -> &dyn PageSurface {
        self.surface.as_ref()
    }

    pub fn current_path(&self) -> String {
        self.nav.path()
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        self.nav.query_param(name)
    }

    /// Show a transient banner
    pub fn notify(&self, notice: Notice) {
        self.surface.show_notice(&notice);
    }

    /// Navigate immediately, abandoning every in-flight operation first
    pub fn redirect(&self, route: Route) {
        self.in_flight.abandon_all();
        self.nav.go(&route.href(&self.config));
    }

    /// Navigate after a delay. The pending navigation counts as in-flight:
    /// an immediate redirect issued in the meantime cancels it.
    pub fn redirect_after(&self, delay: Duration, route: Route) {
        let nav = Arc::clone(&self.nav);
        let in_flight = self.in_flight.clone();
        let url = route.href(&self.config);
        self.spawn_tracked(async move {
            tokio::time::sleep(delay).await;
            // Firing the navigation unloads the page, which abandons any
            // other pending work. This task has no await points left, so
            // aborting it along with the rest cannot stop the navigation.
            in_flight.abandon_all();
            nav.go(&url);
        });
    }

    /// Run a future in the background, tracked for abandonment
    pub fn spawn_tracked<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(fut);
        self.in_flight.track(handle.abort_handle());
    }

    /// Number of tracked operations still pending
    pub fn pending_operations(&self) -> usize {
        self.in_flight.pending()
    }
}

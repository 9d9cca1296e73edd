// Route navigation seam. Workflows ask to go somewhere by path; the host
// surface decides what that means.

use std::sync::Mutex;

use tracing::info;

pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const ONBOARDING_ROUTE: &str = "/onboarding";
pub const DOCUMENT_VALIDATION_ROUTE: &str = "/document-validation";

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Default navigator: logs the requested route.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &str) {
        info!(route = %route, "navigate");
    }
}

/// Test double that records every requested route.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

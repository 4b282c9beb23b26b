//! Projects API endpoint

use http::Method;

use crate::dispatch::Collection;
use crate::error::Result;
use crate::session::Session;
use crate::types::Project;

/// Projects API resource.
#[derive(Debug, Clone)]
pub struct Projects {
    session: Session,
}

impl Projects {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List the projects the current user belongs to.
    pub async fn list(&self) -> Result<Vec<Project>> {
        let request = self.session.request(Method::GET, "projects");
        self.session.send::<Collection<Project>>(request).await
    }
}

//! Organizations API endpoint

use http::Method;

use crate::dispatch::Collection;
use crate::error::Result;
use crate::session::Session;
use crate::types::Organization;

/// Organizations API resource.
#[derive(Debug, Clone)]
pub struct Organizations {
    session: Session,
}

impl Organizations {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List the organizations the current user belongs to.
    pub async fn list(&self) -> Result<Vec<Organization>> {
        let request = self.session.request(Method::GET, "orgs");
        self.session.send::<Collection<Organization>>(request).await
    }
}

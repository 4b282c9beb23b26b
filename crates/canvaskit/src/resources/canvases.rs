//! Canvases API endpoint

use http::Method;
use serde_json::json;

use crate::dispatch::{Collection, Empty, Single};
use crate::error::Result;
use crate::json::{JsonDictionary, dictionary};
use crate::session::Session;
use crate::types::Canvas;

/// Canvases API resource.
///
/// Every call that returns canvases asks the server to include their
/// project, so the owning organization decodes from the same document.
#[derive(Debug, Clone)]
pub struct Canvases {
    session: Session,
}

fn include_project() -> JsonDictionary {
    dictionary(json!({"include": "project"}))
}

impl Canvases {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetch one canvas.
    pub async fn show(&self, id: &str) -> Result<Canvas> {
        let request = self
            .session
            .request(Method::GET, format!("canvases/{id}"))
            .parameters(include_project());
        self.session.send::<Single<Canvas>>(request).await
    }

    /// Create a canvas in a project.
    ///
    /// `content` is the initial native document content; the server picks
    /// defaults for anything left out.
    pub async fn create(
        &self,
        project_id: &str,
        content: Option<&str>,
        is_public_writable: Option<bool>,
    ) -> Result<Canvas> {
        let mut attributes = JsonDictionary::new();
        if let Some(content) = content {
            attributes.insert("native_content".into(), content.into());
        }
        if let Some(is_public_writable) = is_public_writable {
            attributes.insert("is_public_writable".into(), is_public_writable.into());
        }

        let parameters = dictionary(json!({
            "data": {
                "type": "canvases",
                "attributes": attributes,
                "relationships": {
                    "project": {"data": {"type": "projects", "id": project_id}}
                }
            },
            "include": "project"
        }));

        let request = self
            .session
            .request(Method::POST, "canvases")
            .parameters(parameters);
        self.session.send::<Single<Canvas>>(request).await
    }

    /// List canvases, optionally only those in one project.
    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<Canvas>> {
        let mut parameters = include_project();
        if let Some(project_id) = project_id {
            parameters.insert("filter[org.id]".into(), project_id.into());
        }

        let request = self
            .session
            .request(Method::GET, "canvases")
            .parameters(parameters);
        self.session.send::<Collection<Canvas>>(request).await
    }

    /// Search the canvases of a project.
    pub async fn search(&self, project_id: &str, query: &str) -> Result<Vec<Canvas>> {
        let parameters = dictionary(json!({"query": query, "include": "project"}));
        let request = self
            .session
            .request(Method::GET, format!("orgs/{project_id}/actions/search"))
            .parameters(parameters);
        self.session.send::<Collection<Canvas>>(request).await
    }

    /// Delete a canvas.
    pub async fn destroy(&self, id: &str) -> Result<()> {
        let request = self.session.request(Method::DELETE, format!("canvases/{id}"));
        self.session.send::<Empty>(request).await
    }

    /// Archive a canvas.
    pub async fn archive(&self, id: &str) -> Result<Canvas> {
        self.action("archive", id).await
    }

    /// Restore an archived canvas.
    pub async fn unarchive(&self, id: &str) -> Result<Canvas> {
        self.action("unarchive", id).await
    }

    /// Allow or forbid edits by anyone with the link.
    pub async fn change_public_edits(&self, id: &str, enabled: bool) -> Result<Canvas> {
        let parameters = dictionary(json!({
            "data": {"attributes": {"is_public_writable": enabled}},
            "include": "project"
        }));
        let request = self
            .session
            .request(Method::PATCH, format!("canvases/{id}"))
            .parameters(parameters);
        self.session.send::<Single<Canvas>>(request).await
    }

    async fn action(&self, name: &str, id: &str) -> Result<Canvas> {
        let request = self
            .session
            .request(Method::POST, format!("canvases/{id}/actions/{name}"))
            .parameters(include_project());
        self.session.send::<Single<Canvas>>(request).await
    }
}

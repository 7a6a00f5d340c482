//! RemoteClient — Neo4j server over its REST API
//!
//! Speaks the `/db/data` endpoints: cypher, node, labels, relationships and
//! relationship properties. Every call is one HTTP round trip.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use statechain::graph::{EdgeId, EdgeType, Label, NodeId, PropertyMap};
use tracing::debug;

use crate::client::GraphClient;
use crate::error::{SdkError, SdkResult};
use crate::models::{EntityRepresentation, ErrorBody, QueryResult};

/// Default server address
pub const DEFAULT_URL: &str = "http://localhost:7474";

/// Network client for a running Neo4j server.
pub struct RemoteClient {
    base_url: String,
    credentials: Option<(String, String)>,
    http_client: Client,
}

impl RemoteClient {
    /// Create a client for the given base URL, without authentication.
    ///
    /// # Example
    /// ```no_run
    /// # use statechain_sdk::RemoteClient;
    /// let client = RemoteClient::new("http://localhost:7474")
    ///     .with_credentials("neo4j", "password");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
            http_client: Client::new(),
        }
    }

    /// Send HTTP basic auth with every request
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn node_url(&self, node: NodeId) -> String {
        format!("{}/db/data/node/{}", self.base_url, node.as_u64())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .http_client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.credentials {
            Some((user, password)) => builder.basic_auth(user, Some(password)),
            None => builder,
        }
    }

    /// Turn a non-success status into an `SdkError`
    async fn check(response: Response) -> SdkResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SdkError::ConnectionError(format!(
                "server refused credentials ({})",
                status
            )));
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        let msg = body
            .describe()
            .unwrap_or_else(|| format!("server returned {}", status));
        Err(SdkError::QueryError(msg))
    }

    fn properties_json(properties: &PropertyMap) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = properties
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}

#[async_trait]
impl GraphClient for RemoteClient {
    async fn execute_query(&self, cypher: &str) -> SdkResult<QueryResult> {
        debug!(cypher, "executing statement");
        let body = serde_json::json!({ "query": cypher, "params": {} });
        let response = self
            .request(Method::POST, "/db/data/cypher")
            .json(&body)
            .send()
            .await?;
        let result: QueryResult = Self::check(response).await?.json().await?;
        Ok(result)
    }

    async fn create_node(&self, properties: &PropertyMap) -> SdkResult<NodeId> {
        let response = self
            .request(Method::POST, "/db/data/node")
            .json(&Self::properties_json(properties))
            .send()
            .await?;
        let created: EntityRepresentation = Self::check(response).await?.json().await?;
        let id = NodeId::new(created.id()?);
        debug!(%id, "created node");
        Ok(id)
    }

    async fn add_label(&self, node: NodeId, label: &Label) -> SdkResult<()> {
        let path = format!("/db/data/node/{}/labels", node.as_u64());
        let response = self
            .request(Method::POST, &path)
            .json(&label.as_str())
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn create_relationship(
        &self,
        rel_type: &EdgeType,
        from: NodeId,
        to: NodeId,
    ) -> SdkResult<EdgeId> {
        let path = format!("/db/data/node/{}/relationships", from.as_u64());
        let body = serde_json::json!({
            "to": self.node_url(to),
            "type": rel_type.as_str(),
        });
        let response = self.request(Method::POST, &path).json(&body).send().await?;
        let created: EntityRepresentation = Self::check(response).await?.json().await?;
        let id = EdgeId::new(created.id()?);
        debug!(%id, %from, %to, rel_type = rel_type.as_str(), "created relationship");
        Ok(id)
    }

    async fn set_relationship_properties(
        &self,
        rel: EdgeId,
        properties: &PropertyMap,
    ) -> SdkResult<()> {
        // One PUT per key: the whole-map endpoint would replace the
        // relationship's existing properties.
        for (key, value) in properties {
            let path = format!("/db/data/relationship/{}/properties/{}", rel.as_u64(), key);
            let response = self
                .request(Method::PUT, &path)
                .json(&value.to_json())
                .send()
                .await?;
            Self::check(response).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statechain::graph::PropertyValue;

    #[test]
    fn test_base_url_is_normalised() {
        let client = RemoteClient::new("http://localhost:7474/");
        assert_eq!(client.base_url(), "http://localhost:7474");
        assert_eq!(client.node_url(NodeId::new(3)), "http://localhost:7474/db/data/node/3");
    }

    #[test]
    fn test_properties_json_uses_wire_shapes() {
        let mut props = PropertyMap::new();
        props.insert("date".to_string(), PropertyValue::DateTime(1_500));
        props.insert("name".to_string(), "abcde".into());

        let json = RemoteClient::properties_json(&props);
        assert_eq!(json, serde_json::json!({ "date": 1_500, "name": "abcde" }));
    }
}

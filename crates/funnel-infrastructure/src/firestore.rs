// ============================================================================
// Funnel Infrastructure - Firestore Document Store
// File: crates/funnel-infrastructure/src/firestore.rs
// ============================================================================
//! `DocumentStore` adapter over the Firestore REST API.
//!
//! Firestore wraps every field in a typed-value envelope
//! (`{"stringValue": ...}`, `{"integerValue": "..."}`); the helpers at the
//! bottom translate between that envelope and the domain entities.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use tracing::error;

use funnel_core::domain::{Business, Feedback, Rating};
use funnel_core::error::DomainError;
use funnel_core::gateways::{DocumentRef, DocumentStore};
use funnel_shared::config::FirebaseSettings;
use funnel_shared::constants::{COLLECTION_BUSINESSES, COLLECTION_FEEDBACK, COLLECTION_RATINGS};

pub struct FirestoreStore {
    client: Client,
    base_url: String,
    project_id: String,
}

impl FirestoreStore {
    pub fn new(client: Client, settings: &FirebaseSettings) -> Self {
        Self {
            client,
            base_url: settings.firestore_url.clone(),
            project_id: settings.project_id.clone(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    /// POST a fields envelope to a collection and turn the created
    /// document's resource name into a record handle.
    async fn append(
        &self,
        collection: &str,
        document_id: Option<&str>,
        fields: Value,
    ) -> Result<DocumentRef, DomainError> {
        let mut request = self
            .client
            .post(self.collection_url(collection))
            .json(&json!({ "fields": fields }));
        if let Some(id) = document_id {
            request = request.query(&[("documentId", id)]);
        }

        let response = request.send().await.map_err(|e| {
            error!("Document store unreachable appending to {}: {}", collection, e);
            DomainError::StoreError(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Document store error appending to {} ({}): {}", collection, status, body);
            return Err(DomainError::StoreError(format!("{}: {}", status, body)));
        }

        let document: Value = response.json().await.map_err(|e| {
            error!("Malformed append response from {}: {}", collection, e);
            DomainError::StoreError(e.to_string())
        })?;

        let id = document["name"]
            .as_str()
            .and_then(|name| name.rsplit('/').next())
            .ok_or_else(|| {
                DomainError::StoreError("append response carried no document name".to_string())
            })?;

        Ok(DocumentRef {
            collection: collection.to_string(),
            id: id.to_string(),
        })
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn find_business(&self, id: &str) -> Result<Option<Business>, DomainError> {
        let url = self.document_url(COLLECTION_BUSINESSES, id);
        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Document store unreachable reading business {}: {}", id, e);
            DomainError::StoreError(e.to_string())
        })?;

        // Absent documents are a normal outcome, not an error.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Document store error reading business {} ({}): {}", id, status, body);
            return Err(DomainError::StoreError(format!("{}: {}", status, body)));
        }

        let document: Value = response.json().await.map_err(|e| {
            error!("Malformed business document {}: {}", id, e);
            DomainError::StoreError(e.to_string())
        })?;

        business_from_document(id, &document).map(Some)
    }

    async fn append_business(&self, business: &Business) -> Result<DocumentRef, DomainError> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), string_value(&business.name));
        fields.insert("email".to_string(), string_value(&business.email));
        fields.insert(
            "review_profile_url".to_string(),
            string_value(&business.review_profile_url),
        );
        if let Some(logo_url) = &business.logo_url {
            fields.insert("logo_url".to_string(), string_value(logo_url));
        }
        fields.insert(
            "primary_color".to_string(),
            string_value(&business.primary_color),
        );
        fields.insert(
            "secondary_color".to_string(),
            string_value(&business.secondary_color),
        );
        fields.insert("created_at".to_string(), integer_value(business.created_at));

        self.append(COLLECTION_BUSINESSES, Some(&business.id), Value::Object(fields))
            .await
    }

    async fn append_rating(&self, rating: &Rating) -> Result<DocumentRef, DomainError> {
        let fields = json!({
            "business_id": string_value(&rating.business_id),
            "stars": integer_value(rating.stars as i64),
            "created_at": integer_value(rating.created_at),
        });
        self.append(COLLECTION_RATINGS, None, fields).await
    }

    async fn append_feedback(&self, feedback: &Feedback) -> Result<DocumentRef, DomainError> {
        let mut fields = Map::new();
        fields.insert(
            "business_id".to_string(),
            string_value(&feedback.business_id),
        );
        fields.insert("message".to_string(), string_value(&feedback.message));
        if let Some(email) = &feedback.email {
            fields.insert("email".to_string(), string_value(email));
        }
        fields.insert("created_at".to_string(), integer_value(feedback.created_at));

        self.append(COLLECTION_FEEDBACK, None, Value::Object(fields))
            .await
    }
}

fn business_from_document(id: &str, document: &Value) -> Result<Business, DomainError> {
    let fields = &document["fields"];
    Ok(Business {
        id: id.to_string(),
        name: require_string(fields, "name")?,
        email: require_string(fields, "email")?,
        review_profile_url: require_string(fields, "review_profile_url")?,
        logo_url: get_string(fields, "logo_url"),
        primary_color: require_string(fields, "primary_color")?,
        secondary_color: require_string(fields, "secondary_color")?,
        created_at: get_integer(fields, "created_at").unwrap_or_default(),
    })
}

fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

fn integer_value(n: i64) -> Value {
    // Firestore serializes 64-bit integers as strings.
    json!({ "integerValue": n.to_string() })
}

fn get_string(fields: &Value, key: &str) -> Option<String> {
    fields[key]["stringValue"].as_str().map(str::to_string)
}

fn require_string(fields: &Value, key: &str) -> Result<String, DomainError> {
    get_string(fields, key).ok_or_else(|| {
        DomainError::StoreError(format!("business document missing field: {}", key))
    })
}

fn get_integer(fields: &Value, key: &str) -> Option<i64> {
    fields[key]["integerValue"]
        .as_str()
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(server: &MockServer) -> FirebaseSettings {
        FirebaseSettings {
            api_key: "test-key".to_string(),
            project_id: "demo".to_string(),
            auth_url: server.uri(),
            firestore_url: server.uri(),
        }
    }

    fn business_document() -> Value {
        json!({
            "name": "projects/demo/databases/(default)/documents/businesses/b1",
            "fields": {
                "name": { "stringValue": "Corner Cafe" },
                "email": { "stringValue": "owner@cornercafe.com" },
                "review_profile_url": { "stringValue": "https://g.page/r/corner-cafe/review" },
                "primary_color": { "stringValue": "#1a73e8" },
                "secondary_color": { "stringValue": "#ffffff" },
                "created_at": { "integerValue": "1700000000000" }
            }
        })
    }

    #[tokio::test]
    async fn test_find_business_maps_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/demo/databases/(default)/documents/businesses/b1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(business_document()))
            .mount(&server)
            .await;

        let store = FirestoreStore::new(Client::new(), &settings(&server));
        let business = store.find_business("b1").await.unwrap().unwrap();
        assert_eq!(business.id, "b1");
        assert_eq!(business.name, "Corner Cafe");
        assert_eq!(business.created_at, 1_700_000_000_000);
        assert!(business.logo_url.is_none());
    }

    #[tokio::test]
    async fn test_find_business_absent_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let store = FirestoreStore::new(Client::new(), &settings(&server));
        assert!(store.find_business("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_business_server_error_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
            .mount(&server)
            .await;

        let store = FirestoreStore::new(Client::new(), &settings(&server));
        let err = store.find_business("b1").await.unwrap_err();
        assert!(matches!(err, DomainError::StoreError(_)));
    }

    #[tokio::test]
    async fn test_append_rating_posts_envelope_and_returns_handle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/demo/databases/(default)/documents/ratings"))
            .and(body_partial_json(json!({
                "fields": {
                    "business_id": { "stringValue": "b1" },
                    "stars": { "integerValue": "5" }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/demo/databases/(default)/documents/ratings/r-auto-1"
            })))
            .mount(&server)
            .await;

        let store = FirestoreStore::new(Client::new(), &settings(&server));
        let handle = store
            .append_rating(&Rating::new("b1".to_string(), 5))
            .await
            .unwrap();
        assert_eq!(handle.collection, "ratings");
        assert_eq!(handle.id, "r-auto-1");
    }

    #[tokio::test]
    async fn test_append_business_uses_client_document_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/demo/databases/(default)/documents/businesses"))
            .and(query_param("documentId", "b-fixed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/demo/databases/(default)/documents/businesses/b-fixed"
            })))
            .mount(&server)
            .await;

        let store = FirestoreStore::new(Client::new(), &settings(&server));
        let mut business = Business {
            id: "b-fixed".to_string(),
            name: "Corner Cafe".to_string(),
            email: "owner@cornercafe.com".to_string(),
            review_profile_url: "https://g.page/r/corner-cafe/review".to_string(),
            logo_url: None,
            primary_color: "#1a73e8".to_string(),
            secondary_color: "#ffffff".to_string(),
            created_at: 1_700_000_000_000,
        };
        let handle = store.append_business(&business).await.unwrap();
        assert_eq!(handle.id, "b-fixed");

        // Optional logo is written when present.
        business.logo_url = Some("https://cdn.example.com/logo.png".to_string());
        store.append_business(&business).await.unwrap();
    }
}

//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemClient` holds only the collection URL. Each operation is split into
//! a `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Any 2xx status counts as success.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemId, ItemInput};

/// Path of the items collection relative to the server root.
pub const ITEMS_PATH: &str = "/api/v1/items";

/// Synchronous, stateless client for the items API.
#[derive(Debug, Clone)]
pub struct ItemClient {
    collection_url: String,
}

impl ItemClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            collection_url: format!("{}{ITEMS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{id}", self.collection_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_item(&self, id: ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &ItemInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url.clone(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_item(&self, id: ItemId, input: &ItemInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_item(&self, id: ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Parse the updated item. A success response with an empty body is
    /// accepted, and the item is rebuilt from `id` and the submitted fields.
    /// A body describing any other item is rejected.
    pub fn parse_update_item(
        &self,
        id: ItemId,
        input: &ItemInput,
        response: HttpResponse,
    ) -> Result<Item, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(input.clone().into_item(id));
        }
        let item: Item = from_json(&response.body)?;
        if item.id != id {
            return Err(ApiError::IdMismatch {
                expected: id,
                returned: item.id,
            });
        }
        Ok(item)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Ok(())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &ItemInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ItemClient {
        ItemClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/v1/items");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_item_targets_single_id() {
        let req = client().build_get_item(5);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/v1/items/5");
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let req = client()
            .build_create_item(&ItemInput::new("Lamp", "Desk lamp"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/v1/items");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Lamp", "description": "Desk lamp"}));
    }

    #[test]
    fn build_update_item_sends_both_fields() {
        let req = client()
            .build_update_item(7, &ItemInput::new("Lamp", "Floor lamp"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/api/v1/items/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Lamp");
        assert_eq!(body["description"], "Floor lamp");
    }

    #[test]
    fn build_delete_item_has_no_body() {
        let req = client().build_delete_item(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/api/v1/items/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_items_keeps_server_order() {
        let items = client()
            .parse_list_items(response(
                200,
                r#"[{"id":3,"name":"c","description":"z"},{"id":1,"name":"a","description":"x"}]"#,
            ))
            .unwrap();
        let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn parse_create_item_accepts_200_and_201() {
        let body = r#"{"id":1,"name":"New","description":"Thing"}"#;
        assert_eq!(client().parse_create_item(response(201, body)).unwrap().id, 1);
        assert_eq!(client().parse_create_item(response(200, body)).unwrap().id, 1);
    }

    #[test]
    fn parse_create_item_wrong_status() {
        let err = client()
            .parse_create_item(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_item_uses_server_body() {
        let input = ItemInput::new("Lamp", "Floor lamp");
        let item = client()
            .parse_update_item(
                7,
                &input,
                response(200, r#"{"id":7,"name":"Lamp","description":"Trimmed"}"#),
            )
            .unwrap();
        assert_eq!(item.description, "Trimmed");
    }

    #[test]
    fn parse_update_item_rebuilds_from_empty_body() {
        let input = ItemInput::new("Lamp", "Floor lamp");
        let item = client()
            .parse_update_item(7, &input, response(204, ""))
            .unwrap();
        assert_eq!(
            item,
            Item {
                id: 7,
                name: "Lamp".to_string(),
                description: "Floor lamp".to_string(),
            }
        );
    }

    #[test]
    fn parse_update_item_rejects_another_items_body() {
        let input = ItemInput::new("Lamp", "Floor lamp");
        let err = client()
            .parse_update_item(
                5,
                &input,
                response(200, r#"{"id":7,"name":"Lamp","description":"Floor lamp"}"#),
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::IdMismatch { expected: 5, returned: 7 }));
    }

    #[test]
    fn parse_delete_item_accepts_any_2xx() {
        assert!(client().parse_delete_item(response(204, "")).is_ok());
        assert!(client().parse_delete_item(response(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_item_not_found() {
        let err = client().parse_delete_item(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = ItemClient::new("http://localhost:8080/").build_list_items();
        assert_eq!(req.path, "http://localhost:8080/api/v1/items");
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client()
            .parse_list_items(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}

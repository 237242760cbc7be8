use super::*;
use crate::dataset::{Element, RecordMetadata};
use crate::series::Series;
use serde_json::json;

#[test]
fn test_payload_serialization() {
    let metadata = RecordMetadata::new("alice", "Si", [Element::Si, Element::O], 300.0).unwrap();
    let series = Series::from_pairs([(10.0, 1.0), (20.0, 2.0)]).unwrap();
    let payload = RecordPayload::new(&metadata, &series);

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "owner": "alice",
            "material": "Si",
            "elements": ["Si", "O"],
            "temperature": 300.0,
            "x": [10.0, 20.0],
            "y": [1.0, 2.0],
        })
    );
    assert!(value.get("id").is_none());
}

#[test]
fn test_error_body_detail() {
    let fastapi = ErrorBody::Json(json!({"detail": "Record 4 not found"}));
    assert_eq!(fastapi.detail(), "Record 4 not found");

    let message = ErrorBody::Json(json!({"message": "bad payload"}));
    assert_eq!(message.detail(), "bad payload");

    let other = ErrorBody::Json(json!({"errors": [1, 2]}));
    assert_eq!(other.detail(), r#"{"errors":[1,2]}"#);

    let text = ErrorBody::Text("Bad Gateway".to_string());
    assert_eq!(text.to_string(), "Bad Gateway");
}

#[test]
fn test_boundary_error_accessors() {
    let err = BoundaryError::Status {
        status: 404,
        body: ErrorBody::Text("Not Found".to_string()),
    };
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body(), Some(&ErrorBody::Text("Not Found".to_string())));
    assert_eq!(err.to_string(), "Remote store returned 404: Not Found");

    let unexpected = BoundaryError::UnexpectedResponse("id changed".to_string());
    assert_eq!(unexpected.status(), None);
    assert!(unexpected.body().is_none());
}

#[test]
fn test_http_store_trims_base_url() {
    let store = HttpRecordStore::new("http://localhost:8000/api/v1/").unwrap();
    assert_eq!(store.base_url(), "http://localhost:8000/api/v1");
}

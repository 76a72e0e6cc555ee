use super::*;

#[test]
fn error_code_serializes_snake_case() {
    let err = ApiError::new(ErrorCode::NotFound, "no route for /missing");
    let value = serde_json::to_value(&err).expect("json");
    assert_eq!(value["code"], "not_found");
    assert_eq!(value["message"], "no route for /missing");
}

#[test]
fn result_kind_error_maps_to_internal() {
    let err: ApiError = ResultKindError {
        expected: ResultKind::View,
        actual: ResultKind::Content,
    }
    .into();
    assert_eq!(err.code, ErrorCode::Internal);
    assert_eq!(err.message, "expected View result, got Content");
}

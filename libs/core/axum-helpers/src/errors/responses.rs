//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "detail": "Internal Server Error" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request rejected by a business rule",
    content_type = "application/json",
    example = json!({ "detail": "Task with this ID already exists" })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - request body or path failed to decode",
    content_type = "application/json",
    example = json!({
        "detail": [{
            "loc": ["body"],
            "msg": "Failed to deserialize the JSON body into the target type: missing field `title`",
            "type": "value_error"
        }]
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "detail": "Task not found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

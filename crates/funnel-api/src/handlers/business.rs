//! Business handlers

use axum::{
    extract::{Multipart, Path, State},
    Json,
};

use funnel_core::domain::NewBusiness;
use funnel_core::gateways::UploadFile;

use crate::dto::BusinessDto;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Business lookup - GET /api/v1/businesses/{id}
///
/// Absence is a 404 with the error envelope; only transport failures
/// surface as 5xx.
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BusinessDto>>, ApiError> {
    match state.business_service.get_business(&id).await? {
        Some(business) => Ok(Json(ApiResponse::success(BusinessDto::from(business)))),
        None => Err(ApiError::NotFound(format!("No business with id {}", id))),
    }
}

/// Directory listing - GET /api/v1/businesses
pub async fn list_businesses(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<BusinessDto>>> {
    let businesses = state
        .business_service
        .directory()
        .all()
        .into_iter()
        .map(BusinessDto::from)
        .collect();
    Json(ApiResponse::success(businesses))
}

/// Business creation - POST /api/v1/businesses (multipart)
///
/// Text fields carry the record, the optional `logo` part carries the
/// image. A failed logo upload does not fail creation.
pub async fn create_business(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<BusinessDto>>, ApiError> {
    let mut name = None;
    let mut email = None;
    let mut review_profile_url = None;
    let mut primary_color = None;
    let mut secondary_color = None;
    let mut logo = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => name = Some(read_text(field).await?),
            "email" => email = Some(read_text(field).await?),
            "review_profile_url" => review_profile_url = Some(read_text(field).await?),
            "primary_color" => primary_color = Some(read_text(field).await?),
            "secondary_color" => secondary_color = Some(read_text(field).await?),
            "logo" => {
                let filename = field.file_name().unwrap_or("logo").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                logo = Some(UploadFile {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let new = NewBusiness {
        name: required(name, "name")?,
        email: required(email, "email")?,
        review_profile_url: required(review_profile_url, "review_profile_url")?,
        primary_color: required(primary_color, "primary_color")?,
        secondary_color: required(secondary_color, "secondary_color")?,
    };

    let business = state.business_service.create_business(new, logo).await?;
    Ok(Json(ApiResponse::success(BusinessDto::from(business))))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::BadRequest(format!("{} is required", field))),
    }
}

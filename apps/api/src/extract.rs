//! `FormFields`: text form fields from either `multipart/form-data` (what a
//! browser `FormData` sends) or `application/x-www-form-urlencoded`.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};

use crate::errors::AppError;

#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// A field that must be present (it may be empty).
    pub fn required(&mut self, name: &str) -> Result<String, AppError> {
        self.0
            .remove(name)
            .ok_or_else(|| AppError::Validation(format!("field '{name}' is required")))
    }

    /// A field that must be present and not blank.
    pub fn required_non_blank(&mut self, name: &str) -> Result<String, AppError> {
        let value = self.required(name)?;
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("field '{name}' cannot be empty")));
        }
        Ok(value)
    }

    pub fn optional(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(Self(fields));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut fields = HashMap::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            fields.insert(name, value);
        }

        Ok(Self(fields))
    }
}

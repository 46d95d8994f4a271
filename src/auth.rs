use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Roles the auth platform hands to signed-in admins and to server keys.
const ADMIN_ROLES: [&str; 2] = ["authenticated", "service_role"];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
}

fn token_from(req: &HttpRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    bearer.or_else(|| req.cookie("access_token").map(|c| c.value().to_string()))
}

pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        log::warn!("JWT verification failed: {:?}", e);
        AppError::Unauthorized(format!("Token tidak valid atau kedaluwarsa: {}", e))
    })?;

    Ok(token_data.claims)
}

/// Guards every `/api/adminpanel` handler.
pub fn require_admin(req: &HttpRequest, secret: &str) -> Result<Claims, AppError> {
    let token = token_from(req).ok_or_else(|| {
        log::warn!("No token found in request to {}", req.path());
        AppError::Unauthorized("Token tidak ditemukan".into())
    })?;

    let claims = verify_jwt(&token, secret)?;
    if !ADMIN_ROLES.contains(&claims.role.as_str()) {
        log::warn!("Role {} ditolak untuk {}", claims.role, req.path());
        return Err(AppError::Forbidden("Akses ditolak".into()));
    }
    Ok(claims)
}

#[cfg(test)]
pub(crate) fn issue_for_tests(role: &str, secret: &str) -> String {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000001".into(),
        role: role.into(),
        email: Some("admin@genbi.test".into()),
        exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as usize,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    #[test]
    fn accepts_bearer_and_cookie() {
        let token = issue_for_tests("authenticated", "s3cret");

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();
        let claims = require_admin(&req, "s3cret").unwrap();
        assert_eq!(claims.email.as_deref(), Some("admin@genbi.test"));

        let req = TestRequest::default()
            .cookie(Cookie::new("access_token", token))
            .to_http_request();
        assert!(require_admin(&req, "s3cret").is_ok());
    }

    #[test]
    fn rejects_missing_wrong_and_unprivileged_tokens() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(require_admin(&req, "s3cret"), Err(AppError::Unauthorized(_))));

        let token = issue_for_tests("authenticated", "other");
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();
        assert!(matches!(require_admin(&req, "s3cret"), Err(AppError::Unauthorized(_))));

        let token = issue_for_tests("anon", "s3cret");
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();
        assert!(matches!(require_admin(&req, "s3cret"), Err(AppError::Forbidden(_))));
    }
}

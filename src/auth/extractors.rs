use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::models::UserRole;

/// Extracts the authenticated identity from request extensions.
///
/// This extractor is intended to be used on routes protected by `AuthMiddleware`,
/// which is responsible for validating the JWT and inserting the decoded
/// `Claims` into request extensions.
///
/// If no claims are found in the extensions (e.g., if `AuthMiddleware` did not
/// run), this extractor returns an `AppError::Unauthorized` error.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub role: UserRole,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError; // AppError is converted into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser {
                id: claims.sub,
                role: claims.role,
            })),
            None => {
                // Only reachable when a route is wired up without AuthMiddleware.
                // Responding with Unauthorized is the safe default.
                let err = AppError::Unauthorized(
                    "No authenticated identity on request. Ensure AuthMiddleware is active."
                        .to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}

/// Role guard: extracts the authenticated identity and requires the admin role.
///
/// Composes with `AuthMiddleware` the same way `AuthenticatedUser` does, but a
/// valid token carrying a non-admin role is rejected with `AppError::Forbidden`.
/// Pure predicate over the attached claims, no state.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub id: i32,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) if claims.role == UserRole::Admin => {
                ready(Ok(AdminUser { id: claims.sub }))
            }
            Some(_) => {
                let err = AppError::Forbidden("Admin access required".to_string());
                ready(Err(err.into()))
            }
            None => {
                let err = AppError::Unauthorized(
                    "No authenticated identity on request. Ensure AuthMiddleware is active."
                        .to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}

use crate::{
    auth::{
        generate_token, hash_password, verify_password, AuthResponse, LoginRequest, RegisterRequest,
    },
    error::AppError,
    models::{User, UserRole},
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::{FromRow, PgPool};
use validator::Validate;

/// Row read back when checking stored credentials at login.
#[derive(FromRow)]
struct CredentialRow {
    id: i32,
    name: String,
    password_hash: String,
    role: UserRole,
}

/// Register a new user
///
/// Creates a new account with the `user` role and an active flag, then
/// returns an authentication token so the client can log straight in.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user; role and is_active take their column defaults.
    // The unique constraint on email is the authority on duplicates: a
    // SELECT-then-INSERT pre-check would race with concurrent registrations.
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
         RETURNING id, name, email, role, is_active, created_at",
    )
    .bind(&register_data.name)
    .bind(&register_data.email)
    .bind(&password_hash)
    .fetch_one(&**pool)
    .await
    .map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            // 23505 = unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return AppError::BadRequest("Email already registered".into());
            }
        }
        AppError::from(e)
    })?;

    // Generate token
    let token = generate_token(user.id, user.role)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        role: user.role,
        name: user.name,
    }))
}

/// Login user
///
/// Authenticates a user and returns an authentication token along with the
/// role and display name the client persists. Unknown emails and wrong
/// passwords produce the same response so neither can be probed for.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    // Get user from database
    let user = sqlx::query_as::<_, CredentialRow>(
        "SELECT id, name, password_hash, role FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(&**pool)
    .await?;

    match user {
        Some(user) => {
            // Verify password
            if verify_password(&login_data.password, &user.password_hash)? {
                // Generate token
                let token = generate_token(user.id, user.role)?;
                Ok(HttpResponse::Ok().json(AuthResponse {
                    token,
                    role: user.role,
                    name: user.name,
                }))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}

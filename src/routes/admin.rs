use crate::{auth::AdminUser, error::AppError, models::UserWithStats};
use actix_web::{get, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// Lists every account with its task statistics for the admin dashboard.
///
/// One grouped aggregation over the tasks joined by owner; the per-user
/// completed/pending counts come back in the same pass as the accounts
/// themselves. Passwords are never selected.
///
/// ## Responses:
/// - `200 OK`: JSON array of `UserWithStats`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the token carries a non-admin role.
/// - `500 Internal Server Error`: For database errors.
#[get("/users")]
pub async fn list_users(
    pool: web::Data<PgPool>,
    _admin: AdminUser,
) -> Result<impl Responder, AppError> {
    let users = sqlx::query_as::<_, UserWithStats>(
        "SELECT u.id, u.name, u.email, u.role, u.is_active, \
                COUNT(t.id) FILTER (WHERE t.is_completed) AS completed_tasks, \
                COUNT(t.id) FILTER (WHERE NOT t.is_completed) AS pending_tasks \
         FROM users u \
         LEFT JOIN tasks t ON t.user_id = u.id \
         GROUP BY u.id, u.name, u.email, u.role, u.is_active \
         ORDER BY u.id",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(users))
}

/// Flips an account between active and deactivated.
///
/// A single atomic `UPDATE ... RETURNING`, so two concurrent toggles cannot
/// read the same prior value. Deactivation does not touch the user's tasks
/// and does not revoke tokens that were already issued.
///
/// ## Path Parameters:
/// - `id`: The ID of the user to toggle.
///
/// ## Responses:
/// - `200 OK`: `{ "msg": ..., "isActive": bool }` with the new state.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the token carries a non-admin role.
/// - `404 Not Found`: If no user has the given ID.
/// - `500 Internal Server Error`: For database errors.
#[put("/user/{id}/toggle")]
pub async fn toggle_user(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
    _admin: AdminUser,
) -> Result<impl Responder, AppError> {
    let toggled = sqlx::query_as::<_, (bool,)>(
        "UPDATE users SET is_active = NOT is_active WHERE id = $1 RETURNING is_active",
    )
    .bind(user_id.into_inner())
    .fetch_optional(&**pool)
    .await?;

    match toggled {
        Some((is_active,)) => {
            let msg = if is_active {
                "User activated successfully"
            } else {
                "User deactivated successfully"
            };
            Ok(HttpResponse::Ok().json(json!({
                "msg": msg,
                "isActive": is_active
            })))
        }
        None => Err(AppError::NotFound("User not found".into())),
    }
}

//! Access layer - registration, login and the explicit caller context.
//!
//! Nothing in the ledger looks up a "current user" on its own. A caller
//! authenticates here, receives a [`UserContext`], and hands that context to
//! every store and report function, which scope their queries by it.

use crate::{
    core::validation::require_text,
    entities::{User, user},
    errors::{Error, Result},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{Set, SqlErr, prelude::*};
use tracing::{debug, info, instrument, warn};

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 120;
const MIN_PASSWORD_LEN: usize = 6;

/// Authenticated caller. Required by every owner-scoped operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    /// Primary key of the acting user
    pub user_id: i64,
    /// Username, for display
    pub username: String,
}

impl UserContext {
    /// Builds a context for an already-resolved user id.
    #[must_use]
    pub const fn new(user_id: i64, username: String) -> Self {
        Self { user_id, username }
    }
}

impl From<&user::Model> for UserContext {
    fn from(model: &user::Model) -> Self {
        Self::new(model.id, model.username.clone())
    }
}

/// Registration request.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired username
    pub username: String,
    /// Email used to log in
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
}

fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    let valid = email.chars().count() <= MAX_EMAIL_LEN
        && !email.contains(char::is_whitespace)
        && email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            });

    if valid {
        Ok(email)
    } else {
        Err(Error::InvalidInput {
            message: "email address is not valid".to_string(),
        })
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash {
            message: e.to_string(),
        })
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| Error::PasswordHash {
        message: e.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Creates an account after checking the field constraints and that neither
/// the username nor the email is taken.
#[instrument(skip(db, new_user), fields(username = %new_user.username))]
pub async fn register_user(db: &DatabaseConnection, new_user: NewUser) -> Result<user::Model> {
    let username = require_text("username", &new_user.username, MIN_USERNAME_LEN, MAX_USERNAME_LEN)?;
    let email = normalize_email(&new_user.email)?;
    if new_user.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::InvalidInput {
            message: format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }

    if User::find()
        .filter(user::Column::Username.eq(username.as_str()))
        .one(db)
        .await?
        .is_some()
    {
        return Err(Error::DuplicateIdentity { field: "username" });
    }
    if User::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(db)
        .await?
        .is_some()
    {
        return Err(Error::DuplicateIdentity { field: "email" });
    }

    let account = user::ActiveModel {
        username: Set(username),
        email: Set(email),
        password_hash: Set(hash_password(&new_user.password)?),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    // The pre-checks above can race with a concurrent registration; the
    // unique constraints have the final say.
    match account.insert(db).await {
        Ok(created) => {
            info!(user_id = created.id, "Registered new user");
            Ok(created)
        }
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                let field = if message.contains("email") {
                    "email"
                } else {
                    "username"
                };
                Err(Error::DuplicateIdentity { field })
            }
            _ => Err(err.into()),
        },
    }
}

/// Resolves an email/password pair to a [`UserContext`].
///
/// Unknown emails and wrong passwords produce the same error.
#[instrument(skip(db, password))]
pub async fn authenticate(db: &DatabaseConnection, email: &str, password: &str) -> Result<UserContext> {
    let email = email.trim().to_lowercase();
    let Some(account) = User::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(db)
        .await?
    else {
        debug!("Login attempt for unknown email");
        return Err(Error::InvalidCredentials);
    };

    if verify_password(password, &account.password_hash)? {
        Ok(UserContext::from(&account))
    } else {
        warn!(user_id = account.id, "Login attempt with wrong password");
        Err(Error::InvalidCredentials)
    }
}

/// Loads the account behind a context.
pub async fn find_user(db: &DatabaseConnection, ctx: &UserContext) -> Result<user::Model> {
    User::find_by_id(ctx.user_id)
        .one(db)
        .await?
        .ok_or(Error::NotAuthorizedOrNotFound {
            entity: "user",
            id: ctx.user_id,
        })
}

/// Deletes the caller's account; owned rows go with it via `ON DELETE CASCADE`.
#[instrument(skip(db))]
pub async fn delete_user(db: &DatabaseConnection, ctx: &UserContext) -> Result<()> {
    let result = User::delete_by_id(ctx.user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotAuthorizedOrNotFound {
            entity: "user",
            id: ctx.user_id,
        });
    }
    info!(user_id = ctx.user_id, "Deleted user and all owned records");
    Ok(())
}

// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_comment_repository;
pub mod postgres_like_repository;
pub mod postgres_post_repository;
pub mod postgres_user_repository;
mod rows;

pub use postgres_comment_repository::PostgresCommentRepository;
pub use postgres_like_repository::PostgresLikeRepository;
pub use postgres_post_repository::PostgresPostRepository;
pub use postgres_user_repository::PostgresUserRepository;

use crate::domain::errors::RepositoryError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE class 22: data exception (bad encoding, out-of-range value, ...)
const DATA_EXCEPTION_CLASS: &str = "22";

/// SQLSTATE, constraint and server message of a failed statement
struct DbFailure {
    code: String,
    constraint: Option<String>,
    message: String,
}

fn sqlstate(err: &sqlx::Error) -> Option<DbFailure> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| DbFailure {
            code: code.into_owned(),
            constraint: db_err.constraint().map(str::to_string),
            message: db_err.message().to_string(),
        }),
        _ => None,
    }
}

fn is_data_exception(code: &str) -> bool {
    code.starts_with(DATA_EXCEPTION_CLASS)
}

/// Names the entity a foreign key constraint points at
fn referenced_entity(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(name) if name.contains("post_id") => "Post",
        Some(name) if name.contains("author_id") || name.contains("user_id") => "User",
        _ => "Referenced record",
    }
}

/// Maps errors from reads
pub(crate) fn map_read_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(format!("{}: {}", operation, err))
}

/// Maps errors from INSERT/UPDATE statements
///
/// `conflict` is the message used when a unique constraint rejects the row.
pub(crate) fn map_write_error(operation: &str, conflict: &str, err: sqlx::Error) -> RepositoryError {
    match sqlstate(&err) {
        Some(failure) if failure.code == UNIQUE_VIOLATION => {
            RepositoryError::UniqueViolation(conflict.to_string())
        }
        Some(failure) if failure.code == FOREIGN_KEY_VIOLATION => {
            RepositoryError::MissingReference(format!(
                "{} does not exist",
                referenced_entity(failure.constraint.as_deref())
            ))
        }
        Some(failure) if is_data_exception(&failure.code) => {
            RepositoryError::InvalidInput(format!("Invalid input: {}", failure.message))
        }
        _ => map_read_error(operation, err),
    }
}

/// Maps errors from DELETE statements
pub(crate) fn map_delete_error(entity: &str, err: sqlx::Error) -> RepositoryError {
    match sqlstate(&err) {
        Some(failure) if failure.code == FOREIGN_KEY_VIOLATION => RepositoryError::StillReferenced(
            format!("{} is still referenced by other records", entity),
        ),
        _ => map_read_error(&format!("delete {}", entity.to_lowercase()), err),
    }
}

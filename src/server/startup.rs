use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, is_unique_violation, AppError},
    model::user::{CreateUserParams, Role, User},
    service::auth::code::ConfirmationCodeService,
    util::validate,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the bootstrap admin when none exists yet.
///
/// Runs only when both `ADMIN_USERNAME` and `ADMIN_EMAIL` are configured. The admin's
/// confirmation code is written to the log so the operator can exchange it for a token.
///
/// # Returns
/// - `Ok(Some(User))` - Admin was created
/// - `Ok(None)` - Admin already exists or no bootstrap admin is configured
/// - `Err(AppError::ConfigErr)` - Username or email is malformed, reserved, or already
///   held by a non-admin user
/// - `Err(AppError)` - Database error or code generation failure
pub async fn ensure_admin(
    db: &DatabaseConnection,
    config: &Config,
    codes: &ConfirmationCodeService,
) -> Result<Option<User>, AppError> {
    let (Some(username), Some(email)) = (&config.admin_username, &config.admin_email) else {
        return Ok(None);
    };

    if validate::username(username).is_err() {
        return Err(invalid("ADMIN_USERNAME", username));
    }
    if validate::email(email).is_err() {
        return Err(invalid("ADMIN_EMAIL", email));
    }

    let user_repo = UserRepository::new(db);
    if user_repo.admin_exists().await? {
        return Ok(None);
    }

    if user_repo.find_by_username(username).await?.is_some() {
        return Err(conflict("ADMIN_USERNAME", username));
    }
    if user_repo.find_by_email(email).await?.is_some() {
        return Err(conflict("ADMIN_EMAIL", email));
    }

    let admin = user_repo
        .create(CreateUserParams {
            role: Role::Admin,
            is_staff: true,
            is_superuser: true,
            ..CreateUserParams::signup(username.clone(), email.clone())
        })
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                conflict("ADMIN_USERNAME", username)
            } else {
                err.into()
            }
        })?;

    let code = codes.generate(&admin)?;
    tracing::info!(
        username = %admin.username,
        "Created bootstrap admin, confirmation code: {}",
        code
    );

    Ok(Some(admin))
}

fn invalid(name: &str, value: &str) -> AppError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
    .into()
}

fn conflict(name: &str, value: &str) -> AppError {
    ConfigError::AdminConflict {
        name: name.to_string(),
        value: value.to_string(),
    }
    .into()
}

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError, service::user::UserService,
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
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures an admin account exists.
///
/// Creates the bootstrap admin from `ADMIN_EMAIL` and `ADMIN_TOKEN` when no admin
/// exists yet. Without both variables nothing is created, and a warning is logged
/// if the database has no admin.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the bootstrap credentials
///
/// # Returns
/// - `Ok(())` - An admin exists or the check was skipped
/// - `Err(AppError)` - Database error or invalid bootstrap email
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(email), Some(token)) = (&config.admin_email, &config.admin_token) else {
        if !UserRepository::new(db).admin_exists().await? {
            tracing::warn!(
                "No admin user exists; set ADMIN_EMAIL and ADMIN_TOKEN to create one at startup"
            );
        }
        return Ok(());
    };

    match UserService::new(db).bootstrap_admin(email, token).await? {
        Some(admin) => tracing::info!(user_id = %admin.id, "Created bootstrap admin {}", admin.email),
        None => tracing::debug!("Admin user already exists, skipping bootstrap"),
    }

    Ok(())
}

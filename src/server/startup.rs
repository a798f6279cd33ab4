use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParams,
    service::credential::CredentialVerifier,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Must complete before anything touches the database; the schema is
/// brought up-to-date here so repositories can assume every migrated table
/// exists.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same SQLite database.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store
        .migrate()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to migrate session store: {e}")))?;

    Ok(SessionManagerLayer::new(store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds the first admin account when none exists.
///
/// Only acts when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are configured;
/// otherwise a warning is logged and user management stays locked until an
/// admin row is created out-of-band.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    verifier: &dyn CredentialVerifier,
) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.admin_exists().await? {
        return Ok(());
    }

    match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(password)) => {
            repo.create(CreateUserParams {
                full_name: "Administrator".to_string(),
                email: email.clone(),
                password: verifier.prepare(password),
                role: entity::user::Role::Admin,
            })
            .await?;
            tracing::info!("Seeded initial admin account for {email}");
        }
        _ => {
            tracing::warn!(
                "No admin user exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
                 admin endpoints will reject every request"
            );
        }
    }

    Ok(())
}

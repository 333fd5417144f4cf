#[derive(Debug)]
pub enum AppError {
    Sqlx(sqlx::Error),
    Smtp(lettre::transport::smtp::Error),
    Address(lettre::address::AddressError),
    Email(lettre::error::Error),
    Scheduler(tokio_cron_scheduler::JobSchedulerError),
    Config(String),
}

impl From<sqlx::Error> for AppError {
    fn from(inner: sqlx::Error) -> Self {
        AppError::Sqlx(inner)
    }
}

impl From<lettre::transport::smtp::Error> for AppError {
    fn from(inner: lettre::transport::smtp::Error) -> Self {
        AppError::Smtp(inner)
    }
}

impl From<lettre::address::AddressError> for AppError {
    fn from(inner: lettre::address::AddressError) -> Self {
        AppError::Address(inner)
    }
}

impl From<lettre::error::Error> for AppError {
    fn from(inner: lettre::error::Error) -> Self {
        AppError::Email(inner)
    }
}

impl From<tokio_cron_scheduler::JobSchedulerError> for AppError {
    fn from(inner: tokio_cron_scheduler::JobSchedulerError) -> Self {
        AppError::Scheduler(inner)
    }
}

use crate::server::error::AppError;
use test_utils::{builder::TestBuilder, factory};

mod dashboard;
mod destination;
mod follow;
mod service;
mod user;

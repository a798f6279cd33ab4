use crate::server::{
    data::event::{EventFollowRepository, EventRepository},
    model::event::UpdateEventParams,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod follows;
mod update;

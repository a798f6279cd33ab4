use crate::server::{
    data::destination::{DestinationRepository, DestinationServiceRepository},
    model::destination::{DestinationFilter, UpdateDestinationParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::destination::DestinationFactory};

mod get_all;
mod links;
mod update;

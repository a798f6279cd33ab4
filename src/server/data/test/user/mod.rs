use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod create;

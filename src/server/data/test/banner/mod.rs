use crate::server::{data::banner::BannerRepository, model::banner::UpdateBannerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod soft_delete;

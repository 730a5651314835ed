use crate::server::data::server::{ServerQuery, ServerRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_members;

pub mod auth;
pub mod banner;
pub mod category;
pub mod dashboard;
pub mod destination;
pub mod event;
pub mod favorite;
pub mod fragment;
pub mod gallery;
pub mod helper;
pub mod service;
pub mod user;

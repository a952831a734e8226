//! Application services

mod house_service;

pub use house_service::HouseService;

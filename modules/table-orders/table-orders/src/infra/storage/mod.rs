pub mod db;
pub mod entity;
mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use db::connect;
pub use sea_orm_repo::SeaOrmOrdersRepository;

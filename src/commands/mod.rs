pub mod db;
pub mod defects;
pub mod health;
pub mod settings;
pub mod status;

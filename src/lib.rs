use std::fmt::Display;

use tracing::error;

pub mod config_handler;
pub mod error;
pub mod models;
pub mod page;
pub mod render;
pub mod rest_client;
pub mod viewer;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                error!("{}: {}", msg, e);
                None
            }
        }
    }
}

//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod domains;
pub mod health;
pub mod publishers;

pub use domains::{create_domain_handler, delete_domain_handler, update_domain_handler};
pub use health::{health_handler, index_handler};
pub use publishers::{
    create_publisher_handler, delete_publisher_handler, get_publisher_handler,
    publisher_list_handler, rename_publisher_handler,
};

//! Application service layer.
//!
//! Services wrap the in-memory address book behind an async, lock-guarded
//! boundary so a front end can share it between concurrent requests.

mod directory_service;

pub use directory_service::{parse_today, DirectoryService, DirectoryServiceImpl, NewContactParams};

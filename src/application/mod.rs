//! Application layer: services coordinating domain and storage.

pub mod services;

//! Menu module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::MenuService;

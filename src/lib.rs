//! userdesk - in-memory user and customer REST service
//!
//! Users live in an in-memory store behind `service::UserService`; the
//! `http_server` module exposes them under `/api` as JSON or XML.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;

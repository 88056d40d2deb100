//! Launchpad is a todo-list management service.
//!
//! Clients create lists, populate them with items, tag and filter items, and
//! reorder items within a list. Items keep a dense, zero-based position inside
//! their list, and tags form a shared, case-insensitive vocabulary.
//!
//! # Module Organization
//!
//! - `config`: Runtime configuration built from environment variables
//! - `context`: Shared application context passed to request handlers
//! - `controllers`: HTTP request handlers
//! - `database`: Connection pool wrapper
//! - `error`: Error types with HTTP status mapping
//! - `http`: Request/response plumbing on top of hyper
//! - `migrations`: SeaORM schema migrations
//! - `models`: SeaORM entities for lists, items, and tags
//! - `requests`: Request payload types with validation rules
//! - `routing`: Path router
//! - `server`: HTTP server loop
//! - `services`: Domain logic, including position sequencing and tag sync

pub mod config;
pub mod context;
pub mod controllers;
pub mod database;
pub mod error;
pub mod http;
pub mod migrations;
pub mod models;
pub mod requests;
pub mod routes;
pub mod routing;
pub mod server;
pub mod services;

pub use context::AppContext;
pub use database::DbConnection;
pub use error::Error;
pub use http::{HttpResponse, Request, Response};
pub use routing::Router;
pub use server::Server;

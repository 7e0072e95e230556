pub mod app;
pub mod cli;
pub mod config;
pub mod consts;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod llm_client;
pub mod llm_request;
pub mod logging;
pub mod models;

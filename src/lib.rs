pub mod api;
pub mod config;
pub mod data_models;
pub mod errors;
pub mod interactive;
pub mod normalizer;
pub mod pipeline;
pub mod render;
pub mod search;
pub mod topic;

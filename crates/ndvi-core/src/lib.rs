//! NDVI Watch Core - Parcel analysis workflow, session state, and backend gateway
//!
//! This crate contains the client-side workflow controller and the port
//! definitions that front ends (terminal, web, desktop) implement.

pub mod capture;
pub mod config;
pub mod dto;
pub mod error;
pub mod gateway;
pub mod models;
pub mod ports;
pub mod presenter;
pub mod session;
pub mod workflow;

pub use error::{NdviError, Precondition, Result};
pub use workflow::{WorkflowController, WorkflowState};

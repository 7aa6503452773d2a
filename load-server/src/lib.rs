//! Freight load server.
//!
//! Accepts flat load descriptions from a browser frontend, turns each one
//! into the nested create-shipment request of the Turvo TMS and submits
//! it. Also lists existing shipments page by page.

pub mod config;
pub mod domain;
pub mod service;
pub mod turvo;
pub mod web;

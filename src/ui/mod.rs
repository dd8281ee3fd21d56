//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the portal,
//! following ShadCN-UI design principles. Pages are assembled in [`app`];
//! the server also renders individual components as HTMX fragments.
//!
//! # Structure
//!
//! - [`app`]: document shell and full-page assembly
//! - [`components`]: reusable ShadCN-style UI components
//! - [`browse`]: listing grid, filter sidebar, pagination, sign-in modal
//! - [`chat`]: chat widget layout components
//! - [`detail`]: property detail view

pub mod app;
pub mod browse;
pub mod chat;
pub mod components;
pub mod detail;

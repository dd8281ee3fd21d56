//! ShadCN-style reusable UI components.
//!
//! A small set of composable primitives rendered via Leptos SSR, themed for
//! the portal's light look.
//!
//! # Components
//!
//! - [`Button`]: clickable button with variants
//! - [`Card`], [`CardContent`]: card container
//! - [`Input`]: text input field
//! - [`Badge`]: status badge/tag
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
mod icons;
mod input;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent};
pub use icons::*;
pub use input::Input;

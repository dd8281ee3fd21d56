//! Browser session management.
//!
//! Sessions are identified by a `sid` cookie and hold everything that
//! outlives a single request: the signed-in user id, the optimistic
//! favourites set, and the chat transcript.
//!
//! # Architecture
//!
//! - [`Session`]: state for one browser
//! - [`SessionStore`]: thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use rental_portal::session::SessionStore;
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! session.sign_in(42, vec![7]);
//! assert!(session.is_favourite(7));
//! ```

mod store;

pub use store::{ChatMessage, Session, SessionStore, Speaker, CHAT_GREETING};

//! Session state for the approval portal.
//!
//! This crate owns everything between the domain engine and the
//! presentation layer: which identity is acting, which view is showing,
//! which month is selected, and the in-progress form buffers. The
//! presentation collaborator reads the queries and feeds [`Intent`] values
//! into [`Session::apply`]; it never touches the store directly.

pub mod forms;
pub mod identity;
pub mod intent;
pub mod navigation;
pub mod session;

pub use forms::{FormState, InvoiceForm};
pub use identity::resolve_role;
pub use intent::{Intent, IntentError, Outcome};
pub use navigation::View;
pub use session::Session;

//! Rollbook - Student Records Client
//!
//! Rollbook is the client half of a student-records application: it
//! authenticates users against a session-cookie backend, loads and
//! renders the student list, and submits create/update/delete requests,
//! turning HTTP status codes into user-visible outcomes.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types matching the backend's JSON contract
//!   - Student records, auth payloads, the mutation response envelope
//!   - Error types
//!
//! - **`client`** - The client itself
//!   - Session guard, form validators, CRUD API client
//!   - HTML renderer and transient notices
//!   - Page handlers wired to injected navigator/page capabilities
//!
//! # Usage
//!
//! An embedding shell provides the two capabilities (where the visitor
//! is, and the page elements to bind to) and hands control to the page
//! handlers:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rollbook::client::{pages, Config, PageContext};
//! # use rollbook::client::{Navigator, PageSurface};
//! # fn shell() -> (Arc<dyn Navigator>, Arc<dyn PageSurface>) { unimplemented!() }
//!
//! # async fn example() {
//! let (nav, surface) = shell();
//! let ctx = PageContext::new(Config::new(), nav, surface).expect("client");
//! pages::dispatch(&ctx).await;
//! # }
//! ```
//!
//! # Error Handling
//!
//! No failure is fatal to a page: validation errors, authorization
//! responses, server-side rejections and transport failures all end in a
//! visible notice or a redirect. Errors are typed in `shared::error` and
//! logged through `tracing`.

/// Wire types shared with the backend
pub mod shared;

/// Session guard, CRUD client, validators, renderer, notices, handlers
pub mod client;

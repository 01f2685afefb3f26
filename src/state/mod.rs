/// State management module
///
/// This module handles all application state:
/// - Window-based pagination over a listing (paging.rs)
/// - The session struct owned by the UI loop (session.rs)

pub mod paging;
pub mod session;

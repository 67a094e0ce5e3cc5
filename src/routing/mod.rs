//! Hash routing: the route table, the router, and history synchronization.

pub mod history;
pub mod route;
pub mod router;

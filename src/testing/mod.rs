pub mod instance;

// Endpoint tests drive the real service against an in-memory sqlite pool.
#[cfg(all(test, feature = "sqlite"))]
mod health;
#[cfg(all(test, feature = "sqlite"))]
mod movie;

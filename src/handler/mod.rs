// Request handling module entry point
// Dispatch plus index file serving

pub mod router;
pub mod static_files;

// Re-export the hyper service entry point
pub use router::handle_request;

//! `trackerd` - in-memory issue tracker HTTP service.
//!
//! All state lives in process memory and is discarded on exit. No
//! persistence, no authentication; intended as a local backend.

#[tokio::main]
async fn main() {
    if let Err(e) = tracker_rust::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

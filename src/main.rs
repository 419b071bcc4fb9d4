//! worklog main entrypoint.

use worklog::run;

fn main() {
    // Quit, a declined log file and a failed save all end here with status 0.
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

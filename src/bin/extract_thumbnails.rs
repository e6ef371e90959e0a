//! Simple CLI that reads cooked HTML from stdin and outputs the extraction
//! result as JSON to stdout. Useful for inspecting what a post would
//! contribute to search thumbnails.
//!
//! Usage: `extract_thumbnails [max_count] < cooked.html`

use search_thumbnails::{extract_with_options, Options};
use std::env;
use std::io::{self, Read};

fn main() {
    let mut options = Options::default();
    if let Some(arg) = env::args().nth(1) {
        match arg.parse() {
            Ok(max_count) => options.max_count = max_count,
            Err(_) => {
                eprintln!("Invalid max_count: {arg}");
                std::process::exit(1);
            }
        }
    }

    // Read cooked HTML from stdin
    let mut cooked = String::new();
    if io::stdin().read_to_string(&mut cooked).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let data = extract_with_options(&cooked, &options);
    println!("{}", serde_json::to_string(&data).unwrap_or_default());
}

//! Stamp a watermark onto a single image.
//!
//! Usage:
//! ```sh
//! cargo run --example stamp_watermark -- base.jpg logo.png output.jpg
//! ```

use std::env;
use std::process;

use watermark_stamp::{StampEngine, StampOptions};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <base> <watermark> <output>", args[0]);
        process::exit(1);
    }

    let engine = StampEngine::from_path(args[2].as_ref(), StampOptions::default())
        .expect("failed to prepare watermark");
    let result = engine.process_file(args[1].as_ref(), args[3].as_ref());

    if result.success {
        println!("Done: {}", result.message);
    } else {
        eprintln!("Error: {}", result.message);
        process::exit(1);
    }
}

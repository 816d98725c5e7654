//! Composite a watermark image onto base images.
//!
//! The watermark is optionally desaturated (with a brightness boost so the
//! gray comes out light), given partial transparency, shrunk by a percentage,
//! positioned by percentage coordinates anchored at its own center, and
//! alpha-composited onto the base image. The result is converted to a target
//! color model and saved, shown, or handed back as a value.
//!
//! # Quick Start
//!
//! ```no_run
//! use watermark_stamp::{StampEngine, StampOptions};
//!
//! let engine = StampEngine::from_path("logo.png".as_ref(), StampOptions::default())
//!     .expect("failed to prepare watermark");
//! let base = image::open("photo.jpg").unwrap();
//! let stamped = engine.apply(&base);
//! stamped.save("photo_stamped.jpg").unwrap();
//! ```
//!
//! # File-to-file with a report
//!
//! Stamping a file never panics and never prints; the outcome comes back as
//! a [`StampResult`] for the caller to surface.
//!
//! ```no_run
//! use watermark_stamp::{Percent, StampEngine, StampOptions};
//!
//! let options = StampOptions {
//!     opacity: Percent::new(60).unwrap(),
//!     grayscale: true,
//!     ..StampOptions::default()
//! };
//! let engine = StampEngine::from_path("logo.png".as_ref(), options).unwrap();
//! let result = engine.process_file("photo.jpg".as_ref(), "out/photo.jpg".as_ref());
//! println!("{}: {}", if result.success { "ok" } else { "failed" }, result.message);
//! ```

#![deny(missing_docs)]

mod engine;
pub mod error;
pub mod percent;
pub mod transform;

pub use engine::{
    default_output_path, is_supported_image, save_image, show_image, ColorModel, StampEngine,
    StampOptions, StampResult,
};
pub use error::{Error, Result};
pub use percent::Percent;

//! Configuration paths for repset.
//!
//! All repset data is stored in `~/.repset/`.

mod paths;

pub use paths::Paths;

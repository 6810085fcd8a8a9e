//! Unit tests mirroring the `src` tree, one file per source file

// Test modules are not public API
#![allow(missing_docs)]

mod metatile;

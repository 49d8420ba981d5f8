// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera transition engine for the viso 3D visualization stack.
//!
//! Animates a virtual camera from one view to another so that neither the
//! departure nor the arrival view is clipped or lost mid-flight. The engine
//! is a pure, deterministic per-frame function: it owns no timers, threads or
//! I/O and only advances when the host calls `tick` from its render loop.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - live camera owning its pose and transition manager
//! - [`camera::CameraSnapshot`] / [`camera::SnapshotChanges`] - complete and
//!   partial camera poses
//! - [`transition::CameraTransitionManager`] - the `apply` / `tick` state
//!   machine
//! - [`transition::TransitionFunction`] - shape (linear, size-relative,
//!   leaping) composed with ease-in/ease-out
//! - [`options::Options`] - TOML-backed camera and transition configuration
//!
//! # Architecture
//!
//! Each frame the manager normalizes elapsed time, eases it, and hands it to
//! the selected shape function, which writes a full interpolated snapshot.
//! Shapes interpolate the *visible sphere radius* rather than the camera
//! distance, and the leaping shape swells that radius mid-flight so a single
//! sphere contains both endpoint views.

pub mod camera;
pub mod error;
pub mod options;
pub mod transition;

pub use error::CameraError;

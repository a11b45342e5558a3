//! # Diffusion Chronometry
//!
//! Radial diffusion models that turn compositional zoning in mineral grains
//! into cooling durations, built as [Twine](https://github.com/isentropic-dev/twine)
//! models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models, including the
//!   tridiagonal solver, linear interpolation, and profile alignment.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful outside that model. Model-specific utility
//! code remains private.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and installs no logger.
//! Truncated grid radii and constant alignment sources are reported at
//! `warn`, per-solve and per-candidate detail at `debug`, and fit results at
//! `info`.

pub mod models;
pub mod support;

// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure layer renderers.
//!
//! Each renderer maps records through a [`Projection`](annals_projection::Projection)
//! into a fresh [`Layer`](crate::Layer). Rendering is idempotent: the same
//! inputs always produce the same layer, and the result replaces whatever was
//! drawn before. A renderer asked for a hidden layer returns an empty one.

pub mod axis;
pub mod dynasty;
pub mod poet;
pub mod ruler;

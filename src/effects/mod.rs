// SPDX-License-Identifier: MPL-2.0
//! Decorative visual effects.

pub mod particles;

// SPDX-License-Identifier: GPL-3.0-only
pub mod port;

pub use port::find_free_port;

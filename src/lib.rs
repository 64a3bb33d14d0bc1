// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd::run (pipeline)
//!                                      |
//!              +-----------+-----------+-----------+
//!              v           v           v           v
//!           config     core::env   core::process  inject
//!         PROXY_* vars  snapshot,   which, exec   NODE detect,
//!                       proxy vars                init script
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod inject;
pub mod logging;

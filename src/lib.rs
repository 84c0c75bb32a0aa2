// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod expense;
pub mod matching;
pub mod models;
pub mod split;
pub mod splitwise;
pub mod utils;
pub mod commands;

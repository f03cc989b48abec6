// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod answer;
pub mod cache;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod router;
pub mod search;
pub mod store;
pub mod summary;
pub mod utils;

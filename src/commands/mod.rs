// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod summary;
pub mod transactions;
pub mod exporter;
pub mod doctor;
pub mod chat;
pub mod settings;

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracklog: streaming ASCII/Unicode renderer for version-history graphs.
//!
//! A [`model::HistoryFeed`] (descendants before ancestors) is drawn top to bottom by a
//! [`render::GraphRenderer`], which assigns every node to a track column in a single pass.

pub mod format;
pub mod layout;
pub mod model;
pub mod render;

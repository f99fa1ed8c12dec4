// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Track allocation for history graphs.
//!
//! This module decides which column each node is drawn in and how open lineages move between
//! columns when they converge.

pub mod tracks;

pub use tracks::{Convergence, Resolution, ResolveError, TrackShift, TrackTable};

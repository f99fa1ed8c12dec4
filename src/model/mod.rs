// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! History data model.
//!
//! A feed is an ordered list of nodes (descendants before ancestors) with parent edges and the
//! child sets derived from them.

pub mod feed;
pub mod ids;
pub mod node;

pub use feed::{FeedError, HistoryFeed};
pub use ids::{IdError, NodeId};
pub use node::{compose_label, HistoryNode, ParentIds};

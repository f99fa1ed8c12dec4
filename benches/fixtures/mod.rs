// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracklog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracklog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use tracklog::model::{HistoryFeed, HistoryNode, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Linear,
    FeatureBranches,
    WideConvergence,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::FeatureBranches => "feature_branches",
            Self::WideConvergence => "wide_convergence",
        }
    }
}

/// Collects nodes oldest first (parents before children) and reverses them into feed order.
struct HistoryBuilder {
    created: Vec<HistoryNode>,
}

impl HistoryBuilder {
    fn new() -> Self {
        Self { created: Vec::new() }
    }

    fn commit(&mut self, parents: &[NodeId]) -> NodeId {
        let id = NodeId::new(format!("{:040x}", self.created.len() + 1)).expect("valid node id");
        let label = format!("commit {} touching src/module_{}.rs", self.created.len(), self.created.len() % 17);
        self.created.push(HistoryNode::new(id.clone(), parents.iter().cloned(), label));
        id
    }

    fn finish(mut self) -> HistoryFeed {
        self.created.reverse();
        HistoryFeed::from_nodes_strict(self.created).expect("valid feed")
    }
}

fn linear(len: usize) -> HistoryFeed {
    let mut history = HistoryBuilder::new();
    let mut head = history.commit(&[]);
    for _ in 1..len {
        head = history.commit(&[head]);
    }
    history.finish()
}

fn feature_branches(rounds: usize) -> HistoryFeed {
    let mut history = HistoryBuilder::new();
    let mut main = history.commit(&[]);
    for round in 0..rounds {
        let fork = main.clone();
        for _ in 0..2 {
            main = history.commit(&[main]);
        }
        let mut branch = fork;
        for _ in 0..(3 + round % 4) {
            branch = history.commit(&[branch]);
        }
        main = history.commit(&[main, branch]);
    }
    history.finish()
}

fn wide_convergence(tips: usize, depth: usize) -> HistoryFeed {
    let mut history = HistoryBuilder::new();
    let mut base = history.commit(&[]);
    for _ in 0..depth {
        let mut heads = Vec::with_capacity(tips);
        for _ in 0..tips {
            heads.push(history.commit(&[base.clone()]));
        }
        base = history.commit(&heads);
    }
    history.finish()
}

pub fn fixture(case: Case) -> HistoryFeed {
    match case {
        Case::Linear => linear(2_000),
        Case::FeatureBranches => feature_branches(200),
        Case::WideConvergence => wide_convergence(24, 40),
    }
}

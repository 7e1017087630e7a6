// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Layered left-to-right layout for one namespace subgraph.
//!
//!   1. Rank assignment by longest path from sources
//!   2. Ordering within ranks by barycenter sweeps
//!   3. Coordinate assignment, each rank centered on the tallest one
//!
//! Ties are always broken by node id, so identical input yields identical
//! positions. Positions are top-left corners with the content starting at
//! the origin.

use std::collections::HashSet;

use super::Position;
use crate::config::LayoutConfig;

/// Forward + backward sweep pairs used for crossing reduction.
const SWEEPS: usize = 2;

struct LayerGraph<'a> {
    n: usize,
    adj: Vec<Vec<usize>>,
    rev: Vec<Vec<usize>>,
    ids: &'a [String],
}

impl<'a> LayerGraph<'a> {
    fn new(ids: &'a [String], edges: &[(usize, usize)]) -> Self {
        let n = ids.len();
        let mut adj = vec![vec![]; n];
        let mut rev = vec![vec![]; n];
        for &(u, v) in edges {
            if u < n && v < n && u != v {
                adj[u].push(v);
                rev[v].push(u);
            }
        }
        for list in adj.iter_mut().chain(rev.iter_mut()) {
            list.sort_unstable();
            list.dedup();
        }
        Self { n, adj, rev, ids }
    }

    fn by_id(&self, nodes: &mut [usize]) {
        nodes.sort_by(|a, b| self.ids[*a].cmp(&self.ids[*b]));
    }
}

/// Lay out `ids` connected by `edges` (index pairs, source → target).
pub(crate) fn layered(ids: &[String], edges: &[(usize, usize)], config: &LayoutConfig) -> Vec<Position> {
    let graph = LayerGraph::new(ids, edges);
    if graph.n == 0 {
        return vec![];
    }
    let ranks = assign_ranks(&graph);
    let mut rank_order = build_rank_buckets(&graph, &ranks);
    for _ in 0..SWEEPS {
        sweep_forward(&graph, &mut rank_order);
        sweep_backward(&graph, &mut rank_order);
    }
    assign_coordinates(&rank_order, graph.n, config)
}

/// Kahn's algorithm; each node sits one rank after its furthest predecessor.
fn assign_ranks(graph: &LayerGraph<'_>) -> Vec<usize> {
    let n = graph.n;
    let mut in_degree: Vec<usize> = graph.rev.iter().map(Vec::len).collect();
    let mut queue: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    graph.by_id(&mut queue);

    let mut ranks = vec![0usize; n];
    let mut visited = HashSet::with_capacity(n);
    let mut head = 0;
    while head < queue.len() {
        let u = queue[head];
        head += 1;
        visited.insert(u);

        let mut successors = graph.adj[u].clone();
        graph.by_id(&mut successors);
        for v in successors {
            ranks[v] = ranks[v].max(ranks[u] + 1);
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push(v);
            }
        }
    }

    // Nodes on a cycle never reach in-degree zero; park them after the last rank.
    if visited.len() < n {
        let max_rank = ranks.iter().copied().max().unwrap_or(0);
        for (v, rank) in ranks.iter_mut().enumerate() {
            if !visited.contains(&v) {
                *rank = max_rank + 1;
            }
        }
    }
    ranks
}

fn build_rank_buckets(graph: &LayerGraph<'_>, ranks: &[usize]) -> Vec<Vec<usize>> {
    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut buckets = vec![vec![]; max_rank + 1];
    for (v, &r) in ranks.iter().enumerate() {
        buckets[r].push(v);
    }
    for bucket in &mut buckets {
        graph.by_id(bucket);
    }
    buckets
}

fn positions_of(order: &[usize], n: usize) -> Vec<Option<usize>> {
    let mut positions = vec![None; n];
    for (pos, &node) in order.iter().enumerate() {
        positions[node] = Some(pos);
    }
    positions
}

/// Mean position of `neighbors` in the adjacent rank, if any are there.
fn barycenter(positions: &[Option<usize>], neighbors: &[usize]) -> Option<f64> {
    let placed: Vec<usize> = neighbors.iter().filter_map(|&nb| positions[nb]).collect();
    if placed.is_empty() {
        return None;
    }
    Some(placed.iter().sum::<usize>() as f64 / placed.len() as f64)
}

/// Reorder `rank` by barycenter of `neighbors` in `reference`. Nodes without
/// neighbors there keep their current slot as their score.
fn reorder(graph: &LayerGraph<'_>, rank: &mut Vec<usize>, reference: &[usize], forward: bool) {
    let positions = positions_of(reference, graph.n);
    let mut scored: Vec<(usize, f64)> = rank
        .iter()
        .enumerate()
        .map(|(slot, &v)| {
            let neighbors = if forward { &graph.rev[v] } else { &graph.adj[v] };
            (v, barycenter(&positions, neighbors).unwrap_or(slot as f64))
        })
        .collect();
    scored.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| graph.ids[a.0].cmp(&graph.ids[b.0]))
    });
    *rank = scored.into_iter().map(|(v, _)| v).collect();
}

fn sweep_forward(graph: &LayerGraph<'_>, rank_order: &mut [Vec<usize>]) {
    for r in 1..rank_order.len() {
        let (before, after) = rank_order.split_at_mut(r);
        reorder(graph, &mut after[0], &before[r - 1], true);
    }
}

fn sweep_backward(graph: &LayerGraph<'_>, rank_order: &mut [Vec<usize>]) {
    for r in (0..rank_order.len().saturating_sub(1)).rev() {
        let (before, after) = rank_order.split_at_mut(r + 1);
        reorder(graph, &mut before[r], &after[0], false);
    }
}

fn assign_coordinates(rank_order: &[Vec<usize>], n: usize, config: &LayoutConfig) -> Vec<Position> {
    let mut positions = vec![Position::default(); n];
    let rank_step = config.node_width + config.rank_gap;
    let slot_step = config.node_height + config.node_gap;

    let span = |count: usize| {
        if count == 0 {
            0.0
        } else {
            count as f64 * config.node_height + (count - 1) as f64 * config.node_gap
        }
    };
    let tallest = rank_order.iter().map(|r| span(r.len())).fold(0.0_f64, f64::max);

    for (r, nodes) in rank_order.iter().enumerate() {
        let shift = (tallest - span(nodes.len())) / 2.0;
        for (slot, &v) in nodes.iter().enumerate() {
            positions[v] = Position::new(r as f64 * rank_step, shift + slot as f64 * slot_step);
        }
    }
    positions
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

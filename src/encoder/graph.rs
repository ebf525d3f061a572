//! Layered segment graph and its shortest path
//!
//! One layer per raw run; each layer holds one node per mode the run could
//! be encoded in. Edge weights are the bits a transition adds to the
//! stream, so the cheapest start-to-end path is the cheapest mode plan.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::modes::Mode;
use super::segments::Run;
use crate::error::{EncodeError, Result};
use crate::models::Version;

/// Mode indicator width
const MODE_BITS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub mode: Mode,
    /// Index of the raw run this node encodes; `None` for start and end
    pub run: Option<usize>,
    /// Characters (bytes in Byte mode)
    pub len: usize,
    /// `len` plus the run length of the same-mode node one layer back
    pub run_len: usize,
}

#[derive(Debug, Clone)]
pub struct SegmentGraph {
    nodes: Vec<Node>,
    edges: Vec<Vec<(usize, u32)>>,
}

impl SegmentGraph {
    pub const START: usize = 0;
    pub const END: usize = 1;

    /// Build the layered graph for `runs` at `version`
    pub fn build(runs: &[Run], version: Version) -> Self {
        let terminal = |run: Option<usize>| Node {
            mode: Mode::Byte,
            run,
            len: 0,
            run_len: 0,
        };
        let mut graph = Self {
            nodes: vec![terminal(None), terminal(None)],
            edges: vec![Vec::new(), Vec::new()],
        };

        let mut previous: Vec<usize> = vec![Self::START];
        for (index, run) in runs.iter().enumerate() {
            let mut layer = Vec::new();
            for (mode, len) in candidates(run) {
                let carried = previous
                    .iter()
                    .map(|&p| &graph.nodes[p])
                    .find(|p| p.run.is_some() && p.mode == mode)
                    .map_or(0, |p| p.run_len);
                let id = graph.push(Node {
                    mode,
                    run: Some(index),
                    len,
                    run_len: len + carried,
                });

                for &p in &previous {
                    let weight = graph.edge_weight(p, id, version);
                    graph.edges[p].push((id, weight));
                }
                layer.push(id);
            }
            previous = layer;
        }

        for &p in &previous {
            graph.edges[p].push((Self::END, 0));
        }
        graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self, node: usize) -> &[(usize, u32)] {
        &self.edges[node]
    }

    /// Dijkstra from start to end; returns the inner nodes on the path
    ///
    /// Ties keep the predecessor found first.
    pub fn shortest_path(&self) -> Result<Vec<usize>> {
        let mut dist = vec![u32::MAX; self.nodes.len()];
        let mut prev: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut done = vec![false; self.nodes.len()];
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        dist[Self::START] = 0;
        heap.push(Reverse((0u32, seq, Self::START)));

        while let Some(Reverse((cost, _, node))) = heap.pop() {
            if done[node] {
                continue;
            }
            done[node] = true;
            if node == Self::END {
                break;
            }

            for &(next, weight) in &self.edges[node] {
                let candidate = cost.saturating_add(weight);
                if candidate < dist[next] {
                    dist[next] = candidate;
                    prev[next] = Some(node);
                    seq += 1;
                    heap.push(Reverse((candidate, seq, next)));
                }
            }
        }

        if !done[Self::END] {
            return Err(EncodeError::InternalGraph("end node unreachable"));
        }

        let mut path = Vec::new();
        let mut current = prev[Self::END];
        while let Some(node) = current {
            if node == Self::START {
                break;
            }
            path.push(node);
            current = prev[node];
        }
        if current.is_none() {
            return Err(EncodeError::InternalGraph("path does not lead back to start"));
        }
        path.reverse();
        Ok(path)
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.edges.push(Vec::new());
        self.nodes.len() - 1
    }

    fn edge_weight(&self, from: usize, to: usize, version: Version) -> u32 {
        let a = &self.nodes[from];
        let b = &self.nodes[to];
        let bits = if a.run.is_some() && a.mode == b.mode {
            b.mode.bits_length(a.run_len + b.len) - b.mode.bits_length(a.run_len)
        } else {
            MODE_BITS + b.mode.char_count_bits(version) + b.mode.bits_length(b.len)
        };
        bits as u32
    }
}

/// Modes a raw run may be encoded in, with the length in that mode
fn candidates(run: &Run) -> Vec<(Mode, usize)> {
    let chars = run.text.chars().count();
    let bytes = run.text.len();
    match run.mode {
        Mode::Numeric => vec![
            (Mode::Numeric, chars),
            (Mode::Alphanumeric, chars),
            (Mode::Byte, bytes),
        ],
        Mode::Alphanumeric => vec![(Mode::Alphanumeric, chars), (Mode::Byte, bytes)],
        Mode::Kanji => vec![(Mode::Kanji, chars), (Mode::Byte, bytes)],
        Mode::Byte => vec![(Mode::Byte, bytes)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: Mode, text: &str) -> Run {
        Run {
            mode,
            text: text.to_string(),
        }
    }

    fn v1() -> Version {
        Version::new(1).unwrap()
    }

    #[test]
    fn test_layer_sizes() {
        let runs = vec![
            run(Mode::Numeric, "123"),
            run(Mode::Alphanumeric, "AB"),
            run(Mode::Byte, "ab"),
        ];
        let graph = SegmentGraph::build(&runs, v1());
        // start + end + 3 + 2 + 1
        assert_eq!(graph.nodes().len(), 8);
        assert_eq!(graph.edges(SegmentGraph::START).len(), 3);
    }

    #[test]
    fn test_start_edge_weights() {
        let graph = SegmentGraph::build(&[run(Mode::Numeric, "12345")], v1());
        let weights: Vec<u32> = graph.edges(SegmentGraph::START).iter().map(|e| e.1).collect();
        // 4 + cci + payload: numeric 10+17, alphanumeric 9+28, byte 8+40
        assert_eq!(weights, vec![31, 41, 52]);
    }

    #[test]
    fn test_same_mode_edge_is_incremental() {
        let runs = vec![run(Mode::Numeric, "12"), run(Mode::Alphanumeric, "A")];
        let graph = SegmentGraph::build(&runs, v1());
        // Alphanumeric node of layer 0 followed by alphanumeric node of layer 1
        let from = 3;
        let to = graph
            .edges(from)
            .iter()
            .find(|&&(id, _)| graph.nodes()[id].mode == Mode::Alphanumeric)
            .copied()
            .unwrap();
        assert_eq!(graph.nodes()[to.0].run_len, 3);
        // bits(3) - bits(2) = 17 - 11
        assert_eq!(to.1, 6);
    }

    #[test]
    fn test_shortest_path_prefers_numeric() {
        let graph = SegmentGraph::build(&[run(Mode::Numeric, "0123456789")], v1());
        let path = graph.shortest_path().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(graph.nodes()[path[0]].mode, Mode::Numeric);
    }

    #[test]
    fn test_empty_graph() {
        let graph = SegmentGraph::build(&[], v1());
        assert_eq!(graph.shortest_path().unwrap(), Vec::<usize>::new());
    }
}

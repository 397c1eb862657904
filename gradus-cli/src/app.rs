use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gradus - classical graph problems on whitespace-separated input
///
/// Every command reads its problem instance from standard input (or
/// `--input`) and writes the answer to standard output. Vertices are
/// numbered from 1 unless a command says otherwise.
#[derive(Debug, Parser)]
#[command(name = "gradus", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Enable verbose (debug-level) logging output on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read the problem instance from a file instead of standard input.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Shortest path in an undirected graph: `n m`, `s t`, then `m` edges.
    Path,

    /// Whether an undirected graph is 2-colorable: `n m`, then `m` edges.
    Bipartite,

    /// Shortest knight's tour between two squares: `N`, `x1 y1`, `x2 y2`.
    Knight,

    /// Shortest sequence of digit moves between two four-digit numbers.
    Digits,

    /// Distance of every cell to the nearest station: `h w`, then a 0/1 grid.
    Subway,

    /// Minimum number of slides from `S` to `T`: `h w`, then `h` rows of
    /// `w` tiles out of `.#ST`. Tiles of a row may be separated by
    /// whitespace, but one word must not continue into the next row.
    Slide,

    /// Number of plateaus without a lower neighbor: `h w`, then heights.
    Drains,

    /// Shortest distance with small integer weights: `n m`, `s t`, then `m`
    /// weighted directed edges.
    Bounded {
        /// Largest edge weight allowed in the input.
        #[arg(long, default_value_t = 10)]
        max_weight: usize,
    },

    /// Minimum number of edge reversals per query: `n m`, `m` directed edges,
    /// `q`, then `q` pairs.
    Reversals,

    /// Find a cycle in a directed graph: `n m`, then `m` edges.
    Cycle,

    /// Number of cycles of a function: `n`, then `n` successors.
    Functional,

    /// Connected components of an undirected graph: `n m`, then `m` edges.
    Components,

    /// Topological order of a directed graph: `n m`, then `m` edges.
    Toposort,

    /// Whether a complete map of one-way red and blue roads is acyclic: `N`,
    /// then `N - 1` rows of `R` and `B`.
    Roads,

    /// Strongly connected components of a directed graph: `n m`, then `m`
    /// edges.
    Scc,

    /// Articulation points of an undirected graph: `n m`, then `m` edges.
    Cutpoints,

    /// Minimum number of edges to add so that no bridge remains: `n m`, then
    /// `m` edges.
    Augment,

    /// Triples whose removal disconnects their members: `n m`, then `m`
    /// triples.
    Triples,

    /// Bridges of an undirected graph: `n m`, then `m` edges.
    Bridges,

    /// Euler circuit over a set of routes: `k n`, then `k` routes of `len`
    /// followed by `len + 1` vertices.
    Euler,
}

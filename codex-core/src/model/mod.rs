//! Sample analysis and word synthesis.
//!
//! - Glyph inventory and word decomposition (`sounds`)
//! - Transition graph construction (`graph`)
//! - Traits of a sample and both synthesizers (`traits`)
//! - Configuration (`options`)
//! - A high-level generation interface (`Generator`)

/// High-level interface owning the traits of a sample and a random source.
pub mod generator;

/// Configuration of glyph inventory, length bounds and sample exclusion.
pub mod options;

/// Glyph set derivation and greedy digraph-first decomposition.
pub mod sounds;

/// Transition pairs, symmetrization and neighbour lookups.
pub mod graph;

/// Phonetic traits of a sample: glyphs plus a symmetric transition graph.
///
/// Provides exhaustive (`words`) and bounded random (`words_n`) synthesis.
pub mod traits;

/// Early exit out of deep recursive searches.
///
/// This module is not exposed publicly.
mod interrupt;

/// Depth-first traversal shared by both synthesizers.
///
/// This module is not exposed publicly.
mod walker;

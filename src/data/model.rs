use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Number of coordinates in a Global25 vector.
pub const DIMS: usize = 25;

// ---------------------------------------------------------------------------
// Sample – one admitted input line
// ---------------------------------------------------------------------------

/// A named G25 coordinate vector.
///
/// Samples produced by the loader always hold exactly [`DIMS`] finite values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub name: String,
    pub vector: Vec<f64>,
}

impl Sample {
    pub fn new(name: impl Into<String>, vector: Vec<f64>) -> Self {
        Sample {
            name: name.into(),
            vector,
        }
    }
}

// ---------------------------------------------------------------------------
// Group counts – diagnostic output of grouped averaging
// ---------------------------------------------------------------------------

/// Group label → number of member samples, ordered by label.
pub type GroupCounts = BTreeMap<String, usize>;

// ---------------------------------------------------------------------------
// AverageMode
// ---------------------------------------------------------------------------

/// How samples are weighted in the final average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AverageMode {
    /// Every sample counts equally.
    Simple,
    /// Samples are averaged per group first, then every group counts equally.
    Grouped,
}

impl fmt::Display for AverageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageMode::Simple => write!(f, "simple"),
            AverageMode::Grouped => write!(f, "grouped"),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregate – the result of one averaging run
// ---------------------------------------------------------------------------

/// Averaged vector plus what went into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub mode: AverageMode,
    pub sample_count: usize,
    /// Present only for [`AverageMode::Grouped`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_counts: Option<GroupCounts>,
    pub vector: Vec<f64>,
}

use serde::{Deserialize, Serialize};

/// Three-step scale shared by sentence density and reading difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

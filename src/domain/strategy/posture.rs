//! Four-way strategic posture and the nine-region IE grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Midpoint on both axes for the four-way posture.
pub const POSTURE_MIDPOINT: f64 = 3.0;

/// Lower and upper IE grid thresholds, shared by both axes.
pub const IE_LOWER: f64 = 2.0;
pub const IE_UPPER: f64 = 3.0;

/// Posture selected from the (IFE, EFE) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicPosture {
    Growth,
    Turnaround,
    Defensive,
    Survival,
}

impl StrategicPosture {
    /// Total over all real pairs; `>=` sides are inclusive.
    pub fn classify(ife: f64, efe: f64) -> Self {
        let strong_internal = ife >= POSTURE_MIDPOINT;
        let strong_external = efe >= POSTURE_MIDPOINT;
        match (strong_internal, strong_external) {
            (true, true) => StrategicPosture::Growth,
            (false, true) => StrategicPosture::Turnaround,
            (true, false) => StrategicPosture::Defensive,
            (false, false) => StrategicPosture::Survival,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrategicPosture::Growth => "Growth Strategy",
            StrategicPosture::Turnaround => "Turnaround Strategy",
            StrategicPosture::Defensive => "Defensive Strategy",
            StrategicPosture::Survival => "Survival Strategy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategicPosture::Growth => "Strong internal position facing favourable conditions; pursue growth and new opportunities.",
            StrategicPosture::Turnaround => "Favourable conditions but weak internal position; fix internal weaknesses to capture them.",
            StrategicPosture::Defensive => "Strong internal position facing unfavourable conditions; protect current strengths.",
            StrategicPosture::Survival => "Weak internal position facing unfavourable conditions; stabilise operations first.",
        }
    }
}

impl fmt::Display for StrategicPosture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Recommended action attached to an IE grid region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IeAction {
    Grow,
    Hold,
    Harvest,
    Exit,
}

impl IeAction {
    pub fn label(&self) -> &'static str {
        match self {
            IeAction::Grow => "Grow",
            IeAction::Hold => "Hold",
            IeAction::Harvest => "Harvest",
            IeAction::Exit => "Exit",
        }
    }

    /// Coarse strategy written to exports: Harvest and Exit share one label.
    pub fn export_strategy(&self) -> &'static str {
        match self {
            IeAction::Grow => "Grow",
            IeAction::Hold => "Hold",
            IeAction::Harvest | IeAction::Exit => "Harvest/Exit",
        }
    }
}

/// One of the nine cells of the Internal-External grid.
///
/// Rows are selected by EFE (I-III high, IV-VI medium, VII-IX low) and
/// columns by IFE (strong, average, weak).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IeRegion {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
}

impl IeRegion {
    /// Locates the region for an (IFE, EFE) pair.
    pub fn locate(ife: f64, efe: f64) -> Self {
        let column = if ife >= IE_UPPER {
            0
        } else if ife >= IE_LOWER {
            1
        } else {
            2
        };
        let row = if efe >= IE_UPPER {
            0
        } else if efe >= IE_LOWER {
            1
        } else {
            2
        };
        Self::from_cell(row, column)
    }

    fn from_cell(row: usize, column: usize) -> Self {
        const GRID: [[IeRegion; 3]; 3] = [
            [IeRegion::I, IeRegion::II, IeRegion::III],
            [IeRegion::IV, IeRegion::V, IeRegion::VI],
            [IeRegion::VII, IeRegion::VIII, IeRegion::IX],
        ];
        GRID[row.min(2)][column.min(2)]
    }

    pub fn numeral(&self) -> &'static str {
        match self {
            IeRegion::I => "I",
            IeRegion::II => "II",
            IeRegion::III => "III",
            IeRegion::IV => "IV",
            IeRegion::V => "V",
            IeRegion::VI => "VI",
            IeRegion::VII => "VII",
            IeRegion::VIII => "VIII",
            IeRegion::IX => "IX",
        }
    }

    pub fn action(&self) -> IeAction {
        match self {
            IeRegion::I | IeRegion::II | IeRegion::IV => IeAction::Grow,
            IeRegion::III | IeRegion::V | IeRegion::VII => IeAction::Hold,
            IeRegion::VI | IeRegion::VIII => IeAction::Harvest,
            IeRegion::IX => IeAction::Exit,
        }
    }

    /// Label such as `"V (Hold)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.numeral(), self.action().label())
    }
}

impl fmt::Display for IeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

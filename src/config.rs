//! Tunables and launch parameters.

use crate::error::LoadError;

/// Directory plan and piece paths are resolved against (the page lives one level down).
pub const ASSET_BASE: &str = "../";
/// Id of the canvas element the board draws into.
pub const CANVAS_ID: &str = "puzzleCanvas";

/// Gameplay constants. `Default` gives the stock board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardRules {
    /// Canvas size relative to the target area; the surplus becomes the staging border.
    pub staging_factor: f64,
    /// A dropped piece snaps when both axis deltas are strictly below this.
    pub snap_tolerance: f64,
    /// Fraction of a piece's width/height ignored on each side when grabbing.
    pub grab_inset: f64,
    /// Delay before the completion notice so the final snap gets painted.
    pub win_delay_ms: u32,
}

impl Default for BoardRules {
    fn default() -> Self {
        Self {
            staging_factor: 1.5,
            snap_tolerance: 30.0,
            grab_inset: 0.25,
            win_delay_ms: 100,
        }
    }
}

/// What the hosting page asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub plan: String,
    pub seed: Option<u64>,
    pub asset_base: String,
}

impl LaunchOptions {
    /// Build from a query-parameter lookup (`?plan=...&seed=...`).
    pub fn from_query<F>(get: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let plan = get("plan")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(LoadError::MissingPlanParameter)?;
        let seed = match get("seed").map(|s| s.trim().to_string()) {
            Some(raw) if !raw.is_empty() => {
                Some(raw.parse::<u64>().map_err(|_| LoadError::InvalidSeed(raw))?)
            }
            _ => None,
        };
        Ok(Self {
            plan,
            seed,
            asset_base: ASSET_BASE.to_string(),
        })
    }

    pub fn plan_url(&self) -> String {
        self.asset_url(&self.plan)
    }

    pub fn asset_url(&self, rel: &str) -> String {
        format!("{}{}", self.asset_base, rel)
    }
}

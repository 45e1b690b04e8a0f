//! Analysis and computation configuration

/// Physical bounds of the archive. Slot numbers start at 1.
#[derive(Clone, Copy, Debug)]
pub struct SlotBounds {
    pub max_rack: u32,
    pub max_shelf: u32,
}

/// Weights of the position-difficulty score:
/// `(shelf_base - shelf) * shelf_weight + rack * rack_weight`.
#[derive(Clone, Copy, Debug)]
pub struct DifficultyWeights {
    pub shelf_base: f64,
    pub shelf_weight: f64,
    pub rack_weight: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct RecommendationSettings {
    /// Share of the rack range a top-frequency company can move towards rack 1.
    /// 0.8 caps the best achievable rack at 20% of `max_rack`.
    pub rack_frequency_factor: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct StatisticsSettings {
    /// Below this many companies the normality test is not run (p-value is NaN).
    pub normality_min_samples: usize,
    /// Eigenvalues below `cutoff * largest` are treated as zero by the least-squares solve.
    pub pinv_relative_cutoff: f64,
}

/// The Master Analysis Configuration
#[derive(Clone, Copy, Debug)]
pub struct AnalysisConfig {
    pub slots: SlotBounds,
    pub difficulty: DifficultyWeights,
    pub recommendation: RecommendationSettings,
    pub statistics: StatisticsSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    slots: SlotBounds {
        max_rack: 48,
        max_shelf: 12,
    },

    difficulty: DifficultyWeights {
        shelf_base: 13.0,
        shelf_weight: 0.7,
        rack_weight: 0.3,
    },

    recommendation: RecommendationSettings {
        rack_frequency_factor: 0.8,
    },

    statistics: StatisticsSettings {
        normality_min_samples: 8,
        pinv_relative_cutoff: 1e-10,
    },
};

//! Level progression derived from accumulated experience.

/// Derived level fields for a given experience total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: i32,
    /// Experience still required to reach `level + 1`
    pub until_next_level: i32,
}

/// Compute level and experience-to-next-level.
///
/// `level = trunc((sqrt(2500 + 200 * experience) - 50) / 100)`, evaluated in
/// floating point and truncated toward zero. The level threshold for `n` is
/// `50 * n * (n + 1)`, so `until_next_level = 50 * (level + 1) * (level + 2) - experience`.
///
/// ```
/// use roster_domain::compute_level;
///
/// let progress = compute_level(0);
/// assert_eq!(progress.level, 0);
/// assert_eq!(progress.until_next_level, 100);
/// ```
pub fn compute_level(experience: i32) -> LevelProgress {
    let root = (2500.0 + 200.0 * f64::from(experience)).sqrt();
    let level = ((root - 50.0) / 100.0) as i32;
    let until_next_level = 50 * (level + 1) * (level + 2) - experience;
    LevelProgress {
        level,
        until_next_level,
    }
}

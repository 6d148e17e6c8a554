use icy_core::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Scan(Platform),
    Analyze,
    Rank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub label: String,
    /// Progress reported once this step begins.
    pub progress: u8,
}

/// One scan step per platform, then analysis and ranking.
///
/// Step `i` of `n` reports `((i + 1) * 100) / n`, so the last step is 100.
#[must_use]
pub fn plan_steps(platforms: &[Platform]) -> Vec<Step> {
    let kinds: Vec<StepKind> = platforms
        .iter()
        .map(|p| StepKind::Scan(*p))
        .chain([StepKind::Analyze, StepKind::Rank])
        .collect();
    let total = kinds.len();

    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let label = match kind {
                StepKind::Scan(platform) => format!("Scanning {}...", platform.display_name()),
                StepKind::Analyze => "Analyzing content...".to_string(),
                StepKind::Rank => "Calculating matches...".to_string(),
            };
            let progress = u8::try_from(((i + 1) * 100) / total).unwrap_or(100);
            Step {
                kind,
                label,
                progress,
            }
        })
        .collect()
}

/// Records requested from each platform: an even share of `max_results`,
/// never less than one.
#[must_use]
pub fn platform_quota(max_results: usize, platform_count: usize) -> usize {
    (max_results / platform_count.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_platforms_make_four_steps() {
        let steps = plan_steps(&[Platform::Instagram, Platform::Youtube]);
        let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Scanning Instagram...",
                "Scanning YouTube...",
                "Analyzing content...",
                "Calculating matches..."
            ]
        );
        let progress: Vec<u8> = steps.iter().map(|s| s.progress).collect();
        assert_eq!(progress, vec![25, 50, 75, 100]);
    }

    #[test]
    fn progress_rounds_down_and_ends_at_100() {
        let steps = plan_steps(&[Platform::Instagram]);
        let progress: Vec<u8> = steps.iter().map(|s| s.progress).collect();
        assert_eq!(progress, vec![33, 66, 100]);
    }

    #[test]
    fn progress_is_non_decreasing_for_many_platforms() {
        let steps = plan_steps(&[
            Platform::Instagram,
            Platform::Youtube,
            Platform::Tiktok,
            Platform::Twitter,
            Platform::Linkedin,
        ]);
        assert!(steps.windows(2).all(|w| w[0].progress <= w[1].progress));
        assert_eq!(steps.last().map(|s| s.progress), Some(100));
    }

    #[test]
    fn quota_splits_evenly_with_floor_of_one() {
        assert_eq!(platform_quota(10, 1), 10);
        assert_eq!(platform_quota(25, 2), 12);
        assert_eq!(platform_quota(1, 2), 1);
        assert_eq!(platform_quota(5, 0), 5);
    }
}

//! Frame sampling over a target interval.

/// Selects which source frames to analyze.
///
/// One frame is sampled every `max(1, round(fps * interval))` frames,
/// starting at frame 0, so sampling is never denser than one per video
/// frame and frame 0 is always included.
#[derive(Debug, Clone, Copy)]
pub struct FrameSampler {
    step: u64,
}

impl FrameSampler {
    /// Create a sampler for the given frame rate and target interval.
    pub fn new(fps: f64, interval: f64) -> Self {
        let step = (fps * interval).round();
        let step = if step.is_finite() && step >= 1.0 {
            step as u64
        } else {
            1
        };
        Self { step }
    }

    /// Sampling step in source frames.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Whether the given source frame index is sampled.
    pub fn is_sampled(&self, index: u64) -> bool {
        index % self.step == 0
    }

    /// Monotonically increasing sampled frame indices for a video of
    /// `total_frames` frames.
    pub fn indices(&self, total_frames: u64) -> impl Iterator<Item = u64> + '_ {
        (0..total_frames).step_by(self.step as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rounds_fps_times_interval() {
        assert_eq!(FrameSampler::new(30.0, 0.5).step(), 15);
        assert_eq!(FrameSampler::new(29.97, 0.5).step(), 15);
        assert_eq!(FrameSampler::new(10.0, 0.5).step(), 5);
        assert_eq!(FrameSampler::new(24.0, 1.0).step(), 24);
    }

    #[test]
    fn test_step_never_below_one_frame() {
        // Interval shorter than one frame period
        assert_eq!(FrameSampler::new(10.0, 0.01).step(), 1);
        assert_eq!(FrameSampler::new(1.0, 0.0).step(), 1);
    }

    #[test]
    fn test_indices_start_at_zero_and_are_monotone() {
        let sampler = FrameSampler::new(10.0, 0.5);
        let indices: Vec<u64> = sampler.indices(23).collect();
        assert_eq!(indices, vec![0, 5, 10, 15, 20]);

        // A single-frame video still samples frame 0
        let indices: Vec<u64> = sampler.indices(1).collect();
        assert_eq!(indices, vec![0]);

        // Empty video samples nothing
        assert_eq!(sampler.indices(0).count(), 0);
    }

    #[test]
    fn test_is_sampled_matches_indices() {
        let sampler = FrameSampler::new(30.0, 0.5);
        for index in sampler.indices(100) {
            assert!(sampler.is_sampled(index));
        }
        assert!(!sampler.is_sampled(1));
        assert!(!sampler.is_sampled(14));
    }
}

use crate::config::ConfigError;
use crate::direction::{Direction, DIRECTION_COUNT};
use crate::filters::{box_blur, gradient_magnitude};
use crate::image::ImageF32;

/// The four target images and their precomputed edge maps.
///
/// Targets are stored in [`Direction::ALL`] order. The edge map of each
/// target is `gradient_magnitude(box_blur(target))`, the same filter chain
/// the objective applies to the shadow slices.
#[derive(Clone, Debug)]
pub struct TargetSet {
    grid_size: usize,
    targets: [ImageF32; DIRECTION_COUNT],
    filtered: [ImageF32; DIRECTION_COUNT],
}

impl TargetSet {
    /// Validate shapes and precompute the filtered targets.
    pub fn new(targets: Vec<ImageF32>) -> Result<Self, ConfigError> {
        let targets: [ImageF32; DIRECTION_COUNT] = targets
            .try_into()
            .map_err(|v: Vec<ImageF32>| ConfigError::WrongTargetCount { found: v.len() })?;
        let grid_size = targets[0].w;
        for (index, t) in targets.iter().enumerate() {
            if !t.is_square_of(grid_size) || grid_size == 0 {
                return Err(ConfigError::TargetSizeMismatch {
                    index,
                    width: t.w,
                    height: t.h,
                    grid_size,
                });
            }
        }
        let filtered = std::array::from_fn(|i| gradient_magnitude(&box_blur(&targets[i])));
        Ok(Self {
            grid_size,
            targets,
            filtered,
        })
    }

    /// Same target for every direction.
    pub fn uniform(target: ImageF32) -> Result<Self, ConfigError> {
        Self::new(vec![target; DIRECTION_COUNT])
    }

    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[inline]
    pub fn target(&self, direction: Direction) -> &ImageF32 {
        &self.targets[direction.index()]
    }

    #[inline]
    pub fn filtered(&self, direction: Direction) -> &ImageF32 {
        &self.filtered[direction.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_count_and_shape() {
        let img = ImageF32::new(4, 4);
        assert_eq!(
            TargetSet::new(vec![img.clone(); 3]).unwrap_err(),
            ConfigError::WrongTargetCount { found: 3 }
        );
        let mut set = vec![img.clone(); 4];
        set[2] = ImageF32::new(4, 5);
        assert!(matches!(
            TargetSet::new(set),
            Err(ConfigError::TargetSizeMismatch { index: 2, .. })
        ));
    }

    #[test]
    fn flat_targets_have_no_edges() {
        let set = TargetSet::uniform(ImageF32::filled(6, 6, 0.5)).unwrap();
        assert_eq!(set.grid_size(), 6);
        for d in Direction::ALL {
            assert!(set.filtered(d).data.iter().all(|v| v.abs() < 1e-6));
        }
    }
}

//! Main-axis arrangement of children.

/// Places a sequence of child sizes along the main axis.
pub trait Arrangement {
    /// Writes the main-axis offset of every child into `out_positions`.
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LinearArrangement {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    SpacedBy(f32),
}

impl LinearArrangement {
    pub fn spaced_by(spacing: f32) -> Self {
        LinearArrangement::SpacedBy(spacing.max(0.0))
    }

    /// Fixed gap between consecutive children, if any.
    pub fn spacing(&self) -> f32 {
        match self {
            LinearArrangement::SpacedBy(spacing) => *spacing,
            _ => 0.0,
        }
    }

    /// Main-axis size needed for `sizes` with this arrangement's fixed gaps.
    pub fn content_size(&self, sizes: &[f32]) -> f32 {
        let gaps = sizes.len().saturating_sub(1) as f32;
        sizes.iter().sum::<f32>() + gaps * self.spacing()
    }
}

impl Arrangement for LinearArrangement {
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        if sizes.is_empty() {
            return;
        }
        let count = sizes.len() as f32;
        let occupied: f32 = sizes.iter().sum();
        let free = (total_size - occupied).max(0.0);
        let (leading, gap) = match self {
            LinearArrangement::Start => (0.0, 0.0),
            LinearArrangement::End => (free, 0.0),
            LinearArrangement::Center => (free / 2.0, 0.0),
            LinearArrangement::SpaceBetween => {
                if sizes.len() > 1 {
                    (0.0, free / (count - 1.0))
                } else {
                    (0.0, 0.0)
                }
            }
            LinearArrangement::SpaceAround => {
                let gap = free / count;
                (gap / 2.0, gap)
            }
            LinearArrangement::SpaceEvenly => {
                let gap = free / (count + 1.0);
                (gap, gap)
            }
            LinearArrangement::SpacedBy(spacing) => (0.0, *spacing),
        };
        let mut cursor = leading;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + gap;
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;

use crate::domain::models::{ActivitySegment, LaidOutSegment, LayoutConfig, LayoutMode};

/// Assign a vertical position to every segment, in the order given.
///
/// Proportional mode maps minutes directly onto the timeline; stacked mode
/// (the default) advances a running cursor by each block's height plus the
/// minimum gap, so no two blocks can ever occupy overlapping vertical space.
pub fn layout_segments(
    segments: &[ActivitySegment],
    config: &LayoutConfig,
) -> Vec<LaidOutSegment> {
    let px_per_minute = config.px_per_minute();

    match config.mode {
        LayoutMode::Proportional => segments
            .iter()
            .map(|segment| LaidOutSegment {
                top: f64::from(segment.start_minute) * px_per_minute,
                height: block_height(segment, px_per_minute, config),
                segment: segment.clone(),
            })
            .collect(),
        LayoutMode::Stacked => {
            let mut cursor = 0.0;
            let mut laid_out = Vec::with_capacity(segments.len());
            for segment in segments {
                let height = block_height(segment, px_per_minute, config);
                laid_out.push(LaidOutSegment {
                    segment: segment.clone(),
                    top: cursor,
                    height,
                });
                cursor += height + config.min_gap;
            }
            laid_out
        }
    }
}

fn block_height(segment: &ActivitySegment, px_per_minute: f64, config: &LayoutConfig) -> f64 {
    (f64::from(segment.duration_minutes()) * px_per_minute).max(config.min_block_height)
}

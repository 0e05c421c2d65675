/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds frame timing and
 * snow field metrics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second) and frame time
 * - Live and target flake counts
 * - Current density bucket and alpha multiplier
 * - Segments drawn last frame
 */

use std::time::Duration;

use crate::field::FieldStats;

#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub field: FieldStats,
    pub segments_drawn: usize,
}

impl DebugInfo {
    // Lines shown by the on-canvas overlay
    pub fn lines(&self) -> Vec<String> {
        let bucket = self
            .field
            .bucket
            .map_or_else(|| "-".to_owned(), |bucket| bucket.to_string());

        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Flakes: {} / {}", self.field.live, self.field.target),
            format!("Density: {bucket}"),
            format!("Alpha: {:.2}", self.field.alpha_multiplier),
            format!("Segments: {}", self.segments_drawn),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::DensityBucket;

    #[test]
    fn overlay_lines_show_field_counts() {
        let info = DebugInfo {
            field: FieldStats {
                live: 12,
                target: 30,
                bucket: Some(DensityBucket::Distant),
                ..FieldStats::default()
            },
            ..DebugInfo::default()
        };

        let lines = info.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "Flakes: 12 / 30");
        assert_eq!(lines[3], "Density: more than 60 days");
    }
}

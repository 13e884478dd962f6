//! Line colours and dash patterns for speedup series.

use plotters::style::{BLACK, BLUE, RED, RGBColor};

/// Colours picked by the colour dimension, in axis order
pub const DEFAULT_COLORS: [RGBColor; 4] = [RED, BLUE, BLACK, RGBColor(0, 128, 0)];

/// Styles picked by the style dimension, in axis order
pub const DEFAULT_LINE_STYLES: [LineStyle; 5] = [
    LineStyle::Solid,
    LineStyle::Dashed,
    LineStyle::Dotted,
    LineStyle::DashDot,
    LineStyle::None,
];

/// How the markers of one series are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// Markers only
    None,
}

impl LineStyle {
    /// Alternating on/off lengths in pixels. Empty means a continuous line,
    /// `None` means no line at all.
    pub fn pattern(&self) -> Option<&'static [u32]> {
        match self {
            LineStyle::Solid => Some(&[]),
            LineStyle::Dashed => Some(&[12, 6]),
            LineStyle::Dotted => Some(&[2, 4]),
            LineStyle::DashDot => Some(&[12, 4, 2, 4]),
            LineStyle::None => None,
        }
    }
}

/// Split a pixel polyline into the visible pieces of a dash pattern.
///
/// The pattern restarts at the first point and continues across vertices, so
/// dashes bend around corners instead of restarting on every segment.
pub fn dash_segments(path: &[(i32, i32)], pattern: &[u32]) -> Vec<Vec<(i32, i32)>> {
    if path.len() < 2 {
        return Vec::new();
    }
    if pattern.iter().all(|&length| length == 0) {
        return vec![path.to_vec()];
    }

    let on = |index: usize| index % 2 == 0;
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut index = 0;
    let mut remaining = pattern[0] as f64;

    for window in path.windows(2) {
        let (x0, y0) = (window[0].0 as f64, window[0].1 as f64);
        let (dx, dy) = (window[1].0 as f64 - x0, window[1].1 as f64 - y0);
        let length = dx.hypot(dy);

        if on(index) && current.is_empty() {
            current.push((x0, y0));
        }

        let mut travelled = 0.0;
        while length - travelled > remaining {
            travelled += remaining;
            let t = travelled / length;
            let split = (x0 + dx * t, y0 + dy * t);

            if on(index) {
                current.push(split);
                segments.push(std::mem::take(&mut current));
            }
            index = (index + 1) % pattern.len();
            remaining = pattern[index] as f64;
            if on(index) {
                current.push(split);
            }
        }
        remaining -= length - travelled;

        if on(index) {
            current.push((x0 + dx, y0 + dy));
        }
    }

    if current.len() >= 2 {
        segments.push(current);
    }

    segments
        .into_iter()
        .map(|segment| {
            segment
                .into_iter()
                .map(|(x, y)| (x.round() as i32, y.round() as i32))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_pattern_keeps_the_whole_path() {
        let path = vec![(0, 0), (10, 5), (20, 0)];
        assert_eq!(dash_segments(&path, &[]), vec![path.clone()]);
        assert_eq!(dash_segments(&path, &[0, 0]), vec![path]);
    }

    #[test]
    fn dashes_alternate_along_a_straight_line() {
        let segments = dash_segments(&[(0, 0), (30, 0)], &[10, 5]);
        assert_eq!(segments, vec![vec![(0, 0), (10, 0)], vec![(15, 0), (25, 0)]]);
    }

    #[test]
    fn dashes_continue_across_vertices() {
        let segments = dash_segments(&[(0, 0), (10, 0), (10, 10)], &[15, 5]);
        assert_eq!(segments, vec![vec![(0, 0), (10, 0), (10, 5)]]);
    }

    #[test]
    fn odd_length_patterns_stay_aligned() {
        // 4 on, 2 off, 4 on, then the pattern restarts with "on"
        let segments = dash_segments(&[(0, 0), (20, 0)], &[4, 2, 4]);
        assert_eq!(
            segments,
            vec![
                vec![(0, 0), (4, 0)],
                vec![(6, 0), (10, 0)],
                vec![(10, 0), (14, 0)],
                vec![(16, 0), (20, 0)],
            ]
        );
    }

    #[test]
    fn degenerate_paths_have_no_segments() {
        assert!(dash_segments(&[], &[4, 2]).is_empty());
        assert!(dash_segments(&[(3, 3)], &[4, 2]).is_empty());
    }

    #[test]
    fn markers_only_style_has_no_pattern() {
        assert_eq!(LineStyle::None.pattern(), None);
        assert_eq!(LineStyle::Solid.pattern(), Some(&[][..]));
        assert_eq!(DEFAULT_LINE_STYLES.len(), 5);
        assert_eq!(DEFAULT_COLORS[3], RGBColor(0, 128, 0));
    }
}

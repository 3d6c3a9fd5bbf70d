use super::{BarId, PairedView, PrimaryView};
use crate::types::Letter;
use serde::Serialize;

/// Evenly spaced bands over a continuous range, with the same padding
/// semantics as a d3 band scale (inner and outer padding as fractions of a
/// step, centred).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self {
        let (r0, r1) = range;
        let n = count as f64;
        let span = r1 - r0;
        let denom = (n - padding_inner + padding_outer * 2.0).max(1.0);
        let step = span / denom;
        let start = r0 + (span - step * (n - padding_inner)) * 0.5;
        Self {
            count,
            start,
            step,
            bandwidth: step * (1.0 - padding_inner),
        }
    }

    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.start + self.step * index as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Where a bar and its interaction marker land on the surface. `y` grows
/// downward from the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarRect {
    pub id: BarId,
    pub letter: Letter,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub marker: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandLayout {
    pub width: f64,
    pub height: f64,
    /// Distance of the marker centre above the bar top.
    pub marker_offset: f64,
}

impl BandLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            marker_offset: 25.0,
        }
    }

    fn y_for(&self, percent: f64) -> f64 {
        self.height - self.height * percent.clamp(0.0, 100.0) / 100.0
    }

    fn rect(&self, id: BarId, letter: Letter, x: f64, width: f64, percent: f64) -> BarRect {
        let y = self.y_for(percent);
        BarRect {
            id,
            letter,
            x,
            y,
            width,
            height: self.height - y,
            marker: (x + width / 2.0, y - self.marker_offset),
        }
    }

    pub fn primary(&self, view: &PrimaryView) -> Vec<BarRect> {
        let scale = BandScale::new(view.bars.len(), (0.0, self.width), 0.4, 0.4);
        view.bars
            .iter()
            .enumerate()
            .filter_map(|(i, bar)| {
                let x = scale.position(i)?;
                Some(self.rect(bar.id, bar.letter, x, scale.bandwidth(), bar.percent))
            })
            .collect()
    }

    /// Groups spaced with 0.2 padding; the two bars of a group touch.
    pub fn paired(&self, view: &PairedView) -> Vec<BarRect> {
        let outer = BandScale::new(view.groups.len(), (0.0, self.width), 0.2, 0.2);
        let mut rects = Vec::with_capacity(view.groups.len() * 2);
        for (g, group) in view.groups.iter().enumerate() {
            let Some(gx) = outer.position(g) else {
                continue;
            };
            let inner = BandScale::new(2, (gx, gx + outer.bandwidth()), 0.0, 0.0);
            for (b, bar) in group.bars.iter().enumerate() {
                if let Some(x) = inner.position(b) {
                    rects.push(self.rect(bar.id, bar.letter, x, inner.bandwidth(), bar.percent));
                }
            }
        }
        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_matches_unpadded_split() {
        let s = BandScale::new(2, (0.0, 100.0), 0.0, 0.0);
        assert_eq!(s.position(0), Some(0.0));
        assert_eq!(s.position(1), Some(50.0));
        assert_eq!(s.bandwidth(), 50.0);
        assert_eq!(s.position(2), None);
    }

    #[test]
    fn band_scale_padding_is_symmetric() {
        let s = BandScale::new(4, (0.0, 540.0), 0.4, 0.4);
        let first = s.position(0).unwrap();
        let last = s.position(3).unwrap() + s.bandwidth();
        assert!((first - (540.0 - last)).abs() < 1e-9);
    }
}

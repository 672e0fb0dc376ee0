use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used to give each numeric column a stable line-plot colour.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Continuous colormaps for matrix cells
// ---------------------------------------------------------------------------

/// Blue → white → red, for signed data such as correlations.
const COOLWARM: [(f32, f32, f32); 3] = [
    (0.2298, 0.2987, 0.7537),
    (0.8650, 0.8650, 0.8650),
    (0.7057, 0.0156, 0.1502),
];

/// Perceptually uniform dark-violet → green → yellow.
const VIRIDIS: [(f32, f32, f32); 5] = [
    (0.2670, 0.0049, 0.3294),
    (0.2539, 0.2653, 0.5300),
    (0.1276, 0.5669, 0.5506),
    (0.3692, 0.7889, 0.3829),
    (0.9932, 0.9062, 0.1439),
];

/// A fixed-anchor continuous colormap sampled by piecewise-linear
/// interpolation in linear RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    CoolWarm,
    Viridis,
}

impl Colormap {
    fn anchors(&self) -> &'static [(f32, f32, f32)] {
        match self {
            Colormap::CoolWarm => &COOLWARM,
            Colormap::Viridis => &VIRIDIS,
        }
    }

    /// Map `t` in `[0, 1]` to a colour; `t` is clamped.
    pub fn sample(&self, t: f64) -> Color32 {
        let anchors = self.anchors();
        let t = t.clamp(0.0, 1.0) as f32;

        let segments = (anchors.len() - 1) as f32;
        let pos = t * segments;
        let lo = (pos.floor() as usize).min(anchors.len() - 2);
        let frac = pos - lo as f32;

        let (r0, g0, b0) = anchors[lo];
        let (r1, g1, b1) = anchors[lo + 1];
        let a = Srgb::new(r0, g0, b0).into_linear();
        let b = Srgb::new(r1, g1, b1).into_linear();
        let mixed: Srgb = Srgb::from_linear(a.mix(b, frac));

        Color32::from_rgb(
            (mixed.red * 255.0).round() as u8,
            (mixed.green * 255.0).round() as u8,
            (mixed.blue * 255.0).round() as u8,
        )
    }
}

/// Black or white, whichever reads against the given fill.
pub fn text_color_for(bg: Color32) -> Color32 {
    let luminance =
        0.299 * bg.r() as f32 + 0.587 * bg.g() as f32 + 0.114 * bg.b() as f32;
    if luminance > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn palette_colors_differ() {
        let p = generate_palette(4);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
    }

    #[test]
    fn colormap_endpoints_match_anchors() {
        let lo = Colormap::Viridis.sample(0.0);
        assert_eq!(lo, Color32::from_rgb(68, 1, 84));
        let hi = Colormap::Viridis.sample(1.0);
        assert_eq!(hi, Color32::from_rgb(253, 231, 37));

        let mid = Colormap::CoolWarm.sample(0.5);
        assert_eq!(mid, Color32::from_rgb(221, 221, 221));
    }

    #[test]
    fn colormap_clamps() {
        assert_eq!(
            Colormap::CoolWarm.sample(-3.0),
            Colormap::CoolWarm.sample(0.0)
        );
        assert_eq!(
            Colormap::CoolWarm.sample(42.0),
            Colormap::CoolWarm.sample(1.0)
        );
    }

    #[test]
    fn text_contrast() {
        assert_eq!(text_color_for(Color32::WHITE), Color32::BLACK);
        assert_eq!(text_color_for(Color32::BLACK), Color32::WHITE);
        assert_eq!(text_color_for(Color32::from_rgb(40, 40, 120)), Color32::WHITE);
    }
}

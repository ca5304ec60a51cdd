//! # Colormaps
//!
//! Perceptually uniform colormaps, linearly interpolated between five
//! anchors sampled from the matplotlib tables.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ViewError;

const PLASMA: [[f32; 3]; 5] = [
    [0.050383, 0.029803, 0.527975],
    [0.494877, 0.011990, 0.657865],
    [0.798216, 0.280197, 0.469538],
    [0.973416, 0.585761, 0.251813],
    [0.940015, 0.975158, 0.131326],
];

const VIRIDIS: [[f32; 3]; 5] = [
    [0.267004, 0.004874, 0.329415],
    [0.229739, 0.322361, 0.545706],
    [0.127568, 0.566949, 0.550556],
    [0.369214, 0.788888, 0.382914],
    [0.993248, 0.906157, 0.143936],
];

/// Colormap applied to normalized surface height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// Default for static renderings.
    #[default]
    Plasma,
    /// Default for animations.
    Viridis,
}

impl Colormap {
    /// All supported colormaps.
    pub const ALL: [Colormap; 2] = [Colormap::Plasma, Colormap::Viridis];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Plasma => "plasma",
            Colormap::Viridis => "viridis",
        }
    }

    /// Returns the RGBA color at `t`, clamped to `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mobius_view::Colormap;
    ///
    /// let low = Colormap::Viridis.sample(0.0);
    /// let high = Colormap::Viridis.sample(1.0);
    /// assert!(high[1] > low[1]);
    /// assert_eq!(low[3], 1.0);
    /// ```
    pub fn sample(self, t: f64) -> [f32; 4] {
        let anchors = match self {
            Colormap::Plasma => &PLASMA,
            Colormap::Viridis => &VIRIDIS,
        };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (anchors.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        if lower >= anchors.len() - 1 {
            let [r, g, b] = anchors[anchors.len() - 1];
            return [r, g, b, 1.0];
        }
        let frac = (scaled - lower as f64) as f32;
        let a = anchors[lower];
        let b = anchors[lower + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
            1.0,
        ]
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Colormap::ALL
            .into_iter()
            .find(|map| map.name() == wanted)
            .ok_or_else(|| ViewError::UnknownColormap {
                name: s.to_string(),
                expected: Colormap::ALL.map(Colormap::name).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_match_anchors() {
        let low = Colormap::Plasma.sample(0.0);
        let high = Colormap::Plasma.sample(1.0);
        assert_eq!(&low[..3], &PLASMA[0]);
        assert_eq!(&high[..3], &PLASMA[4]);
    }

    #[test]
    fn test_midpoint_is_anchor() {
        let mid = Colormap::Viridis.sample(0.5);
        assert_eq!(&mid[..3], &VIRIDIS[2]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Colormap::Plasma.sample(-3.0), Colormap::Plasma.sample(0.0));
        assert_eq!(Colormap::Plasma.sample(7.0), Colormap::Plasma.sample(1.0));
        assert_eq!(Colormap::Plasma.sample(f64::NAN), Colormap::Plasma.sample(0.0));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("plasma".parse::<Colormap>().unwrap(), Colormap::Plasma);
        assert_eq!(" Viridis ".parse::<Colormap>().unwrap(), Colormap::Viridis);
        let err = "jet".parse::<Colormap>().unwrap_err();
        assert!(err.to_string().contains("jet"));
        assert!(err.to_string().contains("viridis"));
    }
}

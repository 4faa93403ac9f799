//! sRGB to CIE L*a*b* conversion.
//!
//! This module provides the color space transform used for perceptual
//! distance comparison during palette matching. Euclidean distance in
//! L*a*b* approximates perceived color difference far better than raw
//! RGB distance, which is what makes the nearest-color scan viable.

/// D65/2° reference white, X component.
pub const REF_WHITE_X: f64 = 95.047;

/// D65/2° reference white, Y component.
pub const REF_WHITE_Y: f64 = 100.0;

/// D65/2° reference white, Z component.
pub const REF_WHITE_Z: f64 = 108.883;

/// Threshold between the linear and cube-root segments of the CIE
/// lightness function.
const CIE_EPSILON: f64 = 0.008856;

/// CIE L*a*b* coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness (0 = black, 100 = diffuse white).
    pub l: f64,
    /// Green-red chromaticity axis.
    pub a: f64,
    /// Blue-yellow chromaticity axis.
    pub b: f64,
}

impl Lab {
    /// Euclidean distance to another Lab coordinate.
    #[inline]
    pub fn distance(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// Convert an 8-bit-per-channel sRGB triple to CIE L*a*b*.
///
/// Two-stage transform: sRGB inverse gamma followed by the linear
/// RGB→XYZ matrix, then XYZ normalized against the D65/2° reference
/// white and mapped through the CIE piecewise lightness function.
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let rl = linearize(r);
    let gl = linearize(g);
    let bl = linearize(b);

    let x = rl * 0.4124 + gl * 0.3576 + bl * 0.1805;
    let y = rl * 0.2126 + gl * 0.7152 + bl * 0.0722;
    let z = rl * 0.0193 + gl * 0.1192 + bl * 0.9505;

    let fx = cie_f(x / REF_WHITE_X);
    let fy = cie_f(y / REF_WHITE_Y);
    let fz = cie_f(z / REF_WHITE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Apply the sRGB inverse gamma to one channel, scaled to 0-100.
#[inline]
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    let linear = if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    };
    linear * 100.0
}

/// CIE cube-root-or-linear piecewise function.
#[inline]
fn cie_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

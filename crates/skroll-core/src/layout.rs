use serde::{Deserialize, Serialize};

/// A width/height pair in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the size has no drawable area.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Placement of an image scaled to cover a surface.
///
/// Cover fit scales uniformly by the larger of the two axis ratios, so the
/// image always fills the whole surface; overflow on the other axis is
/// cropped. The offsets center the scaled image within the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverFit {
    /// Uniform scale applied to the image.
    pub scale: f64,
    /// Left edge of the drawn image relative to the surface.
    pub offset_x: f64,
    /// Top edge of the drawn image relative to the surface.
    pub offset_y: f64,
    /// Drawn width (image width times scale).
    pub width: f64,
    /// Drawn height (image height times scale).
    pub height: f64,
}

impl CoverFit {
    /// Compute the cover-fit placement of `image` inside `surface`.
    ///
    /// Returns None when either size is degenerate; callers skip the draw.
    pub fn compute(surface: Size2D, image: Size2D) -> Option<CoverFit> {
        if surface.is_degenerate() || image.is_degenerate() {
            return None;
        }
        let scale = (surface.width / image.width).max(surface.height / image.height);
        let width = image.width * scale;
        let height = image.height * scale;
        Some(CoverFit {
            scale,
            offset_x: (surface.width - width) / 2.0,
            offset_y: (surface.height - height) / 2.0,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_covers(fit: &CoverFit, surface: Size2D) {
        assert!(fit.offset_x <= EPS);
        assert!(fit.offset_y <= EPS);
        assert!(fit.offset_x + fit.width >= surface.width - EPS);
        assert!(fit.offset_y + fit.height >= surface.height - EPS);
    }

    #[test]
    fn test_cover_fit_exact_match() {
        let surface = Size2D::new(1920.0, 1080.0);
        let fit = CoverFit::compute(surface, Size2D::new(1920.0, 1080.0)).unwrap();
        assert!((fit.scale - 1.0).abs() < EPS);
        assert!((fit.offset_x).abs() < EPS);
        assert!((fit.offset_y).abs() < EPS);
        assert_covers(&fit, surface);
    }

    #[test]
    fn test_cover_fit_wide_image_crops_horizontally() {
        let surface = Size2D::new(1000.0, 1000.0);
        let fit = CoverFit::compute(surface, Size2D::new(2000.0, 1000.0)).unwrap();
        // vertical ratio dominates: scale 1.0, 500px cropped on each side
        assert!((fit.scale - 1.0).abs() < EPS);
        assert!((fit.offset_x - (-500.0)).abs() < EPS);
        assert!((fit.offset_y).abs() < EPS);
        assert_covers(&fit, surface);
    }

    #[test]
    fn test_cover_fit_tall_image_crops_vertically() {
        let surface = Size2D::new(1200.0, 600.0);
        let fit = CoverFit::compute(surface, Size2D::new(600.0, 900.0)).unwrap();
        assert!((fit.scale - 2.0).abs() < EPS);
        assert!((fit.offset_x).abs() < EPS);
        assert!((fit.offset_y - (600.0 - 1800.0) / 2.0).abs() < EPS);
        assert_covers(&fit, surface);
    }

    #[test]
    fn test_cover_fit_offsets_match_center_shift_formula() {
        let surface = Size2D::new(1440.0, 900.0);
        let image = Size2D::new(1280.0, 720.0);
        let fit = CoverFit::compute(surface, image).unwrap();
        let ratio = (surface.width / image.width).max(surface.height / image.height);
        assert!((fit.offset_x - (surface.width - image.width * ratio) / 2.0).abs() < EPS);
        assert!((fit.offset_y - (surface.height - image.height * ratio) / 2.0).abs() < EPS);
        assert_covers(&fit, surface);
    }

    #[test]
    fn test_cover_fit_degenerate_sizes() {
        assert!(CoverFit::compute(Size2D::new(0.0, 100.0), Size2D::new(10.0, 10.0)).is_none());
        assert!(CoverFit::compute(Size2D::new(100.0, 100.0), Size2D::new(0.0, 10.0)).is_none());
        assert!(CoverFit::compute(Size2D::new(100.0, 100.0), Size2D::new(10.0, 0.0)).is_none());
    }
}

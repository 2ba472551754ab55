//! Page presets and contain-fit placement.
//!
//! # Coordinate System
//!
//! - Units are PDF points (1/72 inch)
//! - Origin is the top-left corner of the page, y grows downward
//! - The PDF writer converts to the bottom-left origin PDF uses

use serde::{Deserialize, Serialize};

const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Standard page size for the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// ISO A4, 210 x 297 mm.
    #[default]
    A4,
    /// US Letter, 8.5 x 11 in.
    Letter,
}

impl PageSize {
    /// Page (width, height) in millimeters, portrait.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
        }
    }

    /// Page (width, height) in points, portrait.
    pub fn dimensions_pt(self) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        (w * POINTS_PER_MM, h * POINTS_PER_MM)
    }
}

/// Where the image lands on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left offset from the page edge.
    pub x: f64,
    /// Top offset from the page edge.
    pub y: f64,
    /// Scaled image width.
    pub width: f64,
    /// Scaled image height.
    pub height: f64,
    /// Uniform scale factor applied to the image's pixel dimensions.
    pub ratio: f64,
}

/// Scale an image to fit entirely within the page and center it.
///
/// `ratio = min(page_width / image_width, page_height / image_height)`:
/// the smaller axis factor guarantees neither scaled side exceeds the page
/// (contain-fit). Images smaller than the page are scaled up.
///
/// Returns `None` if any dimension is zero or not finite, since no
/// meaningful placement exists.
///
/// # Example
///
/// ```
/// use mediaconv_core::paginate::fit_centered;
///
/// let p = fit_centered(100, 200, 210.0, 297.0).unwrap();
/// assert_eq!(p.ratio, 1.485);
/// assert!((p.x + p.width / 2.0 - 105.0).abs() < 1e-9);
/// ```
pub fn fit_centered(
    image_width: u32,
    image_height: u32,
    page_width: f64,
    page_height: f64,
) -> Option<Placement> {
    if image_width == 0 || image_height == 0 {
        return None;
    }
    if !(page_width.is_finite() && page_height.is_finite())
        || page_width <= 0.0
        || page_height <= 0.0
    {
        return None;
    }

    let (img_w, img_h) = (image_width as f64, image_height as f64);
    let ratio = (page_width / img_w).min(page_height / img_h);

    // min() picks one axis exactly; clamp the other against rounding drift
    let width = (img_w * ratio).min(page_width);
    let height = (img_h * ratio).min(page_height);

    Some(Placement {
        x: (page_width - width) / 2.0,
        y: (page_height - height) / 2.0,
        width,
        height,
        ratio,
    })
}

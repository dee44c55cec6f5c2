//! Local-to-scene placement transform.
//!
//! Maps elements from a template's local frame into scene coordinates:
//!
//! ```text
//! x' = anchor.x + x * scale
//! y' = anchor.y + y * scale
//! ```
//!
//! Sizes and line point offsets are relative quantities, so they are scaled
//! but never translated.

use crate::element::{BoxElement, Element, LineElement, Point};
use crate::error::ShapeError;
use crate::template::ShapeTemplate;

/// Uniform scale plus translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementTransform {
    /// Scene point the local origin maps to
    pub anchor: Point,
    /// Uniform scale factor, always finite and positive
    pub scale: f64,
}

impl PlacementTransform {
    /// Validate and build a transform.
    pub fn new(anchor: Point, scale: f64) -> Result<Self, ShapeError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ShapeError::InvalidScale { scale });
        }
        if !anchor.is_finite() {
            return Err(ShapeError::InvalidAnchor {
                x: anchor.x,
                y: anchor.y,
            });
        }
        Ok(Self { anchor, scale })
    }

    /// Pure translation
    pub fn translation(offset: Point) -> Result<Self, ShapeError> {
        Self::new(offset, 1.0)
    }

    /// Map a local position into the scene
    pub fn apply_point(&self, p: Point) -> Point {
        Point {
            x: self.anchor.x + p.x * self.scale,
            y: self.anchor.y + p.y * self.scale,
        }
    }

    /// Scale a relative vector
    pub fn apply_vector(&self, v: Point) -> Point {
        Point {
            x: v.x * self.scale,
            y: v.y * self.scale,
        }
    }

    /// Transform a single element, keeping its identity.
    pub fn apply(&self, element: &Element) -> Element {
        match element {
            Element::Rectangle(b) => Element::Rectangle(self.apply_box(b)),
            Element::Ellipse(b) => Element::Ellipse(self.apply_box(b)),
            Element::Line(l) => {
                let origin = self.apply_point(Point::new(l.x, l.y));
                Element::Line(LineElement {
                    id: l.id.clone(),
                    x: origin.x,
                    y: origin.y,
                    group_ids: l.group_ids.clone(),
                    points: l.points.iter().map(|p| self.apply_vector(*p)).collect(),
                })
            }
        }
    }

    fn apply_box(&self, b: &BoxElement) -> BoxElement {
        let origin = self.apply_point(Point::new(b.x, b.y));
        BoxElement {
            id: b.id.clone(),
            x: origin.x,
            y: origin.y,
            width: b.width * self.scale,
            height: b.height * self.scale,
            group_ids: b.group_ids.clone(),
        }
    }
}

/// Place elements at `anchor` with a uniform `scale`.
///
/// Returns a new list in the same order; the input is not modified.
pub fn place(elements: &[Element], anchor: Point, scale: f64) -> Result<Vec<Element>, ShapeError> {
    let transform = PlacementTransform::new(anchor, scale)?;
    Ok(elements.iter().map(|e| transform.apply(e)).collect())
}

/// Scale that makes the template's larger side equal `target_size`.
pub fn fit_scale(template: &ShapeTemplate, target_size: f64) -> Result<f64, ShapeError> {
    if !(target_size.is_finite() && target_size > 0.0) {
        return Err(ShapeError::InvalidScale { scale: target_size });
    }
    let bounds = template
        .bounds()
        .ok_or_else(|| ShapeError::malformed(&template.name, "template has no elements"))?;
    let extent = bounds.width.max(bounds.height);
    if extent <= 0.0 {
        return Err(ShapeError::malformed(&template.name, "template has zero extent"));
    }
    Ok(target_size / extent)
}

/// Anchor that centers the scaled template's bounding box on `center`.
pub fn centered_anchor(
    template: &ShapeTemplate,
    center: Point,
    scale: f64,
) -> Result<Point, ShapeError> {
    PlacementTransform::new(center, scale)?;
    let bounds = template
        .bounds()
        .ok_or_else(|| ShapeError::malformed(&template.name, "template has no elements"))?;
    let local_center = bounds.center();
    Ok(Point::new(
        center.x - local_center.x * scale,
        center.y - local_center.y * scale,
    ))
}

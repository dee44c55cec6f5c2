//! Primitive drawing elements
//!
//! Templates and placed shapes are both expressed as lists of [`Element`]s.
//! The serialized form matches the catalog entry schema consumed by pickers:
//!
//! ```json
//! { "type": "rectangle", "id": "car-body", "x": 0, "y": 30,
//!   "width": 120, "height": 50, "groupIds": ["car"] }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point or offset vector. Serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

/// Identifier of a single element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier shared by the members of a rigid group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discriminant of an [`Element`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Line,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Rectangle => "rectangle",
            ElementKind::Ellipse => "ellipse",
            ElementKind::Line => "line",
        }
    }
}

/// Geometry shared by rectangles and ellipses: `(x, y)` is the top-left of the
/// bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxElement {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub group_ids: Vec<GroupId>,
}

/// A polyline. `points` are offsets from `(x, y)`; the first one is
/// conventionally `(0, 0)`. Width and height are derived, see [`line_bounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineElement {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub group_ids: Vec<GroupId>,
    pub points: Vec<Point>,
}

/// A primitive drawing element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Rectangle(BoxElement),
    Ellipse(BoxElement),
    Line(LineElement),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Ellipse(_) => ElementKind::Ellipse,
            Element::Line(_) => ElementKind::Line,
        }
    }

    pub fn id(&self) -> &ElementId {
        match self {
            Element::Rectangle(b) | Element::Ellipse(b) => &b.id,
            Element::Line(l) => &l.id,
        }
    }

    pub fn group_ids(&self) -> &[GroupId] {
        match self {
            Element::Rectangle(b) | Element::Ellipse(b) => &b.group_ids,
            Element::Line(l) => &l.group_ids,
        }
    }

    /// Anchor of the element in its own frame
    pub fn origin(&self) -> Point {
        match self {
            Element::Rectangle(b) | Element::Ellipse(b) => Point::new(b.x, b.y),
            Element::Line(l) => Point::new(l.x, l.y),
        }
    }

    /// Bounding box of the element. For lines this is always recomputed from
    /// the points.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Element::Rectangle(b) | Element::Ellipse(b) => {
                BoundingBox::new(b.x, b.y, b.width, b.height)
            }
            Element::Line(l) => {
                let local = line_bounds(&l.points);
                BoundingBox::new(l.x + local.x, l.y + local.y, local.width, local.height)
            }
        }
    }

    /// Copy of this element carrying a different identity. Geometry is untouched.
    pub fn with_identity(&self, id: ElementId, group_ids: Vec<GroupId>) -> Element {
        match self {
            Element::Rectangle(b) => Element::Rectangle(BoxElement {
                id,
                group_ids,
                ..b.clone()
            }),
            Element::Ellipse(b) => Element::Ellipse(BoxElement {
                id,
                group_ids,
                ..b.clone()
            }),
            Element::Line(l) => Element::Line(LineElement {
                id,
                group_ids,
                ..l.clone()
            }),
        }
    }
}

/// Bounding box of a point list, relative to the line anchor.
///
/// An empty list yields a zero box at the anchor.
pub fn line_bounds(points: &[Point]) -> BoundingBox {
    let Some(first) = points.first() else {
        return BoundingBox::new(0.0, 0.0, 0.0, 0.0);
    };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Rectangle with a single group key
pub fn rect(id: &str, group: &str, x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::Rectangle(BoxElement {
        id: ElementId::new(id),
        x,
        y,
        width,
        height,
        group_ids: vec![GroupId::new(group)],
    })
}

/// Ellipse with a single group key
pub fn ellipse(id: &str, group: &str, x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::Ellipse(BoxElement {
        id: ElementId::new(id),
        x,
        y,
        width,
        height,
        group_ids: vec![GroupId::new(group)],
    })
}

/// Two-point line from `(x, y)` to `(x + dx, y + dy)`
pub fn segment(id: &str, group: &str, x: f64, y: f64, dx: f64, dy: f64) -> Element {
    Element::Line(LineElement {
        id: ElementId::new(id),
        x,
        y,
        group_ids: vec![GroupId::new(group)],
        points: vec![Point::origin(), Point::new(dx, dy)],
    })
}

//! Built-in everyday object shapes
//!
//! Each shape is normalized to roughly 120x120 with its local origin at (0, 0),
//! and all elements of one shape share a single placeholder group key.

use std::sync::LazyLock;

use crate::element::{ellipse, rect, segment};
use crate::error::ShapeError;

use super::registry::{ShapeCatalog, ShapeTemplate};

static BUILTIN: LazyLock<Result<ShapeCatalog, ShapeError>> =
    LazyLock::new(|| ShapeCatalog::new(builtin_templates()));

/// The process-wide built-in catalog.
///
/// Built and validated on first access. A validation failure is reported to
/// every caller.
pub fn builtin() -> Result<&'static ShapeCatalog, ShapeError> {
    BUILTIN.as_ref().map_err(Clone::clone)
}

/// Fresh copies of the built-in templates, in display order
pub fn builtin_templates() -> Vec<ShapeTemplate> {
    vec![
        car(),
        bicycle(),
        person(),
        walking(),
        running(),
        waving(),
        house(),
        tree(),
        table(),
        phone(),
    ]
}

fn car() -> ShapeTemplate {
    ShapeTemplate::new(
        "Car",
        vec![
            rect("car-body", "car", 0.0, 30.0, 120.0, 50.0),
            rect("car-roof", "car", 25.0, 5.0, 70.0, 30.0),
            ellipse("car-wl", "car", 10.0, 65.0, 30.0, 30.0),
            ellipse("car-wr", "car", 80.0, 65.0, 30.0, 30.0),
        ],
    )
}

fn bicycle() -> ShapeTemplate {
    ShapeTemplate::new(
        "Bicycle",
        vec![
            ellipse("bic-wl", "bic", 0.0, 40.0, 50.0, 50.0),
            ellipse("bic-wr", "bic", 70.0, 40.0, 50.0, 50.0),
            // frame: rear hub to pedal, pedal to front hub
            segment("bic-f1", "bic", 25.0, 65.0, 45.0, -15.0),
            segment("bic-f2", "bic", 70.0, 50.0, 25.0, 15.0),
            segment("bic-st", "bic", 70.0, 50.0, -10.0, -20.0),
            segment("bic-seat", "bic", 55.0, 30.0, 20.0, 0.0),
            segment("bic-hs", "bic", 95.0, 50.0, 0.0, -20.0),
            segment("bic-hb", "bic", 88.0, 30.0, 14.0, 0.0),
        ],
    )
}

fn person() -> ShapeTemplate {
    ShapeTemplate::new(
        "Person",
        vec![
            ellipse("hs-hd", "hs", 40.0, 0.0, 30.0, 30.0),
            rect("hs-bd", "hs", 42.0, 32.0, 26.0, 35.0),
            segment("hs-al", "hs", 42.0, 38.0, -20.0, 20.0),
            segment("hs-ar", "hs", 68.0, 38.0, 20.0, 20.0),
            segment("hs-ll", "hs", 48.0, 67.0, -10.0, 40.0),
            segment("hs-lr", "hs", 62.0, 67.0, 10.0, 40.0),
        ],
    )
}

fn walking() -> ShapeTemplate {
    ShapeTemplate::new(
        "Walking",
        vec![
            ellipse("hw-hd", "hw", 40.0, 0.0, 30.0, 30.0),
            rect("hw-bd", "hw", 42.0, 32.0, 26.0, 35.0),
            segment("hw-al", "hw", 42.0, 38.0, -22.0, 15.0),
            segment("hw-ar", "hw", 68.0, 38.0, 15.0, 22.0),
            segment("hw-ll", "hw", 48.0, 67.0, -15.0, 40.0),
            segment("hw-lr", "hw", 62.0, 67.0, 15.0, 40.0),
        ],
    )
}

fn running() -> ShapeTemplate {
    ShapeTemplate::new(
        "Running",
        vec![
            ellipse("hr-hd", "hr", 45.0, 0.0, 28.0, 28.0),
            rect("hr-bd", "hr", 43.0, 30.0, 24.0, 32.0),
            segment("hr-al", "hr", 43.0, 36.0, -25.0, 5.0),
            segment("hr-ar", "hr", 67.0, 36.0, 20.0, -15.0),
            segment("hr-ll", "hr", 48.0, 62.0, -20.0, 38.0),
            segment("hr-lr", "hr", 60.0, 62.0, 22.0, 30.0),
        ],
    )
}

fn waving() -> ShapeTemplate {
    ShapeTemplate::new(
        "Waving",
        vec![
            ellipse("hv-hd", "hv", 40.0, 0.0, 30.0, 30.0),
            rect("hv-bd", "hv", 42.0, 32.0, 26.0, 35.0),
            // raised arm
            segment("hv-al", "hv", 42.0, 36.0, -22.0, -20.0),
            segment("hv-ar", "hv", 68.0, 38.0, 20.0, 20.0),
            segment("hv-ll", "hv", 48.0, 67.0, -8.0, 40.0),
            segment("hv-lr", "hv", 62.0, 67.0, 8.0, 40.0),
        ],
    )
}

fn house() -> ShapeTemplate {
    ShapeTemplate::new(
        "House",
        vec![
            rect("ho-bd", "ho", 10.0, 50.0, 100.0, 70.0),
            segment("ho-rl", "ho", 60.0, 10.0, -50.0, 40.0),
            segment("ho-rr", "ho", 60.0, 10.0, 50.0, 40.0),
            segment("ho-rb", "ho", 10.0, 50.0, 100.0, 0.0),
            rect("ho-dr", "ho", 47.0, 90.0, 26.0, 30.0),
        ],
    )
}

fn tree() -> ShapeTemplate {
    ShapeTemplate::new(
        "Tree",
        vec![
            ellipse("tr-cn", "tr", 15.0, 0.0, 80.0, 75.0),
            rect("tr-tk", "tr", 47.0, 70.0, 16.0, 45.0),
        ],
    )
}

fn table() -> ShapeTemplate {
    ShapeTemplate::new(
        "Table",
        vec![
            rect("tb-tp", "tb", 0.0, 20.0, 120.0, 15.0),
            segment("tb-l1", "tb", 10.0, 35.0, 0.0, 65.0),
            segment("tb-l2", "tb", 110.0, 35.0, 0.0, 65.0),
            segment("tb-l3", "tb", 25.0, 35.0, 0.0, 55.0),
            segment("tb-l4", "tb", 95.0, 35.0, 0.0, 55.0),
        ],
    )
}

fn phone() -> ShapeTemplate {
    ShapeTemplate::new(
        "Phone",
        vec![
            rect("ph-bd", "ph", 25.0, 0.0, 70.0, 120.0),
            ellipse("ph-cm", "ph", 55.0, 8.0, 10.0, 10.0),
            // home bar
            segment("ph-br", "ph", 45.0, 108.0, 30.0, 0.0),
            rect("ph-sc", "ph", 32.0, 22.0, 56.0, 78.0),
        ],
    )
}

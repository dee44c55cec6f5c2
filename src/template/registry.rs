//! Shape templates and the catalog that stores them

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::element::{BoundingBox, Element, GroupId};
use crate::error::ShapeError;

/// A reusable composite shape in its local frame.
///
/// Element and group identifiers are placeholders. They are rewritten on every
/// placement and must never reach a scene as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeTemplate {
    pub name: String,
    pub elements: Vec<Element>,
}

impl ShapeTemplate {
    pub fn new(name: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    /// The local group key shared by all elements, if the template has one
    pub fn group_key(&self) -> Option<&GroupId> {
        self.elements.first().and_then(|e| e.group_ids().first())
    }

    /// Union bounding box of all elements in the local frame
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.elements
            .iter()
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Check the structural invariants of a template.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let malformed = |reason: String| ShapeError::malformed(&self.name, reason);

        let Some(key) = self.group_key() else {
            return Err(malformed(if self.elements.is_empty() {
                "template has no elements".to_string()
            } else {
                format!("element '{}' has no group key", self.elements[0].id())
            }));
        };

        let mut seen = HashSet::new();
        for element in &self.elements {
            let id = element.id();
            if !seen.insert(id) {
                return Err(malformed(format!("duplicate element id '{}'", id)));
            }
            match element.group_ids().first() {
                None => return Err(malformed(format!("element '{}' has no group key", id))),
                Some(g) if g != key => {
                    return Err(malformed(format!(
                        "element '{}' is in group '{}', expected '{}'",
                        id, g, key
                    )))
                }
                Some(_) => {}
            }
            if !element.origin().is_finite() {
                return Err(malformed(format!("element '{}' has a non-finite position", id)));
            }
            match element {
                Element::Rectangle(b) | Element::Ellipse(b) => {
                    let valid = |v: f64| v.is_finite() && v > 0.0;
                    if !valid(b.width) || !valid(b.height) {
                        return Err(malformed(format!(
                            "element '{}' has a non-positive size {}x{}",
                            id, b.width, b.height
                        )));
                    }
                }
                Element::Line(l) => {
                    if l.points.is_empty() {
                        return Err(malformed(format!("line '{}' has no points", id)));
                    }
                    if !l.points.iter().all(|p| p.is_finite()) {
                        return Err(malformed(format!("line '{}' has a non-finite point", id)));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Ordered, name-indexed collection of validated templates
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    templates: Vec<ShapeTemplate>,
    index: HashMap<String, usize>,
}

impl ShapeCatalog {
    /// Build a catalog, validating every template and name uniqueness.
    pub fn new(templates: Vec<ShapeTemplate>) -> Result<Self, ShapeError> {
        let mut index = HashMap::with_capacity(templates.len());
        for (i, template) in templates.iter().enumerate() {
            template.validate()?;
            if index.insert(template.name.clone(), i).is_some() {
                return Err(ShapeError::malformed(
                    &template.name,
                    "duplicate template name",
                ));
            }
        }
        Ok(Self { templates, index })
    }

    /// All templates in display order
    pub fn list(&self) -> &[ShapeTemplate] {
        &self.templates
    }

    /// Look up a template by exact name
    pub fn get(&self, name: &str) -> Result<&ShapeTemplate, ShapeError> {
        self.index
            .get(name)
            .map(|&i| &self.templates[i])
            .ok_or_else(|| ShapeError::not_found(name))
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Template names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

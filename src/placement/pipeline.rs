//! Placement pipeline: rewrite identities, transform, commit as one batch

use tracing::debug;

use crate::element::{Element, ElementId, GroupId, Point};
use crate::error::ShapeError;
use crate::ids::{process_ids, FreshIds, IdSource, UuidIds, DEFAULT_MAX_ATTEMPTS};
use crate::scene::SceneCommit;
use crate::template::{rewrite, rewrite_identities, ShapeCatalog, ShapeTemplate};

use super::transform::{centered_anchor, PlacementTransform};

/// Identifiers of a committed placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    /// Element ids in z-order
    pub element_ids: Vec<ElementId>,
    /// Distinct group ids, in order of first appearance
    pub group_ids: Vec<GroupId>,
}

impl Placed {
    fn from_elements(elements: &[Element]) -> Self {
        let element_ids = elements.iter().map(|e| e.id().clone()).collect();
        let mut group_ids: Vec<GroupId> = Vec::new();
        for g in elements.iter().flat_map(|e| e.group_ids()) {
            if !group_ids.contains(g) {
                group_ids.push(g.clone());
            }
        }
        Self {
            element_ids,
            group_ids,
        }
    }
}

/// Turns templates into scene elements.
///
/// Holds no state of its own beyond a borrowed identifier source. Every
/// argument is validated before any identifier is minted, and a scene sees
/// at most one [`SceneCommit::add_elements`] call per operation.
pub struct PlacementPipeline<'a, I: IdSource + ?Sized> {
    ids: &'a I,
    max_attempts: u32,
}

impl PlacementPipeline<'static, UuidIds> {
    /// Pipeline backed by the process-wide generator
    pub fn process() -> Self {
        Self::new(process_ids())
    }
}

impl<'a, I: IdSource + ?Sized> PlacementPipeline<'a, I> {
    pub fn new(ids: &'a I) -> Self {
        Self {
            ids,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Bound on identifier collision retries against the scene
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Compute a placement result without committing it.
    pub fn prepare(
        &self,
        template: &ShapeTemplate,
        anchor: Point,
        scale: f64,
    ) -> Result<Vec<Element>, ShapeError> {
        let transform = PlacementTransform::new(anchor, scale)?;
        template.validate()?;
        let fresh = FreshIds::new(self.ids, |_| false).with_max_attempts(self.max_attempts);
        let rewritten = rewrite(template, &fresh)?;
        Ok(rewritten.iter().map(|e| transform.apply(e)).collect())
    }

    /// Place a template into a scene as one undoable step.
    pub fn place_template<S: SceneCommit + ?Sized>(
        &self,
        template: &ShapeTemplate,
        anchor: Point,
        scale: f64,
        scene: &mut S,
    ) -> Result<Placed, ShapeError> {
        let transform = PlacementTransform::new(anchor, scale)?;
        template.validate()?;
        self.commit_template(template, transform, scene)
    }

    fn commit_template<S: SceneCommit + ?Sized>(
        &self,
        template: &ShapeTemplate,
        transform: PlacementTransform,
        scene: &mut S,
    ) -> Result<Placed, ShapeError> {
        let elements = {
            let fresh = FreshIds::new(self.ids, |id| scene.contains_id(id))
                .with_max_attempts(self.max_attempts);
            let rewritten = rewrite(template, &fresh)?;
            rewritten
                .iter()
                .map(|e| transform.apply(e))
                .collect::<Vec<_>>()
        };

        let placed = Placed::from_elements(&elements);
        scene.add_elements(elements)?;
        debug!(
            template = %template.name,
            x = transform.anchor.x,
            y = transform.anchor.y,
            scale = transform.scale,
            elements = placed.element_ids.len(),
            "placed template"
        );
        Ok(placed)
    }

    /// Look up a template by name and place it.
    pub fn place_named<S: SceneCommit + ?Sized>(
        &self,
        catalog: &ShapeCatalog,
        name: &str,
        anchor: Point,
        scale: f64,
        scene: &mut S,
    ) -> Result<Placed, ShapeError> {
        let template = catalog.get(name)?;
        self.place_template(template, anchor, scale, scene)
    }

    /// Place a template so its bounding box is centered on `center`.
    pub fn place_centered<S: SceneCommit + ?Sized>(
        &self,
        template: &ShapeTemplate,
        center: Point,
        scale: f64,
        scene: &mut S,
    ) -> Result<Placed, ShapeError> {
        template.validate()?;
        let anchor = centered_anchor(template, center, scale)?;
        self.commit_template(template, PlacementTransform::new(anchor, scale)?, scene)
    }

    /// Copy existing elements with fresh identities, shifted by `offset`.
    ///
    /// Group structure among the copies mirrors the originals, but the copies
    /// never join the originals' groups.
    pub fn duplicate_in_place<S: SceneCommit + ?Sized>(
        &self,
        elements: &[Element],
        offset: Point,
        scene: &mut S,
    ) -> Result<Placed, ShapeError> {
        let transform = PlacementTransform::translation(offset)?;

        let copies = {
            let fresh = FreshIds::new(self.ids, |id| scene.contains_id(id))
                .with_max_attempts(self.max_attempts);
            let rewritten = rewrite_identities(elements, &fresh)?;
            rewritten
                .iter()
                .map(|e| transform.apply(e))
                .collect::<Vec<_>>()
        };

        let placed = Placed::from_elements(&copies);
        scene.add_elements(copies)?;
        debug!(elements = placed.element_ids.len(), "duplicated elements");
        Ok(placed)
    }
}

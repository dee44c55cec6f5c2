//! Identity rewriting - gives placeholder elements scene-safe identities
//!
//! Geometry is never touched here, so the same rewrite serves both template
//! placement and duplicating existing elements in place.

use std::collections::HashMap;

use tracing::trace;

use crate::element::{Element, ElementId, GroupId};
use crate::error::ShapeError;
use crate::ids::IdSource;

use super::registry::ShapeTemplate;

/// Rewrite every identifier of a template.
pub fn rewrite<I: IdSource + ?Sized>(
    template: &ShapeTemplate,
    ids: &I,
) -> Result<Vec<Element>, ShapeError> {
    rewrite_named(&template.name, &template.elements, ids)
}

/// Rewrite every identifier of an arbitrary element list.
///
/// Each element gets a fresh id. Every group id, at every nesting level, is
/// remapped through a table local to this call: elements that shared a group
/// before still share one afterwards, but never with anything outside this
/// call's output. Order and geometry are preserved.
pub fn rewrite_identities<I: IdSource + ?Sized>(
    elements: &[Element],
    ids: &I,
) -> Result<Vec<Element>, ShapeError> {
    rewrite_named("<elements>", elements, ids)
}

fn rewrite_named<I: IdSource + ?Sized>(
    name: &str,
    elements: &[Element],
    ids: &I,
) -> Result<Vec<Element>, ShapeError> {
    if elements.is_empty() {
        return Err(ShapeError::malformed(name, "template has no elements"));
    }
    if let Some(orphan) = elements.iter().find(|e| e.group_ids().is_empty()) {
        return Err(ShapeError::malformed(
            name,
            format!("element '{}' has no group key", orphan.id()),
        ));
    }

    let mut group_map: HashMap<&GroupId, GroupId> = HashMap::new();
    let mut out = Vec::with_capacity(elements.len());

    for element in elements {
        let id = ElementId::new(ids.next_id()?);
        let mut group_ids = Vec::with_capacity(element.group_ids().len());
        for old in element.group_ids() {
            let new = match group_map.get(old) {
                Some(mapped) => mapped.clone(),
                None => {
                    let minted = GroupId::new(ids.next_id()?);
                    group_map.insert(old, minted.clone());
                    minted
                }
            };
            group_ids.push(new);
        }
        trace!(from = %element.id(), to = %id, "rewrote element identity");
        out.push(element.with_identity(id, group_ids));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{rect, segment, BoxElement};
    use crate::ids::CounterIds;

    fn nested() -> Vec<Element> {
        let inner = |id: &str| {
            Element::Rectangle(BoxElement {
                id: ElementId::new(id),
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
                group_ids: vec![GroupId::new("inner"), GroupId::new("outer")],
            })
        };
        vec![inner("a"), inner("b"), rect("c", "outer", 0.0, 0.0, 5.0, 5.0)]
    }

    #[test]
    fn test_rewrite_assigns_fresh_ids() {
        let ids = CounterIds::new("n");
        let template = ShapeTemplate::new(
            "T",
            vec![
                rect("t-a", "t", 0.0, 0.0, 10.0, 10.0),
                segment("t-b", "t", 5.0, 5.0, 1.0, 1.0),
            ],
        );
        let out = rewrite(&template, &ids).unwrap();

        assert_eq!(out[0].id().as_str(), "n-1");
        assert_eq!(out[0].group_ids(), &[GroupId::new("n-2")]);
        assert_eq!(out[1].id().as_str(), "n-3");
        assert_eq!(out[1].group_ids(), &[GroupId::new("n-2")]);
    }

    #[test]
    fn test_rewrite_remaps_every_level() {
        let ids = CounterIds::new("n");
        let out = rewrite_identities(&nested(), &ids).unwrap();

        let inner = &out[0].group_ids()[0];
        let outer = &out[0].group_ids()[1];
        assert_ne!(inner, outer);
        assert_eq!(out[1].group_ids(), &[inner.clone(), outer.clone()]);
        assert_eq!(out[2].group_ids(), &[outer.clone()]);
        assert!(out
            .iter()
            .flat_map(|e| e.group_ids())
            .all(|g| g.as_str() != "inner" && g.as_str() != "outer"));
    }

    #[test]
    fn test_rewrite_keeps_geometry() {
        let ids = CounterIds::new("n");
        let source = nested();
        let out = rewrite_identities(&source, &ids).unwrap();
        for (before, after) in source.iter().zip(&out) {
            assert_eq!(before.bounds(), after.bounds());
            assert_eq!(before.kind(), after.kind());
        }
    }

    #[test]
    fn test_rewrite_empty_is_malformed() {
        let ids = CounterIds::new("n");
        let template = ShapeTemplate::new("Nothing", vec![]);
        assert!(matches!(
            rewrite(&template, &ids),
            Err(ShapeError::MalformedTemplate { template, .. }) if template == "Nothing"
        ));
    }

    #[test]
    fn test_rewrite_propagates_exhaustion() {
        let ids = CounterIds::starting_at("n", u64::MAX - 1);
        let template = ShapeTemplate::new(
            "T",
            vec![rect("a", "g", 0.0, 0.0, 1.0, 1.0), rect("b", "g", 0.0, 0.0, 1.0, 1.0)],
        );
        assert_eq!(
            rewrite(&template, &ids),
            Err(ShapeError::IdentifierExhausted { attempts: 1 })
        );
    }
}

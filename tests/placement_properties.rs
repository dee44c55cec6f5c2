//! Property tests for placement geometry and identifier freshness

use std::collections::HashSet;

use proptest::prelude::*;

use object_shapes::{builtin, Element, PlacementPipeline, Point, Scene, UuidIds};

fn shape_index() -> impl Strategy<Value = usize> {
    0..builtin().unwrap().len()
}

fn anchor() -> impl Strategy<Value = Point> {
    (-10_000.0f64..10_000.0, -10_000.0f64..10_000.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn placement_follows_affine_map(index in shape_index(), at in anchor(), scale in 0.01f64..100.0) {
        let template = &builtin().unwrap().list()[index];
        let placed = PlacementPipeline::new(&UuidIds).prepare(template, at, scale).unwrap();

        prop_assert_eq!(placed.len(), template.elements.len());
        for (before, after) in template.elements.iter().zip(&placed) {
            prop_assert_eq!(before.kind(), after.kind());
            match (before, after) {
                (Element::Rectangle(b), Element::Rectangle(a))
                | (Element::Ellipse(b), Element::Ellipse(a)) => {
                    prop_assert_eq!(a.x, at.x + b.x * scale);
                    prop_assert_eq!(a.y, at.y + b.y * scale);
                    prop_assert_eq!(a.width, b.width * scale);
                    prop_assert_eq!(a.height, b.height * scale);
                }
                (Element::Line(b), Element::Line(a)) => {
                    prop_assert_eq!(a.x, at.x + b.x * scale);
                    prop_assert_eq!(a.y, at.y + b.y * scale);
                    prop_assert_eq!(a.points.len(), b.points.len());
                    for (p, q) in b.points.iter().zip(&a.points) {
                        prop_assert_eq!(q.x, p.x * scale);
                        prop_assert_eq!(q.y, p.y * scale);
                    }
                }
                _ => prop_assert!(false, "element kind changed"),
            }
        }
    }

    #[test]
    fn repeated_placements_share_no_identifiers(
        indices in proptest::collection::vec(shape_index(), 1..6),
        at in anchor(),
    ) {
        let catalog = builtin().unwrap();
        let pipeline = PlacementPipeline::new(&UuidIds);
        let mut scene = Scene::new();
        let mut seen = HashSet::new();

        for index in &indices {
            let template = &catalog.list()[*index];
            let placed = pipeline.place_template(template, at, 1.0, &mut scene).unwrap();

            prop_assert_eq!(placed.group_ids.len(), 1);
            for id in placed.element_ids.iter().map(|e| e.as_str())
                .chain(placed.group_ids.iter().map(|g| g.as_str()))
            {
                prop_assert!(seen.insert(id.to_string()), "identifier reused: {}", id);
            }
        }
        prop_assert_eq!(scene.undo_count(), indices.len());
    }

    #[test]
    fn non_positive_scale_is_rejected(index in shape_index(), scale in -100.0f64..=0.0) {
        let template = &builtin().unwrap().list()[index];
        let mut scene = Scene::new();
        let result = PlacementPipeline::new(&UuidIds)
            .place_template(template, Point::origin(), scale, &mut scene);

        prop_assert!(result.is_err());
        prop_assert!(scene.is_empty());
    }
}

//! Object Shapes - predefined composite shapes for a diagram editor
//!
//! This library provides a catalog of shape templates (vehicles, figures,
//! structures, everyday objects) and the pipeline that turns a template into
//! scene-ready elements with fresh identifiers at a chosen position and scale.
//!
//! # Example
//!
//! ```rust
//! use object_shapes::{place_shape, Point, Scene};
//!
//! let mut scene = Scene::new();
//! let placed = place_shape(&mut scene, "Car", Point::new(200.0, 300.0)).unwrap();
//! assert_eq!(placed.element_ids.len(), 4);
//! assert_eq!(scene.undo_count(), 1);
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod ids;
pub mod placement;
pub mod scene;
pub mod template;

pub use config::{ConfigError, PlacementConfig};
pub use element::{BoundingBox, Element, ElementId, ElementKind, GroupId, Point};
pub use error::ShapeError;
pub use ids::{process_counter, process_ids, CounterIds, FreshIds, IdSource, IdStrategy, UuidIds};
pub use placement::{place, Placed, PlacementPipeline, PlacementTransform};
pub use scene::{CommitError, Scene, SceneCommit};
pub use template::{builtin, rewrite, ShapeCatalog, ShapeTemplate};

/// Place a built-in shape with default configuration
///
/// Uses the process-wide identifier generator and scale 1.
///
/// # Example
///
/// ```rust
/// use object_shapes::{place_shape, Point, Scene, ShapeError};
///
/// let mut scene = Scene::new();
/// let err = place_shape(&mut scene, "Spaceship", Point::new(0.0, 0.0)).unwrap_err();
/// assert!(matches!(err, ShapeError::NotFound { .. }));
/// assert!(scene.is_empty());
/// ```
pub fn place_shape<S: SceneCommit + ?Sized>(
    scene: &mut S,
    name: &str,
    anchor: Point,
) -> Result<Placed, ShapeError> {
    PlacementPipeline::process().place_named(builtin()?, name, anchor, 1.0, scene)
}

/// Place a built-in shape using the given configuration
///
/// # Example
///
/// ```rust
/// use object_shapes::{place_shape_with_config, IdStrategy, PlacementConfig, Point};
///
/// let config = PlacementConfig::new()
///     .with_default_scale(0.5)
///     .with_id_strategy(IdStrategy::Counter);
/// let mut scene = config.new_scene();
///
/// let placed = place_shape_with_config(&mut scene, "Tree", Point::new(10.0, 10.0), &config).unwrap();
/// assert_eq!(placed.element_ids.len(), 2);
/// ```
pub fn place_shape_with_config<S: SceneCommit + ?Sized>(
    scene: &mut S,
    name: &str,
    anchor: Point,
    config: &PlacementConfig,
) -> Result<Placed, ShapeError> {
    PlacementPipeline::new(config.id_strategy.build(&config.id_prefix))
        .with_max_attempts(config.max_id_attempts)
        .place_named(builtin()?, name, anchor, config.default_scale, scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_shape_car() {
        let mut scene = Scene::new();
        let placed = place_shape(&mut scene, "Car", Point::new(200.0, 300.0)).unwrap();
        assert_eq!(placed.group_ids.len(), 1);
        let body = scene.get(&placed.element_ids[0]).unwrap();
        assert_eq!(body.bounds(), BoundingBox::new(200.0, 330.0, 120.0, 50.0));
    }

    #[test]
    fn test_place_shape_unknown_name() {
        let mut scene = Scene::new();
        let err = place_shape(&mut scene, "Unicorn", Point::origin()).unwrap_err();
        assert_eq!(err, ShapeError::not_found("Unicorn"));
    }

    #[test]
    fn test_place_shape_with_counter_config() {
        let config = PlacementConfig::new()
            .with_id_strategy(IdStrategy::Counter)
            .with_id_prefix("obj")
            .with_default_scale(2.0);
        let mut scene = config.new_scene();
        let placed =
            place_shape_with_config(&mut scene, "Phone", Point::origin(), &config).unwrap();

        assert_eq!(placed.element_ids[0].as_str(), "obj-1");
        let body = scene.get(&placed.element_ids[0]).unwrap();
        assert_eq!(body.bounds(), BoundingBox::new(50.0, 0.0, 140.0, 240.0));
    }

    #[test]
    fn test_counter_config_repeated_placements() {
        let config = PlacementConfig::new()
            .with_id_strategy(IdStrategy::Counter)
            .with_id_prefix("repeat");
        let mut scene = config.new_scene();
        for i in 0..4 {
            let at = Point::new(150.0 * i as f64, 0.0);
            place_shape_with_config(&mut scene, "Car", at, &config).unwrap();
        }
        assert_eq!(scene.len(), 16);
        assert_eq!(scene.undo_count(), 4);
    }

    #[test]
    fn test_counter_config_ids_differ_across_scenes() {
        let config = PlacementConfig::new()
            .with_id_strategy(IdStrategy::Counter)
            .with_id_prefix("across");
        let mut first = config.new_scene();
        let mut second = config.new_scene();
        let a = place_shape_with_config(&mut first, "Tree", Point::origin(), &config).unwrap();
        let b = place_shape_with_config(&mut second, "Tree", Point::origin(), &config).unwrap();

        assert_ne!(a.group_ids, b.group_ids);
        assert!(a.element_ids.iter().all(|id| !b.element_ids.contains(id)));
    }

    #[test]
    fn test_place_shape_with_invalid_scale_config() {
        let config = PlacementConfig::new().with_default_scale(-1.0);
        let mut scene = Scene::new();
        let err = place_shape_with_config(&mut scene, "Car", Point::origin(), &config).unwrap_err();
        assert_eq!(err, ShapeError::InvalidScale { scale: -1.0 });
        assert!(scene.is_empty());
    }
}

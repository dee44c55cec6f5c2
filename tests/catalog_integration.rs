//! Integration tests for the built-in shape catalog

use pretty_assertions::assert_eq;

use object_shapes::element::{ellipse, rect};
use object_shapes::{builtin, Element, ElementKind, ShapeCatalog, ShapeError, ShapeTemplate};

#[test]
fn test_display_order() {
    let names = builtin().unwrap().names().collect::<Vec<_>>().join("\n");
    insta::assert_snapshot!(names, @r"
    Car
    Bicycle
    Person
    Walking
    Running
    Waving
    House
    Tree
    Table
    Phone
    ");
}

#[test]
fn test_car_template_matches_reference() {
    let car = builtin().unwrap().get("Car").unwrap();
    assert_eq!(
        car.elements,
        vec![
            rect("car-body", "car", 0.0, 30.0, 120.0, 50.0),
            rect("car-roof", "car", 25.0, 5.0, 70.0, 30.0),
            ellipse("car-wl", "car", 10.0, 65.0, 30.0, 30.0),
            ellipse("car-wr", "car", 80.0, 65.0, 30.0, 30.0),
        ]
    );
}

#[test]
fn test_every_template_is_one_rigid_group() {
    for template in builtin().unwrap().list() {
        let key = template.group_key().expect("template has a group key");
        for element in &template.elements {
            assert_eq!(element.group_ids(), std::slice::from_ref(key), "{}", template.name);
        }
    }
}

#[test]
fn test_lookup_is_exact() {
    let catalog = builtin().unwrap();
    assert!(catalog.get("House").is_ok());
    assert_eq!(
        catalog.get("house").unwrap_err(),
        ShapeError::NotFound {
            name: "house".to_string()
        }
    );
}

#[test]
fn test_lines_have_no_stored_size() {
    let bicycle = builtin().unwrap().get("Bicycle").unwrap();
    let json = serde_json::to_value(&bicycle.elements).unwrap();
    for entry in json.as_array().unwrap() {
        if entry["type"] == "line" {
            assert!(entry.get("width").is_none());
            assert!(entry.get("height").is_none());
            assert_eq!(entry["points"][0], serde_json::json!([0.0, 0.0]));
        }
    }
}

#[test]
fn test_external_template_from_json() {
    let template: ShapeTemplate = serde_json::from_str(
        r#"{
            "name": "Sign",
            "elements": [
                { "type": "rectangle", "id": "sg-bd", "x": 0, "y": 0, "width": 120, "height": 60, "groupIds": ["sg"] },
                { "type": "line", "id": "sg-pl", "x": 60, "y": 60, "groupIds": ["sg"], "points": [[0, 0], [0, 60]] }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(template.elements[1].kind(), ElementKind::Line);
    let catalog = ShapeCatalog::new(vec![template]).unwrap();
    assert_eq!(catalog.get("Sign").unwrap().bounds().unwrap().height, 120.0);
}

#[test]
fn test_catalog_rejects_malformed_external_template() {
    let template: ShapeTemplate = serde_json::from_str(
        r#"{
            "name": "Loose",
            "elements": [
                { "type": "ellipse", "id": "a", "x": 0, "y": 0, "width": 10, "height": 10, "groupIds": [] }
            ]
        }"#,
    )
    .unwrap();

    assert!(matches!(
        template.elements[0],
        Element::Ellipse(_)
    ));
    let err = ShapeCatalog::new(vec![template]).unwrap_err();
    assert!(matches!(err, ShapeError::MalformedTemplate { ref template, .. } if template == "Loose"));
}

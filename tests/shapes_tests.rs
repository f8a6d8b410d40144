//! Shapes tests - catalog contents and clockwise rotation

use blockfall::core::{Catalog, Shape, SimpleRng};

#[test]
fn test_catalog_has_five_templates() {
    let catalog = Catalog::new();
    assert_eq!(catalog.len(), 5);
    assert!(!catalog.is_empty());
}

#[test]
fn test_catalog_template_dimensions() {
    let catalog = Catalog::new();
    let dims: Vec<(u8, u8)> = catalog
        .templates()
        .iter()
        .map(|s| (s.rows(), s.cols()))
        .collect();

    // Square, Z, L, S, line - in catalog order.
    assert_eq!(dims, vec![(2, 2), (2, 3), (2, 3), (2, 3), (1, 4)]);
}

#[test]
fn test_every_template_has_four_cells() {
    let catalog = Catalog::new();
    for shape in catalog.templates() {
        assert_eq!(shape.filled_cells().len(), 4);
    }
}

#[test]
fn test_pick_returns_independent_copy() {
    let catalog = Catalog::new();
    let mut rng = SimpleRng::new(42);

    let picked = catalog.pick(&mut rng);
    let original_dims = (picked.rows(), picked.cols());

    // Rotating the picked copy must not disturb any catalog entry.
    let _rotated = picked.rotated();
    let still_there = catalog
        .templates()
        .iter()
        .any(|s| (s.rows(), s.cols()) == original_dims && s.filled_cells() == picked.filled_cells());
    assert!(still_there);
}

#[test]
fn test_pick_covers_all_templates() {
    let catalog = Catalog::new();
    let mut rng = SimpleRng::new(7);

    let mut seen = [false; 5];
    for _ in 0..1000 {
        let shape = catalog.pick(&mut rng);
        let idx = catalog
            .templates()
            .iter()
            .position(|s| *s == shape)
            .expect("picked shape not in catalog");
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s), "not all templates drawn: {seen:?}");
}

#[test]
fn test_rotate_swaps_bounding_box() {
    let line = Shape::from_pattern(&["■■■■"]);
    let vertical = line.rotated();
    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));

    let l = Shape::from_pattern(&["■  ", "■■■"]);
    let r = l.rotated();
    assert_eq!((r.rows(), r.cols()), (3, 2));
}

#[test]
fn test_four_rotations_restore_occupancy() {
    let catalog = Catalog::new();
    for shape in catalog.templates() {
        let back = shape.rotated().rotated().rotated().rotated();
        assert_eq!(*shape, back, "4x rotation changed {shape:?}");
    }
}

#[test]
fn test_rotation_mapping() {
    // S template:
    // .■■
    // ■■.
    let s = Shape::from_pattern(&[" ■■", "■■ "]);
    let r = s.rotated();
    // Clockwise:
    // ■.
    // ■■
    // .■
    assert_eq!((r.rows(), r.cols()), (3, 2));
    assert!(r.filled(0, 0) && !r.filled(1, 0));
    assert!(r.filled(0, 1) && r.filled(1, 1));
    assert!(!r.filled(0, 2) && r.filled(1, 2));
}

use std::sync::Arc;

use egui::{pos2, vec2, Color32, ColorImage, Vec2};
use mosaic_paint::{EditorContext, Tool};

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

fn editor() -> EditorContext {
    EditorContext::new(CANVAS)
}

/// Creates a 40x40 rectangle centered at (120, 120) and leaves it selected.
fn editor_with_square() -> EditorContext {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    editor.pointer_pressed(pos2(100.0, 100.0));
    editor.pointer_moved(pos2(140.0, 140.0));
    editor.pointer_released();
    editor.set_tool(Tool::Move);
    editor
}

#[test]
fn clicking_an_element_selects_and_dragging_moves_it() {
    let mut editor = editor_with_square();
    let id = editor.selected().expect("creation selects");

    editor.pointer_pressed(pos2(120.0, 120.0));
    editor.pointer_moved(pos2(150.0, 130.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.center(), pos2(150.0, 130.0));
    assert_eq!(element.size(), vec2(40.0, 40.0));
    assert_eq!(editor.selected(), Some(id));
}

#[test]
fn dragging_keeps_the_grab_offset() {
    let mut editor = editor_with_square();
    let id = editor.selected().expect("creation selects");

    // Grab 10 units right of center; the element follows with that offset.
    editor.pointer_pressed(pos2(130.0, 120.0));
    editor.pointer_moved(pos2(200.0, 200.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.center(), pos2(190.0, 200.0));
}

#[test]
fn drag_commits_exactly_one_undo_step() {
    let mut editor = editor_with_square();
    assert_eq!(editor.history().undo_depth(), 1);

    editor.pointer_pressed(pos2(120.0, 120.0));
    editor.pointer_moved(pos2(150.0, 130.0));
    editor.pointer_released();
    assert_eq!(editor.history().undo_depth(), 2);

    assert!(editor.undo());
    let element = editor.scene().iter().next().expect("element restored");
    assert_eq!(element.center(), pos2(120.0, 120.0));
    // Selection does not survive history transitions.
    assert_eq!(editor.selected(), None);
}

#[test]
fn click_without_movement_commits_nothing() {
    let mut editor = editor_with_square();
    assert_eq!(editor.history().undo_depth(), 1);

    editor.pointer_pressed(pos2(120.0, 120.0));
    editor.pointer_released();

    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn clicking_empty_space_clears_selection() {
    let mut editor = editor_with_square();
    assert!(editor.selected().is_some());

    editor.pointer_pressed(pos2(700.0, 500.0));
    editor.pointer_released();

    assert_eq!(editor.selected(), None);
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn overlapping_pick_returns_the_topmost() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    editor.pointer_pressed(pos2(10.0, 10.0));
    editor.pointer_moved(pos2(50.0, 30.0));
    editor.pointer_released();

    editor.pointer_pressed(pos2(20.0, 15.0));
    editor.pointer_moved(pos2(60.0, 35.0));
    editor.pointer_released();
    let top_id = editor.selected().expect("second creation selects");

    editor.set_tool(Tool::Move);
    editor.pointer_pressed(pos2(35.0, 22.0));
    assert_eq!(editor.selected(), Some(top_id));
    editor.pointer_released();
}

#[test]
fn resizing_from_southeast_doubles_the_delta() {
    let mut editor = editor_with_square();
    let id = editor.selected().expect("creation selects");

    // The southeast corner of a 40x40 box centered at (120, 120).
    editor.pointer_pressed(pos2(140.0, 140.0));
    editor.pointer_moved(pos2(150.0, 145.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.size(), vec2(60.0, 50.0));
    // The center never moves during a corner resize.
    assert_eq!(element.center(), pos2(120.0, 120.0));
    assert_eq!(editor.history().undo_depth(), 2);
}

#[test]
fn resizing_from_northwest_inverts_both_axes() {
    let mut editor = editor_with_square();
    let id = editor.selected().expect("creation selects");

    editor.pointer_pressed(pos2(100.0, 100.0));
    editor.pointer_moved(pos2(95.0, 90.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.size(), vec2(50.0, 60.0));
    assert_eq!(element.center(), pos2(120.0, 120.0));
}

#[test]
fn resize_clamps_to_the_minimum_size() {
    let mut editor = editor_with_square();
    let id = editor.selected().expect("creation selects");

    // Collapsing the box past zero stops at the 20-unit minimum.
    editor.pointer_pressed(pos2(100.0, 100.0));
    editor.pointer_moved(pos2(130.0, 130.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.size(), vec2(20.0, 20.0));
}

#[test]
fn image_resize_preserves_aspect_ratio() {
    let mut editor = editor();
    editor.insert_image(Arc::new(ColorImage::new([200, 100], Color32::WHITE)));
    let id = editor.selected().expect("insertion selects");
    editor.set_tool(Tool::Move);

    // 100x50 box centered at (400, 300): southeast corner at (450, 325).
    // The x axis dominates the movement, so height derives from width.
    editor.pointer_pressed(pos2(450.0, 325.0));
    editor.pointer_moved(pos2(470.0, 330.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.size(), vec2(140.0, 70.0));
    assert_eq!(element.center(), pos2(400.0, 300.0));
}

#[test]
fn image_resize_driven_by_the_vertical_axis() {
    let mut editor = editor();
    editor.insert_image(Arc::new(ColorImage::new([200, 100], Color32::WHITE)));
    let id = editor.selected().expect("insertion selects");
    editor.set_tool(Tool::Move);

    editor.pointer_pressed(pos2(450.0, 325.0));
    editor.pointer_moved(pos2(455.0, 345.0));
    editor.pointer_released();

    // Height grows by 40, width derives from the 2:1 aspect.
    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.size(), vec2(180.0, 90.0));
}

#[test]
fn handle_hit_wins_over_element_pick() {
    let mut editor = editor_with_square();
    let id = editor.selected().expect("creation selects");

    // (135, 135) is inside the element but also within the southeast
    // handle's hotspot; the handle takes priority.
    editor.pointer_pressed(pos2(135.0, 135.0));
    editor.pointer_moved(pos2(145.0, 145.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.size(), vec2(60.0, 60.0));
    assert_eq!(element.center(), pos2(120.0, 120.0));
}

#[test]
fn undo_and_redo_are_ignored_mid_session() {
    let mut editor = editor_with_square();
    assert_eq!(editor.history().undo_depth(), 1);

    editor.pointer_pressed(pos2(120.0, 120.0));
    editor.pointer_moved(pos2(160.0, 160.0));
    assert!(!editor.undo());
    assert!(!editor.redo());
    editor.pointer_released();

    assert_eq!(editor.history().undo_depth(), 2);
}

#[test]
fn positions_outside_the_canvas_are_not_clamped() {
    let mut editor = editor_with_square();
    let id = editor.selected().expect("creation selects");

    editor.pointer_pressed(pos2(120.0, 120.0));
    editor.pointer_moved(pos2(-40.0, 650.0));
    editor.pointer_released();

    let element = editor.scene().get(id).expect("element still present");
    assert_eq!(element.center(), pos2(-40.0, 650.0));
}

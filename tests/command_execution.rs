use egui::{pos2, Color32, Vec2};
use mosaic_paint::element::{Element, ShapeKind};
use mosaic_paint::{EditorContext, History, Scene, Tool};

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

fn sample_element(x: f32, y: f32) -> Element {
    Element::shape(ShapeKind::Rectangle, pos2(x, y), Color32::BLACK, false)
}

fn stroke(editor: &mut EditorContext, from: (f32, f32), to: (f32, f32)) {
    editor.set_tool(Tool::Draw);
    editor.pointer_pressed(pos2(from.0, from.1));
    editor.pointer_moved(pos2(to.0, to.1));
    editor.pointer_released();
}

#[test]
fn commit_pushes_the_previous_scene_and_clears_redo() {
    let mut history = History::new();
    let mut scene = Scene::new();

    let mut first = scene.clone();
    first.push(sample_element(10.0, 10.0));
    history.commit(&mut scene, first.clone());
    assert_eq!(scene, first);
    assert_eq!(history.undo_depth(), 1);

    assert!(history.undo(&mut scene));
    assert!(scene.is_empty());
    assert!(history.can_redo());

    // A fresh commit invalidates the pending redo chain.
    let mut second = scene.clone();
    second.push(sample_element(20.0, 20.0));
    history.commit(&mut scene, second);
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn undo_then_redo_restores_the_exact_scene() {
    let mut history = History::new();
    let mut scene = Scene::new();

    let mut next = scene.clone();
    next.push(sample_element(10.0, 10.0));
    history.commit(&mut scene, next);
    let committed = scene.clone();

    assert!(history.undo(&mut scene));
    assert_ne!(scene, committed);
    assert!(history.redo(&mut scene));
    assert_eq!(scene, committed);
}

#[test]
fn empty_stacks_are_no_ops() {
    let mut history = History::new();
    let mut scene = Scene::new();
    scene.push(sample_element(10.0, 10.0));
    let untouched = scene.clone();

    assert!(!history.undo(&mut scene));
    assert!(!history.redo(&mut scene));
    assert_eq!(scene, untouched);
}

#[test]
fn record_behaves_like_commit_for_in_place_edits() {
    let mut history = History::new();
    let mut scene = Scene::new();
    let before = scene.clone();
    scene.push(sample_element(10.0, 10.0));
    history.record(before);

    assert!(history.undo(&mut scene));
    assert!(scene.is_empty());
    assert!(history.redo(&mut scene));
    assert_eq!(scene.len(), 1);
}

#[test]
fn undo_depth_tracks_committed_operations() {
    let mut editor = EditorContext::new(CANVAS);
    stroke(&mut editor, (10.0, 10.0), (20.0, 20.0));
    stroke(&mut editor, (30.0, 30.0), (40.0, 40.0));
    stroke(&mut editor, (50.0, 50.0), (60.0, 60.0));

    assert_eq!(editor.history().undo_depth(), 3);
    assert_eq!(editor.scene().len(), 3);
}

#[test]
fn stroke_undo_redo_roundtrip() {
    let mut editor = EditorContext::new(CANVAS);
    stroke(&mut editor, (10.0, 10.0), (20.0, 20.0));
    let committed = editor.scene().clone();

    assert!(editor.undo());
    assert!(editor.scene().is_empty());
    assert!(editor.can_redo());

    assert!(editor.redo());
    assert_eq!(*editor.scene(), committed);
}

#[test]
fn new_commit_clears_a_non_empty_redo_stack() {
    let mut editor = EditorContext::new(CANVAS);
    stroke(&mut editor, (10.0, 10.0), (20.0, 20.0));
    assert!(editor.undo());
    assert!(editor.can_redo());

    stroke(&mut editor, (30.0, 30.0), (40.0, 40.0));
    assert!(!editor.can_redo());
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn undo_clears_the_selection() {
    let mut editor = EditorContext::new(CANVAS);
    editor.set_tool(Tool::Rectangle);
    editor.pointer_pressed(pos2(100.0, 100.0));
    editor.pointer_moved(pos2(140.0, 140.0));
    editor.pointer_released();
    assert!(editor.selected().is_some());

    assert!(editor.undo());
    assert_eq!(editor.selected(), None);

    assert!(editor.redo());
    assert_eq!(editor.selected(), None);
}

#[test]
fn delete_participates_in_history() {
    let mut editor = EditorContext::new(CANVAS);
    editor.set_tool(Tool::Rectangle);
    editor.pointer_pressed(pos2(100.0, 100.0));
    editor.pointer_moved(pos2(140.0, 140.0));
    editor.pointer_released();
    assert_eq!(editor.history().undo_depth(), 1);

    assert!(editor.delete_selected());
    assert!(editor.scene().is_empty());
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.history().undo_depth(), 2);

    assert!(editor.undo());
    assert_eq!(editor.scene().len(), 1);
}

#[test]
fn delete_without_selection_is_a_no_op() {
    let mut editor = EditorContext::new(CANVAS);
    assert!(!editor.delete_selected());
    assert_eq!(editor.history().undo_depth(), 0);
}

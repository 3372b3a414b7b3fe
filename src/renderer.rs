use std::collections::HashMap;

use egui::emath::Rot2;
use egui::{
    Color32, Context, Mesh, Painter, Pos2, Rect, Shape, Stroke, TextureHandle, TextureOptions,
    Vec2,
};

use crate::element::{Element, ElementId, ElementKind, PathPoint, ShapeKind};
use crate::geometry::Handle;
use crate::state::EditorContext;

/// Accent color of the selection overlay.
const SELECTION_COLOR: Color32 = Color32::from_rgb(0x00, 0x66, 0xff);
/// The dashed selection rectangle sits this much outside the bounding box.
const SELECTION_PADDING: f32 = 5.0;
const SELECTION_DASH: f32 = 5.0;
/// Radius of the circular corner handles.
const HANDLE_RADIUS: f32 = 5.0;
/// Outline width of primitive shapes.
const SHAPE_OUTLINE_WIDTH: f32 = 2.0;
/// Fixed sampling of the ellipse outline; a constant keeps redraws
/// pixel-identical for identical state.
const ELLIPSE_SEGMENTS: usize = 64;

/// Redraws the whole scene from element state plus transient capture state,
/// every frame. Owns the texture cache for image elements: pixel data never
/// changes after insertion, so each image uploads exactly once and entries
/// are pruned when their element leaves the scene.
#[derive(Default)]
pub struct Renderer {
    textures: HashMap<ElementId, TextureHandle>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One full pass: white background, elements in z-order with the
    /// selection overlay, then any in-progress freehand stroke on top in
    /// untransformed canvas space.
    pub fn render(
        &mut self,
        ctx: &Context,
        painter: &Painter,
        canvas_rect: Rect,
        editor: &EditorContext,
    ) {
        self.textures
            .retain(|id, _| editor.scene().get(*id).is_some());

        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);

        let origin = canvas_rect.min;
        for element in editor.scene().iter() {
            self.draw_element(ctx, painter, origin, element);
            if editor.selected() == Some(element.id()) {
                draw_selection(painter, origin, element);
            }
        }

        if let Some(points) = editor.session().live_points() {
            draw_live_stroke(painter, origin, points, editor.color(), editor.pen_size());
        }
    }

    fn draw_element(&mut self, ctx: &Context, painter: &Painter, origin: Pos2, element: &Element) {
        let rotation = Rot2::from_angle(element.rotation());
        let place = |local: Vec2| origin + element.center().to_vec2() + rotation * local;

        match element.kind() {
            ElementKind::Path(path) => {
                if path.points().len() < 2 {
                    return;
                }
                let points: Vec<Pos2> =
                    path.points().iter().map(|p| place(p.pos.to_vec2())).collect();
                painter.add(Shape::line(
                    points,
                    Stroke::new(path.pen_size(), element.color()),
                ));
            }
            ElementKind::Image(image) => {
                let texture = self.textures.entry(element.id()).or_insert_with(|| {
                    ctx.load_texture(
                        format!("element-{}", element.id()),
                        egui::ImageData::Color(image.pixels().clone()),
                        TextureOptions::LINEAR,
                    )
                });
                let center = origin + element.center().to_vec2();
                let mut mesh = Mesh::with_texture(texture.id());
                mesh.add_rect_with_uv(
                    Rect::from_center_size(center, element.size()),
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
                if element.rotation() != 0.0 {
                    mesh.rotate(rotation, center);
                }
                painter.add(Shape::mesh(mesh));
            }
            ElementKind::Shape(shape) => {
                let outline: Vec<Pos2> = shape_outline(shape.kind(), element.size())
                    .into_iter()
                    .map(place)
                    .collect();
                let stroke = Stroke::new(SHAPE_OUTLINE_WIDTH, element.color());
                if shape.fill() {
                    painter.add(Shape::convex_polygon(outline, element.color(), stroke));
                } else {
                    painter.add(Shape::closed_line(outline, stroke));
                }
            }
        }
    }
}

/// Outline of a primitive shape in element-local space, centered at origin.
fn shape_outline(kind: ShapeKind, size: Vec2) -> Vec<Vec2> {
    let half = size / 2.0;
    match kind {
        ShapeKind::Rectangle => vec![
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ],
        ShapeKind::Triangle => vec![
            Vec2::new(0.0, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ],
        ShapeKind::Circle => (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let t = std::f32::consts::TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
                Vec2::new(half.x * t.cos(), half.y * t.sin())
            })
            .collect(),
    }
}

/// Dashed bounding rectangle (inflated by the selection padding) plus the
/// four circular corner handles.
fn draw_selection(painter: &Painter, origin: Pos2, element: &Element) {
    let rotation = Rot2::from_angle(element.rotation());
    let place = |local: Vec2| origin + element.center().to_vec2() + rotation * local;
    let stroke = Stroke::new(1.0, SELECTION_COLOR);

    let half = element.size() / 2.0 + Vec2::splat(SELECTION_PADDING);
    let corners = [
        place(Vec2::new(-half.x, -half.y)),
        place(Vec2::new(half.x, -half.y)),
        place(Vec2::new(half.x, half.y)),
        place(Vec2::new(-half.x, half.y)),
    ];
    for i in 0..corners.len() {
        painter.extend(Shape::dashed_line(
            &[corners[i], corners[(i + 1) % corners.len()]],
            stroke,
            SELECTION_DASH,
            SELECTION_DASH,
        ));
    }

    for handle in Handle::ALL {
        let corner = place(handle.direction() * (element.size() / 2.0));
        painter.circle(corner, HANDLE_RADIUS, Color32::WHITE, stroke);
    }
}

/// The transient freehand capture, stroked with the live color and pen size.
fn draw_live_stroke(
    painter: &Painter,
    origin: Pos2,
    points: &[PathPoint],
    color: Color32,
    pen_size: f32,
) {
    if points.len() < 2 {
        return;
    }
    let points: Vec<Pos2> = points.iter().map(|p| origin + p.pos.to_vec2()).collect();
    painter.add(Shape::line(points, Stroke::new(pen_size, color)));
}

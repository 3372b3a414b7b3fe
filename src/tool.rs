use crate::element::ShapeKind;

/// The interpretation mode applied to pointer input. `Image` exists so the
/// import action has an active-tool representation; for pointer handling it
/// behaves exactly like `Move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Move,
    Draw,
    Rectangle,
    Circle,
    Triangle,
    Image,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Move,
        Tool::Draw,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
        Tool::Image,
    ];

    /// The shape kind produced by the drag-to-draw tools.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::Move | Tool::Draw | Tool::Image => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Move => "Move",
            Tool::Draw => "Draw",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
            Tool::Image => "Image",
        }
    }
}

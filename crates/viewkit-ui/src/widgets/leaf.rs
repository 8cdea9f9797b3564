//! Leaf widgets: text, buttons, images, shapes and spacers.

#![allow(non_snake_case)]

use viewkit_graphics::{Color, Shape, Size};

use crate::node::{Action, DisplayNode};

pub fn Text(value: impl Into<String>) -> DisplayNode {
    DisplayNode::Text {
        value: value.into(),
    }
}

pub fn Button(label: impl Into<String>, action: impl Fn() + 'static) -> DisplayNode {
    DisplayNode::Button {
        label: label.into(),
        action: Action::new(action),
    }
}

/// Named image with a fixed intrinsic size.
pub fn Image(name: impl Into<String>, size: Size) -> DisplayNode {
    DisplayNode::Image {
        name: name.into(),
        size,
    }
}

/// Shape that fills the space it is offered, painted with the foreground color.
pub fn ShapeView(shape: Shape) -> DisplayNode {
    DisplayNode::Shape { shape, fill: None }
}

pub fn FilledShape(shape: Shape, color: Color) -> DisplayNode {
    DisplayNode::Shape {
        shape,
        fill: Some(color),
    }
}

pub fn Spacer(size: Size) -> DisplayNode {
    DisplayNode::Spacer { size }
}

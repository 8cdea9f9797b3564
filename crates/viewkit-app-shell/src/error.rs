use std::fmt;

/// Failure to deliver a user event or settle the tree afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchError {
    NoTarget { x: f32, y: f32 },
    NoButton { label: String },
    Unsettled { passes: usize },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoTarget { x, y } => write!(f, "no button at ({x}, {y})"),
            DispatchError::NoButton { label } => write!(f, "no button labelled {label:?}"),
            DispatchError::Unsettled { passes } => {
                write!(f, "state still invalid after {passes} render passes")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

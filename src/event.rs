//! Toolkit-independent input vocabulary for the carousel.

/// Navigation direction of a control or swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A previous/next button was activated.
    ControlActivated(Direction),
    /// Indicator dot `i` was activated.
    IndicatorActivated(usize),
    KeyPressed(Key),
    PointerEntered,
    PointerLeft,
    /// A touch or drag began inside the carousel.
    GestureStarted,
    /// A touch or drag ended. Positions are horizontal coordinates.
    Gesture { start: f32, end: f32 },
}

/// Classifies a horizontal drag. A drag to the left (end < start) moves to the
/// next item, a drag to the right moves to the previous one. Displacements at
/// or below `threshold` are not swipes.
pub fn swipe_direction(start: f32, end: f32, threshold: f32) -> Option<Direction> {
    let diff = start - end;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_swipe_goes_forward() {
        assert_eq!(swipe_direction(300.0, 230.0, 50.0), Some(Direction::Next));
        assert_eq!(swipe_direction(230.0, 300.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn short_drags_are_ignored() {
        assert_eq!(swipe_direction(300.0, 270.0, 50.0), None);
        assert_eq!(swipe_direction(300.0, 250.0, 50.0), None);
        assert_eq!(swipe_direction(300.0, 300.0, 50.0), None);
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoPlayState {
    Playing, // Timer pending, next() fires every delay
    Stopped, // No timer; interaction in progress or stopped by the host
}

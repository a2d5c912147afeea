#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Start,
    Stop,
    Toggle,
    JumpToStep(isize),
}

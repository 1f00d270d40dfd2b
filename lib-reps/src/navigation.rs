/// Where to go once an exercise is complete. Resolving a sequence position to an actual exercise
/// is up to the navigator.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep
{
    /// Continue the sequence with the exercise at this position.
    Exercise(i32),

    /// The sequence is finished.
    MainMenu,

    /// The exercise was picked on its own, outside any sequence.
    FreeSessionPicker,
}

impl NextStep
{
    /// Sequences count down: the exercise at `position` is followed by `position - 1`. Reaching
    /// zero ends the sequence, negative positions mark stand-alone exercises.
    ///
    pub fn after(position: i32) -> Self {
        let next = position.saturating_sub(1);
        if next > 0 {
            NextStep::Exercise(next)
        } else if next == 0 {
            NextStep::MainMenu
        } else {
            NextStep::FreeSessionPicker
        }
    }
}

/// Told when an exercise is complete.
///
pub trait Navigator
{
    fn exercise_complete(&mut self, next: NextStep);
}

impl<T: Navigator + ?Sized> Navigator for &mut T {
    fn exercise_complete(&mut self, next: NextStep) {
        (**self).exercise_complete(next)
    }
}

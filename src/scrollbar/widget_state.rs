/// Possible states of the widget
///
/// The discriminants are a stable contract: presentation tables are indexed
/// by `ordinal()`, so variants must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WidgetState {
    #[default]
    Enabled = 0,
    Disabled = 1,
    Pressed = 2,
    Focussed = 3,
}

impl WidgetState {
    pub const COUNT: usize = 4;

    pub const ALL: [WidgetState; Self::COUNT] = [
        WidgetState::Enabled,
        WidgetState::Disabled,
        WidgetState::Pressed,
        WidgetState::Focussed,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn is_active(self) -> bool {
        self != WidgetState::Disabled
    }
}

//! Modifier keys held while clicking a library item.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Keyboard modifier keys held during a click.
///
/// Hosts forward the full key state; only `shift` changes selection today, and
/// ctrl/meta clicks must stay plain toggles rather than range extensions.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Modifiers with only shift held.
    #[must_use]
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// Whether the click asks to extend the selection over a range of items.
    ///
    /// Only shift counts; ctrl/meta clicks toggle a single item like a plain click.
    #[must_use]
    pub fn extends_range(self) -> bool {
        self.shift
    }
}

//! Character display trait for the 16x2 panel

/// Visible columns per row
pub const COLUMNS: u8 = 16;

/// Visible rows
pub const ROWS: u8 = 2;

/// Errors that can occur when driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Cursor position outside 1..=16 / 1..=2
    InvalidPosition,
    /// Bus write failed
    Bus,
}

/// Trait for character displays
///
/// Positions are 1-based: column 1..=16, row 1..=2. Implementations must
/// wait out the panel's settle time after each write so callers can issue
/// writes back to back.
pub trait CharDisplay {
    /// Clear the screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write ASCII text at the cursor
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Helper trait for drawing whole screens
pub trait DisplayExt: CharDisplay {
    /// Write text starting at a position
    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.write_text(text)
    }

    /// Replace the screen contents with two lines
    fn show_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        self.clear()?;
        self.write_at(1, 1, top)?;
        self.write_at(1, 2, bottom)
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay> DisplayExt for T {}

/// Check a 1-based cursor position against the panel size
pub fn check_position(col: u8, row: u8) -> Result<(), DisplayError> {
    if (1..=COLUMNS).contains(&col) && (1..=ROWS).contains(&row) {
        Ok(())
    } else {
        Err(DisplayError::InvalidPosition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bounds() {
        assert!(check_position(1, 1).is_ok());
        assert!(check_position(16, 2).is_ok());
        assert_eq!(check_position(0, 1), Err(DisplayError::InvalidPosition));
        assert_eq!(check_position(17, 1), Err(DisplayError::InvalidPosition));
        assert_eq!(check_position(1, 3), Err(DisplayError::InvalidPosition));
    }
}

//=========================================================================
// Render Surface
//=========================================================================
//
// Output contract between the core and whatever actually draws
// (terminal window, pixel buffer, test recorder). The core never
// renders; it brackets each frame with clear/present on the active
// scene's surface and hands the surface to objects during their draw
// call.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::object::Cell;

//=== RenderSurface =======================================================

/// One scene's output sink.
///
/// `clear` and `present` are invoked by the engine exactly once per
/// tick, unconditionally, even when no object drew anything. The put
/// methods are the primitives objects draw with; coordinates are grid
/// cells, interpretation is up to the implementation.
pub trait RenderSurface {
    /// Prepares the surface for a new frame.
    fn clear(&mut self);

    /// Flushes the frame to the underlying output.
    fn present(&mut self);

    /// Draws a single glyph at a cell.
    fn put_glyph(&mut self, cell: Cell, glyph: char);

    /// Draws a string starting at a cell.
    fn put_text(&mut self, cell: Cell, text: &str);
}

//=== NullSurface =========================================================

/// Surface that discards everything. Default for headless engines and
/// scenes that draw nothing.
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn clear(&mut self) {}

    fn present(&mut self) {}

    fn put_glyph(&mut self, _cell: Cell, _glyph: char) {}

    fn put_text(&mut self, _cell: Cell, _text: &str) {}
}

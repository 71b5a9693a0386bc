//! 2x4 braille dot canvas layered over terminal cells

use crate::colors::{layer_color, Layer};
use crate::terminal::Terminal;

// Bit for each dot of a braille cell, indexed [row][col]
const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

pub struct BrailleCanvas {
    width: usize,  // in dots
    height: usize, // in dots
    dots: Vec<Vec<u8>>,
}

impl BrailleCanvas {
    /// Canvas covering a terminal of `cols` x `rows` cells
    pub fn new(cols: u16, rows: u16) -> Self {
        let width = cols as usize * 2;
        let height = rows as usize * 4;
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        for row in &mut self.dots {
            row.fill(0);
        }
    }

    /// Light a dot; a higher layer overrides a lower one.
    pub fn plot(&mut self, x: i32, y: i32, layer: Layer) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let cell = &mut self.dots[y as usize][x as usize];
        *cell = (*cell).max(layer as u8);
    }

    /// Bresenham line between two dots
    pub fn line(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32), layer: Layer) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;

        loop {
            self.plot(x, y, layer);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled diamond of the given radius
    pub fn blob(&mut self, (cx, cy): (i32, i32), radius: i32, layer: Layer) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() + dy.abs() <= radius {
                    self.plot(cx + dx, cy + dy, layer);
                }
            }
        }
    }

    /// Braille glyph and strongest layer for one terminal cell
    pub fn cell(&self, col: usize, row: usize) -> Option<(char, Layer)> {
        let mut bits: u8 = 0;
        let mut top: u8 = 0;
        for (dy, row_bits) in DOT_BITS.iter().enumerate() {
            for (dx, bit) in row_bits.iter().enumerate() {
                let level = self
                    .dots
                    .get(row * 4 + dy)
                    .and_then(|r| r.get(col * 2 + dx))
                    .copied()
                    .unwrap_or(0);
                if level > 0 {
                    bits |= bit;
                    top = top.max(level);
                }
            }
        }
        let layer = Layer::from_level(top)?;
        let ch = char::from_u32(0x2800 + bits as u32)?;
        Some((ch, layer))
    }

    /// Copy every non-empty cell into the terminal's back buffer.
    pub fn blit(&self, term: &mut Terminal, scheme: u8) {
        for row in 0..self.height / 4 {
            for col in 0..self.width / 2 {
                if let Some((ch, layer)) = self.cell(col, row) {
                    let (color, bold) = layer_color(scheme, layer);
                    term.set(col as i32, row as i32, ch, Some(color), bold);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dot_encodings() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.plot(0, 0, Layer::Grid);
        assert_eq!(canvas.cell(0, 0), Some(('\u{2801}', Layer::Grid)));

        canvas.clear();
        canvas.plot(1, 3, Layer::Arc);
        assert_eq!(canvas.cell(0, 0), Some(('\u{2880}', Layer::Arc)));
    }

    #[test]
    fn full_cell_and_priority() {
        let mut canvas = BrailleCanvas::new(1, 1);
        for y in 0..4 {
            for x in 0..2 {
                canvas.plot(x, y, Layer::Grid);
            }
        }
        canvas.plot(1, 1, Layer::Pulse);
        canvas.plot(1, 1, Layer::Arc);
        assert_eq!(canvas.cell(0, 0), Some(('\u{28FF}', Layer::Pulse)));
    }

    #[test]
    fn empty_cell_and_out_of_bounds() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.plot(-1, 0, Layer::Pulse);
        canvas.plot(4, 0, Layer::Pulse);
        canvas.plot(0, 4, Layer::Pulse);
        assert_eq!(canvas.cell(0, 0), None);
        assert_eq!(canvas.cell(1, 0), None);
    }

    #[test]
    fn line_hits_both_ends() {
        let mut canvas = BrailleCanvas::new(10, 5);
        canvas.line((0, 0), (19, 7), Layer::Arc);
        assert_eq!(canvas.dots[0][0], Layer::Arc as u8);
        assert_eq!(canvas.dots[7][19], Layer::Arc as u8);
        canvas.line((5, 19), (5, 19), Layer::Limb);
        assert_eq!(canvas.dots[19][5], Layer::Limb as u8);
    }

    #[test]
    fn blob_is_a_diamond() {
        let mut canvas = BrailleCanvas::new(5, 3);
        canvas.blob((4, 4), 1, Layer::Server);
        let lit: usize = canvas.dots.iter().flatten().filter(|&&d| d > 0).count();
        assert_eq!(lit, 5);
    }

    #[test]
    fn blit_writes_into_terminal() {
        let mut canvas = BrailleCanvas::new(3, 2);
        canvas.plot(2, 4, Layer::Server);
        let mut term = Terminal::headless(3, 2);
        canvas.blit(&mut term, 0);
        assert_eq!(term.cell(1, 1).ch, '\u{2801}');
        assert!(term.cell(1, 1).bold);
        assert_eq!(term.cell(0, 0).ch, ' ');
    }
}

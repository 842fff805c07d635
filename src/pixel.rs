use bytemuck::{Pod, Zeroable};

use crate::{colour::Rgb, screen};

/// One cell of the screen raster, laid out as a GPU vertex.
///
/// `position` duplicates the cell's index; the presenter draws the grid as a
/// point list and needs it per vertex.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub position: [f32; 2],
    pub colour: [u8; 4],
}

impl Pixel {
    pub fn set(&mut self, x: u32, y: u32, colour: Rgb) {
        self.position = [x as f32, y as f32];
        self.colour = colour.to_rgba();
    }
}

/// Row-major raster of [`Pixel`]s.
pub struct PixelGrid {
    size: screen::Size,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// A grid of fully transparent cells, each already at its own position.
    pub fn new(size: screen::Size) -> Self {
        let pixels = (0..size.height)
            .flat_map(|y| {
                (0..size.width).map(move |x| Pixel {
                    position: [x as f32, y as f32],
                    colour: [0; 4],
                })
            })
            .collect();
        Self { size, pixels }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x < self.size.width && y < self.size.height {
            self.pixels.get(self.size.index(x, y))
        } else {
            None
        }
    }

    /// Disjoint mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Pixel> {
        self.pixels.chunks_mut(self.size.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_sized_and_positioned() {
        let size = screen::Size::new(5, 3);
        let grid = PixelGrid::new(size);
        assert_eq!(grid.pixels().len(), 15);
        for y in 0..3 {
            for x in 0..5 {
                let pixel = grid.pixels()[size.index(x, y)];
                assert_eq!(pixel.position, [x as f32, y as f32]);
                assert_eq!(pixel.colour, [0; 4]);
            }
        }
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn rows_cover_the_grid() {
        let mut grid = PixelGrid::new(screen::Size::new(4, 6));
        let rows: Vec<usize> = grid.rows_mut().map(|row| row.len()).collect();
        assert_eq!(rows, vec![4; 6]);
    }

    #[test]
    fn pixel_is_a_tightly_packed_vertex() {
        assert_eq!(std::mem::size_of::<Pixel>(), 12);
        let mut pixel = Pixel::zeroed();
        pixel.set(3, 7, Rgb::new(10, 20, 30));
        let bytes: &[u8] = bytemuck::bytes_of(&pixel);
        assert_eq!(&bytes[8..], &[10, 20, 30, 255]);
    }
}

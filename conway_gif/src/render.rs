// render.rs - Paint generations into frames and encode them as a looping GIF

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use conway::Universe;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use log::debug;
use thiserror::Error;

pub const DEAD_COLOUR: Rgba<u8> = Rgba([255, 255, 255, 255]);  // White
pub const LIVE_COLOUR: Rgba<u8> = Rgba([0, 0, 0, 255]);        // Black

#[derive(Debug, Error)]
pub enum GifError {
    #[error("animation has no frames")]
    Empty,

    #[error("{width}x{height} cells at scale {scale} exceeds the {max}-pixel GIF frame limit", max = u16::MAX)]
    TooLarge { width: usize, height: usize, scale: u32 },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("gif encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Pixel size of a frame, or `TooLarge` when either side overflows a GIF
/// logical screen.
pub fn frame_size(universe: &Universe, scale: u32) -> Result<(u32, u32), GifError> {
    let too_large = || GifError::TooLarge {
        width: universe.width(),
        height: universe.height(),
        scale,
    };
    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .filter(|&pixels| pixels <= u32::from(u16::MAX))
    };

    let width = side(universe.width()).ok_or_else(too_large)?;
    let height = side(universe.height()).ok_or_else(too_large)?;
    Ok((width, height))
}

/// One generation as an image; each cell is a `scale`×`scale` block with
/// columns along x and rows along y.
pub fn paint_generation(universe: &Universe, scale: u32) -> Result<RgbaImage, GifError> {
    let (width, height) = frame_size(universe, scale)?;
    let mut img = RgbaImage::from_pixel(width, height, DEAD_COLOUR);

    for cell in universe.cells().iter().filter(|c| c.is_alive()) {
        let left = cell.y() as u32 * scale;
        let top = cell.x() as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(left + dx, top + dy, LIVE_COLOUR);
            }
        }
    }
    Ok(img)
}

/// Frames collected generation by generation, encoded in one go.
pub struct Animation {
    scale: u32,
    delay: Delay,
    frames: Vec<Frame>,
}

impl Animation {
    /// `delay_cs` is the per-frame delay in hundredths of a second.
    pub fn new(scale: u32, delay_cs: u16) -> Self {
        Self {
            scale: scale.max(1),
            delay: Delay::from_numer_denom_ms(u32::from(delay_cs) * 10, 1),
            frames: Vec::new(),
        }
    }

    /// Fails before painting anything if the frame would not fit a GIF.
    pub fn check(&self, universe: &Universe) -> Result<(), GifError> {
        frame_size(universe, self.scale).map(|_| ())
    }

    pub fn push(&mut self, universe: &Universe) -> Result<(), GifError> {
        let img = paint_generation(universe, self.scale)?;
        self.frames.push(Frame::from_parts(img, 0, 0, self.delay));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn encode<W: Write>(&self, writer: W) -> Result<(), GifError> {
        if self.frames.is_empty() {
            return Err(GifError::Empty);
        }

        let mut encoder = GifEncoder::new(writer);
        encoder.set_repeat(Repeat::Infinite)?;
        for frame in &self.frames {
            encoder.encode_frame(frame.clone())?;
        }
        Ok(())
    }

    /// Encodes in memory, then writes the file in one call so a short write
    /// surfaces as an error.
    pub fn save(&self, path: &Path) -> Result<(), GifError> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        fs::write(path, &bytes).map_err(|source| GifError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} frames to {}", self.frames.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::Seed;
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use std::io::Cursor;

    #[test]
    fn cells_become_scaled_blocks() {
        let universe = Universe::with_seed(4, 3, &Seed::Cells(vec![(2, 1)])).unwrap();
        let img = paint_generation(&universe, 2).unwrap();

        assert_eq!(img.dimensions(), (8, 6));
        for (x, y) in [(2, 4), (3, 4), (2, 5), (3, 5)] {
            assert_eq!(*img.get_pixel(x, y), LIVE_COLOUR, "pixel ({x},{y})");
        }
        assert_eq!(*img.get_pixel(0, 0), DEAD_COLOUR);
        assert_eq!(*img.get_pixel(4, 2), DEAD_COLOUR);
    }

    #[test]
    fn oversized_frames_are_rejected_before_painting() {
        let universe = Universe::with_seed(64, 64, &Seed::Empty).unwrap();

        let mut animation = Animation::new(1 << 27, 20);
        assert!(matches!(
            animation.check(&universe),
            Err(GifError::TooLarge { width: 64, height: 64, scale: 134_217_728 })
        ));
        assert!(matches!(animation.push(&universe), Err(GifError::TooLarge { .. })));
        assert_eq!(animation.len(), 0);

        // 64 * 1024 = 65536 is one pixel past the limit; 1023 fits.
        assert!(frame_size(&universe, 1024).is_err());
        assert_eq!(frame_size(&universe, 1023).unwrap(), (65_472, 65_472));

        let tall = Universe::new(1, 70_000).unwrap();
        assert!(matches!(frame_size(&tall, 1), Err(GifError::TooLarge { height: 70_000, .. })));
    }

    #[test]
    fn save_reports_write_failures() {
        let universe = Universe::new(4, 4).unwrap();
        let mut animation = Animation::new(1, 20);
        animation.push(&universe).unwrap();

        let path = std::env::temp_dir()
            .join(format!("conway_gif_missing_{}", std::process::id()))
            .join("life.gif");
        assert!(matches!(animation.save(&path), Err(GifError::Write { .. })));
    }

    #[test]
    fn save_writes_complete_file() {
        let universe = Universe::with_seed(5, 5, &Seed::Quadrant).unwrap();
        let mut animation = Animation::new(2, 20);
        animation.push(&universe).unwrap();
        animation.push(&universe).unwrap();

        let path = std::env::temp_dir().join(format!("conway_gif_save_{}.gif", std::process::id()));
        animation.save(&path).unwrap();
        let bytes = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(bytes.starts_with(b"GIF89a"));
        assert_eq!(bytes.last(), Some(&0x3B));  // GIF trailer
    }

    #[test]
    fn empty_animation_is_an_error() {
        let animation = Animation::new(2, 20);
        assert!(matches!(animation.encode(Vec::new()), Err(GifError::Empty)));
    }

    #[test]
    fn encodes_every_frame() {
        let mut universe = Universe::with_seed(6, 6, &Seed::Cells(vec![(2, 1), (2, 2), (2, 3)])).unwrap();
        let mut animation = Animation::new(3, 20);
        for _ in 0..4 {
            universe.tick();
            animation.push(&universe).unwrap();
        }
        assert_eq!(animation.len(), 4);
        assert_eq!(animation.frames[0].delay().numer_denom_ms(), (200, 1));

        let mut bytes = Vec::new();
        animation.encode(&mut bytes).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));

        let decoder = GifDecoder::new(Cursor::new(bytes)).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].buffer().dimensions(), (18, 18));
    }
}

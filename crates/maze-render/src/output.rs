use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::{debug, info};
use maze_search::{Frame, Renderer};

use crate::label::Labeler;
use crate::painter::Painter;

/// Delay of a per-step animation frame, in hundredths of a second.
pub const FRAME_DELAY: u16 = 15;
/// Delay of the closing animation frame, in hundredths of a second.
pub const FINAL_DELAY: u16 = 200;

/// Where and how [`PngRenderer`] writes its images.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Tile edge in pixels.
    pub cell_size: u32,
    /// Directory receiving `frame_NNNNNN.png` files.
    pub frames_dir: PathBuf,
    /// Path of the final image.
    pub output: PathBuf,
    /// Path of the animated PNG built by [`PngRenderer::write_animation`].
    pub animation: PathBuf,
    /// Write one image per expansion.
    pub write_frames: bool,
    /// Write coordinates, search keys and water marks into the tiles.
    pub labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 60,
            frames_dir: PathBuf::from("frames"),
            output: PathBuf::from("solution.png"),
            animation: PathBuf::from("animation.png"),
            write_frames: false,
            labels: true,
        }
    }
}

impl RenderConfig {
    /// Place the frame directory and every output image under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            frames_dir: dir.join("frames"),
            output: dir.join("solution.png"),
            animation: dir.join("animation.png"),
            ..Self::default()
        }
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_frames(mut self, write_frames: bool) -> Self {
        self.write_frames = write_frames;
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }
}

/// Error writing an image.
#[derive(Debug)]
pub enum RenderError {
    /// Creating or cleaning a directory failed.
    Io { path: PathBuf, source: io::Error },
    /// Encoding, decoding or writing a PNG failed.
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Encoding the animated PNG failed.
    Animation {
        path: PathBuf,
        source: png::EncodingError,
    },
    /// The label font could not be parsed.
    InvalidFont,
    /// The image for a grid of this size does not fit in `u32` pixels.
    TooLarge {
        width: i32,
        height: i32,
        cell_size: u32,
    },
    /// An animation frame differs in size from the first frame.
    FrameSize {
        path: PathBuf,
        expected: (u32, u32),
        found: (u32, u32),
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            RenderError::Image { path, source } => {
                write!(f, "image {}: {source}", path.display())
            }
            RenderError::Animation { path, source } => {
                write!(f, "cannot write animation {}: {source}", path.display())
            }
            RenderError::InvalidFont => write!(f, "invalid font data"),
            RenderError::TooLarge {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "a {width}x{height} maze with {cell_size} px cells is too large to draw"
            ),
            RenderError::FrameSize {
                path,
                expected,
                found,
            } => write!(
                f,
                "frame {} is {}x{}, expected {}x{}",
                path.display(),
                found.0,
                found.1,
                expected.0,
                expected.1
            ),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io { source, .. } => Some(source),
            RenderError::Image { source, .. } => Some(source),
            RenderError::Animation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Renderer writing search snapshots as PNG files.
#[derive(Debug)]
pub struct PngRenderer {
    config: RenderConfig,
    painter: Painter,
    /// Per-step frames written since the last `clear_frames`, in order.
    frames: Vec<PathBuf>,
}

impl PngRenderer {
    /// Fails only if labels are enabled and the bundled font cannot be
    /// loaded.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        let mut painter = Painter::new(config.cell_size);
        if config.labels {
            painter = painter.with_labels(Labeler::builtin()?);
        }
        Ok(Self {
            config,
            painter,
            frames: Vec::new(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Number of per-step frames written so far.
    pub fn frames_written(&self) -> usize {
        self.frames.len()
    }

    /// Path of the per-step frame for `step`.
    pub fn frame_path(&self, step: usize) -> PathBuf {
        self.config.frames_dir.join(format!("frame_{step:06}.png"))
    }

    /// Remove frames left by an earlier run and make sure the frame
    /// directory exists. Only `frame_*.png` files are deleted.
    pub fn clear_frames(&mut self) -> Result<(), RenderError> {
        let dir = &self.config.frames_dir;
        let io_err = |source| RenderError::Io {
            path: dir.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(io_err)?;
        let mut removed = 0usize;
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if is_frame_file(&path) {
                fs::remove_file(&path).map_err(|source| RenderError::Io {
                    path: path.clone(),
                    source,
                })?;
                removed += 1;
            }
        }
        debug!("removed {removed} old frames from {}", dir.display());
        self.frames.clear();
        Ok(())
    }

    /// Paint `frame` and write it to `path`, creating parent directories.
    pub fn write(&self, frame: &Frame<'_>, path: &Path) -> Result<(), RenderError> {
        create_parent(path)?;
        self.painter
            .paint(frame)?
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| RenderError::Image {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Assemble the per-step frames written so far, followed by the final
    /// image, into an animated PNG at `config.animation`. Frames are shown
    /// for [`FRAME_DELAY`], the final image for [`FINAL_DELAY`], and the
    /// animation loops forever. Returns the number of frames.
    pub fn write_animation(&self) -> Result<usize, RenderError> {
        let mut sources = self.frames.clone();
        sources.push(self.config.output.clone());

        let mut images: Vec<RgbaImage> = Vec::with_capacity(sources.len());
        for path in &sources {
            let img = image::open(path).map_err(|source| RenderError::Image {
                path: path.clone(),
                source,
            })?;
            images.push(img.to_rgba8());
        }
        let Some(expected) = images.first().map(|img| img.dimensions()) else {
            return Ok(0);
        };
        for (path, img) in sources.iter().zip(&images) {
            if img.dimensions() != expected {
                return Err(RenderError::FrameSize {
                    path: path.clone(),
                    expected,
                    found: img.dimensions(),
                });
            }
        }

        let path = &self.config.animation;
        create_parent(path)?;
        let file = fs::File::create(path).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        let anim_err = |source| RenderError::Animation {
            path: path.clone(),
            source,
        };

        let mut encoder = png::Encoder::new(io::BufWriter::new(file), expected.0, expected.1);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .set_animated(images.len() as u32, 0)
            .map_err(anim_err)?;
        let mut writer = encoder.write_header().map_err(anim_err)?;
        let last = images.len() - 1;
        for (i, img) in images.iter().enumerate() {
            let delay = if i == last { FINAL_DELAY } else { FRAME_DELAY };
            writer.set_frame_delay(delay, 100).map_err(anim_err)?;
            writer.write_image_data(img.as_raw()).map_err(anim_err)?;
        }
        writer.finish().map_err(anim_err)?;

        info!("wrote {} ({} frames)", path.display(), images.len());
        Ok(images.len())
    }
}

impl Renderer for PngRenderer {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<(), Box<dyn std::error::Error>> {
        if frame.last {
            let output = self.config.output.clone();
            self.write(frame, &output)?;
            info!("wrote {}", output.display());
        } else if self.config.write_frames {
            let path = self.frame_path(frame.step);
            self.write(frame, &path)?;
            self.frames.push(path);
        }
        Ok(())
    }
}

fn create_parent(path: &Path) -> Result<(), RenderError> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::create_dir_all(parent).map_err(|source| RenderError::Io {
            path: parent.to_path_buf(),
            source,
        }),
        None => Ok(()),
    }
}

fn is_frame_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with("frame_") && name.ends_with(".png")
}

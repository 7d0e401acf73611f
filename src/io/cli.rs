//! Command-line interface for batch maze generation

use crate::algorithm::generate_seeded;
use crate::io::configuration::{
    DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH, DEFAULT_PATH_COLOR, DEFAULT_SEED, DEFAULT_TILE_SIZE,
    DEFAULT_WALL_COLOR, OUTPUT_INDEX_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_maze_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::RenderOptions;
use crate::io::svg::export_maze_as_svg;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Generate perfect mazes using randomized depth-first carving"
)]
/// Command-line arguments for the maze generation tool
pub struct Cli {
    /// Maze width in cells (odd, at least 3)
    #[arg(short = 'w', long, default_value_t = DEFAULT_MAZE_WIDTH)]
    pub width: usize,

    /// Maze height in cells (odd, at least 3)
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAZE_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of mazes to generate; maze i uses seed + i
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Output path; with --count above 1 an index is appended to the stem
    #[arg(short, long, default_value = "maze.png")]
    pub output: PathBuf,

    /// Emit an SVG document instead of a PNG image
    #[arg(long)]
    pub svg: bool,

    /// Edge length of one rendered cell in pixels
    #[arg(short = 't', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Wall color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = DEFAULT_WALL_COLOR)]
    pub wall_color: String,

    /// Path color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = DEFAULT_PATH_COLOR)]
    pub path_color: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate even if the output file already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    fn emits_svg(&self) -> bool {
        self.svg || self.output.extension().and_then(|ext| ext.to_str()) == Some("svg")
    }

    // The requested format wins over whatever extension the output path has
    fn output_extension(&self) -> String {
        if self.emits_svg() {
            "svg".to_string()
        } else {
            self.output
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("png")
                .to_string()
        }
    }
}

/// Orchestrates batch generation of mazes with progress tracking
pub struct MazeProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeProcessor {
    /// Create a new processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested maze
    ///
    /// # Errors
    ///
    /// Returns an error if the render parameters are invalid, generation
    /// fails, or an output file cannot be written
    pub fn process(&mut self) -> Result<()> {
        let options = RenderOptions::new(
            self.cli.tile_size,
            &self.cli.wall_color,
            &self.cli.path_color,
        )?;

        let outputs = self.collect_outputs();
        if outputs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(outputs.len());
        }

        for (index, path) in &outputs {
            self.generate_maze_file(*index, path, &options)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Each maze keeps the seed offset of its index, so skipped outputs never
    // shift the seeds of the remaining ones
    fn collect_outputs(&self) -> Vec<(usize, PathBuf)> {
        let mut outputs = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let path = self.output_path(index);
            if self.should_generate(&path) {
                outputs.push((index, path));
            }
        }
        outputs
    }

    fn should_generate(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path.exists() {
            // Allow print for user feedback for skip messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn generate_maze_file(
        &mut self,
        index: usize,
        output_path: &Path,
        options: &RenderOptions,
    ) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_maze(&output_path.display().to_string());
        }

        let seed = self.cli.seed.wrapping_add(index as u64);
        let maze = generate_seeded(self.cli.width, self.cli.height, seed)?;

        let path_text = output_path.to_str().ok_or_else(|| {
            invalid_parameter("output", &output_path.display(), &"path is not valid UTF-8")
        })?;

        if self.cli.emits_svg() {
            export_maze_as_svg(&maze, options, path_text)?;
        } else {
            export_maze_as_png(&maze, options, path_text)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_maze();
        }

        Ok(())
    }

    fn output_path(&self, index: usize) -> PathBuf {
        let stem = self.cli.output.file_stem().unwrap_or_default();
        let extension = self.cli.output_extension();

        let name = if self.cli.count > 1 {
            format!(
                "{}_{:0width$}.{extension}",
                stem.to_string_lossy(),
                index + 1,
                width = OUTPUT_INDEX_WIDTH
            )
        } else {
            format!("{}.{extension}", stem.to_string_lossy())
        };

        if let Some(parent) = self.cli.output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

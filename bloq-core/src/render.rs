//! Terminal rendering of the Bloch sphere
//!
//! Draws two orthographic projections of the sphere on a character grid: a
//! side view (XZ plane, poles |0⟩/|1⟩ top and bottom) and a top view (XY
//! plane). The renderer consumes already-projected [`BlochVector`] points:
//! the current state is drawn with a point marker, the orbit with a trail
//! marker underneath it.

use crate::bloch::BlochVector;

/// Configuration for Bloch sphere rendering
#[derive(Clone, Debug)]
pub struct BlochRenderConfig {
    /// Radius of the sphere in characters
    pub size: usize,
    /// Show axis labels around each view
    pub show_labels: bool,
    /// Show the numerical coordinates of the current state
    pub show_coords: bool,
    /// Character for the current state
    pub point_char: char,
    /// Character for orbit trail points
    pub trail_char: char,
}

impl Default for BlochRenderConfig {
    fn default() -> Self {
        Self {
            size: 12,
            show_labels: true,
            show_coords: true,
            point_char: '●',
            trail_char: '∘',
        }
    }
}

/// Which plane a view projects onto
#[derive(Clone, Copy)]
enum Projection {
    /// Side view: horizontal = x, vertical = z
    SideXz,
    /// Top view: horizontal = x, vertical = y
    TopXy,
}

impl Projection {
    fn plane(self, v: &BlochVector) -> (f64, f64) {
        match self {
            Projection::SideXz => (v.x, v.z),
            Projection::TopXy => (v.x, v.y),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Projection::SideXz => "Side view (XZ plane):",
            Projection::TopXy => "Top view (XY plane):",
        }
    }

    fn pole_labels(self) -> (&'static str, &'static str) {
        match self {
            Projection::SideXz => ("|0⟩", "|1⟩"),
            Projection::TopXy => ("|+i⟩", "|−i⟩"),
        }
    }
}

/// Bloch sphere renderer
///
/// # Example
/// ```
/// use bloq_core::{BlochRenderer, BlochVector};
///
/// let north = BlochVector::new(0.0, 0.0, 1.0);
/// let frame = BlochRenderer::new().render(&north, &[]);
/// assert!(frame.contains("|0⟩"));
/// ```
pub struct BlochRenderer {
    config: BlochRenderConfig,
}

impl BlochRenderer {
    /// Renderer with default configuration
    pub fn new() -> Self {
        Self {
            config: BlochRenderConfig::default(),
        }
    }

    /// Renderer with custom configuration
    pub fn with_config(config: BlochRenderConfig) -> Self {
        Self { config }
    }

    /// Render one frame: sphere outline, axes, orbit trail, current state
    pub fn render(&self, current: &BlochVector, orbit: &[BlochVector]) -> String {
        let mut output = String::new();

        if self.config.show_coords {
            output.push_str(&format!(
                "State: ({:.3}, {:.3}, {:.3})\n\n",
                current.x, current.y, current.z
            ));
        }

        output.push_str(Projection::SideXz.title());
        output.push('\n');
        output.push_str(&self.render_view(Projection::SideXz, current, orbit));
        output.push('\n');

        output.push_str(Projection::TopXy.title());
        output.push('\n');
        output.push_str(&self.render_view(Projection::TopXy, current, orbit));

        output
    }

    fn render_view(
        &self,
        projection: Projection,
        current: &BlochVector,
        orbit: &[BlochVector],
    ) -> String {
        let size = self.config.size as i32;
        let width = (size * 2 + 1) as usize;
        let height = (size + 1) as usize;
        let mut grid = vec![vec![' '; width]; height];

        // Sphere outline
        for angle in 0..360 {
            let rad = f64::from(angle).to_radians();
            self.plot(&mut grid, rad.cos(), rad.sin(), '·');
        }

        // Axes through the center
        let mid_col = size as usize;
        let mid_row = (size / 2) as usize;
        for row in grid.iter_mut() {
            row[mid_col] = '│';
        }
        for cell in grid[mid_row].iter_mut() {
            *cell = '─';
        }
        grid[mid_row][mid_col] = '┼';

        // Orbit trail first, current state on top
        for point in orbit {
            let (h, v) = projection.plane(point);
            self.plot(&mut grid, h, v, self.config.trail_char);
        }
        let (h, v) = projection.plane(current);
        self.plot(&mut grid, h, v, self.config.point_char);

        let mut result = String::new();
        let (top, bottom) = projection.pole_labels();
        if self.config.show_labels {
            result.push_str(&format!("{:>width$}{}\n", "", top, width = size as usize));
        }
        for row in &grid {
            result.push_str(&row.iter().collect::<String>());
            result.push('\n');
        }
        if self.config.show_labels {
            result.push_str(&format!("{:>width$}{}\n", "", bottom, width = size as usize));
            result.push_str(&format!(
                "|−⟩{:─<width$}|+⟩\n",
                "",
                width = (size * 2 - 4).max(0) as usize
            ));
        }

        result
    }

    /// Map unit-disc coordinates onto the grid; the vertical axis is
    /// compressed by 2 to compensate for terminal character aspect ratio.
    fn plot(&self, grid: &mut [Vec<char>], h: f64, v: f64, ch: char) {
        let size = self.config.size as i32;
        let col = size + (h * size as f64) as i32;
        let row = size / 2 - (v * size as f64) as i32 / 2;

        if row >= 0 && col >= 0 {
            let (row, col) = (row as usize, col as usize);
            if row < grid.len() && col < grid[row].len() {
                grid[row][col] = ch;
            }
        }
    }
}

impl Default for BlochRenderer {
    fn default() -> Self {
        Self::new()
    }
}

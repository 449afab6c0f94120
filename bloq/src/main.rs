//! bloq: interactive Bloch-sphere visualizer for single-qubit gates

mod frame;
mod repl;

use clap::{Parser, ValueEnum};
use frame::Session;
use bloq_gates::Selector;

#[derive(Parser)]
#[command(
    name = "bloq",
    version,
    about = "Visualize single-qubit gates interpolating on the Bloch sphere"
)]
struct Cli {
    /// Gate to visualize
    #[arg(long, short, value_enum, default_value = "h")]
    gate: GateArg,

    /// Custom gate as a literal 2x2 array, e.g. "[[0,1],[1,0]]" (implies --gate custom)
    #[arg(long, short)]
    matrix: Option<String>,

    /// Interpolation parameter t
    #[arg(long, short, default_value_t = 1.0, value_parser = parse_time)]
    time: f64,

    /// Number of orbit samples
    #[arg(long, default_value_t = bloq_sim::DEFAULT_ORBIT_SAMPLES)]
    steps: usize,

    /// Sphere radius in characters
    #[arg(long, default_value_t = 12)]
    size: usize,

    /// Hide axis labels and the coordinate readout
    #[arg(long)]
    plain: bool,

    /// Start an interactive session instead of rendering one frame
    #[arg(long, short)]
    interactive: bool,
}

/// Gate selector as exposed on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
enum GateArg {
    I,
    X,
    Y,
    Z,
    H,
    Custom,
}

impl From<GateArg> for Selector {
    fn from(arg: GateArg) -> Self {
        match arg {
            GateArg::I => Selector::I,
            GateArg::X => Selector::X,
            GateArg::Y => Selector::Y,
            GateArg::Z => Selector::Z,
            GateArg::H => Selector::H,
            GateArg::Custom => Selector::Custom,
        }
    }
}

/// The time parameter is constrained to [0, 1] at the input surface
fn parse_time(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .parse()
        .map_err(|_| format!("'{}' is not a number", text))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside [0, 1]", value))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut session = Session::new();
    session.selector = if cli.matrix.is_some() {
        Selector::Custom
    } else {
        cli.gate.into()
    };
    if let Some(matrix) = cli.matrix {
        session.custom_text = matrix;
    }
    session.time = cli.time;
    session.steps = cli.steps;
    session.config.size = cli.size;
    if cli.plain {
        session.config.show_labels = false;
        session.config.show_coords = false;
    }

    if cli.interactive {
        repl::run(&mut session)
    } else {
        let rendered = session.render_frame()?;
        println!("{}", rendered);
        Ok(())
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rcramer::prelude::{explain_eqs, Arithmetic, RenderStyle, Settings};

/// Solve a 3x3 linear system with Cramer's rule and print the derivation.
#[derive(Parser, Debug)]
#[command(name = "rcramer", version)]
pub struct Cli {
    /// Three equations such as `x+y+z=6` (no whitespace inside an equation)
    #[arg(num_args = 3, required = true, allow_hyphen_values = true, value_name = "EQUATION")]
    pub equations: Vec<String>,

    /// TOML settings file; command-line flags take precedence
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output style: steps or summary
    #[arg(long, short)]
    pub style: Option<RenderStyle>,

    /// Solve with exact rational arithmetic instead of floating point
    #[arg(long)]
    pub exact: bool,

    /// Fractional digits for floating-point output
    #[arg(long, short)]
    pub precision: Option<usize>,

    /// Accept whitespace inside equations
    #[arg(long)]
    pub allow_whitespace: bool,

    /// Log solver internals to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let settings = self.settings()?;
        let equations: Vec<&str> = self.equations.iter().map(String::as_str).collect();
        let lines = explain_eqs(&equations, &settings)?;
        println!("{}", lines.join("\n"));
        Ok(())
    }

    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(style) = self.style {
            settings.render.style = style;
        }
        if self.exact {
            settings.solver.arithmetic = Arithmetic::Exact;
        }
        if self.precision.is_some() {
            settings.render.precision = self.precision;
        }
        if self.allow_whitespace {
            settings.input.reject_whitespace = false;
        }
        Ok(settings)
    }
}

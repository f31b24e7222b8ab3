// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::geometry::Complexity;
use crate::math::HexColor;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "prompt3d")]
#[command(about = "Turn text prompts into 3D primitives", long_about = None)]
pub struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prompt generated at startup
    #[arg(long)]
    pub prompt: Option<String>,

    /// Tessellation tier
    #[arg(long, value_enum)]
    pub complexity: Option<Complexity>,

    /// Uniform scale of the generated model
    #[arg(long)]
    pub size: Option<f32>,

    /// Fallback color as #rrggbb when the prompt names none
    #[arg(long)]
    pub color: Option<HexColor>,

    /// Sign in as this user at startup
    #[arg(long)]
    pub user: Option<String>,

    /// Skip the artificial generation delay
    #[arg(long = "no-delay", default_value = "false")]
    pub no_delay: bool,

    /// Generate the prompt, print the result and exit without a window
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Disable UI elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "prompt3d",
            "--prompt",
            "red sphere",
            "--complexity",
            "high",
            "--color",
            "#22c55e",
            "--no-delay",
            "--headless",
        ]);
        assert_eq!(cli.prompt.as_deref(), Some("red sphere"));
        assert_eq!(cli.complexity, Some(Complexity::High));
        assert_eq!(cli.color, Some(HexColor::from_u32(0x22c55e)));
        assert!(cli.no_delay);
        assert!(cli.headless);
        assert!(!cli.no_ui);
    }

    #[test]
    fn test_bad_color_rejected() {
        assert!(Cli::try_parse_from(["prompt3d", "--color", "teal"]).is_err());
    }
}

//! stylenest Flatten Example
//!
//! Reads a JSON style definition, flattens its nested selectors and prints
//! the resulting CSS. Without an argument a built-in definition is used.
//!
//! Run with: cargo run -p stylenest --example flatten -- [styles.json] [--unnamed]
//!
//! Set `RUST_LOG=stylenest=debug` to see every created rule.

use stylenest::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_DEFINITION: &str = r#"{
    "button": {
        "color": "black",
        "&:hover": {"color": "red"},
        "& $icon": {"margin-right": "4px"}
    },
    "icon": {"width": "16px"},
    "@media print": {
        "button": {"&:hover": {"color": "black"}}
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stylenest=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let unnamed = args.iter().any(|arg| arg == "--unnamed");
    let path = args.iter().find(|arg| !arg.starts_with("--"));

    let definition = match path {
        Some(path) => StyleDefinition::from_file(path)?,
        None => StyleDefinition::from_json(DEFAULT_DEFINITION)?,
    };

    let options = if unnamed {
        SheetOptions::unnamed()
    } else {
        SheetOptions::default()
    };

    let sheet = stylenest::create().create_style_sheet(definition, options);
    tracing::info!(rules = sheet.rules().len(), "sheet built");
    println!("{sheet}");

    Ok(())
}

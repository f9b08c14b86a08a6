use std::path::PathBuf;

use clap::Args;
use veil_core::Capacity;

use crate::CliResult;

/// Shows how much text an image can hold
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image to inspect
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let capacity = veil_core::commands::capacity(&std::fs::read(&self.media)?)?;
        println!("{}", render(&capacity));

        Ok(())
    }
}

fn render(capacity: &Capacity) -> String {
    format!(
        "width:     {}\nheight:    {}\npixels:    {}\nmax bits:  {}\nmax bytes: {}\nmax chars: {}",
        capacity.width,
        capacity.height,
        capacity.pixels,
        capacity.max_bits,
        capacity.max_bytes,
        capacity.max_chars
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_render_every_figure() {
        let rendered = render(&Capacity::of_dimensions(200, 200));

        assert!(rendered.contains("pixels:    40000"));
        assert!(rendered.ends_with("max chars: 14999"));
    }
}

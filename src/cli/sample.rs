//! Sample command implementation.
//!
//! Evaluates each gradient of a strip file at evenly spaced times and
//! prints the colours, as hex lines or JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{GradError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::load_strip_file;
use crate::types::{Colour, StripDefinition};

/// Print gradient colours at evenly spaced times
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Strip file to sample
    #[arg(required = true)]
    pub file: PathBuf,

    /// Number of samples per gradient (minimum 2)
    #[arg(long, default_value_t = 5)]
    pub steps: u32,

    /// Print JSON instead of hex lines
    #[arg(long)]
    pub json: bool,
}

/// Sampled colours for one strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledStrip {
    pub name: String,
    pub gradients: Vec<Vec<Sample>>,
}

/// One evaluated point on a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub t: f32,
    pub colour: Colour,
}

/// Evaluate every effective gradient of a strip at `steps` times in [0, 1].
pub fn sample_strip(strip: &StripDefinition, steps: u32) -> SampledStrip {
    let steps = steps.max(2);
    let gradients = strip
        .gradients
        .effective()
        .iter()
        .map(|gradient| {
            (0..steps)
                .map(|i| {
                    let t = i as f32 / (steps - 1) as f32;
                    Sample {
                        t,
                        colour: Colour::from_srgba(gradient.evaluate(t)),
                    }
                })
                .collect()
        })
        .collect();

    SampledStrip {
        name: strip.label(),
        gradients,
    }
}

/// Format samples as one line per gradient: `name[i]: #RRGGBB ...`.
pub fn format_samples(sampled: &SampledStrip) -> Vec<String> {
    sampled
        .gradients
        .iter()
        .enumerate()
        .map(|(i, samples)| {
            let colours: Vec<String> = samples.iter().map(|s| s.colour.to_string()).collect();
            format!("{}[{}]: {}", sampled.name, i, colours.join(" "))
        })
        .collect()
}

pub fn run(args: SampleArgs, printer: &Printer) -> Result<()> {
    let strips = load_strip_file(&args.file)?;
    let sampled: Vec<SampledStrip> = strips.iter().map(|s| sample_strip(s, args.steps)).collect();

    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(sampled.len(), "strip", "strips"),
            display_path(&args.file)
        ),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&sampled).map_err(|e| GradError::Build {
            message: format!("Failed to serialize samples: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for strip in &sampled {
            for line in format_samples(strip) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GradientSet, StripLayout};

    #[test]
    fn test_sample_fallback() {
        let strip = StripDefinition::new(GradientSet::default(), StripLayout::default());
        let sampled = sample_strip(&strip, 3);

        assert_eq!(sampled.name, "strip #1");
        assert_eq!(sampled.gradients.len(), 1);
        let colours: Vec<Colour> = sampled.gradients[0].iter().map(|s| s.colour).collect();
        assert_eq!(colours, vec![Colour::RED, Colour::GREEN, Colour::BLUE]);
    }

    #[test]
    fn test_steps_minimum() {
        let strip = StripDefinition::new(GradientSet::default(), StripLayout::default());
        let sampled = sample_strip(&strip, 0);
        assert_eq!(sampled.gradients[0].len(), 2);
        assert_eq!(sampled.gradients[0][1].t, 1.0);
    }

    #[test]
    fn test_format_samples() {
        let strip = StripDefinition::new(GradientSet::default(), StripLayout::default());
        let lines = format_samples(&sample_strip(&strip, 2));
        assert_eq!(lines, vec!["strip #1[0]: #FF0000 #0000FF".to_string()]);
    }

    #[test]
    fn test_json_shape() {
        let strip = StripDefinition::new(GradientSet::default(), StripLayout::default());
        let json = serde_json::to_value(sample_strip(&strip, 2)).unwrap();

        assert_eq!(json["name"], "strip #1");
        assert_eq!(json["gradients"][0][0]["colour"], "#FF0000");
        assert_eq!(json["gradients"][0][1]["t"], 1.0);
    }
}

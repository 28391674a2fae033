use crate::error::LabelError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An 8-bit RGB color.
pub type Rgb = [u8; 3];

/// Colors used when a table has no colors of its own.
const DEFAULT_PALETTE: [Rgb; 7] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [0, 255, 255],
    [255, 0, 255],
    [255, 255, 255],
];

/// Class names and display colors shared by detection and drawing code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelTable {
    classes: Vec<String>,
    colors: Vec<Rgb>,
}

impl LabelTable {
    /// Create a table from class names and colors. Either may be empty.
    pub fn new(classes: Vec<String>, colors: Vec<Rgb>) -> Self {
        Self { classes, colors }
    }

    /// Read one class name per line. Blank lines are skipped.
    pub fn read_class_names(reader: impl BufRead) -> Result<Vec<String>, LabelError> {
        let mut classes = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let name = line.trim();
            if !name.is_empty() {
                classes.push(name.to_string());
            }
        }
        Ok(classes)
    }

    /// Read one `r g b` color per line, values in `0..=255`. Blank lines are skipped.
    pub fn read_colors(reader: impl BufRead) -> Result<Vec<Rgb>, LabelError> {
        let mut colors = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let invalid = || LabelError::InvalidColor {
                line: idx + 1,
                content: line.clone(),
            };
            let values = line
                .split_whitespace()
                .map(|v| v.parse::<f64>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?;
            let [r, g, b] = values[..] else {
                return Err(invalid());
            };
            let to_u8 = |v: f64| {
                if (0.0..=255.0).contains(&v) {
                    Ok(v.round() as u8)
                } else {
                    Err(invalid())
                }
            };
            colors.push([to_u8(r)?, to_u8(g)?, to_u8(b)?]);
        }
        Ok(colors)
    }

    /// Load a table from a class names file and an optional colors file.
    pub fn from_files(
        names_path: impl AsRef<Path>,
        colors_path: Option<&Path>,
    ) -> Result<Self, LabelError> {
        let classes = Self::read_class_names(BufReader::new(File::open(names_path)?))?;
        let colors = match colors_path {
            Some(path) => Self::read_colors(BufReader::new(File::open(path)?))?,
            None => Vec::new(),
        };
        Ok(Self { classes, colors })
    }

    /// Number of named classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// The name of a class, if known.
    pub fn class_name(&self, class_id: usize) -> Option<&str> {
        self.classes.get(class_id).map(String::as_str)
    }

    /// A display label `name:0.87` for a detection.
    ///
    /// Tables without names produce only the confidence.
    pub fn label(&self, class_id: usize, confidence: f32) -> Result<String, LabelError> {
        if self.classes.is_empty() {
            return Ok(format!("{confidence:.2}"));
        }
        match self.class_name(class_id) {
            Some(name) => Ok(format!("{name}:{confidence:.2}")),
            None => Err(LabelError::UnknownClass {
                class_id,
                num_classes: self.classes.len(),
            }),
        }
    }

    /// The display color of a class; ids wrap around the available colors.
    pub fn color(&self, class_id: usize) -> Rgb {
        if self.colors.is_empty() {
            DEFAULT_PALETTE[class_id % DEFAULT_PALETTE.len()]
        } else {
            self.colors[class_id % self.colors.len()]
        }
    }
}

// Snapshot producers
//
// A producer turns some input into a complete `ExtractedData`. It runs off
// the UI thread and reports back exactly once over a channel, so the
// explorer only ever sees a whole snapshot or an error message.
//
// Sources:
// - SampleSnapshot: built-in demo drawing (no file argument)
// - JsonSnapshot: a snapshot previously serialized to JSON
// - ExternalConverter: a DWG/DXF file, which needs the ODA converter

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::model::{
    Attribute, Block, Circle, Entity, ExtractedData, Layer, Line, Point, Polyline, Text,
};

/// Message sent from the producer task to the event loop
#[derive(Debug)]
pub enum SnapshotMessage {
    Loaded(ExtractedData),
    Failed(String),
}

/// Something that can produce a drawing snapshot
pub trait SnapshotSource: Send + 'static {
    /// Human-readable origin, shown while loading
    fn describe(&self) -> String;

    fn load(&self) -> Result<ExtractedData>;
}

/// Pick a source for an optional command-line path
pub fn source_for(path: Option<&Path>, converter_path: &Path) -> Box<dyn SnapshotSource> {
    match path {
        None => Box::new(SampleSnapshot),
        Some(p) if has_extension(p, "json") => Box::new(JsonSnapshot::new(p)),
        Some(p) => Box::new(ExternalConverter::new(p, converter_path)),
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Run `source` on the blocking pool and send its outcome to `tx`
pub fn spawn_producer(
    source: Box<dyn SnapshotSource>,
    tx: mpsc::Sender<SnapshotMessage>,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let origin = source.describe();
        tracing::info!("Loading drawing from {}", origin);

        let message = match source.load() {
            Ok(data) => SnapshotMessage::Loaded(data),
            Err(e) => {
                tracing::error!("Failed to load {}: {:#}", origin, e);
                SnapshotMessage::Failed(format!("{:#}", e))
            }
        };

        // Receiver gone means the UI already quit
        let _ = tx.blocking_send(message);
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Sources
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in demo drawing
pub struct SampleSnapshot;

impl SnapshotSource for SampleSnapshot {
    fn describe(&self) -> String {
        "sample data".to_string()
    }

    fn load(&self) -> Result<ExtractedData> {
        Ok(sample_drawing())
    }
}

/// A JSON file holding a serialized `ExtractedData`
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for JsonSnapshot {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ExtractedData> {
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let data: ExtractedData = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse snapshot {}", self.path.display()))?;
        Ok(data)
    }
}

/// A drawing file that must go through the external converter first
pub struct ExternalConverter {
    input: PathBuf,
    converter: PathBuf,
}

impl ExternalConverter {
    pub fn new(input: impl Into<PathBuf>, converter: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            converter: converter.into(),
        }
    }
}

impl SnapshotSource for ExternalConverter {
    fn describe(&self) -> String {
        self.input.display().to_string()
    }

    fn load(&self) -> Result<ExtractedData> {
        if !self.input.is_file() {
            bail!("Input file not found: {}", self.input.display());
        }
        if !self.converter.is_file() {
            bail!(
                "ODA File Converter not found at {} (set ODA_CONVERTER_PATH or converter_path)",
                self.converter.display()
            );
        }
        bail!(
            "Converting {} is not available in this build; load a JSON snapshot instead",
            self.input.display()
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sample drawing
// ─────────────────────────────────────────────────────────────────────────────

fn layer(name: &str, color: i32, line_type: &str, frozen: bool, entities: Vec<Entity>) -> Layer {
    Layer {
        name: name.to_string(),
        color,
        is_on: true,
        is_frozen: frozen,
        line_type: line_type.to_string(),
        line_weight: 0.0,
        entities,
    }
}

fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Entity {
    Entity::Line(Line {
        start: Point::xy(x1, y1),
        end: Point::xy(x2, y2),
        layer: "Walls".to_string(),
        color: 1,
    })
}

fn door(name: &str, x: f64, y: f64, rotation: f64, width: &str) -> Entity {
    Entity::Block(Block {
        name: name.to_string(),
        insertion_point: Point::xy(x, y),
        rotation,
        scale: Point::new(1.0, 1.0, 1.0),
        layer: "Doors".to_string(),
        attributes: vec![Attribute::new("WIDTH", width), Attribute::new("FIRE_RATING", "EI30")],
    })
}

/// Small floor plan used when no file is given
pub fn sample_drawing() -> ExtractedData {
    ExtractedData {
        version: "R2020 (Sample Data)".to_string(),
        layers: vec![
            layer(
                "0",
                7,
                "CONTINUOUS",
                false,
                vec![
                    Entity::Text(Text {
                        value: "Ground Floor Plan".to_string(),
                        insertion_point: Point::xy(0.0, -20.0),
                        height: 5.0,
                        layer: "0".to_string(),
                        rotation: 0.0,
                        style: "Standard".to_string(),
                    }),
                    Entity::Circle(Circle {
                        center: Point::xy(250.0, 150.0),
                        radius: 12.5,
                        layer: "0".to_string(),
                        color: 7,
                    }),
                ],
            ),
            layer(
                "Walls",
                1,
                "CONTINUOUS",
                false,
                vec![
                    wall(0.0, 0.0, 500.0, 0.0),
                    wall(500.0, 0.0, 500.0, 300.0),
                    wall(500.0, 300.0, 0.0, 300.0),
                    wall(0.0, 300.0, 0.0, 0.0),
                    Entity::Polyline(Polyline {
                        points: vec![
                            Point::xy(200.0, 0.0),
                            Point::xy(200.0, 120.0),
                            Point::xy(320.0, 120.0),
                        ],
                        layer: "Walls".to_string(),
                        color: 1,
                        closed: false,
                    }),
                ],
            ),
            layer(
                "Doors",
                2,
                "DASHED",
                false,
                vec![
                    door("DOOR_SINGLE", 100.0, 0.0, 0.0, "900"),
                    door("DOOR_SINGLE", 200.0, 60.0, 90.0, "800"),
                    Entity::Text(Text {
                        value: "D1".to_string(),
                        insertion_point: Point::xy(100.0, 10.0),
                        height: 2.5,
                        layer: "Doors".to_string(),
                        rotation: 0.0,
                        style: "Standard".to_string(),
                    }),
                ],
            ),
            layer(
                "Windows",
                3,
                "HIDDEN",
                true,
                vec![Entity::Block(Block {
                    name: "WINDOW_1200".to_string(),
                    insertion_point: Point::xy(350.0, 300.0),
                    rotation: 0.0,
                    scale: Point::new(1.0, 1.0, 1.0),
                    layer: "Windows".to_string(),
                    attributes: Vec::new(),
                })],
            ),
        ],
    }
}

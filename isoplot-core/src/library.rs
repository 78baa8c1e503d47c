/// Shape library persistence: a flat JSON mapping of shape name to a list
/// of 3-element vertex arrays.
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{IsoplotError, Result};
use crate::geometry::{Shape, Vertex};

/// The raw persisted form. Vertex arity is validated on the way in so a
/// malformed entry surfaces as `InvalidVertex` rather than a decode error.
type RawShapes = BTreeMap<String, Vec<Vec<f64>>>;

/// An ordered collection of named shapes, re-read from file on each load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeLibrary {
    shapes: BTreeMap<String, Shape>,
}

impl ShapeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in shape set: the five classic solids and polygons.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        library.insert(Shape::tetrahedron());
        library.insert(Shape::octahedron());
        library.insert(Shape::hexahedron());
        library.insert(Shape::square());
        library.insert(Shape::triangle());
        library
    }

    /// Parse a library from its JSON text form.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawShapes = serde_json::from_str(text)?;
        let mut shapes = BTreeMap::new();
        for (name, raw_vertices) in raw {
            let mut vertices = Vec::with_capacity(raw_vertices.len());
            for (index, components) in raw_vertices.iter().enumerate() {
                if components.len() != 3 {
                    return Err(IsoplotError::InvalidVertex {
                        shape: name,
                        index,
                        found: components.len(),
                    });
                }
                vertices.push(Vertex::new(components[0], components[1], components[2]));
            }
            shapes.insert(name.clone(), Shape::new(name, vertices));
        }
        Ok(Self { shapes })
    }

    /// Serialize to pretty-printed JSON text.
    pub fn to_json(&self) -> Result<String> {
        let raw: BTreeMap<&str, Vec<[f64; 3]>> = self
            .shapes
            .values()
            .map(|shape| {
                let vertices = shape.vertices.iter().map(|v| (*v).into()).collect();
                (shape.name.as_str(), vertices)
            })
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Insert a shape, replacing any existing shape of the same name.
    pub fn insert(&mut self, shape: Shape) {
        self.shapes.insert(shape.name.clone(), shape);
    }

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    /// Shape at a position in name order, for cycling through the library.
    pub fn shape_at(&self, index: usize) -> Option<&Shape> {
        self.shapes.values().nth(index)
    }

    /// Shape names in their stored (sorted) order.
    pub fn names(&self) -> Vec<&str> {
        self.shapes.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

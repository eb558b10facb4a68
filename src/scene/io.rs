//! Scene file format.
//!
//! One node per line, depth as leading indentation (2 spaces per level):
//!
//! ```text
//! <shape> <level> <r,g,b,a> <tx,ty,tz> <sx,sy,sz> <rot: 16 row-major floats>
//! ```
//!
//! The rotation field is optional on load (older files omit it; rotation
//! then defaults to identity). Unrecognized shape tokens load as a node
//! without geometry. Numeric parsing is best-effort throughout: a field
//! that fails to scan keeps its default, centralized in [`parse_or`] so the
//! lenient policy lives in one place. Only failing to open the file is an
//! error; a partial parse keeps whatever was attached before the bad line.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use glam::{Mat4, Vec3, Vec4};

use crate::errors::Result;
use crate::scene::graph::SceneGraph;
use crate::scene::node::Node;
use crate::scene::shape::{Shape, ShapeKind};
use crate::scene::NodeHandle;

/// Parses a scalar, falling back to `default` on any failure. Every lenient
/// field in the scene and keyframe formats goes through here.
pub fn parse_or<T: FromStr + Copy>(token: Option<&str>, default: T) -> T {
    token.and_then(|t| t.parse().ok()).unwrap_or(default)
}

/// Parses up to `N` comma-separated floats, each defaulting independently.
fn parse_csv<const N: usize>(field: Option<&str>, defaults: [f32; N]) -> [f32; N] {
    let mut out = defaults;
    if let Some(field) = field {
        for (i, part) in field.split(',').take(N).enumerate() {
            out[i] = parse_or(Some(part), defaults[i]);
        }
    }
    out
}

fn identity_row_major() -> [f32; 16] {
    let mut m = [0.0; 16];
    m[0] = 1.0;
    m[5] = 1.0;
    m[10] = 1.0;
    m[15] = 1.0;
    m
}

fn rotation_to_row_major(m: &Mat4) -> [f32; 16] {
    let a = m.to_cols_array(); // column-major
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = a[col * 4 + row];
        }
    }
    out
}

fn rotation_from_row_major(a: [f32; 16]) -> Mat4 {
    let mut cols = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            cols[col * 4 + row] = a[row * 4 + col];
        }
    }
    Mat4::from_cols_array(&cols)
}

fn write_node(
    out: &mut impl Write,
    graph: &SceneGraph,
    handle: NodeHandle,
    depth: usize,
) -> std::io::Result<()> {
    let node = graph.node(handle).expect("live handle during save");
    for _ in 0..depth {
        out.write_all(b"  ")?;
    }
    match &node.shape {
        Some(shape) => write!(out, "{} {} ", shape.kind.token(), shape.level)?,
        None => write!(out, "none 0 ")?,
    }
    let c = node.color;
    write!(out, "{},{},{},{} ", c.x, c.y, c.z, c.w)?;
    let t = node.translation;
    write!(out, "{},{},{} ", t.x, t.y, t.z)?;
    let s = node.scale;
    write!(out, "{},{},{} ", s.x, s.y, s.z)?;
    let rot = rotation_to_row_major(&node.rotation);
    for (i, v) in rot.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        write!(out, "{v}")?;
    }
    out.write_all(b"\n")?;
    for &child in node.children() {
        write_node(out, graph, child, depth + 1)?;
    }
    Ok(())
}

/// One parsed scene-file line, before attachment.
struct Record {
    depth: usize,
    node: Node,
}

fn parse_line(line: &str) -> Record {
    let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
    let depth = indent / 2;
    let mut tokens = line.trim().split_whitespace();

    let mut node = Node::new();
    let kind = tokens.next().and_then(ShapeKind::from_token);
    let level: u32 = parse_or(tokens.next(), 0);
    if let Some(kind) = kind {
        node.shape = Some(Shape::new(kind, level));
    }

    let c = parse_csv(tokens.next(), [1.0, 1.0, 1.0, 1.0]);
    node.color = Vec4::from_array(c);
    let t = parse_csv(tokens.next(), [0.0, 0.0, 0.0]);
    node.translation = Vec3::from_array(t);
    let s = parse_csv(tokens.next(), [1.0, 1.0, 1.0]);
    node.scale = Vec3::from_array(s);

    // The rotation field is the line remainder; tolerate it being split
    // across several whitespace-separated chunks.
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        node.rotation = Mat4::IDENTITY;
    } else {
        let joined = rest.join(",");
        let mut vals = identity_row_major();
        let defaults = identity_row_major();
        for (i, part) in joined
            .split(',')
            .filter(|p| !p.is_empty())
            .take(16)
            .enumerate()
        {
            vals[i] = parse_or(Some(part), defaults[i]);
        }
        node.rotation = rotation_from_row_major(vals);
    }

    Record { depth, node }
}

impl SceneGraph {
    /// Serializes the tree, root line first at depth 0, children indented
    /// one level per depth in insertion order. Fails only if the
    /// destination cannot be opened for writing.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).inspect_err(|e| {
            log::warn!("failed to open scene file for writing {}: {e}", path.display());
        })?;
        let mut out = BufWriter::new(file);
        write_node(&mut out, self, self.root(), 0)?;
        out.flush()?;
        log::info!("saved scene to {}", path.display());
        Ok(())
    }

    /// Clears the graph and reconstructs it from the line format. The first
    /// depth-0 record populates the root in place so a saved tree loads
    /// back at identical depths; every later record attaches as a child of
    /// the deepest ancestor at its indentation level. Fails only if the
    /// source cannot be opened for reading.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut text = String::new();
        File::open(path)
            .inspect_err(|e| {
                log::warn!("failed to open scene file for reading {}: {e}", path.display());
            })?
            .read_to_string(&mut text)?;

        self.clear();
        let mut stack: Vec<NodeHandle> = vec![self.root()];
        let mut first = true;

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let rec = parse_line(line);
            if first {
                first = false;
                if rec.depth == 0 {
                    let root = self.root();
                    let node = self.node_mut(root).expect("fresh root");
                    let children = std::mem::take(&mut node.children);
                    *node = rec.node;
                    node.children = children;
                    continue;
                }
            }
            // Anything at depth 0 past the first record hangs off the root.
            let depth = rec.depth.max(1);
            stack.truncate(depth);
            let parent = *stack.last().expect("root always on stack");
            let handle = self.add_node(rec.node, Some(parent));
            stack.push(handle);
        }
        log::info!("loaded scene from {}", path.display());
        Ok(())
    }
}

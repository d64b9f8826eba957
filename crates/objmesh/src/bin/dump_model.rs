//! Print a JSON summary of one or more OBJ models.
//!
//! Each argument is `name=path` or just `path` (the file stem becomes the
//! name). Every model is parsed the same way the viewer parses it, and any
//! failure ends the run, so this is the quickest way to check a file before
//! loading it there.
//!
//! Run: `cargo run -p objmesh --features tools --bin dump_model -- house=assets/house.obj`

use std::env;

use objmesh::{AttributeKind, ModelInfo, ModelSummary, ModelTable, ParseStats, ParsedModel};

/// Number of leading vertices included in the dump.
const FIRST_VERTICES: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let infos: Vec<ModelInfo> = env::args().skip(1).map(|arg| ModelInfo::from_arg(&arg)).collect();
    if infos.is_empty() {
        eprintln!("usage: dump_model [name=]path...");
        std::process::exit(2);
    }

    let mut table = ModelTable::new();
    let mut dumps = Vec::new();
    for info in &infos {
        let text = info.source.read()?;
        let stats = table.load_with_stats(&info.name, &text)?;
        if let Some(model) = table.get(&info.name) {
            dumps.push(dump(&info.name, model, &stats));
        }
    }

    println!("{}", serde_json::to_string_pretty(&dumps)?);

    table.close(|name| tracing::debug!("Releasing {}", name));
    Ok(())
}

fn dump(name: &str, model: &ParsedModel, stats: &ParseStats) -> serde_json::Value {
    let summary = ModelSummary::of(model);
    let layout = model.layout();

    serde_json::json!({
        "name": name,
        "variant": summary.variant.to_string(),
        "stride_floats": summary.stride,
        "stride_bytes": layout.stride,
        "vertex_count": summary.vertex_count,
        "triangle_count": summary.triangle_count,
        "records": {
            "positions": stats.positions,
            "tex_coords": stats.tex_coords,
            "normals": stats.normals,
            "faces": stats.faces,
            "ignored_lines": stats.ignored_lines,
        },
        "bounds": summary.bounds.map(|b| serde_json::json!({
            "min": b.min.to_array(),
            "max": b.max.to_array(),
            "size": b.size().to_array(),
        })),
        "attributes": layout.attributes.iter().map(|a| {
            serde_json::json!({
                "kind": attribute_name(a.kind),
                "location": a.location,
                "components": a.components,
                "offset": a.offset,
            })
        }).collect::<Vec<_>>(),
        "first_vertices": model.vertices().take(FIRST_VERTICES).collect::<Vec<_>>(),
    })
}

fn attribute_name(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::Position => "position",
        AttributeKind::TexCoord => "tex_coord",
        AttributeKind::Normal => "normal",
    }
}

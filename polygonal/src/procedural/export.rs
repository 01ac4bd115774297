//! Wavefront OBJ export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::types::Mesh;

/// Write a mesh to an OBJ file
///
/// Strips are expanded into independent triangles; see [`Mesh::triangles`].
pub fn write_obj(mesh: &Mesh, path: &Path, name: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj_to(mesh, &mut writer, name)?;
    writer.flush()
}

/// Write a mesh as OBJ text to any writer
pub fn write_obj_to<W: Write>(mesh: &Mesh, writer: &mut W, name: &str) -> io::Result<()> {
    let has_uv = mesh.layout.has_uv();
    let has_normal = mesh.layout.has_normal();

    writeln!(writer, "# polygonal")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(writer, "o {name}")?;

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.position.x, v.position.y, v.position.z)?;
    }
    if has_uv {
        for v in &mesh.vertices {
            writeln!(writer, "vt {} {}", v.uv.x, v.uv.y)?;
        }
    }
    if has_normal {
        for v in &mesh.vertices {
            writeln!(writer, "vn {} {} {}", v.normal.x, v.normal.y, v.normal.z)?;
        }
    }

    // OBJ indices are 1-based
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| i + 1);
        match (has_uv, has_normal) {
            (true, true) => writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?,
            (true, false) => writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?,
            (false, true) => writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?,
            (false, false) => writeln!(writer, "f {a} {b} {c}")?,
        }
    }

    Ok(())
}
